//! Handler for `GET /statistics`.

use std::sync::Arc;

use axum::{Json, extract::State};
use survey_core::{stats::StatisticsReport, store::SurveyStore};

use crate::error::ApiError;

/// `GET /statistics`
pub async fn handler<S>(State(store): State<Arc<S>>) -> Result<Json<StatisticsReport>, ApiError>
where
  S: SurveyStore,
{
  let report = store
    .compute_statistics()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(report))
}
