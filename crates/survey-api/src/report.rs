//! Handler for `GET /report`.

use std::sync::Arc;

use axum::{Json, extract::State};
use survey_core::{report::SurveyReport, store::SurveyStore};

use crate::error::ApiError;

/// `GET /report`: the statistics snapshot restated as shares and rated
/// category performance.
pub async fn handler<S>(State(store): State<Arc<S>>) -> Result<Json<SurveyReport>, ApiError>
where
  S: SurveyStore,
{
  let stats = store
    .compute_statistics()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(SurveyReport::from_statistics(&stats)))
}
