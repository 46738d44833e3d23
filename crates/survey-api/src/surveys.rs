//! Handlers for `/surveys` endpoints.
//!
//! | Method   | Path            | Notes |
//! |----------|-----------------|-------|
//! | `GET`    | `/surveys`      | All records, newest `survey_date` first |
//! | `POST`   | `/surveys`      | Body: all eight non-id fields; returns 201 |
//! | `DELETE` | `/surveys/{id}` | Always 200, even if `id` does not exist |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use serde_json::json;
use survey_core::{
  record::{SurveyDraft, SurveyRecord},
  store::SurveyStore,
};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /surveys`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<SurveyRecord>>, ApiError>
where
  S: SurveyStore,
{
  let surveys = store
    .list_all()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(surveys))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /surveys`: returns 201 + `{"message": "Survey added successfully"}`.
///
/// The body is validated in full before the store is touched; a missing or
/// `null` field yields a 400 and no row.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<SurveyDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SurveyStore,
{
  let Json(draft) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
  let survey = draft.validate()?;

  let id = store
    .insert(survey)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  tracing::info!(id, "survey added");

  Ok((
    StatusCode::CREATED,
    Json(json!({ "message": "Survey added successfully" })),
  ))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /surveys/{id}`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SurveyStore,
{
  let removed = store
    .delete(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  tracing::info!(id, removed, "survey delete");

  Ok(Json(json!({ "message": "Survey deleted successfully" })))
}
