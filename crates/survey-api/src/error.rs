//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  /// The request body lacked one or more required fields. Nothing was
  /// written.
  #[error("missing required field(s): {}", .0.join(", "))]
  MissingField(Vec<&'static str>),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<survey_core::Error> for ApiError {
  fn from(e: survey_core::Error) -> Self {
    match e {
      survey_core::Error::MissingField(fields) => ApiError::MissingField(fields),
      other @ survey_core::Error::InvalidField { .. } => {
        ApiError::BadRequest(other.to_string())
      }
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match &self {
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": m }))).into_response()
      }
      ApiError::MissingField(fields) => (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": self.to_string(), "missing_fields": fields })),
      )
        .into_response(),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store operation failed");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "error": e.to_string() })),
        )
          .into_response()
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  #[tokio::test]
  async fn missing_field_is_400_with_field_list() {
    let resp = ApiError::MissingField(vec!["age", "score"]).into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["missing_fields"], json!(["age", "score"]));
    assert_eq!(body["error"], "missing required field(s): age, score");
  }

  #[tokio::test]
  async fn invalid_field_maps_to_bad_request() {
    let err = ApiError::from(survey_core::Error::InvalidField {
      field:  "age",
      reason: "expected an integer".into(),
    });
    assert!(matches!(err, ApiError::BadRequest(_)));
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn store_error_is_500() {
    let io = std::io::Error::other("disk on fire");
    let resp = ApiError::Store(Box::new(io)).into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(resp).await["error"], "disk on fire");
  }
}
