//! JSON REST API for the survey store.
//!
//! Exposes an axum [`Router`] backed by any [`survey_core::store::SurveyStore`].
//! CORS, tracing and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", survey_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod report;
pub mod statistics;
pub mod surveys;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get},
};
use survey_core::store::SurveyStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: SurveyStore + 'static,
{
  Router::new()
    .route("/surveys", get(surveys::list::<S>).post(surveys::create::<S>))
    .route("/surveys/{id}", delete(surveys::delete_one::<S>))
    .route("/statistics", get(statistics::handler::<S>))
    .route("/report", get(report::handler::<S>))
    .with_state(store)
}
