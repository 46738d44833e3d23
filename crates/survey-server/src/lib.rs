//! HTTP server for the survey backend.
//!
//! Serves the dashboard page at `/` and mounts the JSON API from
//! [`survey_api`] under `/api`, with permissive CORS and request tracing.

pub mod dashboard;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{Router, routing::get};
use serde::Deserialize;
use survey_core::store::SurveyStore;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
///
/// Sources, lowest precedence first: built-in defaults, the optional TOML
/// file, then `SURVEY_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
}

impl ServerConfig {
  pub fn load(file: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 5000_i64)?
      .set_default("database_path", "survey_vht.db")?
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("SURVEY"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// `database_path` with a leading `~/` expanded to `$HOME`.
  pub fn resolved_database_path(&self) -> PathBuf {
    let s = self.database_path.to_string_lossy();
    if let Some(rest) = s.strip_prefix("~/")
      && let Ok(home) = std::env::var("HOME")
    {
      return PathBuf::from(home).join(rest);
    }
    self.database_path.clone()
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the complete application router for `store`.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: SurveyStore + 'static,
{
  Router::new()
    .route("/", get(dashboard::index))
    .nest("/api", survey_api::api_router(store))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────
