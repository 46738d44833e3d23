//! Error types for `survey-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// One or more required fields were absent (or `null`) in the input.
  #[error("missing required field(s): {}", .0.join(", "))]
  MissingField(Vec<&'static str>),

  #[error("invalid value for {field}: {reason}")]
  InvalidField {
    field:  &'static str,
    reason: String,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
