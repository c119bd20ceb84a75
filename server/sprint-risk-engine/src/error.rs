//! Structured error types for the sprint risk engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("no active sprint data found: the tracker returned no issues in an open sprint")]
  NoActiveSprint,

  #[error("computation too large: {draws} item draws exceeds limit of {limit}")]
  ComputationTooLarge { draws: u64, limit: u64 },

  #[error("config: {field}: {reason}")]
  Config { field: String, reason: String },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl EngineError {
  pub fn config(field: &str, reason: &str) -> Self {
    Self::Config {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }
}
