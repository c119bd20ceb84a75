//! Telemetry envelope shared by every invocation path.
//!
//! The UI resolver and the direct agent call both go through [`handle`], so
//! identical payloads always produce identical responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::ProviderConfig;
use crate::engine::{seed_for, Engine};
use crate::error::EngineError;
use crate::provider::{self, TrackerSearch};
use crate::types::{RiskReport, SprintSnapshot};

pub const SUCCESS_MESSAGE: &str = "Strategy engine calculation complete.";
pub const FAILURE_MESSAGE: &str = "Telemetry connection failed. Could not retrieve sprint data.";

/// Headline figures for quick display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySummary {
  pub sprint: String,
  pub vix_index: u8,
  /// Crash probability formatted as a percentage, e.g. "72.4%".
  pub probability_of_failure: String,
  pub status: String,
}

/// Response returned to callers. Failures are data, never a raised fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryResponse {
  pub success: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub telemetry: Option<TelemetrySummary>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub analysis: Option<RiskReport>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl TelemetryResponse {
  pub fn success(sprint: &str, report: RiskReport) -> Self {
    Self {
      success: true,
      telemetry: Some(TelemetrySummary {
        sprint: sprint.to_string(),
        vix_index: report.volatility_index,
        probability_of_failure: percent(report.crash_probability),
        status: report.risk_level.to_string(),
      }),
      analysis: Some(report),
      message: Some(SUCCESS_MESSAGE.to_string()),
      error: None,
    }
  }

  pub fn failure(error: impl Into<String>) -> Self {
    Self {
      success: false,
      telemetry: None,
      analysis: None,
      message: None,
      error: Some(error.into()),
    }
  }
}

/// Format a 0–1 fraction as a one-decimal percentage.
pub fn percent(fraction: f64) -> String {
  format!("{:.1}%", fraction * 100.0)
}

/// Provider → engine for a raw tracker payload.
///
/// With no explicit `seed`, one is derived from the normalized snapshot.
pub fn handle(
  engine: &Engine,
  provider_config: &ProviderConfig,
  payload: &TrackerSearch,
  now: DateTime<Utc>,
  seed: Option<u64>,
) -> TelemetryResponse {
  match provider::normalize(payload, now, provider_config) {
    Ok(snapshot) => handle_snapshot(engine, &snapshot, seed),
    Err(e) => {
      warn!(error = %e, "sprint data unavailable");
      TelemetryResponse::failure(FAILURE_MESSAGE)
    }
  }
}

/// Engine only, for callers that already hold a normalized snapshot.
pub fn handle_snapshot(
  engine: &Engine,
  snapshot: &SprintSnapshot,
  seed: Option<u64>,
) -> TelemetryResponse {
  match analyze(engine, snapshot, seed) {
    Ok(report) => {
      info!(sprint = %snapshot.sprint_label, vix = report.volatility_index, "analysis complete");
      TelemetryResponse::success(&snapshot.sprint_label, report)
    }
    Err(e) => {
      warn!(error = %e, "sprint analysis failed");
      TelemetryResponse::failure(e.to_string())
    }
  }
}

fn analyze(
  engine: &Engine,
  snapshot: &SprintSnapshot,
  seed: Option<u64>,
) -> Result<RiskReport, EngineError> {
  let seed = match seed {
    Some(s) => s,
    None => seed_for(snapshot)?,
  };
  engine.compute_risk_seeded(snapshot, seed)
}
