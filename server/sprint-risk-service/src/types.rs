//! Request types for the service.

use serde::Deserialize;
use sprint_risk_engine::TrackerSearch;

/// UI resolver call: the caller's product context plus the tracker search result.
#[derive(Debug, Default, Deserialize)]
pub struct ResolverRequest {
  /// Opaque caller context; logged, never interpreted.
  #[serde(default)]
  pub context: serde_json::Value,
  #[serde(default)]
  pub payload: TrackerSearch,
}
