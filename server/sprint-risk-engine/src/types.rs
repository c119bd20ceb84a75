//! Snapshot and report types (JSON contract with the service and the CLI).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input: normalized sprint snapshot
// ---------------------------------------------------------------------------

/// One work item as seen by the engine. Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
  pub identifier: String,
  #[serde(default)]
  pub title: String,
  pub status: String,
  pub story_points: f64,
  /// Status transitions observed during the sprint window.
  #[serde(default)]
  pub churn_count: u32,
  #[serde(default)]
  pub is_blocked: bool,
}

/// Pre-aggregated sprint state handed over by the data provider.
///
/// `completed_points` is trusted as-is; the engine only looks at `items` to
/// find the incomplete ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintSnapshot {
  pub sprint_label: String,
  pub days_remaining: u32,
  pub total_committed_points: f64,
  pub completed_points: f64,
  #[serde(default)]
  pub items: Vec<WorkItem>,
}

impl SprintSnapshot {
  /// Committed points not yet delivered (negative when inputs are inconsistent).
  pub fn remaining_points(&self) -> f64 {
    self.total_committed_points - self.completed_points
  }
}

// ---------------------------------------------------------------------------
// Output: risk report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
  Low,
  Medium,
  High,
  Critical,
}

impl RiskLevel {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Low => "LOW",
      Self::Medium => "MEDIUM",
      Self::High => "HIGH",
      Self::Critical => "CRITICAL",
    }
  }
}

impl std::fmt::Display for RiskLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Engine output. Fractions stay fractions; percentage formatting is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
  pub volatility_index: u8,
  pub crash_probability: f64,
  pub risk_level: RiskLevel,
  pub projected_completion_fraction: f64,
  pub key_drivers: Vec<String>,
  pub narrative: String,
}
