//! Engine and provider configuration with sane defaults.

use crate::error::EngineError;

/// Tunable simulation, scoring and driver thresholds.
#[derive(Debug, Clone)]
pub struct Config {
  /// Independent Monte Carlo trials per run.
  pub trial_count: u32,
  /// Per-trial completion probability of an unimpeded, stable item.
  pub base_probability: f64,
  /// Churn strictly above this is "high" churn.
  pub high_churn_threshold: u32,
  pub high_churn_penalty: f64,
  /// Churn strictly above this (and not high) is "moderate" churn.
  pub moderate_churn_threshold: u32,
  pub moderate_churn_penalty: f64,
  pub blocker_penalty: f64,
  /// A trial crashes when its total falls below `crash_ratio * committed`.
  pub crash_ratio: f64,
  /// Index points added per unit of average churn.
  pub churn_weight: f64,
  pub risk_low: u8,
  pub risk_medium: u8,
  pub risk_high: u8,
  pub churn_driver_threshold: f64,
  /// Fewer days than this counts as a tight pit window.
  pub pit_window_days: u32,
  /// ...when more than this share of the commitment is still open.
  pub pit_window_scope_ratio: f64,
  /// Status names (case-insensitive) that count as finished work.
  pub terminal_statuses: Vec<String>,
  /// Upper bound on `trial_count * incomplete items` coin flips per run.
  pub max_item_draws: u64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      trial_count: 1000,
      base_probability: 0.85,
      high_churn_threshold: 3,
      high_churn_penalty: 0.25,
      moderate_churn_threshold: 1,
      moderate_churn_penalty: 0.10,
      blocker_penalty: 0.20,
      crash_ratio: 0.9,
      churn_weight: 5.0,
      risk_low: 25,
      risk_medium: 50,
      risk_high: 75,
      churn_driver_threshold: 2.0,
      pit_window_days: 3,
      pit_window_scope_ratio: 0.3,
      terminal_statuses: vec!["Done".into(), "Closed".into()],
      max_item_draws: 10_000_000,
    }
  }
}

impl Config {
  /// Reject configurations the engine cannot run with.
  pub fn validate(&self) -> Result<(), EngineError> {
    if self.trial_count == 0 {
      return Err(EngineError::config("trial_count", "must be at least 1"));
    }
    for (field, value) in [
      ("base_probability", self.base_probability),
      ("high_churn_penalty", self.high_churn_penalty),
      ("moderate_churn_penalty", self.moderate_churn_penalty),
      ("blocker_penalty", self.blocker_penalty),
      ("crash_ratio", self.crash_ratio),
      ("pit_window_scope_ratio", self.pit_window_scope_ratio),
    ] {
      if !(0.0..=1.0).contains(&value) {
        return Err(EngineError::config(field, "must be within [0, 1]"));
      }
    }
    if self.moderate_churn_threshold > self.high_churn_threshold {
      return Err(EngineError::config(
        "moderate_churn_threshold",
        "must not exceed high_churn_threshold",
      ));
    }
    if !(self.risk_low < self.risk_medium && self.risk_medium < self.risk_high && self.risk_high < 100) {
      return Err(EngineError::config(
        "risk_thresholds",
        "expected risk_low < risk_medium < risk_high < 100",
      ));
    }
    Ok(())
  }

  pub fn is_terminal(&self, status: &str) -> bool {
    self
      .terminal_statuses
      .iter()
      .any(|t| t.eq_ignore_ascii_case(status.trim()))
  }
}

/// Defaults the data provider applies when the tracker payload is incomplete.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
  /// Points assumed for items without an estimate.
  pub default_story_points: f64,
  /// Days remaining when the payload carries no sprint end date.
  pub fallback_days_remaining: u32,
  pub default_sprint_label: String,
  /// Status category key marking finished work.
  pub done_category: String,
}

impl Default for ProviderConfig {
  fn default() -> Self {
    Self {
      default_story_points: 3.0,
      fallback_days_remaining: 5,
      default_sprint_label: "Active Sprint (Detected)".into(),
      done_category: "done".into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_are_valid() {
    assert!(Config::default().validate().is_ok());
  }

  #[test]
  fn zero_trials_rejected() {
    let config = Config {
      trial_count: 0,
      ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("trial_count"));
  }

  #[test]
  fn non_increasing_thresholds_rejected() {
    let config = Config {
      risk_medium: 80,
      ..Config::default()
    };
    assert!(config.validate().is_err());
  }

  #[test]
  fn out_of_range_probability_rejected() {
    let config = Config {
      base_probability: 1.5,
      ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("base_probability"));
  }

  #[test]
  fn terminal_status_is_case_insensitive() {
    let config = Config::default();
    assert!(config.is_terminal("Done"));
    assert!(config.is_terminal("closed"));
    assert!(config.is_terminal(" DONE "));
    assert!(!config.is_terminal("In Progress"));
    assert!(!config.is_terminal("Blocked"));
  }
}
