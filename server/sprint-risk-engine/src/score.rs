//! Volatility index, average churn and risk-level classification.

use crate::config::Config;
use crate::types::{RiskLevel, WorkItem};

/// Mean churn over the incomplete items; 0 when there are none.
pub fn average_churn(incomplete: &[&WorkItem]) -> f64 {
  let total: u64 = incomplete.iter().map(|i| i.churn_count as u64).sum();
  total as f64 / incomplete.len().max(1) as f64
}

/// Index 0–100: crash percentage plus weighted average churn, rounded half
/// away from zero, capped at 100.
pub fn volatility_index(crash_probability: f64, avg_churn: f64, config: &Config) -> u8 {
  let raw = crash_probability * 100.0 + avg_churn * config.churn_weight;
  raw.round().clamp(0.0, 100.0) as u8
}

/// Tiers are exclusive on their lower bound: `risk_medium` itself is MEDIUM.
pub fn classify(index: u8, config: &Config) -> RiskLevel {
  if index > config.risk_high {
    RiskLevel::Critical
  } else if index > config.risk_medium {
    RiskLevel::High
  } else if index > config.risk_low {
    RiskLevel::Medium
  } else {
    RiskLevel::Low
  }
}
