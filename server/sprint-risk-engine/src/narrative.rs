//! One-line strategy message derived from the index and drivers.

use crate::config::Config;

/// Message for a sprint with nothing left to deliver.
pub const CHEQUERED_FLAG: &str = "Chequered flag waved. Outstanding lap.";

const FALLBACK_DRIVER: &str = "High volatility";

/// Pure function of `index` and `drivers`; only the critical tier cites a driver.
///
/// Tiers follow the same thresholds as [`crate::score::classify`], so the
/// message always matches the reported risk level.
pub fn generate(index: u8, drivers: &[String], config: &Config) -> String {
  if index > config.risk_high {
    let lead = drivers.first().map(String::as_str).unwrap_or(FALLBACK_DRIVER);
    format!(
      "CRITICAL: Telemetry indicates a likely DNF. {} is eating up performance. Box now for a scope reduction strategy.",
      lead
    )
  } else if index > config.risk_medium {
    "WARNING: Tire degradation is high. We are losing grip on the sprint commitment. Recommend reducing pace or clearing blocks immediately.".to_string()
  } else {
    "OPTIMAL: Telemetry is green. Pace is good. Maintain delta management to the finish line.".to_string()
  }
}
