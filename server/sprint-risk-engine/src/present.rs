//! Plain-text strategy deck for terminals and logs.

use std::fmt::Write;

use crate::telemetry::{percent, TelemetryResponse, TelemetrySummary};
use crate::types::{RiskLevel, RiskReport};

const RULE: &str = "------------------------------------------------------------";

/// Render a telemetry response. Failures get the offline panel.
pub fn render(resp: &TelemetryResponse, trials: u32) -> String {
  match (resp.success, &resp.telemetry, &resp.analysis) {
    (true, Some(summary), Some(report)) => render_deck(summary, report, trials),
    _ => render_offline(resp.error.as_deref()),
  }
}

fn render_offline(error: Option<&str>) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "TELEMETRY OFFLINE");
  let _ = writeln!(out, "{RULE}");
  let _ = writeln!(
    out,
    "{}",
    error.unwrap_or("No active sprint data detected in current context.")
  );
  out
}

fn render_deck(summary: &TelemetrySummary, report: &RiskReport, trials: u32) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "WILLIAMS STRATEGY DECK");
  let _ = writeln!(out, "LIVE TELEMETRY // {}", summary.sprint.to_uppercase());
  let _ = writeln!(out, "{RULE}");

  let _ = writeln!(out, "SPRINT VOLATILITY INDEX (VIX)");
  let _ = writeln!(
    out,
    "  {:>3}  {} RISK{}",
    report.volatility_index,
    report.risk_level,
    alarm(report.risk_level)
  );
  let _ = writeln!(out);

  let _ = writeln!(out, "SIMULATION STATS (n={trials})");
  let _ = writeln!(out, "  {:<18}{}", "Crash Prob.", percent(report.crash_probability));
  let _ = writeln!(
    out,
    "  {:<18}{}",
    "Proj. Completion",
    percent(report.projected_completion_fraction)
  );
  let _ = writeln!(out);

  let _ = writeln!(out, "RISK DRIVERS");
  if report.key_drivers.is_empty() {
    let _ = writeln!(out, "  Clean Air. No Issues.");
  }
  for driver in &report.key_drivers {
    let _ = writeln!(out, "  ! {driver}");
  }
  let _ = writeln!(out);

  let _ = writeln!(out, "STRATEGY ENGINEER");
  let _ = writeln!(out, "  \"{}\"", report.narrative);
  out
}

fn alarm(level: RiskLevel) -> &'static str {
  match level {
    RiskLevel::High | RiskLevel::Critical => " (!)",
    RiskLevel::Low | RiskLevel::Medium => "",
  }
}

/// Labeled stand-in shown when the invocation channel is unreachable.
pub fn demo_response() -> TelemetryResponse {
  TelemetryResponse {
    success: true,
    telemetry: Some(TelemetrySummary {
      sprint: "MONACO SPRINT (SIMULATION)".into(),
      vix_index: 82,
      probability_of_failure: "72.4%".into(),
      status: "CRITICAL".into(),
    }),
    analysis: Some(RiskReport {
      volatility_index: 82,
      crash_probability: 0.724,
      risk_level: RiskLevel::Critical,
      projected_completion_fraction: 0.78,
      key_drivers: vec![
        "Critical Path blocked (Turn 4)".into(),
        "Excessive Churn in Backend components".into(),
      ],
      narrative: "CRITICAL: Telemetry indicates a likely DNF. Critical Path blocked (Turn 4) is eating up performance. Box now for a scope reduction strategy.".into(),
    }),
    message: Some("Simulated dataset: live telemetry unavailable.".into()),
    error: None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn failure_renders_offline_panel() {
    let text = render(&TelemetryResponse::failure("tracker unreachable"), 1000);
    assert!(text.starts_with("TELEMETRY OFFLINE"));
    assert!(text.contains("tracker unreachable"));
    assert!(!text.contains("VOLATILITY"));
  }

  #[test]
  fn success_without_analysis_is_offline() {
    let mut resp = demo_response();
    resp.analysis = None;
    let text = render(&resp, 1000);
    assert!(text.contains("No active sprint data detected"));
  }

  #[test]
  fn demo_is_labeled_simulation() {
    let text = render(&demo_response(), 1000);
    assert!(text.contains("LIVE TELEMETRY // MONACO SPRINT (SIMULATION)"));
    assert!(text.contains("82  CRITICAL RISK (!)"));
    assert!(text.contains("72.4%"));
    assert!(text.contains("78.0%"));
    assert!(text.contains("n=1000"));
    assert!(text.contains("! Critical Path blocked (Turn 4)"));
  }

  #[test]
  fn no_drivers_renders_clean_air() {
    let mut resp = demo_response();
    if let Some(report) = resp.analysis.as_mut() {
      report.key_drivers.clear();
    }
    assert!(render(&resp, 500).contains("Clean Air. No Issues."));
  }
}
