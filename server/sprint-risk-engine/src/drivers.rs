//! Key risk drivers, evaluated in a fixed order.

use crate::config::Config;
use crate::types::{SprintSnapshot, WorkItem};

/// Label reported when nothing is left to simulate.
pub const ALL_WORK_COMPLETE: &str = "All work complete";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
  ExcessiveChurn,
  TightPitWindow,
  BlockedIssues,
}

impl Driver {
  pub fn label(self) -> &'static str {
    match self {
      Self::ExcessiveChurn => "Excessive Ticket Churn (Tire Degradation)",
      Self::TightPitWindow => "Tight Pit Window (Time/Scope Mismatch)",
      Self::BlockedIssues => "Yellow Flags (Blocked Issues)",
    }
  }
}

/// Every matching driver, in evaluation order. Conditions are independent.
pub fn detect(
  snapshot: &SprintSnapshot,
  incomplete: &[&WorkItem],
  avg_churn: f64,
  config: &Config,
) -> Vec<Driver> {
  let mut out = Vec::new();

  if avg_churn > config.churn_driver_threshold {
    out.push(Driver::ExcessiveChurn);
  }
  if snapshot.days_remaining < config.pit_window_days
    && snapshot.remaining_points() > config.pit_window_scope_ratio * snapshot.total_committed_points
  {
    out.push(Driver::TightPitWindow);
  }
  if incomplete.iter().any(|i| i.is_blocked) {
    out.push(Driver::BlockedIssues);
  }

  out
}

pub fn labels(drivers: &[Driver]) -> Vec<String> {
  drivers.iter().map(|d| d.label().to_string()).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn item(blocked: bool) -> WorkItem {
    WorkItem {
      identifier: "SPR-9".into(),
      title: "Payments retry".into(),
      status: "In Progress".into(),
      story_points: 5.0,
      churn_count: 0,
      is_blocked: blocked,
    }
  }

  fn snapshot(days: u32, completed: f64) -> SprintSnapshot {
    SprintSnapshot {
      sprint_label: "Sprint 12".into(),
      days_remaining: days,
      total_committed_points: 100.0,
      completed_points: completed,
      items: Vec::new(),
    }
  }

  #[test]
  fn none_fire_on_calm_sprint() {
    let config = Config::default();
    let items = [item(false)];
    let refs: Vec<&WorkItem> = items.iter().collect();
    assert!(detect(&snapshot(5, 90.0), &refs, 0.0, &config).is_empty());
  }

  #[test]
  fn each_fires_alone() {
    let config = Config::default();
    let calm = [item(false)];
    let calm: Vec<&WorkItem> = calm.iter().collect();
    let blocked = [item(true)];
    let blocked: Vec<&WorkItem> = blocked.iter().collect();

    assert_eq!(
      detect(&snapshot(5, 90.0), &calm, 2.5, &config),
      vec![Driver::ExcessiveChurn]
    );
    assert_eq!(
      detect(&snapshot(2, 50.0), &calm, 0.0, &config),
      vec![Driver::TightPitWindow]
    );
    assert_eq!(
      detect(&snapshot(5, 90.0), &blocked, 0.0, &config),
      vec![Driver::BlockedIssues]
    );
  }

  #[test]
  fn two_fire_in_order() {
    let config = Config::default();
    let blocked = [item(false), item(true)];
    let blocked: Vec<&WorkItem> = blocked.iter().collect();
    assert_eq!(
      detect(&snapshot(5, 90.0), &blocked, 3.0, &config),
      vec![Driver::ExcessiveChurn, Driver::BlockedIssues]
    );
  }

  #[test]
  fn all_three_fire_in_order() {
    let config = Config::default();
    let blocked = [item(true)];
    let blocked: Vec<&WorkItem> = blocked.iter().collect();
    let drivers = detect(&snapshot(1, 40.0), &blocked, 4.0, &config);
    assert_eq!(
      labels(&drivers),
      vec![
        "Excessive Ticket Churn (Tire Degradation)",
        "Tight Pit Window (Time/Scope Mismatch)",
        "Yellow Flags (Blocked Issues)",
      ]
    );
  }

  #[test]
  fn thresholds_are_strict() {
    let config = Config::default();
    let none: Vec<&WorkItem> = Vec::new();
    // avg churn exactly 2 is not excessive.
    assert!(detect(&snapshot(5, 90.0), &none, 2.0, &config).is_empty());
    // 3 days left is not tight.
    assert!(detect(&snapshot(3, 10.0), &none, 0.0, &config).is_empty());
    // Exactly 30% open is not tight.
    assert!(detect(&snapshot(1, 70.0), &none, 0.0, &config).is_empty());
  }
}
