//! Monte Carlo trial loop: per-item completion odds and crash counting.

use rand::Rng;

use crate::config::Config;
use crate::types::{SprintSnapshot, WorkItem};

/// Totals accumulated across all trials of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialSummary {
  pub trials: u32,
  pub crash_count: u32,
  /// Sum of per-trial delivered totals (completed + simulated points).
  pub delivered_sum: f64,
}

impl TrialSummary {
  pub fn crash_probability(&self) -> f64 {
    self.crash_count as f64 / self.trials as f64
  }

  pub fn mean_delivered(&self) -> f64 {
    self.delivered_sum / self.trials as f64
  }
}

/// Probability that `item` is delivered within one trial, clamped to [0, 1].
///
/// Churn tiers are exclusive: high churn takes the larger penalty only.
pub fn completion_probability(item: &WorkItem, config: &Config) -> f64 {
  let mut p = config.base_probability;

  if item.churn_count > config.high_churn_threshold {
    p -= config.high_churn_penalty;
  } else if item.churn_count > config.moderate_churn_threshold {
    p -= config.moderate_churn_penalty;
  }

  if item.is_blocked {
    p -= config.blocker_penalty;
  }

  p.clamp(0.0, 1.0)
}

/// Run `config.trial_count` trials over the incomplete items.
///
/// Each trial draws one uniform value in [0, 1) per item, in item order; the
/// item is delivered iff the draw is strictly below its probability.
pub fn run_trials<R: Rng + ?Sized>(
  snapshot: &SprintSnapshot,
  incomplete: &[&WorkItem],
  config: &Config,
  rng: &mut R,
) -> TrialSummary {
  let odds: Vec<(f64, f64)> = incomplete
    .iter()
    .map(|item| (completion_probability(item, config), item.story_points))
    .collect();
  let crash_line = config.crash_ratio * snapshot.total_committed_points;

  let mut crash_count = 0u32;
  let mut delivered_sum = 0.0;

  for _ in 0..config.trial_count {
    let mut simulated = 0.0;
    for &(p, points) in &odds {
      if rng.gen::<f64>() < p {
        simulated += points;
      }
    }

    let total = snapshot.completed_points + simulated;
    delivered_sum += total;
    if total < crash_line {
      crash_count += 1;
    }
  }

  TrialSummary {
    trials: config.trial_count,
    crash_count,
    delivered_sum,
  }
}
