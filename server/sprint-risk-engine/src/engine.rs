//! Core engine: fast path, trial loop, aggregation and report assembly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::Config;
use crate::drivers;
use crate::error::EngineError;
use crate::narrative;
use crate::score;
use crate::simulation;
use crate::types::*;

/// The sprint risk engine. Immutable after construction; every run takes its
/// own random source, so one engine can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Engine {
  config: Config,
}

impl Engine {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  /// Like [`Engine::new`], but rejects an unusable configuration.
  pub fn try_new(config: Config) -> Result<Self, EngineError> {
    config.validate()?;
    Ok(Self::new(config))
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Estimate the risk of missing the sprint commitment.
  ///
  /// Snapshot invariants are not checked: inconsistent figures produce a
  /// defined but degenerate report. The only failure is a run whose
  /// `trial_count * incomplete items` exceeds `max_item_draws`.
  pub fn compute_risk<R: Rng + ?Sized>(
    &self,
    snapshot: &SprintSnapshot,
    rng: &mut R,
  ) -> Result<RiskReport, EngineError> {
    if snapshot.remaining_points() <= 0.0 {
      debug!(sprint = %snapshot.sprint_label, "all committed work complete; skipping simulation");
      return Ok(complete_report());
    }

    let incomplete: Vec<&WorkItem> = snapshot
      .items
      .iter()
      .filter(|item| !self.config.is_terminal(&item.status))
      .collect();

    let draws = self.config.trial_count as u64 * incomplete.len() as u64;
    if draws > self.config.max_item_draws {
      return Err(EngineError::ComputationTooLarge {
        draws,
        limit: self.config.max_item_draws,
      });
    }

    debug!(
      sprint = %snapshot.sprint_label,
      trials = self.config.trial_count,
      incomplete = incomplete.len(),
      "running monte carlo trials"
    );

    let summary = simulation::run_trials(snapshot, &incomplete, &self.config, rng);

    let crash_probability = summary.crash_probability();
    let projected_completion_fraction = summary.mean_delivered() / snapshot.total_committed_points;
    let avg_churn = score::average_churn(&incomplete);
    let volatility_index = score::volatility_index(crash_probability, avg_churn, &self.config);
    let risk_level = score::classify(volatility_index, &self.config);
    let key_drivers = drivers::labels(&drivers::detect(snapshot, &incomplete, avg_churn, &self.config));
    let narrative = narrative::generate(volatility_index, &key_drivers, &self.config);

    info!(
      sprint = %snapshot.sprint_label,
      volatility_index,
      crash_probability,
      risk_level = %risk_level,
      drivers = key_drivers.len(),
      "sprint risk computed"
    );

    Ok(RiskReport {
      volatility_index,
      crash_probability,
      risk_level,
      projected_completion_fraction,
      key_drivers,
      narrative,
    })
  }

  /// Run with a ChaCha8 generator seeded from `seed`.
  pub fn compute_risk_seeded(
    &self,
    snapshot: &SprintSnapshot,
    seed: u64,
  ) -> Result<RiskReport, EngineError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    self.compute_risk(snapshot, &mut rng)
  }
}

/// Stable seed for a snapshot: first 8 bytes of the blake3 hash of its JSON.
///
/// Identical snapshots get identical seeds, so every invocation path agrees.
pub fn seed_for(snapshot: &SprintSnapshot) -> Result<u64, EngineError> {
  let bytes = serde_json::to_vec(snapshot)?;
  let hash = blake3::hash(&bytes);
  let mut head = [0u8; 8];
  head.copy_from_slice(&hash.as_bytes()[..8]);
  Ok(u64::from_le_bytes(head))
}

fn complete_report() -> RiskReport {
  RiskReport {
    volatility_index: 0,
    crash_probability: 0.0,
    risk_level: RiskLevel::Low,
    projected_completion_fraction: 1.0,
    key_drivers: vec![drivers::ALL_WORK_COMPLETE.to_string()],
    narrative: narrative::CHEQUERED_FLAG.to_string(),
  }
}
