//! Shared service state: one engine, built once at startup.

use sprint_risk_engine::{Config, Engine, EngineError, ProviderConfig};

/// Overrides the Monte Carlo trial count.
pub const TRIALS_ENV: &str = "SPRINT_RISK_TRIALS";

pub struct AppState {
  pub engine: Engine,
  pub provider: ProviderConfig,
}

impl AppState {
  pub fn new(config: Config) -> Result<Self, EngineError> {
    Ok(Self {
      engine: Engine::try_new(config)?,
      provider: ProviderConfig::default(),
    })
  }

  /// Defaults plus the `SPRINT_RISK_TRIALS` override, if set.
  pub fn from_env() -> Result<Self, EngineError> {
    Self::new(config_from(std::env::var(TRIALS_ENV).ok().as_deref())?)
  }
}

fn config_from(trials: Option<&str>) -> Result<Config, EngineError> {
  let mut config = Config::default();
  if let Some(raw) = trials {
    config.trial_count = raw
      .trim()
      .parse()
      .map_err(|_| EngineError::config(TRIALS_ENV, "must be a positive integer"))?;
  }
  Ok(config)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn trials_override() {
    assert_eq!(config_from(None).unwrap().trial_count, 1000);
    assert_eq!(config_from(Some(" 250 ")).unwrap().trial_count, 250);
    assert!(config_from(Some("many")).is_err());
  }

  #[test]
  fn zero_trials_fail_validation() {
    let config = config_from(Some("0")).unwrap();
    assert!(AppState::new(config).is_err());
  }
}
