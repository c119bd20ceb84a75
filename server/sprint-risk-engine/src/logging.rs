//! Tracing setup shared by the CLI and the HTTP service.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "SPRINT_RISK_LOG";

/// Install a stderr subscriber filtered by `SPRINT_RISK_LOG` (default `info`).
///
/// Stdout stays reserved for JSON output. Safe to call more than once; later
/// calls are no-ops.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(true)
    .with_writer(std::io::stderr)
    .try_init();
}
