//! Sprint Risk Engine: Monte Carlo estimate of missing a sprint commitment.
//!
//! Takes a normalized sprint snapshot, resolves every incomplete item over a
//! fixed number of weighted coin-flip trials, and reports a 0–100 volatility
//! index, crash probability, projected completion, key drivers and a one-line
//! narrative. No DB, no network; the random source is injected.
//!
//! Used by the `sprint-risk` binary (stdin/stdout) and the HTTP service.

pub mod config;
pub mod drivers;
pub mod engine;
pub mod error;
pub mod logging;
pub mod narrative;
pub mod present;
pub mod provider;
pub mod score;
pub mod simulation;
pub mod telemetry;
pub mod types;

pub use config::{Config, ProviderConfig};
pub use engine::{seed_for, Engine};
pub use error::EngineError;
pub use provider::TrackerSearch;
pub use telemetry::TelemetryResponse;
pub use types::{RiskLevel, RiskReport, SprintSnapshot, WorkItem};
