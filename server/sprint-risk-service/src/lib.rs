//! Sprint Risk Service
//!
//! HTTP front for the sprint risk engine. The UI resolver and the direct agent
//! path share one handler body, so both answer identically.
//! Bind to 127.0.0.1 by default (internal only).

mod handlers;
mod state;
mod types;

pub use handlers::{agent, health, resolve, router};
pub use state::AppState;
pub use types::ResolverRequest;
