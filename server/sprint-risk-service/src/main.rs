//! Binary entrypoint for the sprint risk service.

use std::net::SocketAddr;
use std::sync::Arc;

use sprint_risk_engine::logging;
use sprint_risk_service::{router, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  logging::init_tracing();

  let port: u16 = std::env::var("PORT")
    .unwrap_or_else(|_| "5005".into())
    .parse()?;

  let state = Arc::new(AppState::from_env()?);
  let app = router(state);

  let addr = SocketAddr::from(([127, 0, 0, 1], port));
  info!(%addr, "sprint-risk-service listening");

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
