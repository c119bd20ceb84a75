//! HTTP handlers for the sprint risk service.

use axum::{
  extract::{rejection::JsonRejection, State},
  routing::{get, post},
  Json, Router,
};
use chrono::Utc;
use sprint_risk_engine::{telemetry, TelemetryResponse, TrackerSearch};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::state::AppState;
use crate::types::ResolverRequest;

pub fn router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(health))
    .route("/resolver/risk-engine-fn", post(resolve))
    .route("/agent/sprint-risk", post(agent))
    .layer(CorsLayer::permissive())
    .with_state(state)
}

pub async fn health() -> &'static str {
  "ok"
}

/// UI resolver path.
pub async fn resolve(
  State(state): State<Arc<AppState>>,
  body: Result<Json<ResolverRequest>, JsonRejection>,
) -> Json<TelemetryResponse> {
  let req = match body {
    Ok(Json(req)) => req,
    Err(e) => return Json(rejected(e)),
  };
  info!(context = %req.context, "resolver request");
  Json(analyze(state, req.payload).await)
}

/// Direct agent invocation path.
pub async fn agent(
  State(state): State<Arc<AppState>>,
  body: Result<Json<TrackerSearch>, JsonRejection>,
) -> Json<TelemetryResponse> {
  let payload = match body {
    Ok(Json(payload)) => payload,
    Err(e) => return Json(rejected(e)),
  };
  info!("agent request");
  Json(analyze(state, payload).await)
}

fn rejected(e: JsonRejection) -> TelemetryResponse {
  warn!(error = %e, "unreadable request body");
  TelemetryResponse::failure(telemetry::FAILURE_MESSAGE)
}

/// Run the CPU-bound simulation off the async workers.
async fn analyze(state: Arc<AppState>, payload: TrackerSearch) -> TelemetryResponse {
  let result = tokio::task::spawn_blocking(move || {
    telemetry::handle(&state.engine, &state.provider, &payload, Utc::now(), None)
  })
  .await;

  match result {
    Ok(resp) => resp,
    Err(e) => {
      warn!(error = %e, "analysis task failed");
      TelemetryResponse::failure(telemetry::FAILURE_MESSAGE)
    }
  }
}
