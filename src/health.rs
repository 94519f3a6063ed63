use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::shared::AppState;

pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Response for the health check endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub database: String, // "connected" or "error"
    pub version: String,
}

/// HTTP handler reporting whether the score store is reachable
///
/// GET /api/health
/// Always answers 200; store reachability is reported in the body
#[instrument(name = "health_check", skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.score_repository.ping().await {
        Ok(()) => "connected",
        Err(err) => {
            warn!(error = %err, "Score store health check failed");
            "error"
        }
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        database: database.to_string(),
        version: SERVICE_VERSION.to_string(),
    })
}

/// GET /
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the Snake Game API!",
        "version": SERVICE_VERSION,
    }))
}
