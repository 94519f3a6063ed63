use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::{config::AppConfig, health, scores, shared::AppState, stats};

/// Builds the HTTP surface over the given state
pub fn build_router(app_state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/api/health", get(health::health_check))
        .route("/api/scores", post(scores::submit_score))
        .route("/api/scores/best", get(stats::get_best_score))
        .route("/api/scores/history", get(scores::score_history))
        .route("/api/leaderboard", get(stats::get_leaderboard))
        .route("/api/stats", get(stats::get_game_stats))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    // Wildcards cannot be combined with credentials
    if allowed_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any).allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(origin = %origin, error = %err, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer
        .allow_origin(origins)
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
