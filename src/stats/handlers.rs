use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::{GlobalStats, Leaderboard, PlayerSummary},
    service::StatsService,
    types::{BestScoreQuery, LeaderboardQuery},
};
use crate::shared::{parse_query, AppError, AppState};

/// HTTP handler for the leaderboard
///
/// GET /api/leaderboard?limit=10
/// Returns each player's best game, highest score first
#[instrument(name = "get_leaderboard", skip(state, query))]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    query: Result<Query<LeaderboardQuery>, QueryRejection>,
) -> Result<Json<Leaderboard>, AppError> {
    let params = parse_query(query)?;

    let service = StatsService::new(Arc::clone(&state.score_repository));
    let board = service.leaderboard(params.limit).await?;

    info!(
        limit = params.limit,
        entries = board.entries.len(),
        total_games = board.total_games,
        "Leaderboard served"
    );

    Ok(Json(board))
}

/// HTTP handler for a player's best score and averages
///
/// GET /api/scores/best?player_name=Player
#[instrument(name = "get_best_score", skip(state, query))]
pub async fn get_best_score(
    State(state): State<AppState>,
    query: Result<Query<BestScoreQuery>, QueryRejection>,
) -> Result<Json<PlayerSummary>, AppError> {
    let params = parse_query(query)?;

    let service = StatsService::new(Arc::clone(&state.score_repository));
    let summary = service.player_summary(&params.player_name).await?;

    info!(
        player_name = %summary.player_name,
        total_games = summary.total_games,
        "Player summary served"
    );

    Ok(Json(summary))
}

/// HTTP handler for global game statistics
///
/// GET /api/stats
#[instrument(name = "get_game_stats", skip(state))]
pub async fn get_game_stats(State(state): State<AppState>) -> Result<Json<GlobalStats>, AppError> {
    let service = StatsService::new(Arc::clone(&state.score_repository));
    let stats = service.global_stats().await?;

    info!(total_games = stats.total_games, "Global stats served");

    Ok(Json(stats))
}
