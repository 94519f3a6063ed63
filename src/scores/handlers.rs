use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{
    models::GameResult,
    types::{HistoryQuery, ScoreSubmission},
};
use crate::shared::{parse_query, AppError, AppState};
use crate::stats::StatsService;

/// HTTP handler for submitting a finished game
///
/// POST /api/scores
/// Returns the stored result including its assigned id and timestamp
#[instrument(name = "submit_score", skip(state, submission))]
pub async fn submit_score(
    State(state): State<AppState>,
    Json(submission): Json<ScoreSubmission>,
) -> Result<Json<GameResult>, AppError> {
    info!(score = submission.score, "Submitting game result");

    let stored = state
        .score_repository
        .append(submission)
        .await
        .map_err(|e| {
            warn!(error = %e, "Game result rejected");
            AppError::from(e)
        })?;

    info!(
        id = stored.id,
        player_name = %stored.player_name,
        score = stored.score,
        "Game result stored"
    );

    Ok(Json(stored))
}

/// HTTP handler for a player's recent games
///
/// GET /api/scores/history?player_name=Player&limit=20
/// Returns games newest first
#[instrument(name = "score_history", skip(state, query))]
pub async fn score_history(
    State(state): State<AppState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<Vec<GameResult>>, AppError> {
    let params = parse_query(query)?;

    let service = StatsService::new(Arc::clone(&state.score_repository));
    let history = service
        .player_history(&params.player_name, params.limit)
        .await?;

    info!(
        player_name = %params.player_name,
        games = history.len(),
        "Score history served"
    );

    Ok(Json(history))
}
