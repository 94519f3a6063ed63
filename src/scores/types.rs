use serde::{Deserialize, Serialize};

use super::models::DEFAULT_PLAYER_NAME;

pub const DEFAULT_HISTORY_LIMIT: i64 = 20;

/// Request payload sent by the client when a game ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    #[serde(default)]
    pub player_name: Option<String>, // Falls back to "Player" when omitted
    pub score: i32,
    pub snake_length: i32,
    pub duration_seconds: i32,
}

/// Query parameters for a player's game history
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryQuery {
    #[serde(default = "default_player_name")]
    pub player_name: String,
    #[serde(default = "default_history_limit")]
    pub limit: i64,
}

pub(crate) fn default_player_name() -> String {
    DEFAULT_PLAYER_NAME.to_string()
}

fn default_history_limit() -> i64 {
    DEFAULT_HISTORY_LIMIT
}
