use serde::Deserialize;

use crate::scores::types::default_player_name;

pub const DEFAULT_LEADERBOARD_LIMIT: i64 = 10;

/// Query parameters for the leaderboard endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default = "default_leaderboard_limit")]
    pub limit: i64,
}

/// Query parameters for the best-score endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct BestScoreQuery {
    #[serde(default = "default_player_name")]
    pub player_name: String,
}

fn default_leaderboard_limit() -> i64 {
    DEFAULT_LEADERBOARD_LIMIT
}
