use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the leaderboard: a player's single best game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32, // 1-based position after sorting and truncation
    pub player_name: String,
    pub score: i32,
    pub snake_length: i32, // From the same game as `score`
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
    pub total_games: i64, // Every stored game, not just the ones shown
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub player_name: String,
    pub best_score: i32,
    pub total_games: i64,
    pub average_score: f64,
}

impl PlayerSummary {
    /// Summary for a player with no recorded games
    pub fn empty(player_name: &str) -> Self {
        Self {
            player_name: player_name.to_string(),
            best_score: 0,
            total_games: 0,
            average_score: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalStats {
    pub total_games: i64,
    pub total_players: i64,
    pub highest_score: i32,
    pub average_score: f64,
    pub longest_snake: i32,
}

impl Default for GlobalStats {
    /// Stats for an empty store; a snake is never shorter than one segment
    fn default() -> Self {
        Self {
            total_games: 0,
            total_players: 0,
            highest_score: 0,
            average_score: 0.0,
            longest_snake: 1,
        }
    }
}
