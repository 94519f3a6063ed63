use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_PLAYER_NAME: &str = "Player";
pub const MAX_PLAYER_NAME_LEN: usize = 50;
pub const MIN_SNAKE_LENGTH: i32 = 1;

/// Database model for the scores table: one completed game
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct GameResult {
    pub id: i64, // Store-assigned, strictly increasing in creation order
    pub player_name: String,
    pub score: i32,
    pub snake_length: i32,
    pub duration_seconds: i32,
    pub created_at: DateTime<Utc>, // Store clock at insert time
}

/// A submission that passed validation and is ready to be appended
///
/// Only obtainable through `ScoreSubmission::validate`, so every value the
/// store sees already satisfies the field bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGameResult {
    player_name: String,
    score: i32,
    snake_length: i32,
    duration_seconds: i32,
}

impl NewGameResult {
    pub(crate) fn new(
        player_name: String,
        score: i32,
        snake_length: i32,
        duration_seconds: i32,
    ) -> Self {
        Self {
            player_name,
            score,
            snake_length,
            duration_seconds,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn snake_length(&self) -> i32 {
        self.snake_length
    }

    pub fn duration_seconds(&self) -> i32 {
        self.duration_seconds
    }

    /// Materializes the stored record once the store has assigned identity
    pub fn into_game_result(self, id: i64, created_at: DateTime<Utc>) -> GameResult {
        GameResult {
            id,
            player_name: self.player_name,
            score: self.score,
            snake_length: self.snake_length,
            duration_seconds: self.duration_seconds,
            created_at,
        }
    }
}
