// Library crate for the snake score service
// This file exposes the public API for integration tests

pub mod config;
pub mod health;
pub mod router;
pub mod scores;
pub mod shared;
pub mod stats;

// Re-export commonly used types for easier access in tests
pub use config::AppConfig;
pub use router::build_router;
pub use scores::{GameResult, InMemoryScoreRepository, ScoreRepository, ScoreSubmission};
pub use shared::{AppError, AppState};
pub use stats::{GlobalStats, Leaderboard, LeaderboardEntry, PlayerSummary, StatsService};
