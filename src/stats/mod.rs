// Public API - what other modules can use
pub use handlers::{get_best_score, get_game_stats, get_leaderboard};
pub use models::{GlobalStats, Leaderboard, LeaderboardEntry, PlayerSummary};
pub use service::StatsService;

// Internal modules
pub mod engine;
mod handlers;
pub mod models;
mod service;
pub mod types;
