// Public API - what other modules can use
pub use errors::ScoreError;
pub use handlers::{score_history, submit_score};
pub use models::{GameResult, NewGameResult, DEFAULT_PLAYER_NAME};
pub use repository::{InMemoryScoreRepository, PostgresScoreRepository, ScoreRepository};
pub use types::{HistoryQuery, ScoreSubmission};

// Internal modules
mod errors;
mod handlers;
pub mod models;
pub mod repository;
pub mod types;
mod validation;
