use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoreError {
    /// Submission failed bounds checks; nothing was written
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<sqlx::Error> for ScoreError {
    fn from(err: sqlx::Error) -> Self {
        ScoreError::StoreUnavailable(err.to_string())
    }
}
