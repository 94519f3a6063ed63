use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::{models::GameResult, types::ScoreSubmission, ScoreError};

/// Append-only record store for completed games
///
/// Reads carry no ordering guarantee; callers impose their own.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Validates, assigns `id` and `created_at`, persists and returns the stored record
    async fn append(&self, submission: ScoreSubmission) -> Result<GameResult, ScoreError>;
    async fn all(&self) -> Result<Vec<GameResult>, ScoreError>;
    async fn filter_by_player(&self, player_name: &str) -> Result<Vec<GameResult>, ScoreError>;
    async fn count(&self) -> Result<i64, ScoreError>;

    /// Readiness probe; fails when the store cannot be reached
    async fn ping(&self) -> Result<(), ScoreError>;
}

#[derive(Debug, Default)]
struct InMemoryLog {
    records: Vec<GameResult>,
    last_id: i64,
}

/// In-memory implementation of ScoreRepository for development and testing
///
/// Data is lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryScoreRepository {
    log: RwLock<InMemoryLog>,
}

impl InMemoryScoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with already-stored records
    pub fn with_records(records: Vec<GameResult>) -> Self {
        let last_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            log: RwLock::new(InMemoryLog { records, last_id }),
        }
    }
}

#[async_trait]
impl ScoreRepository for InMemoryScoreRepository {
    #[instrument(skip(self, submission))]
    async fn append(&self, submission: ScoreSubmission) -> Result<GameResult, ScoreError> {
        let validated = submission.validate()?;

        let mut log = self.log.write().await;
        let mut created_at = Utc::now();
        // Clock steps backwards must not reorder ids against timestamps
        if let Some(last) = log.records.last() {
            created_at = created_at.max(last.created_at);
        }
        log.last_id += 1;
        let stored = validated.into_game_result(log.last_id, created_at);
        log.records.push(stored.clone());

        debug!(id = stored.id, player_name = %stored.player_name, score = stored.score, "Appended game result in memory");
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn all(&self) -> Result<Vec<GameResult>, ScoreError> {
        let log = self.log.read().await;
        Ok(log.records.clone())
    }

    #[instrument(skip(self))]
    async fn filter_by_player(&self, player_name: &str) -> Result<Vec<GameResult>, ScoreError> {
        let log = self.log.read().await;
        Ok(log
            .records
            .iter()
            .filter(|r| r.player_name == player_name)
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<i64, ScoreError> {
        let log = self.log.read().await;
        Ok(log.records.len() as i64)
    }

    async fn ping(&self) -> Result<(), ScoreError> {
        Ok(())
    }
}

const CREATE_SCORES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS scores (
    id BIGSERIAL PRIMARY KEY,
    player_name VARCHAR(50) NOT NULL DEFAULT 'Player',
    score INTEGER NOT NULL CHECK (score >= 0),
    snake_length INTEGER NOT NULL CHECK (snake_length >= 1),
    duration_seconds INTEGER NOT NULL CHECK (duration_seconds >= 0),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;
const CREATE_PLAYER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_scores_player_name ON scores (player_name)";
const CREATE_SCORE_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_scores_score ON scores (score)";

const SELECT_COLUMNS: &str =
    "SELECT id, player_name, score, snake_length, duration_seconds, created_at FROM scores";

/// PostgreSQL implementation of the score store
///
/// Each statement checks a connection out of the pool and the connection goes
/// back to the pool when the statement's future completes or is dropped.
pub struct PostgresScoreRepository {
    pool: PgPool,
}

impl PostgresScoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects and makes sure the schema exists
    pub async fn connect(database_url: &str) -> Result<Self, ScoreError> {
        let pool = PgPool::connect(database_url).await.map_err(|e| {
            warn!(error = %e, "Failed to connect to database");
            ScoreError::from(e)
        })?;
        let repository = Self::new(pool);
        repository.init_schema().await?;
        Ok(repository)
    }

    #[instrument(skip(self))]
    pub async fn init_schema(&self) -> Result<(), ScoreError> {
        for statement in [CREATE_SCORES_TABLE, CREATE_PLAYER_INDEX, CREATE_SCORE_INDEX] {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    warn!(error = %e, "Failed to initialize scores schema");
                    ScoreError::from(e)
                })?;
        }
        debug!("Scores schema ready");
        Ok(())
    }
}

#[async_trait]
impl ScoreRepository for PostgresScoreRepository {
    #[instrument(skip(self, submission))]
    async fn append(&self, submission: ScoreSubmission) -> Result<GameResult, ScoreError> {
        let validated = submission.validate()?;

        let stored = sqlx::query_as::<_, GameResult>(
            "INSERT INTO scores (player_name, score, snake_length, duration_seconds) VALUES ($1, $2, $3, $4) \
             RETURNING id, player_name, score, snake_length, duration_seconds, created_at",
        )
        .bind(validated.player_name())
        .bind(validated.score())
        .bind(validated.snake_length())
        .bind(validated.duration_seconds())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to insert game result");
            ScoreError::from(e)
        })?;

        debug!(id = stored.id, player_name = %stored.player_name, "Appended game result in database");
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn all(&self) -> Result<Vec<GameResult>, ScoreError> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY id");
        let records = sqlx::query_as::<_, GameResult>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to load game results");
                ScoreError::from(e)
            })?;

        debug!(record_count = records.len(), "Loaded game results from database");
        Ok(records)
    }

    #[instrument(skip(self))]
    async fn filter_by_player(&self, player_name: &str) -> Result<Vec<GameResult>, ScoreError> {
        let sql = format!("{SELECT_COLUMNS} WHERE player_name = $1 ORDER BY id");
        let records = sqlx::query_as::<_, GameResult>(&sql)
            .bind(player_name)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, player_name = %player_name, "Failed to load player game results");
                ScoreError::from(e)
            })?;

        Ok(records)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<i64, ScoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM scores")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to count game results");
                ScoreError::from(e)
            })?;
        Ok(count)
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> Result<(), ScoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Database ping failed");
                ScoreError::from(e)
            })?;
        Ok(())
    }
}
