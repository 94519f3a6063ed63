use std::sync::Arc;
use tracing::{debug, instrument};

use super::{
    engine,
    models::{GlobalStats, Leaderboard, PlayerSummary},
};
use crate::scores::{GameResult, ScoreError, ScoreRepository};

/// Answers aggregate queries from the store's current contents
///
/// Holds no state of its own: every call performs exactly one store read and
/// derives the view from that snapshot.
pub struct StatsService {
    repository: Arc<dyn ScoreRepository + Send + Sync>,
}

impl StatsService {
    pub fn new(repository: Arc<dyn ScoreRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn leaderboard(&self, limit: i64) -> Result<Leaderboard, ScoreError> {
        let records = self.repository.all().await?;
        let board = engine::leaderboard(&records, limit);

        debug!(
            entries = board.entries.len(),
            total_games = board.total_games,
            "Leaderboard computed"
        );
        Ok(board)
    }

    #[instrument(skip(self))]
    pub async fn player_summary(&self, player_name: &str) -> Result<PlayerSummary, ScoreError> {
        let records = self.repository.filter_by_player(player_name).await?;
        Ok(engine::player_summary(player_name, &records))
    }

    #[instrument(skip(self))]
    pub async fn global_stats(&self) -> Result<GlobalStats, ScoreError> {
        let records = self.repository.all().await?;
        Ok(engine::global_stats(&records))
    }

    #[instrument(skip(self))]
    pub async fn player_history(
        &self,
        player_name: &str,
        limit: i64,
    ) -> Result<Vec<GameResult>, ScoreError> {
        let records = self.repository.filter_by_player(player_name).await?;
        Ok(engine::player_history(player_name, &records, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::{InMemoryScoreRepository, ScoreSubmission};
    use crate::shared::test_utils::UnavailableScoreRepository;

    fn submission(name: &str, score: i32, len: i32, dur: i32) -> ScoreSubmission {
        ScoreSubmission {
            player_name: Some(name.to_string()),
            score,
            snake_length: len,
            duration_seconds: dur,
        }
    }

    async fn seeded_service() -> (Arc<InMemoryScoreRepository>, StatsService) {
        let repo = Arc::new(InMemoryScoreRepository::new());
        repo.append(submission("A", 100, 10, 30)).await.unwrap();
        repo.append(submission("A", 200, 15, 40)).await.unwrap();
        repo.append(submission("B", 150, 8, 20)).await.unwrap();
        let service = StatsService::new(repo.clone());
        (repo, service)
    }

    #[tokio::test]
    async fn test_views_reflect_store_contents() {
        let (_repo, service) = seeded_service().await;

        let board = service.leaderboard(10).await.unwrap();
        assert_eq!(board.total_games, 3);
        assert_eq!(board.entries[0].player_name, "A");
        assert_eq!(board.entries[0].score, 200);
        assert_eq!(board.entries[1].player_name, "B");

        let stats = service.global_stats().await.unwrap();
        assert_eq!(stats.total_players, 2);
        assert_eq!(stats.average_score, 150.0);
        assert_eq!(stats.longest_snake, 15);

        let summary = service.player_summary("A").await.unwrap();
        assert_eq!(summary.best_score, 200);
        assert_eq!(summary.total_games, 2);
        assert_eq!(summary.average_score, 150.0);
    }

    #[tokio::test]
    async fn test_each_call_sees_new_appends() {
        let (repo, service) = seeded_service().await;
        assert_eq!(service.global_stats().await.unwrap().total_games, 3);

        repo.append(submission("C", 500, 30, 90)).await.unwrap();

        let stats = service.global_stats().await.unwrap();
        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.highest_score, 500);
        assert_eq!(
            service.leaderboard(1).await.unwrap().entries[0].player_name,
            "C"
        );
    }

    #[tokio::test]
    async fn test_total_games_matches_append_count() {
        let repo = Arc::new(InMemoryScoreRepository::new());
        let service = StatsService::new(repo.clone());

        for i in 0..25 {
            repo.append(submission(&format!("p{}", i % 4), i, 1, 0))
                .await
                .unwrap();
        }

        assert_eq!(service.global_stats().await.unwrap().total_games, 25);
        assert_eq!(service.leaderboard(10).await.unwrap().total_games, 25);
    }

    #[tokio::test]
    async fn test_history_newest_first() {
        let (_repo, service) = seeded_service().await;

        let history = service.player_history("A", 20).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].score, 200);
        assert_eq!(history[1].score, 100);

        assert!(service.player_history("Nobody", 20).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_store_returns_zero_values() {
        let service = StatsService::new(Arc::new(InMemoryScoreRepository::new()));

        assert_eq!(service.global_stats().await.unwrap(), GlobalStats::default());
        assert_eq!(
            service.player_summary("Player").await.unwrap(),
            PlayerSummary::empty("Player")
        );
        assert!(service.leaderboard(10).await.unwrap().entries.is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let service = StatsService::new(Arc::new(UnavailableScoreRepository));

        assert!(matches!(
            service.global_stats().await,
            Err(ScoreError::StoreUnavailable(_))
        ));
        assert!(matches!(
            service.player_summary("A").await,
            Err(ScoreError::StoreUnavailable(_))
        ));
        assert!(matches!(
            service.leaderboard(10).await,
            Err(ScoreError::StoreUnavailable(_))
        ));
    }
}
