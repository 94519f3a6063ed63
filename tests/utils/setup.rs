use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use snake_scores::{
    build_router, AppConfig, AppState, InMemoryScoreRepository, ScoreRepository, ScoreSubmission,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub app: Router,
    pub repository: Arc<InMemoryScoreRepository>,
}

pub struct TestSetupBuilder {
    games: Vec<(String, i32, i32, i32)>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self { games: vec![] }
    }

    pub fn with_game(mut self, player: &str, score: i32, snake_length: i32, duration: i32) -> Self {
        self.games
            .push((player.to_string(), score, snake_length, duration));
        self
    }

    /// A: 100 and 200, B: 150
    pub fn with_three_game_scenario(self) -> Self {
        self.with_game("A", 100, 10, 30)
            .with_game("A", 200, 15, 40)
            .with_game("B", 150, 8, 20)
    }

    pub async fn build(self) -> TestSetup {
        let repository = Arc::new(InMemoryScoreRepository::new());

        for (player_name, score, snake_length, duration_seconds) in self.games {
            repository
                .append(ScoreSubmission {
                    player_name: Some(player_name),
                    score,
                    snake_length,
                    duration_seconds,
                })
                .await
                .expect("seed game should be valid");
        }

        let app_state = AppState::new(repository.clone());
        let app = build_router(app_state, &AppConfig::default());

        TestSetup { app, repository }
    }
}

impl TestSetup {
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request should build");
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router should respond");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }
}
