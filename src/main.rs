use snake_scores::{
    build_router,
    scores::{InMemoryScoreRepository, PostgresScoreRepository, ScoreRepository},
    AppConfig, AppState,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting snake score server");

    let score_repository: Arc<dyn ScoreRepository + Send + Sync> = match &config.database_url {
        Some(database_url) => {
            let repository = PostgresScoreRepository::connect(database_url).await?;
            info!("Connected to PostgreSQL score store");
            Arc::new(repository)
        }
        None => {
            warn!("DATABASE_URL not set, scores are kept in memory only");
            Arc::new(InMemoryScoreRepository::new())
        }
    };

    let app_state = AppState::new(score_repository);
    let app = build_router(app_state, &config);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!(address = %config.bind_address(), "Server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
