use axum::{
    extract::{rejection::QueryRejection, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::scores::{ScoreError, ScoreRepository};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub score_repository: Arc<dyn ScoreRepository + Send + Sync>,
}

impl AppState {
    pub fn new(score_repository: Arc<dyn ScoreRepository + Send + Sync>) -> Self {
        Self { score_repository }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<ScoreError> for AppError {
    fn from(err: ScoreError) -> Self {
        match err {
            ScoreError::Validation(msg) => AppError::Validation(msg),
            ScoreError::StoreUnavailable(msg) => AppError::StoreUnavailable(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::StoreUnavailable(msg) => {
                tracing::error!(error = %msg, "Score store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Score store unavailable".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Unwraps query parameters, turning parse failures into a JSON 400
pub fn parse_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
