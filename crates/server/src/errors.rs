use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use models::errors::ModelError;
use service::errors::ServiceError;

/// Every failure a handler can hit. All of them reach the client as
/// `500 {"error": <message>}`; the variants only matter for logging.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("DATABASE_URL not set")]
    MissingConfig,
    #[error("{0}")]
    Body(String),
    #[error(transparent)]
    Store(#[from] ModelError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::MissingConfig => "missing_config",
            ApiError::Body(_) => "bad_body",
            ApiError::Store(_) => "store",
            ApiError::Service(_) => "service",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let msg = self.to_string();
        error!(kind = self.kind(), error = %msg, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!({"error": msg}))).into_response()
    }
}
