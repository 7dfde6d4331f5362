//! Per-request store sessions.
//!
//! Every `/api` request gets its own session, opened before the handler runs
//! and handed to it as an `Extension<DatabaseConnection>`. The session is
//! closed on a spawned task once the response exists, so the client never
//! waits for the close.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use configs::DatabaseConfig;
use models::db;
use tracing::warn;

use crate::errors::ApiError;

#[derive(Clone, Default)]
pub struct AppState {
    /// `None` when no connection string was configured.
    pub database: Option<Arc<DatabaseConfig>>,
}

impl AppState {
    pub fn new(database: DatabaseConfig) -> Self {
        Self { database: database.is_configured().then(|| Arc::new(database)) }
    }

    pub fn unconfigured() -> Self {
        Self::default()
    }
}

pub async fn open_store(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(cfg) = state.database.as_deref() else {
        warn!(path = %req.uri().path(), "store not configured");
        return Err(ApiError::MissingConfig);
    };
    let session = db::open_session(cfg).await?;
    req.extensions_mut().insert(session.clone());

    let response = next.run(req).await;

    tokio::spawn(db::close_session(session));
    Ok(response)
}
