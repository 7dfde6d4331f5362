use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{debug, warn};

use crate::errors::ModelError;

pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging)
        .connect_lazy(true);
    opt
}

/// Open a store session for one request.
///
/// The session is lazy: no socket is opened until the first statement runs,
/// so an unreachable store fails the statement, not the acquisition.
/// Callers own the returned handle and must `close()` it when done.
pub async fn open_session(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    let db = Database::connect(connect_options(cfg)).await?;
    debug!(event = "store_session_open", "store session opened");
    Ok(db)
}

/// Release a session; errors are only logged since the response is already built.
pub async fn close_session(db: DatabaseConnection) {
    match db.close().await {
        Ok(()) => debug!(event = "store_session_closed", "store session closed"),
        Err(e) => warn!(event = "store_session_close_failed", error = %e, "failed to close store session"),
    }
}
