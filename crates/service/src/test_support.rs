#![cfg(test)]
use configs::DatabaseConfig;
use models::db::open_session;
use sea_orm::{ConnectionTrait, DatabaseConnection};
use tokio::sync::OnceCell;

const SCHEMA: &str = include_str!("../../../schema.sql");

// Ensure the schema is applied only once across the entire test process
static SCHEMA_APPLIED: OnceCell<()> = OnceCell::const_new();

/// A fresh session for the current test, or `None` when no store is available.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(None); }
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL missing; skip service db tests");
        return Ok(None);
    };
    let cfg = DatabaseConfig { url, max_connections: 2, ..DatabaseConfig::default() };

    SCHEMA_APPLIED
        .get_or_try_init(|| async {
            let db = open_session(&cfg).await?;
            db.execute_unprepared(SCHEMA).await?;
            db.close().await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;

    Ok(Some(open_session(&cfg).await?))
}
