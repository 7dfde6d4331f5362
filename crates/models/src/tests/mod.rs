/// Upsert and delete behavior against a live PostgreSQL store
pub mod crud_tests;

use configs::DatabaseConfig;
use sea_orm::{ConnectionTrait, DatabaseConnection};
use tokio::sync::OnceCell;

use crate::db::open_session;

const SCHEMA: &str = include_str!("../../../../schema.sql");

static SCHEMA_APPLIED: OnceCell<()> = OnceCell::const_new();

/// `None` when the tests should be skipped (no `DATABASE_URL`, or `SKIP_DB_TESTS` set).
pub async fn test_db() -> anyhow::Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL missing; skip db tests");
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
