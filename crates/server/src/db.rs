use std::time::Duration;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

/// Open the SQLite database (creating file and data dir if needed) and run
/// migrations. WAL mode plus a busy timeout lets concurrent requests wait
/// instead of failing with SQLITE_BUSY.
pub async fn init_db(config: &roster_core::config::StorageConfig) -> anyhow::Result<SqlitePool> {
    std::fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("creating data dir {}", config.data_dir.display()))?;

    let db_path = config.database_path();
    let options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .with_context(|| format!("opening {}", db_path.display()))?;
    info!("SQLite connected: {}", db_path.display());

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .context("running database migrations")?;
    info!("Database migrations applied");

    Ok(pool)
}
