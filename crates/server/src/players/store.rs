//! Operations on the `player_jobs` SQLite table.
//!
//! [`PlayerStore`] is a stateless unit struct with async methods that take a
//! `&SqlitePool`. Both write paths lean on `ON CONFLICT` instead of
//! read-then-write, so `player_id` uniqueness holds without locking.

use chrono::Utc;
use sqlx::SqlitePool;
use thiserror::Error;

use roster_core::PlayerSelection;

// ── Error type ───────────────────────────────────────────────────────

/// Errors from player store operations.
#[derive(Debug, Error)]
pub enum PlayerStoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl PlayerStoreError {
    /// Map to an HTTP status code for API responses.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Database(_) => 500,
        }
    }
}

// ── Store ────────────────────────────────────────────────────────────

/// Stateless store for `player_jobs`.
pub struct PlayerStore;

impl PlayerStore {
    /// Insert an empty selection row for `player_id` if none exists.
    ///
    /// Idempotent: a second registration of the same player is a no-op and
    /// never touches an existing selection.
    pub async fn register(pool: &SqlitePool, player_id: &str) -> Result<(), PlayerStoreError> {
        let now = Utc::now();
        sqlx::query(
            "INSERT INTO player_jobs (player_id, job, team, created_at, updated_at)
             VALUES ($1, '', '', $2, $3)
             ON CONFLICT(player_id) DO NOTHING",
        )
        .bind(player_id)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Overwrite a player's job/team, inserting the row if absent.
    pub async fn upsert(
        pool: &SqlitePool,
        player_id: &str,
        job: &str,
        team: &str,
    ) -> Result<(), PlayerStoreError> {
        let now = Utc::now();
        sqlx::query(
            "INSERT INTO player_jobs (player_id, job, team, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT(player_id) DO UPDATE SET
                job = excluded.job,
                team = excluded.team,
                updated_at = excluded.updated_at",
        )
        .bind(player_id)
        .bind(job)
        .bind(team)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// List every selection in insertion (`id`) order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<PlayerSelection>, PlayerStoreError> {
        let rows = sqlx::query_as::<_, (String, String, String)>(
            "SELECT player_id, job, team FROM player_jobs ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(player_id, job, team)| PlayerSelection {
                player_id,
                job,
                team,
            })
            .collect())
    }

    /// Delete every row, returning the number removed.
    ///
    /// Runs in a transaction; any failure rolls the wipe back entirely.
    pub async fn clear_all(pool: &SqlitePool) -> Result<u64, PlayerStoreError> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM player_jobs")
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(result.rows_affected())
    }
}
