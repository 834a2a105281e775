use sqlx::SqlitePool;

pub struct AppState {
    pub db: SqlitePool,
    /// Expected roster size; the status endpoint reports `all_selected`
    /// when the row count hits exactly this number.
    pub roster_size: u32,
}
