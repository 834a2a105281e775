//! Selection progress and bulk-reset endpoints.
//!
//! SRP: roster-wide aggregation and the transactional table wipe.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::info;

use roster_core::{selection_status, SelectionStatus};

use crate::players::PlayerStore;
use crate::state::AppState;

use super::{store_error, ApiResult, FailResponse};

// ── Response types ─────────────────────────────────────────────

#[derive(Serialize, utoipa::ToSchema)]
pub struct ClearResponse {
    #[schema(value_type = String)]
    pub status: &'static str,
    pub deleted: u64,
}

// ── Handlers ───────────────────────────────────────────────────

/// Selection progress
///
/// Counts jobs per team over all rows, lists the jobs picked more than once
/// within each team, and reports whether the roster is complete.
#[utoipa::path(
    get,
    path = "/get_status",
    tag = "Status",
    responses(
        (status = 200, description = "Counts, completeness flag, and per-team duplicate jobs", body = Object),
        (status = 500, description = "Storage failure", body = FailResponse)
    )
)]
pub async fn get_status(State(state): State<Arc<AppState>>) -> ApiResult<Json<SelectionStatus>> {
    let players = PlayerStore::list(&state.db).await.map_err(store_error)?;
    Ok(Json(selection_status(&players, state.roster_size)))
}

/// Clear all players
///
/// Deletes every row in one transaction and returns how many were removed.
#[utoipa::path(
    post,
    path = "/clear_jobs",
    tag = "Status",
    responses(
        (status = 200, description = "Table emptied", body = ClearResponse),
        (status = 500, description = "Wipe failed and was rolled back", body = FailResponse)
    )
)]
pub async fn clear_jobs(State(state): State<Arc<AppState>>) -> ApiResult<Json<ClearResponse>> {
    let deleted = PlayerStore::clear_all(&state.db)
        .await
        .map_err(store_error)?;
    info!("Cleared {} player rows", deleted);
    Ok(Json(ClearResponse {
        status: "success",
        deleted,
    }))
}
