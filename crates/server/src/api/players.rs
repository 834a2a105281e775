//! Player registration and selection endpoints.
//!
//! SRP: boundary validation of player payloads, delegation to [`PlayerStore`].

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use roster_core::PlayerSelection;

use crate::players::{PlayerStore, RegisterPlayerRequest, UpdatePlayerRequest};
use crate::state::AppState;

use super::{bad_request, store_error, success, ApiResult, FailResponse, StatusResponse};

/// Register a player
///
/// Creates an empty selection row on first sight; registering the same
/// `player_id` again is a no-op.
#[utoipa::path(
    post,
    path = "/register_player",
    tag = "Players",
    request_body = RegisterPlayerRequest,
    responses(
        (status = 200, description = "Player registered (idempotent)", body = StatusResponse),
        (status = 400, description = "player_id missing or empty", body = FailResponse)
    )
)]
pub async fn register_player(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterPlayerRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let player_id = req
        .player_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| bad_request("missing player_id"))?;

    PlayerStore::register(&state.db, player_id)
        .await
        .map_err(store_error)?;

    Ok(success())
}

/// Set a player's job and team
///
/// Overwrites the existing selection, or inserts the row if the player was
/// never registered. All three fields are required and non-empty.
#[utoipa::path(
    post,
    path = "/update_player",
    tag = "Players",
    request_body = UpdatePlayerRequest,
    responses(
        (status = 200, description = "Selection stored", body = StatusResponse),
        (status = 400, description = "Any field missing or empty", body = FailResponse)
    )
)]
pub async fn update_player(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdatePlayerRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let (player_id, job, team) = match (
        req.player_id.as_deref().filter(|s| !s.is_empty()),
        req.job.as_deref().filter(|s| !s.is_empty()),
        req.team.as_deref().filter(|s| !s.is_empty()),
    ) {
        (Some(player_id), Some(job), Some(team)) => (player_id, job, team),
        _ => return Err(bad_request("missing data")),
    };

    PlayerStore::upsert(&state.db, player_id, job, team)
        .await
        .map_err(store_error)?;

    Ok(success())
}

/// List all players
///
/// Returns every row as `{player_id, job, team}` in insertion order.
#[utoipa::path(
    get,
    path = "/get_players",
    tag = "Players",
    responses(
        (status = 200, description = "All player selections", body = Vec<Object>),
        (status = 500, description = "Storage failure", body = FailResponse)
    )
)]
pub async fn get_players(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<PlayerSelection>>> {
    let players = PlayerStore::list(&state.db).await.map_err(store_error)?;
    Ok(Json(players))
}
