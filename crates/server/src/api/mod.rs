//! Domain-focused API endpoint modules.
//!
//! Each sub-module owns a single responsibility area.
//! Shared wire types and error helpers live here in mod.rs.

mod diagnostics;
pub mod doc;
mod players;
mod status;

#[cfg(test)]
mod tests;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::players::PlayerStoreError;

// ── Shared types ─────────────────────────────────────────────────

/// Body of a plain success acknowledgement.
#[derive(Serialize, utoipa::ToSchema)]
pub struct StatusResponse {
    #[schema(value_type = String)]
    pub status: &'static str,
}

/// Body of a failed request; `status` is always `"fail"`.
#[derive(Serialize, utoipa::ToSchema)]
pub struct FailResponse {
    #[schema(value_type = String)]
    pub status: &'static str,
    pub reason: String,
}

// ── Helpers ──────────────────────────────────────────────────────

pub(crate) type ApiResult<T> = Result<T, (StatusCode, Json<FailResponse>)>;

pub(crate) fn success() -> Json<StatusResponse> {
    Json(StatusResponse { status: "success" })
}

pub(crate) fn bad_request(reason: impl Into<String>) -> (StatusCode, Json<FailResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(FailResponse {
            status: "fail",
            reason: reason.into(),
        }),
    )
}

/// Map a store error to the wire shape via its status code.
pub(crate) fn store_error(e: PlayerStoreError) -> (StatusCode, Json<FailResponse>) {
    let status =
        StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(FailResponse {
            status: "fail",
            reason: e.to_string(),
        }),
    )
}

// ── Re-exports ───────────────────────────────────────────────────
// Preserves flat `api::foo` import paths used by router registration.

pub use diagnostics::{posttest, test};
pub use players::{get_players, register_player, update_player};
pub use status::{clear_jobs, get_status};
