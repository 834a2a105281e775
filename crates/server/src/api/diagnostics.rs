//! Connectivity test endpoints.
//!
//! SRP: fixed-payload reachability check and JSON echo for client debugging.

use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

// ── Response types ─────────────────────────────────────────────

#[derive(Serialize, utoipa::ToSchema)]
pub struct TestResponse {
    #[schema(value_type = String)]
    pub message: &'static str,
}

// ── Handlers ───────────────────────────────────────────────────

/// Connectivity check
///
/// Returns a fixed acknowledgement so clients can verify the server is up.
#[utoipa::path(
    get,
    path = "/test",
    tag = "Diagnostics",
    responses(
        (status = 200, description = "Server reachable", body = TestResponse)
    )
)]
pub async fn test() -> Json<TestResponse> {
    Json(TestResponse {
        message: "server connect success!",
    })
}

/// Echo a JSON payload
///
/// Logs the payload and returns it verbatim with a success marker. Any JSON
/// shape is accepted, including `null`.
#[utoipa::path(
    post,
    path = "/posttest",
    tag = "Diagnostics",
    request_body = Object,
    responses(
        (status = 200, description = "Payload echoed back", body = Object)
    )
)]
pub async fn posttest(Json(payload): Json<Value>) -> Json<Value> {
    info!("posttest payload: {}", payload);
    Json(json!({ "status": "success", "received": payload }))
}
