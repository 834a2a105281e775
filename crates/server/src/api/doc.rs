//! OpenAPI documentation aggregator.
//!
//! Collects all `#[utoipa::path]`-annotated handlers and `ToSchema`-derived
//! types into a single OpenAPI 3.1 spec, served via Scalar UI at `/docs`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "roster API",
        version = "0.1.0",
        description = "Player job/team selection tracking for multiplayer sessions.",
    ),
    tags(
        (name = "Diagnostics", description = "Connectivity checks and JSON echo"),
        (name = "Players", description = "Player registration and job/team selection"),
        (name = "Status", description = "Selection progress and bulk reset"),
    ),
    paths(
        // Diagnostics
        crate::api::diagnostics::test,
        crate::api::diagnostics::posttest,
        // Players
        crate::api::players::register_player,
        crate::api::players::update_player,
        crate::api::players::get_players,
        // Status
        crate::api::status::get_status,
        crate::api::status::clear_jobs,
    ),
    components(schemas(
        // Shared
        crate::api::StatusResponse,
        crate::api::FailResponse,
        // Diagnostics
        crate::api::diagnostics::TestResponse,
        // Players
        crate::players::RegisterPlayerRequest,
        crate::players::UpdatePlayerRequest,
        // Status
        crate::api::status::ClearResponse,
    ))
)]
pub struct ApiDoc;
