//! HTTP router construction.
//!
//! Assembles all Axum routes, middleware, and OpenAPI docs into a single `Router`.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::api;
use crate::state::AppState;

/// Build the complete application router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/test", get(api::test))
        .route("/posttest", post(api::posttest))
        .route("/register_player", post(api::register_player))
        .route("/update_player", post(api::update_player))
        .route("/get_players", get(api::get_players))
        .route("/get_status", get(api::get_status))
        .route("/clear_jobs", post(api::clear_jobs))
        .layer(CorsLayer::permissive())
        .with_state(state)
        .merge(Scalar::with_url("/docs", api::doc::ApiDoc::openapi()))
}
