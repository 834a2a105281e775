//! Request payloads for player endpoints.
//!
//! Fields are `Option<String>` with serde defaults so an absent field reaches
//! handler validation as `None` instead of failing JSON extraction; missing
//! and empty values then share one rejection path.

use serde::Deserialize;

/// Body of `POST /register_player`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RegisterPlayerRequest {
    #[serde(default)]
    pub player_id: Option<String>,
}

/// Body of `POST /update_player`. All fields required and non-empty.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdatePlayerRequest {
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}
