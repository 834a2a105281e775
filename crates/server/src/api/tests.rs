//! Endpoint tests driving the full router over a temporary database.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use roster_core::config::StorageConfig;

use crate::db;
use crate::router::build_router;
use crate::state::AppState;

async fn test_app() -> (tempfile::TempDir, Router) {
    let tmp = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        data_dir: tmp.path().to_path_buf(),
    };
    let pool = db::init_db(&config).await.unwrap();
    let state = Arc::new(AppState {
        db: pool,
        roster_size: 6,
    });
    (tmp, build_router(state))
}

async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ── Diagnostics ──────────────────────────────────────────────────

#[tokio::test]
async fn test_connect_ack() {
    let (_tmp, app) = test_app().await;

    let (status, body) = get(&app, "/test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "server connect success!" }));
}

#[tokio::test]
async fn test_posttest_echoes_payload() {
    let (_tmp, app) = test_app().await;

    let payload = json!({ "hello": [1, 2, 3], "nested": { "k": "v" } });
    let (status, body) = post_json(&app, "/posttest", payload.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["received"], payload);
}

#[tokio::test]
async fn test_posttest_echoes_null() {
    let (_tmp, app) = test_app().await;

    let (status, body) = post_json(&app, "/posttest", Value::Null).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success", "received": null }));
}

// ── Registration ─────────────────────────────────────────────────

#[tokio::test]
async fn test_register_rejects_missing_player_id() {
    let (_tmp, app) = test_app().await;

    let (status, body) = post_json(&app, "/register_player", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "status": "fail", "reason": "missing player_id" }));

    let (status, body) = post_json(&app, "/register_player", json!({ "player_id": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["reason"], "missing player_id");
}

#[tokio::test]
async fn test_register_twice_yields_one_row() {
    let (_tmp, app) = test_app().await;

    for _ in 0..2 {
        let (status, body) =
            post_json(&app, "/register_player", json!({ "player_id": "p1" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "success" }));
    }

    let (status, body) = get(&app, "/get_players").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "player_id": "p1", "job": "", "team": "" }])
    );
}

// ── Selection updates ────────────────────────────────────────────

#[tokio::test]
async fn test_update_rejects_incomplete_payloads() {
    let (_tmp, app) = test_app().await;

    let incomplete = [
        json!({}),
        json!({ "player_id": "p1", "job": "Warrior" }),
        json!({ "player_id": "p1", "job": "", "team": "Red" }),
        json!({ "player_id": "", "job": "Warrior", "team": "Red" }),
        json!({ "job": "Warrior", "team": "Red" }),
    ];
    for payload in incomplete {
        let (status, body) = post_json(&app, "/update_player", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "status": "fail", "reason": "missing data" }));
    }
}

#[tokio::test]
async fn test_update_upserts_unregistered_player() {
    let (_tmp, app) = test_app().await;

    let (status, body) = post_json(
        &app,
        "/update_player",
        json!({ "player_id": "p1", "job": "Mage", "team": "Blue" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success" }));

    let (_, body) = get(&app, "/get_players").await;
    assert_eq!(
        body,
        json!([{ "player_id": "p1", "job": "Mage", "team": "Blue" }])
    );
}

#[tokio::test]
async fn test_update_overwrites_existing_selection() {
    let (_tmp, app) = test_app().await;

    post_json(&app, "/register_player", json!({ "player_id": "p1" })).await;
    post_json(
        &app,
        "/update_player",
        json!({ "player_id": "p1", "job": "Warrior", "team": "Red" }),
    )
    .await;
    post_json(
        &app,
        "/update_player",
        json!({ "player_id": "p1", "job": "Healer", "team": "Blue" }),
    )
    .await;

    let (_, body) = get(&app, "/get_players").await;
    assert_eq!(
        body,
        json!([{ "player_id": "p1", "job": "Healer", "team": "Blue" }])
    );
}

// ── Status ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_status_on_empty_table() {
    let (_tmp, app) = test_app().await;

    let (status, body) = get(&app, "/get_status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "selected_count": 0,
            "all_selected": false,
            "duplicated_jobs_by_team": {}
        })
    );
}

#[tokio::test]
async fn test_status_reports_duplicate_jobs_per_team() {
    let (_tmp, app) = test_app().await;

    for (player_id, job, team) in [
        ("a", "Warrior", "Red"),
        ("b", "Warrior", "Red"),
        ("c", "Mage", "Red"),
    ] {
        post_json(&app, "/register_player", json!({ "player_id": player_id })).await;
        post_json(
            &app,
            "/update_player",
            json!({ "player_id": player_id, "job": job, "team": team }),
        )
        .await;
    }

    let (status, body) = get(&app, "/get_status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected_count"], 3);
    assert_eq!(body["all_selected"], false);
    assert_eq!(body["duplicated_jobs_by_team"], json!({ "Red": ["Warrior"] }));

    // The full roster stays visible regardless of conflicts.
    let (_, players) = get(&app, "/get_players").await;
    let ids: Vec<&str> = players
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["player_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_status_counts_unselected_players_under_empty_labels() {
    let (_tmp, app) = test_app().await;

    post_json(&app, "/register_player", json!({ "player_id": "p1" })).await;
    post_json(&app, "/register_player", json!({ "player_id": "p2" })).await;

    let (_, body) = get(&app, "/get_status").await;
    assert_eq!(body["selected_count"], 2);
    assert_eq!(body["duplicated_jobs_by_team"], json!({ "": [""] }));
}

#[tokio::test]
async fn test_status_all_selected_at_exact_roster_size() {
    let (_tmp, app) = test_app().await;

    for i in 0..6 {
        post_json(
            &app,
            "/update_player",
            json!({ "player_id": format!("p{i}"), "job": format!("job{i}"), "team": "Red" }),
        )
        .await;
    }

    let (_, body) = get(&app, "/get_status").await;
    assert_eq!(body["selected_count"], 6);
    assert_eq!(body["all_selected"], true);

    // A seventh player tips the count past the roster size.
    post_json(
        &app,
        "/update_player",
        json!({ "player_id": "p6", "job": "job6", "team": "Red" }),
    )
    .await;

    let (_, body) = get(&app, "/get_status").await;
    assert_eq!(body["selected_count"], 7);
    assert_eq!(body["all_selected"], false);
}

// ── Clear ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_clear_jobs_wipes_table_and_reports_count() {
    let (_tmp, app) = test_app().await;

    for i in 0..4 {
        post_json(
            &app,
            "/register_player",
            json!({ "player_id": format!("p{i}") }),
        )
        .await;
    }

    let (status, body) = post_json(&app, "/clear_jobs", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success", "deleted": 4 }));

    let (_, players) = get(&app, "/get_players").await;
    assert_eq!(players, json!([]));

    let (_, body) = post_json(&app, "/clear_jobs", json!({})).await;
    assert_eq!(body["deleted"], 0);
}

#[tokio::test]
async fn test_clear_jobs_surfaces_storage_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        data_dir: tmp.path().to_path_buf(),
    };
    let pool = db::init_db(&config).await.unwrap();
    let state = Arc::new(AppState {
        db: pool.clone(),
        roster_size: 6,
    });
    let app = build_router(state);

    post_json(&app, "/register_player", json!({ "player_id": "p1" })).await;

    // Drop the table out from under the handler.
    sqlx::query("DROP TABLE player_jobs")
        .execute(&pool)
        .await
        .unwrap();

    let (status, body) = post_json(&app, "/clear_jobs", json!({})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "fail");
    assert!(!body["reason"].as_str().unwrap().is_empty());
}
