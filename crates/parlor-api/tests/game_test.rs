//! Integration tests for the game lifecycle routes.

mod common;

use axum::http::StatusCode;
use parlor_core::token::TokenSigner;
use parlor_session::GameStatus;
use uuid::Uuid;

use common::{TEST_SECRET, build_test_app, post_json, post_json_with_bearer};

#[tokio::test]
async fn test_create_game_returns_id_and_token_and_registers_session() {
    let test = build_test_app();

    let (status, body) = post_json(
        test.app.clone(),
        "/api/v1/create-game",
        &serde_json::json!({ "host_email": "a@x.com" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let game_id = Uuid::parse_str(body["game_id"].as_str().unwrap()).unwrap();
    assert!(!body["token"].as_str().unwrap().is_empty());

    let game = test.state.registry.snapshot(game_id).unwrap();
    assert_eq!(game.host, "a@x.com");
    assert_eq!(game.status, GameStatus::Created);
    assert_eq!(game.round, 1);
}

#[tokio::test]
async fn test_create_game_without_host_email_is_400() {
    let test = build_test_app();

    let (status, body) = post_json(test.app, "/api/v1/create-game", &serde_json::json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_advance_game_by_host_reaches_round_two() {
    let test = build_test_app();
    let (_, created) = post_json(
        test.app.clone(),
        "/api/v1/create-game",
        &serde_json::json!({ "host_email": "a@x.com" }),
    )
    .await;
    let game_id = created["game_id"].as_str().unwrap().to_string();
    let token = created["token"].as_str().unwrap().to_string();

    let (status, body) = post_json_with_bearer(
        test.app,
        "/api/v1/advance-game",
        &serde_json::json!({ "game_id": game_id }),
        &token,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "game advanced to round");
    assert_eq!(body["round"], 2);
}

#[tokio::test]
async fn test_advance_game_by_non_host_is_403_and_round_unchanged() {
    let test = build_test_app();
    let (_, created) = post_json(
        test.app.clone(),
        "/api/v1/create-game",
        &serde_json::json!({ "host_email": "a@x.com" }),
    )
    .await;
    let game_id = created["game_id"].as_str().unwrap().to_string();
    let token = created["token"].as_str().unwrap().to_string();

    post_json_with_bearer(
        test.app.clone(),
        "/api/v1/advance-game",
        &serde_json::json!({ "game_id": game_id.clone() }),
        &token,
    )
    .await;

    // A validly signed token for the wrong identity must be rejected.
    let intruder_token = TokenSigner::new(TEST_SECRET).issue("b@y.com");
    let (status, body) = post_json_with_bearer(
        test.app.clone(),
        "/api/v1/advance-game",
        &serde_json::json!({ "game_id": game_id.clone() }),
        &intruder_token,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Unauthorized or Game not found");

    let game_id = Uuid::parse_str(&game_id).unwrap();
    assert_eq!(test.state.registry.snapshot(game_id).unwrap().round, 2);
}

#[tokio::test]
async fn test_advance_game_without_bearer_is_403() {
    let test = build_test_app();
    let (_, created) = post_json(
        test.app.clone(),
        "/api/v1/create-game",
        &serde_json::json!({ "host_email": "a@x.com" }),
    )
    .await;
    let game_id = created["game_id"].as_str().unwrap().to_string();

    let (status, body) = post_json(
        test.app,
        "/api/v1/advance-game",
        &serde_json::json!({ "game_id": game_id }),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Unauthorized or Game not found");
}

#[tokio::test]
async fn test_advance_game_unknown_game_is_403() {
    let test = build_test_app();
    let token = TokenSigner::new(TEST_SECRET).issue("a@x.com");

    let (status, body) = post_json_with_bearer(
        test.app,
        "/api/v1/advance-game",
        &serde_json::json!({ "game_id": Uuid::new_v4().to_string() }),
        &token,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Unauthorized or Game not found");
}

#[tokio::test]
async fn test_advance_game_malformed_game_id_is_403() {
    let test = build_test_app();
    let token = TokenSigner::new(TEST_SECRET).issue("a@x.com");

    let (status, body) = post_json_with_bearer(
        test.app,
        "/api/v1/advance-game",
        &serde_json::json!({ "game_id": "not-a-uuid" }),
        &token,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Unauthorized or Game not found");
}

#[tokio::test]
async fn test_advance_game_without_game_id_is_400() {
    let test = build_test_app();
    let token = TokenSigner::new(TEST_SECRET).issue("a@x.com");

    let (status, body) = post_json_with_bearer(
        test.app,
        "/api/v1/advance-game",
        &serde_json::json!({}),
        &token,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}
