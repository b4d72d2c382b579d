/// Integration tests for registration and login

mod common;

use arboretum_shared::auth::jwt;
use arboretum_shared::store::Store;
use axum::http::StatusCode;
use common::{TestContext, TEST_SECRET};
use serde_json::json;

#[tokio::test]
async fn test_register_then_login_issues_verifiable_token() {
    let ctx = TestContext::new();

    let (status, body) = ctx
        .post(
            "/create-user",
            json!({ "username": "gardener", "password": "sunflower42" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["user"], json!({ "username": "gardener" }));

    let (status, body) = ctx
        .post("/login", json!({ "username": "gardener", "password": "sunflower42" }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let token = body["token"].as_str().expect("token should be a string");
    let claims = jwt::validate_token(token, TEST_SECRET).expect("token should validate");

    let user = ctx
        .store
        .find_user_by_username("gardener")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.username, "gardener");
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
async fn test_password_is_stored_hashed() {
    let ctx = TestContext::new();
    ctx.post("/create-user", json!({ "username": "fern", "password": "plaintext-pass" }))
        .await;

    let user = ctx.store.find_user_by_username("fern").await.unwrap().unwrap();
    assert_ne!(user.password_hash, "plaintext-pass");
    assert!(user.password_hash.starts_with("$argon2id$"));
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let ctx = TestContext::new();
    let body = json!({ "username": "maple", "password": "syrup-season" });

    let (status, _) = ctx.post("/create-user", body.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, response) = ctx.post("/create-user", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "conflict");

    assert_eq!(ctx.store.count_users().await.unwrap(), 1);
}

#[tokio::test]
async fn test_register_missing_fields() {
    let ctx = TestContext::new();

    let (status, body) = ctx.post("/create-user", json!({ "username": "solo" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["details"][0]["field"], "password");

    let (status, _) = ctx
        .post("/create-user", json!({ "username": "", "password": "long-enough" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(ctx.store.count_users().await.unwrap(), 0);
}

#[tokio::test]
async fn test_register_short_password() {
    let ctx = TestContext::new();

    let (status, body) = ctx
        .post("/create-user", json!({ "username": "tiny", "password": "short" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["message"], "password must be at least 8 characters");
}

#[tokio::test]
async fn test_login_failures_are_distinct() {
    let ctx = TestContext::new();
    ctx.post("/create-user", json!({ "username": "cedar", "password": "evergreen1" }))
        .await;

    let (status, wrong_password) = ctx
        .post("/login", json!({ "username": "cedar", "password": "deciduous1" }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(wrong_password.get("token").is_none());

    let (status, unknown_user) = ctx
        .post("/login", json!({ "username": "birch", "password": "evergreen1" }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(unknown_user.get("token").is_none());

    assert_eq!(wrong_password["message"], "Incorrect password");
    assert_eq!(unknown_user["message"], "User not found");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let ctx = TestContext::new();
    let (status, _) = ctx.post("/login", json!({ "username": "cedar" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let ctx = TestContext::new();
    let (status, body) = ctx
        .post("/create-user", json!({ "username": 42, "password": "long-enough" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}
