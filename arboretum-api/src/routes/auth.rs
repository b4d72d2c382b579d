/// Authentication endpoints
///
/// - `POST /create-user` - Register a new user
/// - `POST /login` - Exchange credentials for an access token

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{required, AppJson},
};
use arboretum_shared::{
    auth::{jwt, password},
    models::user::CreateUser,
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        required(message = "username is required"),
        length(min = 1, message = "username is required")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "password is required"),
        length(min = 8, message = "password must be at least 8 characters")
    )]
    pub password: Option<String>,
}

/// Public part of a user record
#[derive(Debug, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
}

/// Register response
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserSummary,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        required(message = "username is required"),
        length(min = 1, message = "username is required")
    )]
    pub username: Option<String>,

    #[validate(required(message = "password is required"))]
    pub password: Option<String>,
}

/// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,

    /// Access token, valid for one hour
    pub token: String,
}

/// Registers a new user
///
/// ```text
/// POST /create-user
/// { "username": "gardener", "password": "at-least-8-chars" }
/// ```
///
/// ```json
/// { "message": "User created successfully", "user": { "username": "gardener" } }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Missing fields, short password, or username taken
/// - `500 Internal Server Error`: Store or hashing failure
pub async fn register(
    State(state): State<AppState>,
    AppJson(req): AppJson<RegisterRequest>,
) -> ApiResult<Json<RegisterResponse>> {
    req.validate()?;
    let username = required(req.username, "username")?;
    let password = required(req.password, "password")?;

    // Pre-check gives a clean error; the unique index catches races
    if state.store.find_user_by_username(&username).await?.is_some() {
        return Err(ApiError::Conflict("Username already taken".to_string()));
    }

    let password_hash = password::hash_password(&password)?;

    let user = state
        .store
        .create_user(CreateUser {
            username,
            password_hash,
        })
        .await?;

    tracing::info!(user_id = %user.id, username = %user.username, "User registered");

    Ok(Json(RegisterResponse {
        message: "User created successfully".to_string(),
        user: UserSummary {
            username: user.username,
        },
    }))
}

/// Authenticates a user and returns an access token
///
/// ```text
/// POST /login
/// { "username": "gardener", "password": "at-least-8-chars" }
/// ```
///
/// ```json
/// { "message": "Login successful", "token": "eyJ..." }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Missing fields
/// - `401 Unauthorized`: "User not found" or "Incorrect password"
/// - `500 Internal Server Error`: Store or token failure
pub async fn login(
    State(state): State<AppState>,
    AppJson(req): AppJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    req.validate()?;
    let username = required(req.username, "username")?;
    let password = required(req.password, "password")?;

    let user = state
        .store
        .find_user_by_username(&username)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

    if !password::verify_password(&password, &user.password_hash)? {
        return Err(ApiError::Unauthorized("Incorrect password".to_string()));
    }

    let claims = jwt::Claims::new(user.id, &user.username);
    let token = jwt::create_token(&claims, state.jwt_secret())?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}
