//! Handlers for token issuance (`/dummyLogin`, `/register`, `/login`).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pvz_core::error::{CoreError, StoreError};
use pvz_core::roles::Role;
use pvz_core::types::{new_id, EntityId};
use pvz_core::user::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /dummyLogin`.
#[derive(Debug, Deserialize)]
pub struct DummyLoginRequest {
    pub role: String,
}

/// Request body for `POST /register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
    pub role: String,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Public account info returned by registration. Never carries the hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: EntityId,
    pub email: String,
    pub role: Role,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /dummyLogin
///
/// Issue a token for a throwaway identity holding the requested role. No
/// account is created.
pub async fn dummy_login(
    State(state): State<AppState>,
    AppJson(input): AppJson<DummyLoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let role = parse_role(&input.role)?;
    let token = issue_token(&state, new_id(), role)?;
    Ok(Json(TokenResponse { token }))
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    AppJson(input): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    input.validate()?;
    let role = parse_role(&input.role)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let user = User::new(input.email, password_hash, role);

    match state.users.create(&user).await {
        Ok(()) => {}
        Err(StoreError::Conflict { .. }) => {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "user with email {} already exists",
                user.email
            ))));
        }
        Err(e) => return Err(e.into()),
    }

    tracing::info!(user_id = %user.id, role = %user.role, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            id: user.id,
            email: user.email,
            role: user.role,
        }),
    ))
}

/// POST /login
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let user = state
        .users
        .find_by_email(&input.email)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid());
    }

    let token = issue_token(&state, user.id, user.role)?;
    Ok(Json(TokenResponse { token }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_role(raw: &str) -> AppResult<Role> {
    raw.parse::<Role>()
        .map_err(|e| AppError::Core(CoreError::Validation(e)))
}

fn issue_token(state: &AppState, user_id: EntityId, role: Role) -> AppResult<String> {
    generate_access_token(user_id, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))
}
