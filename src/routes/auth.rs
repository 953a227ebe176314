// SPDX-License-Identifier: MIT

//! Registration, login and session routes.

use crate::error::{AppError, Result};
use crate::middleware::auth::{issue_tokens, AuthTokens, AuthUser};
use crate::models::{User, UserRole};
use crate::services::password::{hash_password, verify_password};
use crate::time_utils::now_rfc3339;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

/// Public auth routes (no token required).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
}

/// Auth routes behind the bearer-token middleware.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/auth/me", get(get_me))
}

// ─── Registration ────────────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6, max = 72))]
    pub password: String,
    pub role: UserRole,
    pub consent: bool,
}

/// Create a new account. Does not log the user in.
///
/// Consent is checked before email uniqueness, so a duplicate email with
/// consent withheld still reports the consent failure.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>)> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if !payload.consent {
        return Err(AppError::ConsentRequired);
    }

    let now = now_rfc3339();
    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        email: payload.email,
        name: payload.name,
        role: payload.role,
        age: None,
        gender: None,
        allergies: None,
        medications: None,
        consent: true,
        created_at: now.clone(),
        updated_at: now,
        password_hash: hash_password(&payload.password)?,
    };

    // The store claims the email atomically; losing the claim means
    // another account (or a concurrent registration) already holds it.
    if !state.db.insert_new_user(user.clone()) {
        return Err(AppError::DuplicateEmail);
    }

    tracing::info!(user_id = %user.id, role = ?user.role, "Account registered");

    Ok((StatusCode::CREATED, Json(user)))
}

// ─── Login ───────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub tokens: AuthTokens,
    pub user: User,
}

/// Validate credentials and issue the session token pair.
///
/// Unknown email and wrong password produce the same error so the
/// endpoint cannot be used to probe for accounts.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let user = state
        .db
        .find_user_by_email(&payload.email)
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&payload.password, &user.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    let tokens = issue_tokens(&user.id, user.role, &state.config)?;

    tracing::info!(user_id = %user.id, "Login successful");

    Ok(Json(LoginResponse { tokens, user }))
}

// ─── Session ─────────────────────────────────────────────────

/// Resolve the token subject to the current user.
///
/// A valid token whose user no longer exists reports not-found; the
/// client treats that as an expired session and clears it silently.
async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<User>> {
    let profile = state
        .db
        .get_user(&user.user_id)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.user_id)))?;

    Ok(Json(profile))
}

#[derive(Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Logout acknowledgment. The session lives client-side, so there is
/// nothing to invalidate here; the endpoint is idempotent.
async fn logout() -> Json<LogoutResponse> {
    Json(LogoutResponse { success: true })
}
