// SPDX-License-Identifier: MIT

//! Bearer-token (JWT) authentication middleware and token issuance.

use crate::error::AppError;
use crate::models::UserRole;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Role granted at login
    pub role: UserRole,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
}

/// Authenticated principal extracted from the bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
    pub role: UserRole,
}

impl AuthUser {
    /// Gate a role-scoped route. Authenticated callers with the wrong
    /// role get 403, not 401.
    pub fn require_role(&self, role: UserRole) -> Result<(), AppError> {
        if self.role == role {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}

/// The access/refresh token pair returned at login.
///
/// The client persists both; the server is stateless. The refresh token
/// only differs in lifetime (no refresh endpoint in current scope).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access: String,
    pub refresh: String,
}

/// Middleware that requires a valid bearer JWT.
///
/// Failures surface as [`AppError`] so the 401 carries the same JSON
/// error envelope as every other endpoint.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(h) if h.starts_with("Bearer ") => &h[7..],
        _ => return Err(AppError::Unauthorized),
    };

    let key = DecodingKey::from_secret(&state.config.jwt_signing_key);
    let validation = Validation::new(Algorithm::HS256);

    let token_data =
        decode::<Claims>(token, &key, &validation).map_err(|_| AppError::InvalidToken)?;

    let auth_user = AuthUser {
        user_id: token_data.claims.sub,
        role: token_data.claims.role,
    };
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Create a signed session JWT for a user.
pub fn create_jwt(
    user_id: &str,
    role: UserRole,
    signing_key: &[u8],
    ttl_secs: u64,
) -> anyhow::Result<String> {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        role,
        iat: now,
        exp: now + ttl_secs as usize,
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )?)
}

/// Issue the access/refresh pair for a freshly authenticated user.
pub fn issue_tokens(
    user_id: &str,
    role: UserRole,
    config: &crate::config::Config,
) -> anyhow::Result<AuthTokens> {
    Ok(AuthTokens {
        access: create_jwt(
            user_id,
            role,
            &config.jwt_signing_key,
            config.access_token_ttl_secs,
        )?,
        refresh: create_jwt(
            user_id,
            role,
            &config.jwt_signing_key,
            config.refresh_token_ttl_secs,
        )?,
    })
}
