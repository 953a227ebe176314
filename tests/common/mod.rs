// SPDX-License-Identifier: MIT

use axum::body::Body;
use axum::http::{header, Request, Response};
use std::sync::Arc;
use wellness_portal::config::Config;
use wellness_portal::db::{seed::seed_demo_data, MemoryStore};
use wellness_portal::middleware::auth::create_jwt;
use wellness_portal::models::UserRole;
use wellness_portal::routes::create_router;
use wellness_portal::services::ContentLibrary;
use wellness_portal::AppState;

/// Create a test app over a fresh seeded store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = MemoryStore::new();
    seed_demo_data(&db).expect("demo seed");

    let state = Arc::new(AppState {
        config,
        db,
        content: ContentLibrary::default(),
    });

    (create_router(state.clone()), state)
}

/// Create a valid JWT for the given user against the test signing key.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: &str, role: UserRole, signing_key: &[u8]) -> String {
    create_jwt(user_id, role, signing_key, 3600).expect("test jwt")
}

/// GET request with a bearer token.
#[allow(dead_code)]
pub fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// JSON request (POST/PUT), optionally authenticated.
#[allow(dead_code)]
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: &serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Collect a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}
