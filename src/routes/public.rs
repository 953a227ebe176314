// SPDX-License-Identifier: MIT

//! Public content routes (no authentication).

use crate::models::HealthInfo;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/public/health-info", get(get_health_info))
        .route("/api/public/privacy-policy", get(get_privacy_policy))
}

/// The category-tagged article catalog.
async fn get_health_info(State(state): State<Arc<AppState>>) -> Json<Vec<HealthInfo>> {
    Json(state.content.health_info().to_vec())
}

/// The privacy policy document (markdown, rendered client-side).
async fn get_privacy_policy(State(state): State<Arc<AppState>>) -> Json<String> {
    Json(state.content.privacy_policy().to_string())
}
