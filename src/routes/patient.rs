// SPDX-License-Identifier: MIT

//! Patient routes: dashboard, goal logging, history, profile.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Reminder, User, UserRole, WellnessGoal};
use crate::time_utils::{now_rfc3339, parse_iso_date, today_iso_date};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

/// Patient routes (auth + PATIENT role required).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/patient/dashboard", get(get_dashboard))
        .route("/api/patient/goals", get(get_goals).post(create_goal))
        .route("/api/patient/goals/history", get(get_goals_history))
        .route(
            "/api/patient/profile",
            get(get_profile).put(update_profile),
        )
}

// ─── Dashboard ───────────────────────────────────────────────

#[derive(Serialize)]
pub struct DashboardResponse {
    /// Today's goal, or null if nothing has been logged yet
    pub today_goals: Option<WellnessGoal>,
    /// Open (incomplete) reminders only
    pub reminders: Vec<Reminder>,
    pub health_tip: String,
}

/// Today's goal, open reminders and a random health tip.
async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<DashboardResponse>> {
    user.require_role(UserRole::Patient)?;

    let today = today_iso_date();
    let today_goals = state.db.get_goal(&user.user_id, &today);
    let reminders = state.db.reminders_for_patient(&user.user_id, false);
    let health_tip = state.content.random_tip(&mut rand::thread_rng()).to_string();

    tracing::debug!(
        user_id = %user.user_id,
        has_today_goal = today_goals.is_some(),
        reminders = reminders.len(),
        "Dashboard fetched"
    );

    Ok(Json(DashboardResponse {
        today_goals,
        reminders,
        health_tip,
    }))
}

// ─── Goals ───────────────────────────────────────────────────

/// All of the caller's goals, most recent first.
async fn get_goals(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<WellnessGoal>>> {
    user.require_role(UserRole::Patient)?;
    Ok(Json(state.db.goals_for_patient(&user.user_id)))
}

#[derive(Deserialize)]
struct HistoryQuery {
    from: String,
    to: String,
}

/// Goals within an inclusive date range, most recent first.
async fn get_goals_history(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<Vec<WellnessGoal>>> {
    user.require_role(UserRole::Patient)?;

    if parse_iso_date(&params.from).is_none() || parse_iso_date(&params.to).is_none() {
        return Err(AppError::BadRequest(
            "'from' and 'to' must be YYYY-MM-DD dates".to_string(),
        ));
    }
    if params.from > params.to {
        return Err(AppError::BadRequest(
            "'from' must not be after 'to'".to_string(),
        ));
    }

    Ok(Json(
        state.db.goals_in_range(&user.user_id, &params.from, &params.to),
    ))
}

#[derive(Deserialize, Validate)]
pub struct GoalForm {
    #[validate(range(max = 200_000))]
    pub steps: u32,
    #[validate(range(min = 0.0, max = 24.0))]
    pub sleep_hours: f64,
    #[validate(range(max = 100))]
    pub water_glasses: u32,
    #[validate(range(max = 1_440))]
    pub active_minutes: Option<u32>,
}

/// Log today's goal. Saving twice on the same day replaces the values
/// of the existing record; its id and creation time are preserved.
async fn create_goal(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<GoalForm>,
) -> Result<Json<WellnessGoal>> {
    user.require_role(UserRole::Patient)?;

    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let goal = state.db.upsert_goal(WellnessGoal {
        id: uuid::Uuid::new_v4().to_string(),
        patient_id: user.user_id.clone(),
        date: today_iso_date(),
        steps: payload.steps,
        sleep_hours: payload.sleep_hours,
        water_glasses: payload.water_glasses,
        active_minutes: payload.active_minutes,
        created_at: now_rfc3339(),
    });

    tracing::info!(user_id = %user.user_id, date = %goal.date, "Goal saved");

    Ok(Json(goal))
}

// ─── Profile ─────────────────────────────────────────────────

/// The caller's own profile.
async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<User>> {
    user.require_role(UserRole::Patient)?;

    let profile = state
        .db
        .get_user(&user.user_id)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.user_id)))?;

    Ok(Json(profile))
}

#[derive(Deserialize, Validate)]
pub struct ProfileUpdate {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(range(max = 150))]
    pub age: Option<u32>,
    #[validate(length(max = 50))]
    pub gender: Option<String>,
    #[validate(length(max = 500))]
    pub allergies: Option<String>,
    #[validate(length(max = 500))]
    pub medications: Option<String>,
}

/// Merge-patch the caller's profile: only provided fields change.
async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<ProfileUpdate>,
) -> Result<Json<User>> {
    user.require_role(UserRole::Patient)?;

    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let mut profile = state
        .db
        .get_user(&user.user_id)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.user_id)))?;

    if let Some(name) = payload.name {
        profile.name = name;
    }
    if let Some(age) = payload.age {
        profile.age = Some(age);
    }
    if let Some(gender) = payload.gender {
        profile.gender = Some(gender);
    }
    if let Some(allergies) = payload.allergies {
        profile.allergies = Some(allergies);
    }
    if let Some(medications) = payload.medications {
        profile.medications = Some(medications);
    }
    profile.updated_at = now_rfc3339();

    state.db.upsert_user(profile.clone());

    tracing::info!(user_id = %user.user_id, "Profile updated");

    Ok(Json(profile))
}
