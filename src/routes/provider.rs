// SPDX-License-Identifier: MIT

//! Provider routes: patient roster with compliance, per-patient detail.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Reminder, User, UserRole, WellnessGoal};
use crate::services::compliance::{classify, ComplianceStatus};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Extension, Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

/// How many recent goals the detail view returns.
const RECENT_GOALS_LIMIT: usize = 7;

/// Provider routes (auth + PROVIDER role required).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/provider/patients", get(get_patients))
        .route("/api/provider/patients/{id}", get(get_patient_detail))
}

// ─── Patient Roster ──────────────────────────────────────────

/// One row of the provider's patient list.
#[derive(Serialize)]
pub struct PatientSummary {
    pub id: String,
    pub name: String,
    /// Date of the latest logged goal, null when the patient has none
    pub last_goal_date: Option<String>,
    pub last_steps: u32,
    pub last_sleep_hours: f64,
    pub compliance_status: ComplianceStatus,
}

/// List all patients with compliance computed live from their latest goal.
async fn get_patients(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<PatientSummary>>> {
    user.require_role(UserRole::Provider)?;

    let today = Utc::now().date_naive();
    let summaries: Vec<PatientSummary> = state
        .db
        .list_patients()
        .into_iter()
        .map(|patient| {
            let latest = state.db.latest_goal(&patient.id);
            let compliance_status = classify(latest.as_ref(), today);
            PatientSummary {
                id: patient.id,
                name: patient.name,
                last_goal_date: latest.as_ref().map(|g| g.date.clone()),
                last_steps: latest.as_ref().map(|g| g.steps).unwrap_or(0),
                last_sleep_hours: latest.as_ref().map(|g| g.sleep_hours).unwrap_or(0.0),
                compliance_status,
            }
        })
        .collect();

    tracing::debug!(provider_id = %user.user_id, patients = summaries.len(), "Roster fetched");

    Ok(Json(summaries))
}

// ─── Patient Detail ──────────────────────────────────────────

#[derive(Serialize)]
pub struct PatientDetail {
    pub profile: User,
    /// Up to seven most recent goals, newest first
    pub recent_goals: Vec<WellnessGoal>,
    /// All reminders, completed ones included
    pub reminders: Vec<Reminder>,
}

/// Profile, recent goals and full reminder history for one patient.
async fn get_patient_detail(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(patient_id): Path<String>,
) -> Result<Json<PatientDetail>> {
    user.require_role(UserRole::Provider)?;

    let profile = state
        .db
        .get_user(&patient_id)
        .filter(|u| u.is_patient())
        .ok_or_else(|| AppError::NotFound(format!("Patient {} not found", patient_id)))?;

    let recent_goals = state.db.recent_goals(&patient_id, RECENT_GOALS_LIMIT);
    let reminders = state.db.reminders_for_patient(&patient_id, true);

    Ok(Json(PatientDetail {
        profile,
        recent_goals,
        reminders,
    }))
}
