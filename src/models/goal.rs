// SPDX-License-Identifier: MIT

//! Daily wellness goal model.

use serde::{Deserialize, Serialize};

/// One day's logged wellness values for a patient.
///
/// `(patient_id, date)` is the natural key: saving again for the same
/// date replaces the values of the existing record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellnessGoal {
    pub id: String,
    pub patient_id: String,
    /// Canonical `YYYY-MM-DD`
    pub date: String,
    pub steps: u32,
    pub sleep_hours: f64,
    pub water_glasses: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_minutes: Option<u32>,
    /// When the record was first created (RFC3339); stable across
    /// same-day re-saves
    pub created_at: String,
}
