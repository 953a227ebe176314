// SPDX-License-Identifier: MIT

//! Preventive-care reminder model.

use serde::{Deserialize, Serialize};

/// A scheduled preventive-care task for a patient.
///
/// Reminders are created out of band and read-only through the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub patient_id: String,
    pub title: String,
    pub description: String,
    /// Canonical `YYYY-MM-DD`
    pub due_date: String,
    pub is_completed: bool,
    pub created_at: String,
}
