// SPDX-License-Identifier: MIT

//! Compliance classification for provider dashboards.
//!
//! A patient's status is derived from their most recent wellness goal.
//! It is computed on demand, never persisted.

use crate::models::WellnessGoal;
use crate::time_utils::parse_iso_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How many days a patient may go without logging before they are
/// considered non-compliant.
const STALE_GOAL_DAYS: i64 = 7;

const GOOD_STEPS: u32 = 8_000;
const GOOD_SLEEP_HOURS: f64 = 7.0;
const CRITICAL_STEPS: u32 = 3_000;
const CRITICAL_SLEEP_HOURS: f64 = 5.0;

/// Provider-facing adherence classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    Good,
    Warning,
    Critical,
}

/// Classify a patient from their latest goal, as of `today`.
///
/// No goal at all, a goal older than [`STALE_GOAL_DAYS`], or values below
/// the critical floor all classify as critical. Meeting both step and
/// sleep targets is good; everything in between is a warning.
pub fn classify(latest: Option<&WellnessGoal>, today: NaiveDate) -> ComplianceStatus {
    let Some(goal) = latest else {
        return ComplianceStatus::Critical;
    };

    let Some(goal_date) = parse_iso_date(&goal.date) else {
        return ComplianceStatus::Critical;
    };

    if (today - goal_date).num_days() > STALE_GOAL_DAYS {
        return ComplianceStatus::Critical;
    }

    if goal.steps < CRITICAL_STEPS || goal.sleep_hours < CRITICAL_SLEEP_HOURS {
        ComplianceStatus::Critical
    } else if goal.steps >= GOOD_STEPS && goal.sleep_hours >= GOOD_SLEEP_HOURS {
        ComplianceStatus::Good
    } else {
        ComplianceStatus::Warning
    }
}
