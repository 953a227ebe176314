// SPDX-License-Identifier: MIT

//! Demo dataset for local development and tests.
//!
//! Three accounts (two patients, one provider), all with the password
//! `demo123`, plus recent goals and preventive-care reminders. Goal dates
//! are relative to today so the dashboard and compliance views stay
//! meaningful regardless of when the server starts.

use crate::db::MemoryStore;
use crate::models::{Reminder, User, UserRole, WellnessGoal};
use crate::services::password::hash_password;
use crate::time_utils::now_rfc3339;
use chrono::{Days, Utc};

pub const DEMO_PASSWORD: &str = "demo123";

pub const DEMO_PATIENT_ID: &str = "1";
pub const DEMO_PROVIDER_ID: &str = "2";
pub const DEMO_PATIENT_2_ID: &str = "3";

/// Load the demo dataset into a store.
pub fn seed_demo_data(store: &MemoryStore) -> anyhow::Result<()> {
    let password_hash = hash_password(DEMO_PASSWORD)?;

    let users = [
        User {
            id: DEMO_PATIENT_ID.to_string(),
            email: "patient@demo.com".to_string(),
            name: "Sarah Johnson".to_string(),
            role: UserRole::Patient,
            age: Some(32),
            gender: Some("Female".to_string()),
            allergies: Some("Penicillin".to_string()),
            medications: Some("None".to_string()),
            consent: true,
            created_at: "2024-01-15T10:00:00Z".to_string(),
            updated_at: "2024-01-15T10:00:00Z".to_string(),
            password_hash: password_hash.clone(),
        },
        User {
            id: DEMO_PROVIDER_ID.to_string(),
            email: "provider@demo.com".to_string(),
            name: "Dr. Michael Chen".to_string(),
            role: UserRole::Provider,
            age: None,
            gender: None,
            allergies: None,
            medications: None,
            consent: true,
            created_at: "2024-01-10T08:00:00Z".to_string(),
            updated_at: "2024-01-10T08:00:00Z".to_string(),
            password_hash: password_hash.clone(),
        },
        User {
            id: DEMO_PATIENT_2_ID.to_string(),
            email: "john@demo.com".to_string(),
            name: "John Smith".to_string(),
            role: UserRole::Patient,
            age: Some(45),
            gender: Some("Male".to_string()),
            allergies: Some("None".to_string()),
            medications: Some("Metformin".to_string()),
            consent: true,
            created_at: "2024-02-01T10:00:00Z".to_string(),
            updated_at: "2024-02-01T10:00:00Z".to_string(),
            password_hash,
        },
    ];

    for user in users {
        store.upsert_user(user);
    }

    seed_goals(store);
    seed_reminders(store);

    tracing::info!("Demo dataset loaded");
    Ok(())
}

fn days_from_today(offset: i64) -> String {
    let today = Utc::now().date_naive();
    let date = if offset >= 0 {
        today.checked_add_days(Days::new(offset as u64))
    } else {
        today.checked_sub_days(Days::new((-offset) as u64))
    };
    date.unwrap_or(today).to_string()
}

fn seed_goals(store: &MemoryStore) {
    let goals = [
        // Sarah: tracking consistently, on target today
        (
            "g1",
            DEMO_PATIENT_ID,
            0,
            8_500,
            7.5,
            8,
            Some(45),
        ),
        ("g2", DEMO_PATIENT_ID, -1, 10_200, 8.0, 10, Some(60)),
        ("g3", DEMO_PATIENT_ID, -2, 6_000, 6.0, 6, Some(30)),
        // John: below target
        ("g4", DEMO_PATIENT_2_ID, 0, 5_000, 6.0, 5, Some(20)),
    ];

    for (id, patient_id, offset, steps, sleep_hours, water_glasses, active_minutes) in goals {
        store.upsert_goal(WellnessGoal {
            id: id.to_string(),
            patient_id: patient_id.to_string(),
            date: days_from_today(offset),
            steps,
            sleep_hours,
            water_glasses,
            active_minutes,
            created_at: now_rfc3339(),
        });
    }
}

fn seed_reminders(store: &MemoryStore) {
    let reminders = [
        (
            "r1",
            DEMO_PATIENT_ID,
            "Annual Physical Exam",
            "Schedule your yearly check-up with Dr. Chen",
            7,
            false,
        ),
        (
            "r2",
            DEMO_PATIENT_ID,
            "Flu Vaccination",
            "Get your seasonal flu shot",
            14,
            false,
        ),
        (
            "r3",
            DEMO_PATIENT_ID,
            "Blood Pressure Check",
            "Monthly blood pressure monitoring",
            3,
            false,
        ),
        (
            "r4",
            DEMO_PATIENT_2_ID,
            "Diabetes Screening",
            "Quarterly HbA1c test",
            10,
            false,
        ),
        // Completed history, visible only on the provider detail view
        (
            "r5",
            DEMO_PATIENT_ID,
            "Dental Cleaning",
            "Six-month dental cleaning appointment",
            -30,
            true,
        ),
    ];

    for (id, patient_id, title, description, due_offset, is_completed) in reminders {
        store.insert_reminder(Reminder {
            id: id.to_string(),
            patient_id: patient_id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            due_date: days_from_today(due_offset),
            is_completed,
            created_at: now_rfc3339(),
        });
    }
}
