// SPDX-License-Identifier: MIT

//! In-memory store with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profiles + login lookup)
//! - Wellness goals (keyed by patient + date)
//! - Reminders (read-only preventive-care tasks)
//!
//! The store is a cloneable handle over shared maps, injected into the
//! application state. Tests construct a fresh instance per run instead of
//! sharing module-level collections. A future database-backed store keeps
//! the same operation surface.

use crate::models::{Reminder, User, WellnessGoal};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory database handle.
#[derive(Clone, Default)]
pub struct MemoryStore {
    users: Arc<DashMap<String, User>>,
    /// Email -> user id index; registration claims the email through
    /// this map's entry lock so the uniqueness invariant holds under
    /// concurrent registrations.
    emails: Arc<DashMap<String, String>>,
    /// Keyed by `patient_id:date` so the one-goal-per-day invariant is
    /// structural, and concurrent same-day writes serialize on the key.
    goals: Arc<DashMap<String, WellnessGoal>>,
    reminders: Arc<DashMap<String, Reminder>>,
}

fn goal_key(patient_id: &str, date: &str) -> String {
    format!("{}:{}", patient_id, date)
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by id.
    pub fn get_user(&self, id: &str) -> Option<User> {
        self.users.get(id).map(|u| u.clone())
    }

    /// Look up a user by email (the login key).
    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .iter()
            .find(|u| u.email == email)
            .map(|u| u.clone())
    }

    /// Insert a user only if no account holds their email yet.
    ///
    /// The email is claimed through the index entry before the user
    /// record is written, so two concurrent registrations of the same
    /// address cannot both succeed. Returns false when the email is
    /// already taken.
    pub fn insert_new_user(&self, user: User) -> bool {
        match self.emails.entry(user.email.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(user.id.clone());
                self.users.insert(user.id.clone(), user);
                true
            }
        }
    }

    /// Insert or replace a user record (seed and profile updates).
    pub fn upsert_user(&self, user: User) {
        self.emails.insert(user.email.clone(), user.id.clone());
        self.users.insert(user.id.clone(), user);
    }

    /// All users with the PATIENT role, sorted by name for stable listings.
    pub fn list_patients(&self) -> Vec<User> {
        let mut patients: Vec<User> = self
            .users
            .iter()
            .filter(|u| u.is_patient())
            .map(|u| u.clone())
            .collect();
        patients.sort_by(|a, b| a.name.cmp(&b.name));
        patients
    }

    // ─── Goal Operations ─────────────────────────────────────────

    /// Insert-or-replace a goal by its `(patient_id, date)` natural key.
    ///
    /// When a record for that day already exists, its `id` and
    /// `created_at` are kept and only the logged values change, so record
    /// identity survives same-day re-saves. Returns the stored record.
    pub fn upsert_goal(&self, candidate: WellnessGoal) -> WellnessGoal {
        let key = goal_key(&candidate.patient_id, &candidate.date);
        let mut entry = self.goals.entry(key).or_insert_with(|| candidate.clone());
        entry.steps = candidate.steps;
        entry.sleep_hours = candidate.sleep_hours;
        entry.water_glasses = candidate.water_glasses;
        entry.active_minutes = candidate.active_minutes;
        entry.clone()
    }

    /// Get the goal logged for one specific day, if any.
    pub fn get_goal(&self, patient_id: &str, date: &str) -> Option<WellnessGoal> {
        self.goals.get(&goal_key(patient_id, date)).map(|g| g.clone())
    }

    /// All goals for a patient, most recent date first.
    pub fn goals_for_patient(&self, patient_id: &str) -> Vec<WellnessGoal> {
        let mut goals: Vec<WellnessGoal> = self
            .goals
            .iter()
            .filter(|g| g.patient_id == patient_id)
            .map(|g| g.clone())
            .collect();
        goals.sort_by(|a, b| b.date.cmp(&a.date));
        goals
    }

    /// Goals within the inclusive range `[from, to]`, most recent first.
    ///
    /// Dates are canonical `YYYY-MM-DD`, so lexicographic comparison is
    /// chronological.
    pub fn goals_in_range(&self, patient_id: &str, from: &str, to: &str) -> Vec<WellnessGoal> {
        let mut goals: Vec<WellnessGoal> = self
            .goals
            .iter()
            .filter(|g| {
                g.patient_id == patient_id && g.date.as_str() >= from && g.date.as_str() <= to
            })
            .map(|g| g.clone())
            .collect();
        goals.sort_by(|a, b| b.date.cmp(&a.date));
        goals
    }

    /// The `limit` most recent goals for a patient.
    pub fn recent_goals(&self, patient_id: &str, limit: usize) -> Vec<WellnessGoal> {
        let mut goals = self.goals_for_patient(patient_id);
        goals.truncate(limit);
        goals
    }

    /// The single most recent goal, if the patient has logged any.
    pub fn latest_goal(&self, patient_id: &str) -> Option<WellnessGoal> {
        self.goals_for_patient(patient_id).into_iter().next()
    }

    // ─── Reminder Operations ─────────────────────────────────────

    /// Insert a reminder (seed/admin path; the API never writes these).
    pub fn insert_reminder(&self, reminder: Reminder) {
        self.reminders.insert(reminder.id.clone(), reminder);
    }

    /// Reminders for a patient, soonest due date first.
    ///
    /// `include_completed` distinguishes the patient dashboard (open tasks
    /// only) from the provider detail view (full history).
    pub fn reminders_for_patient(&self, patient_id: &str, include_completed: bool) -> Vec<Reminder> {
        let mut reminders: Vec<Reminder> = self
            .reminders
            .iter()
            .filter(|r| r.patient_id == patient_id && (include_completed || !r.is_completed))
            .map(|r| r.clone())
            .collect();
        reminders.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        reminders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    fn goal(patient_id: &str, date: &str, steps: u32) -> WellnessGoal {
        WellnessGoal {
            id: format!("g-{}-{}", patient_id, date),
            patient_id: patient_id.to_string(),
            date: date.to_string(),
            steps,
            sleep_hours: 7.0,
            water_glasses: 8,
            active_minutes: None,
            created_at: "2024-06-01T08:00:00Z".to_string(),
        }
    }

    fn user(id: &str, email: &str, role: UserRole) -> User {
        User {
            id: id.to_string(),
            email: email.to_string(),
            name: format!("User {}", id),
            role,
            age: None,
            gender: None,
            allergies: None,
            medications: None,
            consent: true,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
            password_hash: String::new(),
        }
    }

    #[test]
    fn test_upsert_goal_same_day_keeps_identity() {
        let store = MemoryStore::new();

        let first = store.upsert_goal(goal("p1", "2024-06-01", 1000));
        let mut second = goal("p1", "2024-06-01", 9000);
        second.id = "different-id".to_string();
        second.created_at = "2024-06-01T20:00:00Z".to_string();
        let stored = store.upsert_goal(second);

        // Identity and creation time survive; values are replaced.
        assert_eq!(stored.id, first.id);
        assert_eq!(stored.created_at, first.created_at);
        assert_eq!(stored.steps, 9000);
        assert_eq!(store.goals_for_patient("p1").len(), 1);
    }

    #[test]
    fn test_goals_in_range_is_inclusive_and_scoped() {
        let store = MemoryStore::new();
        store.upsert_goal(goal("p1", "2024-06-01", 1));
        store.upsert_goal(goal("p1", "2024-06-02", 2));
        store.upsert_goal(goal("p1", "2024-06-03", 3));
        store.upsert_goal(goal("p2", "2024-06-02", 4));

        let goals = store.goals_in_range("p1", "2024-06-01", "2024-06-02");
        assert_eq!(goals.len(), 2);
        // Descending by date, both endpoints included, other patients excluded.
        assert_eq!(goals[0].date, "2024-06-02");
        assert_eq!(goals[1].date, "2024-06-01");
        assert!(goals.iter().all(|g| g.patient_id == "p1"));
    }

    #[test]
    fn test_recent_goals_caps_and_orders() {
        let store = MemoryStore::new();
        for day in 1..=10 {
            store.upsert_goal(goal("p1", &format!("2024-06-{:02}", day), day));
        }

        let recent = store.recent_goals("p1", 7);
        assert_eq!(recent.len(), 7);
        assert_eq!(recent[0].date, "2024-06-10");
        assert_eq!(recent[6].date, "2024-06-04");
    }

    #[test]
    fn test_insert_new_user_rejects_taken_email() {
        let store = MemoryStore::new();

        assert!(store.insert_new_user(user("1", "a@demo.com", UserRole::Patient)));
        assert!(!store.insert_new_user(user("2", "a@demo.com", UserRole::Patient)));
        assert!(store.get_user("2").is_none());
    }

    #[test]
    fn test_concurrent_registrations_claim_email_once() {
        let store = MemoryStore::new();

        let handles: Vec<_> = (0..8)
            .map(|n| {
                let store = store.clone();
                std::thread::spawn(move || {
                    store.insert_new_user(user(
                        &format!("u{}", n),
                        "race@demo.com",
                        UserRole::Patient,
                    ))
                })
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();

        assert_eq!(wins, 1);
        assert_eq!(store.users.len(), 1);
    }

    #[test]
    fn test_list_patients_excludes_providers() {
        let store = MemoryStore::new();
        store.upsert_user(user("1", "b@demo.com", UserRole::Patient));
        store.upsert_user(user("2", "a@demo.com", UserRole::Provider));
        store.upsert_user(user("3", "c@demo.com", UserRole::Patient));

        let patients = store.list_patients();
        assert_eq!(patients.len(), 2);
        assert!(patients.iter().all(|p| p.is_patient()));
    }
}
