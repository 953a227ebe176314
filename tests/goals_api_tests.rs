// SPDX-License-Identifier: MIT

//! Goal logging, history and dashboard tests.

use axum::http::StatusCode;
use chrono::{Days, Utc};
use serde_json::json;
use tower::ServiceExt;
use wellness_portal::models::UserRole;

mod common;

fn today() -> String {
    Utc::now().date_naive().to_string()
}

fn days_ago(n: u64) -> String {
    Utc::now()
        .date_naive()
        .checked_sub_days(Days::new(n))
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_dashboard_shows_today_goal_and_open_reminders() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("1", UserRole::Patient, &state.config.jwt_signing_key);

    let response = app
        .oneshot(common::get_with_token("/api/patient/dashboard", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;

    // Seeded today-goal for Sarah.
    assert_eq!(body["today_goals"]["steps"], 8500);
    assert_eq!(body["today_goals"]["sleep_hours"], 7.5);
    assert_eq!(body["today_goals"]["date"], today());

    // Open reminders only; the seeded completed one is excluded.
    let reminders = body["reminders"].as_array().unwrap();
    assert_eq!(reminders.len(), 3);
    assert!(reminders.iter().all(|r| r["is_completed"] == false));

    // Tip comes from the fixed pool.
    let tip = body["health_tip"].as_str().unwrap();
    assert!(state.content.is_known_tip(tip));
}

#[tokio::test]
async fn test_dashboard_without_today_goal_is_null() {
    let (app, state) = common::create_test_app();
    // John ("3") has a seeded goal today; use a freshly registered patient.
    let token =
        common::create_test_jwt("fresh", UserRole::Patient, &state.config.jwt_signing_key);

    let response = app
        .oneshot(common::get_with_token("/api/patient/dashboard", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert!(body["today_goals"].is_null());
}

#[tokio::test]
async fn test_create_goal_then_list() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("3", UserRole::Patient, &state.config.jwt_signing_key);

    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/api/patient/goals",
            Some(&token),
            &json!({"steps": 7000, "sleep_hours": 7.0, "water_glasses": 6, "active_minutes": 25}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["date"], today());
    assert_eq!(body["steps"], 7000);

    let response = app
        .oneshot(common::get_with_token("/api/patient/goals", &token))
        .await
        .unwrap();
    let goals = common::body_json(response).await;
    let goals = goals.as_array().unwrap();

    // Still one record for today (the seed had one): upsert, not append.
    let today = today();
    let today_count = goals.iter().filter(|g| g["date"] == today.as_str()).count();
    assert_eq!(today_count, 1);
    assert_eq!(goals[0]["steps"], 7000);
}

#[tokio::test]
async fn test_same_day_resubmission_keeps_record_identity() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("3", UserRole::Patient, &state.config.jwt_signing_key);

    let first = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/api/patient/goals",
            Some(&token),
            &json!({"steps": 4000, "sleep_hours": 6.0, "water_glasses": 4}),
        ))
        .await
        .unwrap();
    let first = common::body_json(first).await;

    let second = app
        .oneshot(common::json_request(
            "POST",
            "/api/patient/goals",
            Some(&token),
            &json!({"steps": 12000, "sleep_hours": 8.0, "water_glasses": 9}),
        ))
        .await
        .unwrap();
    let second = common::body_json(second).await;

    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["created_at"], first["created_at"]);
    assert_eq!(second["steps"], 12000);
    assert_eq!(state.db.goals_for_patient("3").len(), 1);
}

#[tokio::test]
async fn test_goal_validation_rejects_out_of_range() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("3", UserRole::Patient, &state.config.jwt_signing_key);

    // 30 hours of sleep in a day.
    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/api/patient/goals",
            Some(&token),
            &json!({"steps": 5000, "sleep_hours": 30.0, "water_glasses": 5}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/patient/goals",
            Some(&token),
            &json!({"steps": 5000, "sleep_hours": -1.0, "water_glasses": 5}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_history_filters_range_and_owner() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("1", UserRole::Patient, &state.config.jwt_signing_key);

    // Sarah has goals today, yesterday and two days ago.
    let uri = format!(
        "/api/patient/goals/history?from={}&to={}",
        days_ago(2),
        today()
    );
    let response = app
        .oneshot(common::get_with_token(&uri, &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let goals = common::body_json(response).await;
    let goals = goals.as_array().unwrap().to_vec();

    assert_eq!(goals.len(), 3);
    // Descending by date, inclusive endpoints.
    assert_eq!(goals[0]["date"], today());
    assert_eq!(goals[2]["date"], days_ago(2));
    // Only Sarah's records; John also logged today.
    assert!(goals.iter().all(|g| g["patient_id"] == "1"));
}

#[tokio::test]
async fn test_history_rejects_malformed_and_reversed_ranges() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("1", UserRole::Patient, &state.config.jwt_signing_key);

    let response = app
        .clone()
        .oneshot(common::get_with_token(
            "/api/patient/goals/history?from=yesterday&to=today",
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Non-zero-padded dates break lexicographic filtering, so they are
    // rejected up front rather than silently matching nothing.
    let response = app
        .clone()
        .oneshot(common::get_with_token(
            "/api/patient/goals/history?from=2024-2-1&to=2024-12-31",
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let uri = format!(
        "/api/patient/goals/history?from={}&to={}",
        today(),
        days_ago(2)
    );
    let response = app
        .oneshot(common::get_with_token(&uri, &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_profile_merge_patch() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("1", UserRole::Patient, &state.config.jwt_signing_key);

    let response = app
        .clone()
        .oneshot(common::json_request(
            "PUT",
            "/api/patient/profile",
            Some(&token),
            &json!({"medications": "Vitamin D"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;

    // Patched field changed; everything else kept.
    assert_eq!(body["medications"], "Vitamin D");
    assert_eq!(body["name"], "Sarah Johnson");
    assert_eq!(body["age"], 32);
    assert_ne!(body["updated_at"], "2024-01-15T10:00:00Z");

    let response = app
        .oneshot(common::get_with_token("/api/patient/profile", &token))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["medications"], "Vitamin D");
}

#[tokio::test]
async fn test_patient_routes_reject_provider_role() {
    let (app, state) = common::create_test_app();
    let token =
        common::create_test_jwt("2", UserRole::Provider, &state.config.jwt_signing_key);

    let response = app
        .oneshot(common::get_with_token("/api/patient/dashboard", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
