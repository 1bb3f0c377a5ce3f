// SPDX-License-Identifier: MIT

//! Admin account and login tests.

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_seeded_super_admin_can_log_in() {
    let (app, _state, _dir) = common::create_test_app().await;

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/login",
            json!({"username": "Admin", "password": "password123"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["role"], "super");
    assert_eq!(body["username"], "admin");
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let (app, _state, _dir) = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/api/login",
            json!({"username": "admin", "password": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(common::json_request("POST", "/api/login", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_admin_validation() {
    let (app, _state, _dir) = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/api/admins",
            json!({"username": "ab", "password": "good-pass"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/api/admins",
            json!({"username": "coach", "password": "abc"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Case-insensitive duplicate of the seeded super admin
    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/admins",
            json!({"username": "ADMIN", "password": "good-pass"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_created_admin_has_admin_role_and_no_password_in_responses() {
    let (app, _state, _dir) = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/api/admins",
            json!({"username": "coach", "password": "sideline"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = common::body_json(response).await;
    assert_eq!(created["role"], "admin");
    assert!(created.get("password").is_none());

    let response = app
        .oneshot(common::empty_request("GET", "/api/admins"))
        .await
        .unwrap();
    let admins = common::body_json(response).await;
    let admins = admins.as_array().unwrap();
    assert_eq!(admins.len(), 2);
    // Super admin sorts first
    assert_eq!(admins[0]["role"], "super");
    assert!(admins.iter().all(|a| a.get("password").is_none()));
}

#[tokio::test]
async fn test_update_admin_checks_duplicates_and_password_length() {
    let (app, _state, _dir) = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/api/admins",
            json!({"username": "coach", "password": "sideline"}),
        ))
        .await
        .unwrap();
    let coach = common::body_json(response).await;
    let coach_id = coach["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(common::json_request(
            "PUT",
            &format!("/api/admins/{}", coach_id),
            json!({"username": "Admin"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(common::json_request(
            "PUT",
            &format!("/api/admins/{}", coach_id),
            json!({"password": "abc"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(common::json_request(
            "PUT",
            &format!("/api/admins/{}", coach_id),
            json!({"username": "manager"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = common::body_json(response).await;
    assert_eq!(updated["username"], "manager");
}

#[tokio::test]
async fn test_super_admin_cannot_be_deleted() {
    let (app, _state, _dir) = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(common::empty_request("GET", "/api/admins"))
        .await
        .unwrap();
    let admins = common::body_json(response).await;
    let super_id = admins[0]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(common::empty_request(
            "DELETE",
            &format!("/api/admins/{}", super_id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(common::empty_request("DELETE", "/api/admins/unknown"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
