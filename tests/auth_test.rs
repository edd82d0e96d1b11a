mod common;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::{Factory, TestApp};

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let email = format!("login-{}@example.com", Uuid::new_v4());
    factory.create_user_with_email(&email, "password123").await;

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({
            "email": email,
            "password": "password123"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["email"].as_str().unwrap(), email);
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let email = format!("login-{}@example.com", Uuid::new_v4());
    factory.create_user_with_email(&email, "password123").await;

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({
            "email": email,
            "password": "not-the-password"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({
            "email": format!("nobody-{}@example.com", Uuid::new_v4()),
            "password": "password123"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_inactive_user() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let email = format!("inactive-{}@example.com", Uuid::new_v4());
    factory.create_inactive_user(&email, "password123").await;

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({
            "email": email,
            "password": "password123"
        }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_me_returns_current_user() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let auth = factory.create_user().await;

    let response = app
        .server
        .get("/api/auth/me")
        .add_header("Authorization", auth.auth_header())
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["id"].as_i64().unwrap(), auth.user_id as i64);
    assert_eq!(body["email"].as_str().unwrap(), auth.email);
}

#[tokio::test]
async fn test_me_without_token() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/auth/me").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_garbage_token() {
    let app = TestApp::new().await;

    let response = app
        .server
        .get("/api/auth/me")
        .add_header("Authorization", "Bearer not-a-jwt")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_deactivated_user_token_stops_working() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let admin = factory.create_admin().await;
    let auth = factory.create_user().await;

    // Token works while active
    let response = app
        .server
        .get("/api/auth/me")
        .add_header("Authorization", auth.auth_header())
        .await;
    response.assert_status(StatusCode::OK);

    // Deactivate the user
    let response = app
        .server
        .put(&format!("/api/admin/users/{}", auth.user_id))
        .add_header("Authorization", admin.auth_header())
        .json(&json!({ "is_active": false }))
        .await;
    response.assert_status(StatusCode::OK);

    // Same token is now rejected: the principal is re-resolved per request
    let response = app
        .server
        .get("/api/auth/me")
        .add_header("Authorization", auth.auth_header())
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}
