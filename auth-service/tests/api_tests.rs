mod common;

use auth::JwtConfig;
use auth::TokenVerifier;
use common::TestApp;
use common::TEST_JWT_SECRET;
use reqwest::StatusCode;
use serde_json::json;
use sqlx::Row;

#[tokio::test]
async fn test_service_info() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "service": "auth" }));
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app.register("bob", "pw123").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["username"], "bob");
    assert!(body["id"].is_i64());
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_stores_bcrypt_hash() {
    let app = TestApp::spawn().await;

    app.register("bob", "pw123").await;

    let row = sqlx::query("SELECT password_hash FROM users WHERE username = ?")
        .bind("bob")
        .fetch_one(&app.pool)
        .await
        .expect("User row missing");
    let hash: String = row.get("password_hash");

    assert!(hash.starts_with("$2"));
    assert!(!hash.contains("pw123"));
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::spawn().await;

    let first = app.register("bob", "pw123").await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.register("bob", "another").await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = second.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "error": "username taken" }));
}

#[tokio::test]
async fn test_usernames_are_case_sensitive() {
    let app = TestApp::spawn().await;

    assert_eq!(app.register("bob", "pw123").await.status(), StatusCode::OK);
    assert_eq!(app.register("Bob", "pw123").await.status(), StatusCode::OK);

    let response = app.login("BOB", "pw123").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_interleaved_duplicate_registrations_keep_one_user() {
    let app = TestApp::spawn().await;

    let (first, second) = tokio::join!(app.register("carol", "pw1"), app.register("carol", "pw2"));

    let mut statuses = [first.status(), second.status()];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::OK, StatusCode::BAD_REQUEST]);

    let row = sqlx::query("SELECT COUNT(*) AS count FROM users WHERE username = ?")
        .bind("carol")
        .fetch_one(&app.pool)
        .await
        .expect("Count query failed");
    let count: i64 = row.get("count");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_register_empty_username() {
    let app = TestApp::spawn().await;

    let response = app.register("", "pw123").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].as_str().unwrap().contains("username"));
}

#[tokio::test]
async fn test_register_empty_password() {
    let app = TestApp::spawn().await;

    let response = app.register("bob", "").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_register_missing_field() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/register")
        .json(&json!({ "username": "bob" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;
    app.register("bob", "pw123").await;

    let response = app.login("bob", "pw123").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["token_type"], "bearer");

    let token = body["access_token"].as_str().expect("Token missing");
    let verifier = TokenVerifier::from_config(&JwtConfig::new(TEST_JWT_SECRET)).unwrap();
    assert_eq!(verifier.verify_token(token), Ok("bob".to_string()));
}

#[tokio::test]
async fn test_login_long_password() {
    let app = TestApp::spawn().await;
    let password = "correct horse battery staple ".repeat(4);
    assert!(password.len() > 72);

    app.register("dave", &password).await;

    assert_eq!(app.login("dave", &password).await.status(), StatusCode::OK);

    let mut truncated = password[..72].to_string();
    truncated.push_str("something else entirely");
    assert_eq!(
        app.login("dave", &truncated).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;
    app.register("bob", "pw123").await;

    let response = app.login("bob", "wrong").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "error": "invalid credentials" }));
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = TestApp::spawn().await;

    let response = app.login("nobody", "pw123").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "error": "invalid credentials" }));
}

#[tokio::test]
async fn test_login_empty_username() {
    let app = TestApp::spawn().await;

    let response = app.login("", "pw123").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
