//! Login and token lifecycle, end to end.

mod common;

use axum::http::StatusCode;
use chrono::Utc;

use common::TestApp;
use coreadmin_auth::jwt::JwtDecoder;
use coreadmin_core::types::LevelId;

#[tokio::test]
async fn login_returns_a_token_envelope() {
    let app = TestApp::new();
    app.seed_admin("admin@drossan.com", "correct-horse");

    let response = app
        .request(
            "POST",
            "/api/v1/login",
            Some(serde_json::json!({
                "email": "admin@drossan.com",
                "password": "correct-horse",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], 200);
    assert!(!response.body["data"]["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn wrong_password_and_unknown_email_are_indistinguishable() {
    let app = TestApp::new();
    app.seed_admin("admin@drossan.com", "correct-horse");

    let wrong_password = app
        .request(
            "POST",
            "/api/v1/login",
            Some(serde_json::json!({
                "email": "admin@drossan.com",
                "password": "battery-staple",
            })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/v1/login",
            Some(serde_json::json!({
                "email": "nobody@drossan.com",
                "password": "correct-horse",
            })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body["error"], "invalid email or password");
    assert_eq!(unknown_email.body, wrong_password.body);
}

#[tokio::test]
async fn issued_token_decodes_to_the_login_identity() {
    let app = TestApp::new();
    let level_id = app.seed_admin("admin@drossan.com", "correct-horse");
    let token = app.login("admin@drossan.com", "correct-horse").await;

    let decoder = JwtDecoder::new(&app.config.auth);
    let claims = decoder.decode(&token).expect("decode");

    assert_eq!(claims.email, "admin@drossan.com");
    assert_eq!(claims.level_id, level_id);

    // Expiry ~72h out, a few seconds of tolerance.
    let expected = Utc::now().timestamp() + 72 * 3600;
    assert!((claims.exp - expected).abs() < 10);
}

#[tokio::test]
async fn protected_routes_require_a_bearer_token() {
    let app = TestApp::new();
    app.seed_admin("admin@drossan.com", "correct-horse");

    let missing = app.request("GET", "/api/v1/user", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let garbage = app
        .request("GET", "/api/v1/user", None, Some("not-a-jwt"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
    assert_eq!(garbage.body["error"], "invalid token");
}

#[tokio::test]
async fn token_signed_with_another_key_is_rejected() {
    let app = TestApp::new();
    app.seed_admin("admin@drossan.com", "correct-horse");

    let other = TestApp::new();
    let foreign = {
        let mut config = other.config.auth.clone();
        config.jwt_secret = "some-other-secret".to_string();
        coreadmin_auth::jwt::JwtEncoder::new(&config)
            .issue(coreadmin_core::types::UserId(1), "a@b.com", LevelId(1))
            .expect("issue")
    };

    let response = app.request("GET", "/api/v1/user", None, Some(&foreign)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn repeated_failures_lock_the_client_out() {
    let app = TestApp::new();
    app.seed_admin("admin@drossan.com", "correct-horse");
    let bad_login = serde_json::json!({
        "email": "admin@drossan.com",
        "password": "wrong",
    });

    for _ in 0..app.config.auth.max_failed_attempts {
        let response = app
            .request("POST", "/api/v1/login", Some(bad_login.clone()), None)
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }

    // Locked out now, even with the correct password.
    let response = app
        .request(
            "POST",
            "/api/v1/login",
            Some(serde_json::json!({
                "email": "admin@drossan.com",
                "password": "correct-horse",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn a_successful_login_resets_the_failure_count() {
    let app = TestApp::new();
    app.seed_admin("admin@drossan.com", "correct-horse");

    for _ in 0..app.config.auth.max_failed_attempts - 1 {
        app.request(
            "POST",
            "/api/v1/login",
            Some(serde_json::json!({
                "email": "admin@drossan.com",
                "password": "wrong",
            })),
            None,
        )
        .await;
    }

    app.login("admin@drossan.com", "correct-horse").await;

    // The slate is clean: more failures are tolerated again.
    let response = app
        .request(
            "POST",
            "/api/v1/login",
            Some(serde_json::json!({
                "email": "admin@drossan.com",
                "password": "wrong",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
