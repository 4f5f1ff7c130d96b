//! HTTP-level tests for token issuance and bearer authentication.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, TEST_SECRET};
use pvz_api::auth::jwt::{validate_token, JwtConfig};
use pvz_core::roles::Role;
use serde_json::json;

fn jwt() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry_mins: 60,
    }
}

// ---------------------------------------------------------------------------
// Dummy login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dummy_login_issues_token_with_requested_role() {
    let app = common::build_test_app();

    let response = post_json(app, "/dummyLogin", json!({ "role": "moderator" })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let claims = validate_token(json["token"].as_str().unwrap(), &jwt()).unwrap();
    assert_eq!(claims.role, Role::Moderator);
}

#[tokio::test]
async fn dummy_login_unknown_role_is_400() {
    let app = common::build_test_app();

    let response = post_json(app, "/dummyLogin", json!({ "role": "admin" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn dummy_login_mints_distinct_identities() {
    let app = common::build_test_app();

    let a = common::token_for(app.clone(), "employee").await;
    let b = common::token_for(app, "employee").await;

    let a = validate_token(&a, &jwt()).unwrap();
    let b = validate_token(&b, &jwt()).unwrap();
    assert_ne!(a.sub, b.sub);
}

// ---------------------------------------------------------------------------
// Register + login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn register_then_login_round_trip() {
    let app = common::build_test_app();

    let body = json!({ "email": "clerk@example.com", "password": "secret1", "role": "employee" });
    let response = post_json(app.clone(), "/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let user = body_json(response).await;
    assert_eq!(user["email"], "clerk@example.com");
    assert_eq!(user["role"], "employee");
    assert!(user.get("password_hash").is_none());
    assert!(user.get("passwordHash").is_none());

    let body = json!({ "email": "clerk@example.com", "password": "secret1" });
    let response = post_json(app, "/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let claims = validate_token(json["token"].as_str().unwrap(), &jwt()).unwrap();
    assert_eq!(claims.role, Role::Employee);
    assert_eq!(claims.sub.to_string(), user["id"].as_str().unwrap());
}

#[tokio::test]
async fn register_rejects_invalid_email_and_short_password() {
    let app = common::build_test_app();

    let body = json!({ "email": "not-an-email", "password": "secret1", "role": "employee" });
    let response = post_json(app.clone(), "/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json!({ "email": "ok@example.com", "password": "12345", "role": "employee" });
    let response = post_json(app, "/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn register_duplicate_email_is_conflict() {
    let app = common::build_test_app();
    let body = json!({ "email": "dup@example.com", "password": "secret1", "role": "moderator" });

    let first = post_json(app.clone(), "/register", body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(app, "/register", body).await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(second).await["code"], "CONFLICT");
}

#[tokio::test]
async fn login_with_wrong_password_or_unknown_email_is_401() {
    let app = common::build_test_app();
    let body = json!({ "email": "a@example.com", "password": "secret1", "role": "employee" });
    post_json(app.clone(), "/register", body).await;

    let wrong = json!({ "email": "a@example.com", "password": "secret2" });
    let response = post_json(app.clone(), "/login", wrong).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let ghost = json!({ "email": "ghost@example.com", "password": "secret1" });
    let response = post_json(app, "/login", ghost).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Bearer extraction
// ---------------------------------------------------------------------------

#[tokio::test]
async fn protected_route_without_token_is_401() {
    let app = common::build_test_app();

    let response = get(app, "/pvz").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn protected_route_with_garbage_token_is_401() {
    let app = common::build_test_app();

    let response = get_auth(app, "/pvz", "not.a.jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_route_with_wrong_scheme_or_empty_token_is_401() {
    let app = common::build_test_app();
    let token = common::token_for(app.clone(), "moderator").await;

    let request = axum::http::Request::builder()
        .uri("/pvz")
        .header("authorization", format!("Basic {token}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.clone(), request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app.clone(), "/pvz", "").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app, "/pvz", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}
