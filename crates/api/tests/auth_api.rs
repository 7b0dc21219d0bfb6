//! HTTP-level integration tests for signup, login, refresh, and logout.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth};
use sqlx::PgPool;

/// Log in via the API and return the JSON response containing
/// `access_token`, `refresh_token`, and `user` info.
async fn login(app: axum::Router, email: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

/// Successful signup returns 201 with the public user fields and no hash.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_success(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Alice",
        "email": "alice@example.com",
        "password": "a-long-enough-password",
    });
    let response = post_json(app, "/api/v1/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Alice");
    assert_eq!(json["data"]["email"], "alice@example.com");
    assert!(
        json["data"].get("password_hash").is_none(),
        "hash must never be serialized"
    );
}

/// Registering an email twice yields 409 Conflict, not a second row.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_duplicate_email_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "name": "Alice",
        "email": "alice@example.com",
        "password": "a-long-enough-password",
    });
    let response = post_json(app, "/api/v1/auth/signup", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1, "the duplicate signup must not insert a row");
}

/// A malformed email is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_invalid_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Alice",
        "email": "not-an-email",
        "password": "a-long-enough-password",
    });
    let response = post_json(app, "/api/v1/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A too-short password is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_short_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Alice",
        "email": "alice@example.com",
        "password": "short",
    });
    let response = post_json(app, "/api/v1/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns both tokens and the user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (user, password) = common::create_user(&pool, "Alice", "alice@example.com").await;
    let app = common::build_test_app(pool);

    let json = login(app, "alice@example.com", &password).await;

    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert!(json["expires_in"].is_number());
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["email"], "alice@example.com");
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    common::create_user(&pool, "Alice", "alice@example.com").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "alice@example.com", "password": "incorrect" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with an unknown email returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "ghost@example.com", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Refresh / logout
// ---------------------------------------------------------------------------

/// A refresh token works once: refreshing rotates it and the old one dies.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_rotates_token(pool: PgPool) {
    let (_user, password) = common::create_user(&pool, "Alice", "alice@example.com").await;
    let login_json = login(
        common::build_test_app(pool.clone()),
        "alice@example.com",
        &password,
    )
    .await;
    let refresh_token = login_json["refresh_token"].as_str().unwrap().to_string();

    // First refresh succeeds and yields a new pair.
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/refresh",
        body.clone(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_ne!(json["refresh_token"].as_str().unwrap(), refresh_token);

    // The presented token was revoked by the rotation.
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// After logout the refresh token is unusable.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_session(pool: PgPool) {
    let (user, password) = common::create_user(&pool, "Alice", "alice@example.com").await;
    let login_json = login(
        common::build_test_app(pool.clone()),
        "alice@example.com",
        &password,
    )
    .await;
    let refresh_token = login_json["refresh_token"].as_str().unwrap().to_string();

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let token = common::auth_token(user.id);
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/logout",
        body.clone(),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = post_json(common::build_test_app(pool), "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Bearer extraction
// ---------------------------------------------------------------------------

/// A protected endpoint without a token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_protected_route_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/users/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A garbage token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_garbage_token_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/users/me", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
