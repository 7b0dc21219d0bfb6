//! HTTP-level integration tests for the notification log.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_auth};
use sqlx::PgPool;

use bookswap_db::repositories::NotificationRepo;

/// Listing returns the user's notifications newest first; the unread filter
/// and count stay consistent with mark-read.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_and_mark_read(pool: PgPool) {
    let (u1, _) = common::create_user(&pool, "Alice", "alice@example.com").await;
    let token = common::auth_token(u1.id);

    let first = NotificationRepo::create(&pool, u1.id, "swap_request", "first")
        .await
        .unwrap();
    NotificationRepo::create(&pool, u1.id, "review", "second")
        .await
        .unwrap();

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/notifications",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/notifications/unread-count",
        &token,
    )
    .await;
    assert_eq!(body_json(response).await["data"]["count"], 2);

    // Mark one read; the unread filter drops it.
    let response = post_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/notifications/{first}/read"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/notifications?unread_only=true",
        &token,
    )
    .await;
    let json = body_json(response).await;
    let unread = json["data"].as_array().unwrap();
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0]["body"], "second");
}

/// Mark-all-read reports the number flipped and zeroes the count.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_mark_all_read(pool: PgPool) {
    let (u1, _) = common::create_user(&pool, "Alice", "alice@example.com").await;
    let token = common::auth_token(u1.id);

    for body in ["a", "b", "c"] {
        NotificationRepo::create(&pool, u1.id, "review", body)
            .await
            .unwrap();
    }

    let response = post_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/notifications/read-all",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["marked_read"], 3);

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/notifications/unread-count",
        &token,
    )
    .await;
    assert_eq!(body_json(response).await["data"]["count"], 0);
}

/// Users cannot read or flip each other's notifications.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_notifications_are_private(pool: PgPool) {
    let (u1, _) = common::create_user(&pool, "Alice", "alice@example.com").await;
    let (u2, _) = common::create_user(&pool, "Bob", "bob@example.com").await;

    let theirs = NotificationRepo::create(&pool, u1.id, "review", "for alice")
        .await
        .unwrap();

    // Bob's listing is empty.
    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/notifications",
        &common::auth_token(u2.id),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    // Bob cannot mark Alice's notification read.
    let response = post_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/notifications/{theirs}/read"),
        &common::auth_token(u2.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
