pub mod auth;
pub mod books;
pub mod exchanges;
pub mod health;
pub mod notifications;
pub mod reviews;
pub mod swaps;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                       register (public)
/// /auth/login                        login (public)
/// /auth/refresh                      rotate refresh token (public)
/// /auth/logout                       revoke session
///
/// /users/me                          profile with stats
///
/// /books                             browse available, create (GET, POST)
/// /books/mine                        own listings
/// /books/{id}                        details, edit, delete (GET, PUT, DELETE)
///
/// /exchanges                         list (?role=received|sent&kind=swap|return)
/// /exchanges/swap                    create swap request (POST)
/// /exchanges/return                  create return request (POST)
/// /exchanges/{id}/respond            accept or reject (POST)
///
/// /swaps/holdings                    books the caller currently holds
/// /swaps/lent                        the caller's books held by others
///
/// /notifications                     list (?unread_only, limit, offset)
/// /notifications/read-all            mark all read (POST)
/// /notifications/unread-count        unread count (GET)
/// /notifications/{id}/read           mark read (POST)
///
/// /reviews                           submit review (POST)
/// /reviews/received                  reviews about me
/// /reviews/given                     reviews I wrote
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (signup, login, refresh, logout).
        .nest("/auth", auth::router())
        // Profile.
        .nest("/users", users::router())
        // Book listings and browsing.
        .nest("/books", books::router())
        // The swap / return request state machine.
        .nest("/exchanges", exchanges::router())
        // Active swap tracking (who holds what).
        .nest("/swaps", swaps::router())
        // In-app notification log.
        .nest("/notifications", notifications::router())
        // Ratings and reviews.
        .nest("/reviews", reviews::router())
}
