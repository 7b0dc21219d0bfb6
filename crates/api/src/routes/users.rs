//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET /me -> me (profile + stats)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/me", get(users::me))
}
