//! Route definitions for the `/exchanges` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::exchanges;
use crate::state::AppState;

/// Routes mounted at `/exchanges`.
///
/// ```text
/// GET  /               -> list (?role=received|sent&kind=swap|return)
/// POST /swap           -> create_swap
/// POST /return         -> create_return
/// POST /{id}/respond   -> respond ({"decision": "accept"|"reject"})
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(exchanges::list))
        .route("/swap", post(exchanges::create_swap))
        .route("/return", post(exchanges::create_return))
        .route("/{id}/respond", post(exchanges::respond))
}
