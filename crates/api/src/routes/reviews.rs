//! Route definitions for the `/reviews` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Routes mounted at `/reviews`.
///
/// ```text
/// POST /          -> create_review
/// GET  /received  -> list_received
/// GET  /given     -> list_given
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(reviews::create_review))
        .route("/received", get(reviews::list_received))
        .route("/given", get(reviews::list_given))
}
