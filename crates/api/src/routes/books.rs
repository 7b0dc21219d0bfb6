//! Route definitions for the `/books` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::books;
use crate::state::AppState;

/// Routes mounted at `/books`.
///
/// ```text
/// GET    /        -> list_available (browse other users' books)
/// POST   /        -> create_book
/// GET    /mine    -> list_mine
/// GET    /{id}    -> get_book
/// PUT    /{id}    -> update_book
/// DELETE /{id}    -> delete_book
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(books::list_available).post(books::create_book))
        .route("/mine", get(books::list_mine))
        .route(
            "/{id}",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
}
