//! Route definitions for the `/swaps` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::swaps;
use crate::state::AppState;

/// Routes mounted at `/swaps`.
///
/// ```text
/// GET /holdings -> holdings (books I currently hold)
/// GET /lent     -> lent     (my books held by others)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/holdings", get(swaps::holdings))
        .route("/lent", get(swaps::lent))
}
