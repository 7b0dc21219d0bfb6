//! Handlers for the `/swaps` resource: who currently holds what.

use axum::extract::State;
use axum::Json;
use bookswap_db::repositories::ActiveSwapRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/swaps/holdings
///
/// Books the authenticated user currently holds for other owners.
pub async fn holdings(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let swaps = ActiveSwapRepo::list_for_holder(&state.pool, auth.user_id).await?;
    Ok(Json(serde_json::json!({ "data": swaps })))
}

/// GET /api/v1/swaps/lent
///
/// The authenticated user's books currently held by others.
pub async fn lent(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let swaps = ActiveSwapRepo::list_for_owner(&state.pool, auth.user_id).await?;
    Ok(Json(serde_json::json!({ "data": swaps })))
}
