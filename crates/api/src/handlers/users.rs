//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::Json;
use bookswap_core::error::CoreError;
use bookswap_db::models::user::UserResponse;
use bookswap_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/users/me
///
/// The authenticated user's profile with the aggregate statistics shown on
/// the profile page (books listed, completed swaps, rating received).
pub async fn me(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    let stats = UserRepo::profile_stats(&state.pool, auth.user_id).await?;

    Ok(Json(serde_json::json!({
        "data": {
            "user": UserResponse::from(user),
            "stats": stats,
        }
    })))
}
