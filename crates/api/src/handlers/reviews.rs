//! Handlers for the `/reviews` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bookswap_core::error::CoreError;
use bookswap_core::review::{validate_comment, validate_rating};
use bookswap_core::types::DbId;
use bookswap_db::repositories::review_repo::ReviewOutcome;
use bookswap_db::repositories::ReviewRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /reviews`.
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub book_id: DbId,
    /// The counterparty being reviewed.
    pub reviewed_id: DbId,
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}

/// POST /api/v1/reviews
///
/// Review the other party of a completed exchange. One review per
/// (book, reviewer) pair, regardless of how many swap cycles occurred.
pub async fn create_review(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    validate_rating(input.rating).map_err(AppError::Core)?;
    validate_comment(&input.comment).map_err(AppError::Core)?;
    if input.reviewed_id == auth.user_id {
        return Err(AppError::Core(CoreError::Validation(
            "You cannot review yourself".into(),
        )));
    }

    let outcome = ReviewRepo::create(
        &state.pool,
        input.book_id,
        auth.user_id,
        input.reviewed_id,
        input.rating,
        &input.comment,
    )
    .await?;

    match outcome {
        ReviewOutcome::Created(review) => Ok((
            StatusCode::CREATED,
            Json(serde_json::json!({ "data": review })),
        )),
        ReviewOutcome::NotEligible => Err(AppError::Core(CoreError::InvalidState(
            "No completed exchange of this book with that user".into(),
        ))),
        ReviewOutcome::AlreadyReviewed => Err(AppError::Core(CoreError::Conflict(
            "You have already reviewed this book".into(),
        ))),
    }
}

/// GET /api/v1/reviews/received
///
/// Reviews other users left for the authenticated user.
pub async fn list_received(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let reviews = ReviewRepo::list_received(&state.pool, auth.user_id).await?;
    Ok(Json(serde_json::json!({ "data": reviews })))
}

/// GET /api/v1/reviews/given
///
/// Reviews the authenticated user has written.
pub async fn list_given(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let reviews = ReviewRepo::list_given(&state.pool, auth.user_id).await?;
    Ok(Json(serde_json::json!({ "data": reviews })))
}
