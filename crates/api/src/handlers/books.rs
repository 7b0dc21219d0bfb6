//! Handlers for the `/books` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bookswap_core::book::BOOK_STATUS_AVAILABLE;
use bookswap_core::error::CoreError;
use bookswap_core::types::DbId;
use bookswap_db::models::book::{CreateBook, UpdateBook};
use bookswap_db::repositories::book_repo::DeleteOutcome;
use bookswap_db::repositories::{BookRepo, ReviewRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/books
///
/// List a new book owned by the authenticated user.
pub async fn create_book(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title must not be empty".into(),
        )));
    }

    let book = BookRepo::create(&state.pool, auth.user_id, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": book })),
    ))
}

/// GET /api/v1/books
///
/// Browse available books listed by other users. Each entry carries a
/// `request_pending` flag for the browsing user.
pub async fn list_available(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let books = BookRepo::list_available(&state.pool, auth.user_id).await?;
    Ok(Json(serde_json::json!({ "data": books })))
}

/// GET /api/v1/books/mine
///
/// The authenticated user's own listings.
pub async fn list_mine(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let books = BookRepo::list_for_owner(&state.pool, auth.user_id).await?;
    Ok(Json(serde_json::json!({ "data": books })))
}

/// GET /api/v1/books/{id}
///
/// Book details: owner name, reviews, and whether the viewing user can or
/// already did request it.
pub async fn get_book(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(book_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let book = BookRepo::find_with_owner(&state.pool, book_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Book",
            id: book_id,
        }))?;

    let reviews = ReviewRepo::list_for_book(&state.pool, book_id).await?;
    let request_pending = BookRepo::has_pending_request(&state.pool, book_id, auth.user_id).await?;
    let can_request = book.status == BOOK_STATUS_AVAILABLE && book.owner_id != auth.user_id;

    Ok(Json(serde_json::json!({
        "data": {
            "book": book,
            "reviews": reviews,
            "can_request": can_request,
            "request_pending": request_pending,
        }
    })))
}

/// PUT /api/v1/books/{id}
///
/// Edit a listing. Owner only.
pub async fn update_book(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(book_id): Path<DbId>,
    Json(input): Json<UpdateBook>,
) -> AppResult<Json<DataResponse<bookswap_db::models::book::Book>>> {
    let book = BookRepo::find_by_id(&state.pool, book_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Book",
            id: book_id,
        }))?;
    if book.owner_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the owner can edit a book".into(),
        )));
    }

    let updated = BookRepo::update(&state.pool, book_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Book",
            id: book_id,
        }))?;

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/books/{id}
///
/// Remove a listing. Owner only; refused while the book is swapped out or
/// has open requests.
pub async fn delete_book(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(book_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let book = BookRepo::find_by_id(&state.pool, book_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Book",
            id: book_id,
        }))?;
    if book.owner_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the owner can delete a book".into(),
        )));
    }

    match BookRepo::delete_if_idle(&state.pool, book_id).await? {
        DeleteOutcome::Deleted => Ok(StatusCode::NO_CONTENT),
        DeleteOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Book",
            id: book_id,
        })),
        DeleteOutcome::CurrentlySwapped => Err(AppError::Core(CoreError::InvalidState(
            "Book is currently swapped out and cannot be deleted".into(),
        ))),
        DeleteOutcome::HasPendingRequests => Err(AppError::Core(CoreError::InvalidState(
            "Book has pending exchange requests and cannot be deleted".into(),
        ))),
    }
}
