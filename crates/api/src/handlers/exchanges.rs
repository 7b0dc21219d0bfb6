//! Handlers for the `/exchanges` resource: the swap / return request state
//! machine endpoints.
//!
//! Handlers stay thin: the transactional work lives in `ExchangeRepo`; this
//! layer maps typed outcomes onto the error taxonomy.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use bookswap_core::error::CoreError;
use bookswap_core::exchange::{Decision, RequestKind, RequestRole};
use bookswap_core::types::DbId;
use bookswap_db::repositories::exchange_repo::{CreateOutcome, RespondOutcome};
use bookswap_db::repositories::ExchangeRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /exchanges/swap`.
#[derive(Debug, Deserialize)]
pub struct CreateSwapRequest {
    pub book_id: DbId,
}

/// Request body for `POST /exchanges/return`.
#[derive(Debug, Deserialize)]
pub struct CreateReturnRequest {
    pub book_id: DbId,
    /// Optional note to the holder.
    pub message: Option<String>,
}

/// Request body for `POST /exchanges/{id}/respond`.
#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    pub decision: Decision,
}

/// Query parameters for `GET /exchanges`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Which side of the requests to list. Defaults to `received`.
    pub role: Option<RequestRole>,
    /// Optional kind filter (`swap` or `return`).
    pub kind: Option<RequestKind>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/exchanges/swap
///
/// Ask the owner of an available book for a swap.
pub async fn create_swap(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateSwapRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let outcome = ExchangeRepo::create(
        &state.pool,
        RequestKind::Swap,
        input.book_id,
        auth.user_id,
        None,
    )
    .await?;
    created_response(outcome, input.book_id)
}

/// POST /api/v1/exchanges/return
///
/// Ask the current holder of one of the caller's books to give it back.
pub async fn create_return(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateReturnRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let outcome = ExchangeRepo::create(
        &state.pool,
        RequestKind::Return,
        input.book_id,
        auth.user_id,
        input.message.as_deref(),
    )
    .await?;
    created_response(outcome, input.book_id)
}

/// POST /api/v1/exchanges/{id}/respond
///
/// Accept or reject a pending request. Only the request's responder may
/// call this, and only while the request is pending.
pub async fn respond(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(request_id): Path<DbId>,
    Json(input): Json<RespondRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let outcome =
        ExchangeRepo::respond(&state.pool, request_id, auth.user_id, input.decision).await?;

    match outcome {
        RespondOutcome::Settled(request) => Ok(Json(serde_json::json!({ "data": request }))),
        RespondOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Exchange request",
            id: request_id,
        })),
        RespondOutcome::NotResponder => Err(AppError::Core(CoreError::Forbidden(
            "Only the request's responder can settle it".into(),
        ))),
        RespondOutcome::AlreadySettled(status) => Err(AppError::Core(CoreError::InvalidState(
            format!("Request is already {status}"),
        ))),
    }
}

/// GET /api/v1/exchanges?role=received|sent&kind=swap|return
///
/// List the caller's requests on one side, joined with display fields.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let role = params.role.unwrap_or(RequestRole::Received);
    let requests =
        ExchangeRepo::list_for_user(&state.pool, auth.user_id, role, params.kind).await?;
    Ok(Json(serde_json::json!({ "data": requests })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Map a [`CreateOutcome`] to an HTTP response or error.
fn created_response(
    outcome: CreateOutcome,
    book_id: DbId,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    match outcome {
        CreateOutcome::Created(request) => Ok((
            StatusCode::CREATED,
            Json(serde_json::json!({ "data": request })),
        )),
        CreateOutcome::BookNotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Book",
            id: book_id,
        })),
        CreateOutcome::OwnBook => Err(AppError::Core(CoreError::Validation(
            "You cannot request your own book".into(),
        ))),
        CreateOutcome::BookUnavailable => Err(AppError::Core(CoreError::InvalidState(
            "Book is not available for swapping".into(),
        ))),
        CreateOutcome::NotLentOut => Err(AppError::Core(CoreError::InvalidState(
            "Book is not currently lent out by you".into(),
        ))),
        CreateOutcome::AlreadyPending => Err(AppError::Core(CoreError::Conflict(
            "You already have a pending request for this book".into(),
        ))),
    }
}
