//! Handlers for the `/auth` resource (signup, login, refresh, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bookswap_core::error::CoreError;
use bookswap_core::types::DbId;
use bookswap_db::models::user::{CreateUser, UserResponse};
use bookswap_db::repositories::{SessionRepo, UserRepo};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup`.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh` and `POST /auth/logout`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/signup
///
/// Register a new account. An email collision is reported as 409 Conflict,
/// never as a second row or a 500.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        name: input.name,
        email: input.email,
        password_hash,
    };
    let user = match UserRepo::create(&state.pool, &create).await {
        Ok(user) => user,
        Err(err) if is_email_collision(&err) => {
            return Err(AppError::Core(CoreError::Conflict(
                "Email is already registered".into(),
            )));
        }
        Err(err) => return Err(err.into()),
    };

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": UserResponse::from(user) })),
    ))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let response = issue_tokens(&state, user.id, UserResponse::from(user)).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a live refresh token for a new token pair. The presented token
/// is revoked (rotation), so each refresh token works exactly once.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::find_active_by_hash(&state.pool, &hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    SessionRepo::revoke_by_hash(&state.pool, &hash).await?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    let response = issue_tokens(&state, user.id, UserResponse::from(user)).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/logout
///
/// Revoke the presented refresh session. Returns 204 regardless of whether
/// the token was still live.
pub async fn logout(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<StatusCode> {
    let hash = hash_refresh_token(&input.refresh_token);
    SessionRepo::revoke_by_hash(&state.pool, &hash).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate an access/refresh token pair and persist the refresh session.
async fn issue_tokens(
    state: &AppState,
    user_id: DbId,
    user: UserResponse,
) -> AppResult<AuthResponse> {
    let jwt = &state.config.jwt;

    let access_token = generate_access_token(user_id, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_token, refresh_hash) = generate_refresh_token();
    let expires_at = Utc::now() + chrono::Duration::days(jwt.refresh_token_expiry_days);
    SessionRepo::create(&state.pool, user_id, &refresh_hash, expires_at).await?;

    Ok(AuthResponse {
        access_token,
        refresh_token,
        expires_in: jwt.access_token_expiry_mins * 60,
        user,
    })
}

/// True when the error is the `uq_users_email` unique violation.
fn is_email_collision(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some("uq_users_email")
        }
        _ => false,
    }
}
