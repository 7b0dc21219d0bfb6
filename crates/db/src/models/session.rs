//! Refresh-token session model.

use bookswap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `sessions` table. Holds only the SHA-256 hash of the
/// refresh token, never the plaintext.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
