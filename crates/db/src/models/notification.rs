//! Notification entity model.

use bookswap_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `notifications` table.
///
/// Append-only: rows are created as a side effect of exchange transitions
/// and reviews, and are never mutated except for the read flip.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    /// `swap_request`, `return_request`, or `review`.
    pub kind: String,
    pub body: String,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
