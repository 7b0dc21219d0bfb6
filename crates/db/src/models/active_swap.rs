//! Active swap entity model and list-view join struct.

use bookswap_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `active_swaps` table: the record of which user currently
/// holds a book that is not with its owner.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActiveSwap {
    pub id: DbId,
    pub book_id: DbId,
    pub owner_id: DbId,
    pub holder_id: DbId,
    pub started_at: Timestamp,
}

/// Active swap joined with book and party display fields, for the
/// holdings / lent-out listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActiveSwapSummary {
    pub book_id: DbId,
    pub book_title: String,
    pub book_author: String,
    pub owner_id: DbId,
    pub owner_name: String,
    pub holder_id: DbId,
    pub holder_name: String,
    pub started_at: Timestamp,
}
