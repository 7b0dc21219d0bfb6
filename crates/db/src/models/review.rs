//! Review entity model and list-view join struct.

use bookswap_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub book_id: DbId,
    pub reviewer_id: DbId,
    pub reviewed_id: DbId,
    pub rating: i32,
    pub comment: String,
    pub created_at: Timestamp,
}

/// Review joined with party names and book display fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewSummary {
    pub id: DbId,
    pub book_id: DbId,
    pub book_title: String,
    pub book_author: String,
    pub reviewer_id: DbId,
    pub reviewer_name: String,
    pub reviewed_id: DbId,
    pub reviewed_name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: Timestamp,
}
