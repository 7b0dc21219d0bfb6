//! Book entity model and DTOs.

use bookswap_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `books` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Book {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub author: String,
    pub genre: String,
    /// `available` or `swapped`; see `bookswap_core::book`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for listing a new book.
#[derive(Debug, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub genre: String,
}

/// DTO for editing a book. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
}

/// Book joined with its owner's display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BookWithOwner {
    pub id: DbId,
    pub owner_id: DbId,
    pub owner_name: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// An available book as seen by a browsing user, with a flag for whether
/// that user already has a pending swap request for it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BrowseBook {
    pub id: DbId,
    pub owner_id: DbId,
    pub owner_name: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub status: String,
    pub request_pending: bool,
    pub created_at: Timestamp,
}
