//! Exchange request entity model and list-view join struct.

use bookswap_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `exchange_requests` table.
///
/// `kind` and `status` hold the tags defined in `bookswap_core::exchange`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExchangeRequest {
    pub id: DbId,
    pub kind: String,
    pub book_id: DbId,
    pub initiator_id: DbId,
    pub responder_id: DbId,
    pub message: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub responded_at: Option<Timestamp>,
}

/// Exchange request joined with book and party display fields, for the
/// inbox/outbox listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExchangeRequestSummary {
    pub id: DbId,
    pub kind: String,
    pub status: String,
    pub book_id: DbId,
    pub book_title: String,
    pub book_author: String,
    pub initiator_id: DbId,
    pub initiator_name: String,
    pub responder_id: DbId,
    pub responder_name: String,
    pub message: Option<String>,
    pub created_at: Timestamp,
    pub responded_at: Option<Timestamp>,
}
