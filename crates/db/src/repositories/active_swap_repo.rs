//! Repository for the `active_swaps` table.
//!
//! Rows are created and deleted exclusively by `ExchangeRepo::respond`;
//! this repository only reads them.

use bookswap_core::types::DbId;
use sqlx::PgPool;

use crate::models::active_swap::{ActiveSwap, ActiveSwapSummary};

/// Select list for the joined summary queries.
const SUMMARY_SELECT: &str = "SELECT a.book_id, b.title AS book_title, b.author AS book_author,
            a.owner_id, ou.name AS owner_name,
            a.holder_id, hu.name AS holder_name,
            a.started_at
     FROM active_swaps a
     JOIN books b ON b.id = a.book_id
     JOIN users ou ON ou.id = a.owner_id
     JOIN users hu ON hu.id = a.holder_id";

/// Read access to active swap records.
pub struct ActiveSwapRepo;

impl ActiveSwapRepo {
    /// Find the active swap for a book, if the book is out with a holder.
    pub async fn find_by_book(
        pool: &PgPool,
        book_id: DbId,
    ) -> Result<Option<ActiveSwap>, sqlx::Error> {
        sqlx::query_as::<_, ActiveSwap>(
            "SELECT id, book_id, owner_id, holder_id, started_at
             FROM active_swaps WHERE book_id = $1",
        )
        .bind(book_id)
        .fetch_optional(pool)
        .await
    }

    /// Books the user currently holds for other owners.
    pub async fn list_for_holder(
        pool: &PgPool,
        holder_id: DbId,
    ) -> Result<Vec<ActiveSwapSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE a.holder_id = $1 ORDER BY a.started_at DESC");
        sqlx::query_as::<_, ActiveSwapSummary>(&query)
            .bind(holder_id)
            .fetch_all(pool)
            .await
    }

    /// The user's own books currently held by others.
    pub async fn list_for_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<ActiveSwapSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE a.owner_id = $1 ORDER BY a.started_at DESC");
        sqlx::query_as::<_, ActiveSwapSummary>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }
}
