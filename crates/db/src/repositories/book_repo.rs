//! Repository for the `books` table.

use bookswap_core::book::BOOK_STATUS_SWAPPED;
use bookswap_core::types::DbId;
use sqlx::PgPool;

use crate::models::book::{Book, BookWithOwner, BrowseBook, CreateBook, UpdateBook};

/// Column list for `books` queries.
const COLUMNS: &str = "id, owner_id, title, author, genre, status, created_at, updated_at";

/// Outcome of a guarded book deletion.
#[derive(Debug)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    /// The book is out with a holder; deleting it would orphan the swap.
    CurrentlySwapped,
    /// Someone has an open request for the book.
    HasPendingRequests,
}

/// Provides CRUD operations for books.
pub struct BookRepo;

impl BookRepo {
    /// List a new book for an owner, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateBook,
    ) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books (owner_id, title, author, genre)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.genre)
            .fetch_one(pool)
            .await
    }

    /// Find a book by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = $1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a book joined with its owner's name.
    pub async fn find_with_owner(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BookWithOwner>, sqlx::Error> {
        sqlx::query_as::<_, BookWithOwner>(
            "SELECT b.id, b.owner_id, u.name AS owner_name, b.title, b.author,
                    b.genre, b.status, b.created_at
             FROM books b
             JOIN users u ON u.id = b.owner_id
             WHERE b.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List a user's own books, newest first.
    pub async fn list_for_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM books WHERE owner_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Browse available books listed by other users, each flagged with
    /// whether `viewer_id` already has a pending swap request for it.
    pub async fn list_available(
        pool: &PgPool,
        viewer_id: DbId,
    ) -> Result<Vec<BrowseBook>, sqlx::Error> {
        sqlx::query_as::<_, BrowseBook>(
            "SELECT b.id, b.owner_id, u.name AS owner_name, b.title, b.author,
                    b.genre, b.status, b.created_at,
                    EXISTS(
                        SELECT 1 FROM exchange_requests er
                        WHERE er.book_id = b.id
                          AND er.initiator_id = $1
                          AND er.status = 'pending'
                    ) AS request_pending
             FROM books b
             JOIN users u ON u.id = b.owner_id
             WHERE b.status = 'available' AND b.owner_id != $1
             ORDER BY b.created_at DESC",
        )
        .bind(viewer_id)
        .fetch_all(pool)
        .await
    }

    /// True when the user has a pending request for the book.
    pub async fn has_pending_request(
        pool: &PgPool,
        book_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM exchange_requests
                WHERE book_id = $1 AND initiator_id = $2 AND status = 'pending'
             )",
        )
        .bind(book_id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Update a book's listing fields. Returns the updated row, or `None`
    /// if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBook,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET
                title = COALESCE($2, title),
                author = COALESCE($3, author),
                genre = COALESCE($4, genre),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.genre)
            .fetch_optional(pool)
            .await
    }

    /// Delete a book unless it is currently swapped or has open requests.
    ///
    /// Runs in one transaction with the book row locked so a concurrent
    /// accept cannot slip in between the checks and the delete.
    pub async fn delete_if_idle(pool: &PgPool, id: DbId) -> Result<DeleteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let status: Option<String> =
            sqlx::query_scalar("SELECT status FROM books WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(status) = status else {
            return Ok(DeleteOutcome::NotFound);
        };
        if status == BOOK_STATUS_SWAPPED {
            return Ok(DeleteOutcome::CurrentlySwapped);
        }

        let has_pending: bool = sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM exchange_requests WHERE book_id = $1 AND status = 'pending'
             )",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
        if has_pending {
            return Ok(DeleteOutcome::HasPendingRequests);
        }

        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(DeleteOutcome::Deleted)
    }
}
