//! Repository for the `reviews` table.
//!
//! Eligibility is an existence check at write time, never a stored flag:
//! the reviewer must have been a party to an accepted exchange of the book
//! with the reviewed user, and must not have reviewed that (book, reviewer)
//! pair before. The unique index backs the second check against races.

use bookswap_core::review::{received_notification, NOTIFY_REVIEW};
use bookswap_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{Review, ReviewSummary};
use crate::repositories::{is_unique_violation, NotificationRepo};

/// Column list for `reviews` queries.
const COLUMNS: &str = "id, book_id, reviewer_id, reviewed_id, rating, comment, created_at";

/// Select list for the joined summary queries.
const SUMMARY_SELECT: &str = "SELECT r.id, r.book_id, b.title AS book_title, b.author AS book_author,
            r.reviewer_id, rv.name AS reviewer_name,
            r.reviewed_id, rd.name AS reviewed_name,
            r.rating, r.comment, r.created_at
     FROM reviews r
     JOIN books b ON b.id = r.book_id
     JOIN users rv ON rv.id = r.reviewer_id
     JOIN users rd ON rd.id = r.reviewed_id";

/// Outcome of submitting a review.
#[derive(Debug)]
pub enum ReviewOutcome {
    Created(Review),
    /// The reviewer and reviewed user never completed an exchange of this book.
    NotEligible,
    /// A review by this reviewer for this book already exists.
    AlreadyReviewed,
}

/// Provides review submission and listings.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Submit a review of `reviewed_id` for `book_id` and notify them.
    ///
    /// Runs in one transaction: eligibility check, insert, notification.
    pub async fn create(
        pool: &PgPool,
        book_id: DbId,
        reviewer_id: DbId,
        reviewed_id: DbId,
        rating: i32,
        comment: &str,
    ) -> Result<ReviewOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let eligible: bool = sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM exchange_requests
                WHERE book_id = $1 AND status = 'accepted'
                  AND ((initiator_id = $2 AND responder_id = $3)
                    OR (initiator_id = $3 AND responder_id = $2))
             )",
        )
        .bind(book_id)
        .bind(reviewer_id)
        .bind(reviewed_id)
        .fetch_one(&mut *tx)
        .await?;
        if !eligible {
            return Ok(ReviewOutcome::NotEligible);
        }

        let query = format!(
            "INSERT INTO reviews (book_id, reviewer_id, reviewed_id, rating, comment)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, Review>(&query)
            .bind(book_id)
            .bind(reviewer_id)
            .bind(reviewed_id)
            .bind(rating)
            .bind(comment)
            .fetch_one(&mut *tx)
            .await;

        let review = match inserted {
            Ok(review) => review,
            Err(err) if is_unique_violation(&err, "uq_reviews_book_reviewer") => {
                return Ok(ReviewOutcome::AlreadyReviewed);
            }
            Err(err) => return Err(err),
        };

        let reviewer_name: String = sqlx::query_scalar("SELECT name FROM users WHERE id = $1")
            .bind(reviewer_id)
            .fetch_one(&mut *tx)
            .await?;

        NotificationRepo::create_in_tx(
            &mut tx,
            reviewed_id,
            NOTIFY_REVIEW,
            &received_notification(&reviewer_name),
        )
        .await?;

        tx.commit().await?;
        Ok(ReviewOutcome::Created(review))
    }

    /// True when the user has already reviewed this (book, reviewer) pair.
    pub async fn has_reviewed(
        pool: &PgPool,
        book_id: DbId,
        reviewer_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM reviews WHERE book_id = $1 AND reviewer_id = $2)",
        )
        .bind(book_id)
        .bind(reviewer_id)
        .fetch_one(pool)
        .await
    }

    /// Reviews received by a user, newest first.
    pub async fn list_received(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ReviewSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE r.reviewed_id = $1 ORDER BY r.created_at DESC");
        sqlx::query_as::<_, ReviewSummary>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Reviews written by a user, newest first.
    pub async fn list_given(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ReviewSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE r.reviewer_id = $1 ORDER BY r.created_at DESC");
        sqlx::query_as::<_, ReviewSummary>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Reviews attached to a book, newest first.
    pub async fn list_for_book(
        pool: &PgPool,
        book_id: DbId,
    ) -> Result<Vec<ReviewSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE r.book_id = $1 ORDER BY r.created_at DESC");
        sqlx::query_as::<_, ReviewSummary>(&query)
            .bind(book_id)
            .fetch_all(pool)
            .await
    }
}
