//! Repository for the `users` table.

use bookswap_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, ProfileStats, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, password_hash, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// An email collision surfaces as a unique violation on `uq_users_email`;
    /// callers convert it to a Conflict.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Aggregate the profile-page statistics for a user.
    pub async fn profile_stats(pool: &PgPool, user_id: DbId) -> Result<ProfileStats, sqlx::Error> {
        sqlx::query_as::<_, ProfileStats>(
            "SELECT
                (SELECT COUNT(*) FROM books WHERE owner_id = $1) AS total_books,
                (SELECT COUNT(*) FROM exchange_requests
                  WHERE kind = 'swap' AND status = 'accepted'
                    AND (initiator_id = $1 OR responder_id = $1)) AS total_swaps,
                (SELECT AVG(rating)::DOUBLE PRECISION FROM reviews WHERE reviewed_id = $1)
                    AS average_rating,
                (SELECT COUNT(*) FROM reviews WHERE reviewed_id = $1) AS total_reviews",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }
}
