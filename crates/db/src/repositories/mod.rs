//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-row writes (exchange
//! create/respond, review create, book delete) run inside a single
//! transaction and return a typed outcome enum the handler maps to errors.

pub mod active_swap_repo;
pub mod book_repo;
pub mod exchange_repo;
pub mod notification_repo;
pub mod review_repo;
pub mod session_repo;
pub mod user_repo;

pub use active_swap_repo::ActiveSwapRepo;
pub use book_repo::BookRepo;
pub use exchange_repo::ExchangeRepo;
pub use notification_repo::NotificationRepo;
pub use review_repo::ReviewRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;

/// True when `err` is a Postgres unique violation on the named constraint.
pub(crate) fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505") && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}
