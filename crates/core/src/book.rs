//! Book status constants.
//!
//! These must match the CHECK constraint in the `books` migration.
//! Invariant: a book is `swapped` iff an `active_swaps` row exists for it.

/// Book is with its owner and can be requested.
pub const BOOK_STATUS_AVAILABLE: &str = "available";

/// Book is currently held by another user.
pub const BOOK_STATUS_SWAPPED: &str = "swapped";

/// All valid book status values.
pub const VALID_BOOK_STATUSES: &[&str] = &[BOOK_STATUS_AVAILABLE, BOOK_STATUS_SWAPPED];
