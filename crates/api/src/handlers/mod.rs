//! HTTP handlers, one module per resource.

pub mod auth;
pub mod books;
pub mod exchanges;
pub mod notifications;
pub mod reviews;
pub mod swaps;
pub mod users;
