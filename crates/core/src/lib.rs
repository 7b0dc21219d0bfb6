//! Domain logic for the book-exchange platform.
//!
//! This crate is I/O-free: it defines the error taxonomy, the exchange
//! request state machine (kinds, decisions, per-kind accept side effects),
//! and the validation rules the DB and API layers share.

pub mod book;
pub mod error;
pub mod exchange;
pub mod review;
pub mod types;
