//! Repository for the `exchange_requests` table.
//!
//! Owns the two transactional operations of the request/response state
//! machine. `create` and `respond` each run as one atomic unit: request row,
//! book status, active-swap record, and the notification either all persist
//! or none do. `respond` locks the request row with `FOR UPDATE`, so two
//! concurrent responders serialize and the loser observes a settled status
//! instead of firing side effects a second time.

use bookswap_core::book::BOOK_STATUS_AVAILABLE;
use bookswap_core::exchange::{
    can_respond, created_notification, settled_notification, ActiveSwapEffect, Decision,
    RequestKind, RequestRole,
};
use bookswap_core::types::DbId;
use sqlx::PgPool;

use crate::models::exchange_request::{ExchangeRequest, ExchangeRequestSummary};
use crate::repositories::{is_unique_violation, NotificationRepo};

/// Column list for `exchange_requests` queries.
const COLUMNS: &str =
    "id, kind, book_id, initiator_id, responder_id, message, status, created_at, responded_at";

/// Outcome of creating an exchange request.
#[derive(Debug)]
pub enum CreateOutcome {
    Created(ExchangeRequest),
    BookNotFound,
    /// Swap requests cannot target the initiator's own book.
    OwnBook,
    /// Swap requests require the book to be available.
    BookUnavailable,
    /// Return requests require an active swap owned by the initiator.
    NotLentOut,
    /// The initiator already has a pending request for this book.
    AlreadyPending,
}

/// Outcome of responding to an exchange request.
#[derive(Debug)]
pub enum RespondOutcome {
    Settled(ExchangeRequest),
    NotFound,
    /// The acting user is not the request's responder.
    NotResponder,
    /// The request was already settled; carries the current status.
    AlreadySettled(String),
}

/// Provides the state-machine operations and listings for exchange requests.
pub struct ExchangeRepo;

impl ExchangeRepo {
    /// Create a pending request of the given kind and notify the responder.
    ///
    /// Preconditions are checked with the book row locked:
    /// - swap: book exists, is not the initiator's own, and is available;
    ///   the responder is the book's owner.
    /// - return: book exists and an `active_swaps` row with
    ///   `owner_id = initiator` exists; the responder is the holder.
    ///
    /// A duplicate pending (book, initiator) pair is reported as
    /// [`CreateOutcome::AlreadyPending`] via the partial unique index.
    pub async fn create(
        pool: &PgPool,
        kind: RequestKind,
        book_id: DbId,
        initiator_id: DbId,
        message: Option<&str>,
    ) -> Result<CreateOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let book: Option<(DbId, String, String)> = sqlx::query_as(
            "SELECT owner_id, title, status FROM books WHERE id = $1 FOR UPDATE",
        )
        .bind(book_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((owner_id, title, status)) = book else {
            return Ok(CreateOutcome::BookNotFound);
        };

        let responder_id = match kind {
            RequestKind::Swap => {
                if owner_id == initiator_id {
                    return Ok(CreateOutcome::OwnBook);
                }
                if status != BOOK_STATUS_AVAILABLE {
                    return Ok(CreateOutcome::BookUnavailable);
                }
                owner_id
            }
            RequestKind::Return => {
                let holder: Option<DbId> = sqlx::query_scalar(
                    "SELECT holder_id FROM active_swaps WHERE book_id = $1 AND owner_id = $2",
                )
                .bind(book_id)
                .bind(initiator_id)
                .fetch_optional(&mut *tx)
                .await?;
                match holder {
                    Some(holder_id) => holder_id,
                    None => return Ok(CreateOutcome::NotLentOut),
                }
            }
        };

        let query = format!(
            "INSERT INTO exchange_requests (kind, book_id, initiator_id, responder_id, message)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, ExchangeRequest>(&query)
            .bind(kind.as_str())
            .bind(book_id)
            .bind(initiator_id)
            .bind(responder_id)
            .bind(message)
            .fetch_one(&mut *tx)
            .await;

        let request = match inserted {
            Ok(request) => request,
            Err(err) if is_unique_violation(&err, "uq_exchange_requests_pending") => {
                return Ok(CreateOutcome::AlreadyPending);
            }
            Err(err) => return Err(err),
        };

        let initiator_name: String = sqlx::query_scalar("SELECT name FROM users WHERE id = $1")
            .bind(initiator_id)
            .fetch_one(&mut *tx)
            .await?;

        NotificationRepo::create_in_tx(
            &mut tx,
            responder_id,
            kind.notification_kind(),
            &created_notification(kind, &initiator_name, &title),
        )
        .await?;

        tx.commit().await?;
        Ok(CreateOutcome::Created(request))
    }

    /// Settle a pending request and apply the per-kind accept side effects.
    ///
    /// The request row is locked for the whole transaction; the responder
    /// and pending-status checks run under that lock, so a repeated or
    /// concurrent respond can never fire the side effects twice.
    pub async fn respond(
        pool: &PgPool,
        request_id: DbId,
        acting_user_id: DbId,
        decision: Decision,
    ) -> Result<RespondOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM exchange_requests WHERE id = $1 FOR UPDATE");
        let request: Option<ExchangeRequest> = sqlx::query_as(&query)
            .bind(request_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(request) = request else {
            return Ok(RespondOutcome::NotFound);
        };
        if request.responder_id != acting_user_id {
            return Ok(RespondOutcome::NotResponder);
        }
        if !can_respond(&request.status) {
            return Ok(RespondOutcome::AlreadySettled(request.status));
        }

        // The CHECK constraint on `kind` makes a parse failure unreachable
        // short of row corruption; surface it as a decode error, not a panic.
        let kind = RequestKind::parse(&request.kind)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        let query = format!(
            "UPDATE exchange_requests SET status = $2, responded_at = NOW()
             WHERE id = $1 AND status = 'pending'
             RETURNING {COLUMNS}"
        );
        let settled: ExchangeRequest = sqlx::query_as(&query)
            .bind(request_id)
            .bind(decision.terminal_status())
            .fetch_one(&mut *tx)
            .await?;

        let book_title: String =
            sqlx::query_scalar("SELECT title FROM books WHERE id = $1 FOR UPDATE")
                .bind(request.book_id)
                .fetch_one(&mut *tx)
                .await?;

        if decision == Decision::Accept {
            let effects = kind.accept_effects();

            sqlx::query("UPDATE books SET status = $2, updated_at = NOW() WHERE id = $1")
                .bind(request.book_id)
                .bind(effects.book_status)
                .execute(&mut *tx)
                .await?;

            match effects.active_swap {
                ActiveSwapEffect::Create => {
                    sqlx::query(
                        "INSERT INTO active_swaps (book_id, owner_id, holder_id)
                         VALUES ($1, $2, $3)",
                    )
                    .bind(request.book_id)
                    .bind(request.responder_id)
                    .bind(request.initiator_id)
                    .execute(&mut *tx)
                    .await?;
                }
                ActiveSwapEffect::Remove => {
                    sqlx::query("DELETE FROM active_swaps WHERE book_id = $1")
                        .bind(request.book_id)
                        .execute(&mut *tx)
                        .await?;
                }
            }
        }

        NotificationRepo::create_in_tx(
            &mut tx,
            request.initiator_id,
            kind.notification_kind(),
            &settled_notification(kind, decision, &book_title),
        )
        .await?;

        tx.commit().await?;
        Ok(RespondOutcome::Settled(settled))
    }

    /// Find a request by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ExchangeRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exchange_requests WHERE id = $1");
        sqlx::query_as::<_, ExchangeRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's requests on one side (received or sent), optionally
    /// filtered by kind, joined with display fields, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        role: RequestRole,
        kind: Option<RequestKind>,
    ) -> Result<Vec<ExchangeRequestSummary>, sqlx::Error> {
        let role_column = match role {
            RequestRole::Received => "er.responder_id",
            RequestRole::Sent => "er.initiator_id",
        };
        let kind_filter = if kind.is_some() { "AND er.kind = $2" } else { "" };
        let query = format!(
            "SELECT er.id, er.kind, er.status, er.book_id,
                    b.title AS book_title, b.author AS book_author,
                    er.initiator_id, iu.name AS initiator_name,
                    er.responder_id, ru.name AS responder_name,
                    er.message, er.created_at, er.responded_at
             FROM exchange_requests er
             JOIN books b ON b.id = er.book_id
             JOIN users iu ON iu.id = er.initiator_id
             JOIN users ru ON ru.id = er.responder_id
             WHERE {role_column} = $1 {kind_filter}
             ORDER BY er.created_at DESC"
        );

        let mut q = sqlx::query_as::<_, ExchangeRequestSummary>(&query).bind(user_id);
        if let Some(kind) = kind {
            q = q.bind(kind.as_str());
        }
        q.fetch_all(pool).await
    }
}
