//! Exchange request state machine.
//!
//! A swap request and a return request are the same machine: an initiator
//! creates a `pending` request addressed to a responder, and the responder
//! settles it exactly once as `accepted` or `rejected`. The two kinds differ
//! only in who the responder is and in the side effects acceptance triggers
//! on the subject book, captured here as a per-kind [`AcceptEffects`] value
//! that the repository interprets inside its transaction.

use serde::{Deserialize, Serialize};

use crate::book::{BOOK_STATUS_AVAILABLE, BOOK_STATUS_SWAPPED};
use crate::error::CoreError;

/* --------------------------------------------------------------------------
Statuses
-------------------------------------------------------------------------- */

/// Request awaits the responder's decision.
pub const STATUS_PENDING: &str = "pending";

/// Responder accepted; side effects applied. Terminal.
pub const STATUS_ACCEPTED: &str = "accepted";

/// Responder rejected. Terminal.
pub const STATUS_REJECTED: &str = "rejected";

/// All valid request status values.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_ACCEPTED, STATUS_REJECTED];

/// A request can only be settled while pending; terminal states absorb.
pub fn can_respond(status: &str) -> bool {
    status == STATUS_PENDING
}

/* --------------------------------------------------------------------------
Kinds
-------------------------------------------------------------------------- */

/// Notification kind written when a swap request is created or settled.
pub const NOTIFY_SWAP_REQUEST: &str = "swap_request";

/// Notification kind written when a return request is created or settled.
pub const NOTIFY_RETURN_REQUEST: &str = "return_request";

/// The two concrete request variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    /// Initiator wants the responder's (the owner's) book.
    Swap,
    /// Initiator is the book's owner asking the current holder for it back.
    Return,
}

impl RequestKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestKind::Swap => "swap",
            RequestKind::Return => "return",
        }
    }

    /// Parse a stored kind tag.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "swap" => Ok(RequestKind::Swap),
            "return" => Ok(RequestKind::Return),
            other => Err(CoreError::Internal(format!(
                "Unknown exchange request kind '{other}'"
            ))),
        }
    }

    /// Notification kind tag for messages about this request.
    pub fn notification_kind(self) -> &'static str {
        match self {
            RequestKind::Swap => NOTIFY_SWAP_REQUEST,
            RequestKind::Return => NOTIFY_RETURN_REQUEST,
        }
    }

    /// The side effects accepting a request of this kind must apply, all in
    /// the same transaction as the status flip.
    pub fn accept_effects(self) -> AcceptEffects {
        match self {
            RequestKind::Swap => AcceptEffects {
                book_status: BOOK_STATUS_SWAPPED,
                active_swap: ActiveSwapEffect::Create,
            },
            RequestKind::Return => AcceptEffects {
                book_status: BOOK_STATUS_AVAILABLE,
                active_swap: ActiveSwapEffect::Remove,
            },
        }
    }
}

/// What acceptance does to the subject book, per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptEffects {
    /// Status the book ends in.
    pub book_status: &'static str,
    /// Whether an `active_swaps` row is created or removed for the book.
    pub active_swap: ActiveSwapEffect,
}

/// Effect on the book's `active_swaps` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveSwapEffect {
    /// Record that the initiator now holds the responder's book.
    Create,
    /// The book went back to its owner; drop the record.
    Remove,
}

/// The side of a request a listing user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestRole {
    /// Requests addressed to the user (they are the responder).
    Received,
    /// Requests the user initiated.
    Sent,
}

/* --------------------------------------------------------------------------
Decisions
-------------------------------------------------------------------------- */

/// The responder's decision on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Accept => "accept",
            Decision::Reject => "reject",
        }
    }

    /// Terminal status a request reaches under this decision.
    pub fn terminal_status(self) -> &'static str {
        match self {
            Decision::Accept => STATUS_ACCEPTED,
            Decision::Reject => STATUS_REJECTED,
        }
    }
}

/* --------------------------------------------------------------------------
Notification bodies
-------------------------------------------------------------------------- */

/// Body of the notification sent to the responder when a request is created.
pub fn created_notification(kind: RequestKind, initiator_name: &str, book_title: &str) -> String {
    match kind {
        RequestKind::Swap => {
            format!("{initiator_name} requested your book \"{book_title}\".")
        }
        RequestKind::Return => {
            format!("{initiator_name} is requesting the return of \"{book_title}\".")
        }
    }
}

/// Body of the notification sent to the initiator when a request is settled.
pub fn settled_notification(kind: RequestKind, decision: Decision, book_title: &str) -> String {
    match (kind, decision) {
        (RequestKind::Swap, Decision::Accept) => {
            format!("Your swap request for \"{book_title}\" has been accepted!")
        }
        (RequestKind::Swap, Decision::Reject) => {
            format!("Your swap request for \"{book_title}\" has been rejected.")
        }
        (RequestKind::Return, Decision::Accept) => {
            format!("Your book \"{book_title}\" has been returned and is now available!")
        }
        (RequestKind::Return, Decision::Reject) => {
            format!("Your return request for \"{book_title}\" was declined.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pending_can_be_settled() {
        assert!(can_respond(STATUS_PENDING));
        assert!(!can_respond(STATUS_ACCEPTED));
        assert!(!can_respond(STATUS_REJECTED));
        assert!(!can_respond("garbage"));
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in [RequestKind::Swap, RequestKind::Return] {
            assert_eq!(RequestKind::parse(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_internal_error() {
        let err = RequestKind::parse("loan").unwrap_err();
        assert!(matches!(err, CoreError::Internal(_)));
    }

    #[test]
    fn test_decision_terminal_statuses() {
        assert_eq!(Decision::Accept.terminal_status(), STATUS_ACCEPTED);
        assert_eq!(Decision::Reject.terminal_status(), STATUS_REJECTED);
    }

    #[test]
    fn test_swap_accept_effects() {
        let effects = RequestKind::Swap.accept_effects();
        assert_eq!(effects.book_status, BOOK_STATUS_SWAPPED);
        assert_eq!(effects.active_swap, ActiveSwapEffect::Create);
    }

    #[test]
    fn test_return_accept_effects() {
        let effects = RequestKind::Return.accept_effects();
        assert_eq!(effects.book_status, BOOK_STATUS_AVAILABLE);
        assert_eq!(effects.active_swap, ActiveSwapEffect::Remove);
    }

    #[test]
    fn test_notification_kinds() {
        assert_eq!(RequestKind::Swap.notification_kind(), NOTIFY_SWAP_REQUEST);
        assert_eq!(RequestKind::Return.notification_kind(), NOTIFY_RETURN_REQUEST);
    }

    #[test]
    fn test_created_notification_mentions_parties() {
        let body = created_notification(RequestKind::Swap, "Alice", "Dune");
        assert!(body.contains("Alice"));
        assert!(body.contains("Dune"));

        let body = created_notification(RequestKind::Return, "Bob", "Dune");
        assert!(body.contains("return"));
        assert!(body.contains("Dune"));
    }

    #[test]
    fn test_settled_notification_varies_by_kind_and_decision() {
        let accept = settled_notification(RequestKind::Swap, Decision::Accept, "Dune");
        let reject = settled_notification(RequestKind::Swap, Decision::Reject, "Dune");
        assert_ne!(accept, reject);

        let returned = settled_notification(RequestKind::Return, Decision::Accept, "Dune");
        assert!(returned.contains("available"));
    }
}
