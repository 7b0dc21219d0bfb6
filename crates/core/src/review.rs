//! Review constants and validation.
//!
//! Eligibility rule (applied identically in every view): a user may review a
//! (book, counterparty) pair once they were a party to an accepted swap of
//! that book, and only while no `reviews` row by (book_id, reviewer_id)
//! exists. The check is an existence query at request time, never a stored
//! flag; `uq_reviews_book_reviewer` backs it against races.

use crate::error::CoreError;

/// Lowest accepted star rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted star rating.
pub const MAX_RATING: i32 = 5;

/// Maximum length for a review comment.
pub const MAX_COMMENT_LENGTH: usize = 2_000;

/// Notification kind written when a user receives a review.
pub const NOTIFY_REVIEW: &str = "review";

/// Validate that a rating is within the accepted star range.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

/// Validate a review comment's length.
pub fn validate_comment(comment: &str) -> Result<(), CoreError> {
    if comment.len() > MAX_COMMENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Comment exceeds maximum length of {MAX_COMMENT_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Body of the notification sent to the reviewed user.
pub fn received_notification(reviewer_name: &str) -> String {
    format!("You received a new review from {reviewer_name}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratings_in_range_accepted() {
        for rating in MIN_RATING..=MAX_RATING {
            assert!(validate_rating(rating).is_ok());
        }
    }

    #[test]
    fn test_ratings_out_of_range_rejected() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
        assert!(validate_rating(-3).is_err());
    }

    #[test]
    fn test_comment_at_limit_accepted() {
        let comment = "x".repeat(MAX_COMMENT_LENGTH);
        assert!(validate_comment(&comment).is_ok());
    }

    #[test]
    fn test_comment_over_limit_rejected() {
        let comment = "x".repeat(MAX_COMMENT_LENGTH + 1);
        let err = validate_comment(&comment).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_review_notification_names_reviewer() {
        assert!(received_notification("Alice").contains("Alice"));
    }
}
