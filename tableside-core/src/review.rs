//! Customer reviews attached to a restaurant.
//!
//! Reviews are append-only: the engine never updates or deletes them.
//! Ratings outside the valid 1–5 range are kept on the record but silently
//! ignored by every aggregation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive range of ratings considered valid by aggregations.
pub const VALID_RATING_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

/// A customer review of a restaurant.
///
/// # Examples
/// ```
/// use tableside_core::Review;
///
/// let review = Review::new("rv1", "r1", 5, "worth the queue");
/// assert!(review.has_valid_rating());
/// assert_eq!(review.user_level, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Unique identifier.
    pub id: String,
    /// Identifier of the reviewed restaurant.
    pub restaurant_id: String,
    /// Star rating; valid values are 1–5, anything else is ignored.
    pub rating: i32,
    /// Free-text comment.
    pub comment: String,
    /// When the review was written; defaults to creation time.
    pub created_at: DateTime<Utc>,
    /// Reviewer credibility level, 1–5.
    pub user_level: u8,
    /// Whether the visit was verified.
    pub verified: bool,
    /// How many readers marked the review helpful.
    pub helpful_count: u32,
}

impl Review {
    /// Construct a review stamped with the current time.
    ///
    /// The reviewer starts at level 1, unverified, with no helpful votes.
    pub fn new(
        id: impl Into<String>,
        restaurant_id: impl Into<String>,
        rating: i32,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            restaurant_id: restaurant_id.into(),
            rating,
            comment: comment.into(),
            created_at: Utc::now(),
            user_level: 1,
            verified: false,
            helpful_count: 0,
        }
    }

    /// Override the creation timestamp while chaining.
    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Set the reviewer level, clamped into 1–5.
    #[must_use]
    pub fn with_user_level(mut self, level: u8) -> Self {
        self.user_level = level.clamp(1, 5);
        self
    }

    /// Mark the review as verified while chaining.
    #[must_use]
    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    /// Set the helpful-vote count while chaining.
    #[must_use]
    pub fn with_helpful_count(mut self, count: u32) -> Self {
        self.helpful_count = count;
        self
    }

    /// Whether the rating falls inside the valid 1–5 range.
    #[must_use]
    pub fn has_valid_rating(&self) -> bool {
        VALID_RATING_RANGE.contains(&self.rating)
    }
}
