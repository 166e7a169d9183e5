//! Review aggregation: averages, credibility weighting, histograms and
//! trends.
//!
//! Every function silently skips reviews whose rating falls outside 1–5;
//! a restaurant with no usable reviews scores 0.0 and classifies as
//! [`RatingTrend::Unknown`].

use chrono::{DateTime, Months, Utc};
use tableside_core::{Restaurant, Review};

/// Reviews needed before credibility weighting kicks in.
const WEIGHTING_THRESHOLD: usize = 5;

/// Reviews needed before a trend can be read.
const TREND_THRESHOLD: usize = 10;

/// Mean shift between review halves that counts as a real trend.
const TREND_EPSILON: f64 = 0.3;

/// Upper bound on any single review's weight.
const MAX_REVIEW_WEIGHT: f64 = 3.0;

/// Direction a restaurant's ratings are moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTrend {
    /// No usable reviews at all.
    Unknown,
    /// Some reviews, but too few to split meaningfully.
    InsufficientData,
    /// Recent reviews average notably higher than early ones.
    Improving,
    /// Recent reviews average notably lower than early ones.
    Declining,
    /// No meaningful shift either way.
    Stable,
}

/// Mean of the valid review ratings, rounded to one decimal.
///
/// Returns 0.0 when the restaurant has no valid reviews.
///
/// # Examples
/// ```
/// use tableside_core::{CuisineType, Restaurant, Review};
/// use tableside_scorer::average_rating;
///
/// let restaurant = Restaurant::new("r1", "test", CuisineType::Cafe)
///     .with_review(Review::new("v1", "r1", 4, ""))
///     .with_review(Review::new("v2", "r1", 5, ""));
/// assert_eq!(average_rating(&restaurant), 4.5);
/// ```
#[must_use]
pub fn average_rating(restaurant: &Restaurant) -> f64 {
    let (sum, count) = restaurant
        .valid_reviews()
        .fold((0.0, 0usize), |(sum, count), review| {
            (sum + f64::from(review.rating), count + 1)
        });
    if count == 0 {
        return 0.0;
    }
    round1(sum / count as f64)
}

/// Credibility-weighted average rating, rounded to one decimal.
///
/// Restaurants with fewer than five valid reviews fall back to
/// [`average_rating`]. Otherwise each review is weighted by reviewer
/// level, verification, helpful votes and recency, with the weight capped
/// at 3.0.
#[must_use]
pub fn weighted_rating(restaurant: &Restaurant) -> f64 {
    weighted_rating_at(restaurant, Utc::now())
}

/// [`weighted_rating`] against an explicit "now", for deterministic tests.
#[must_use]
pub fn weighted_rating_at(restaurant: &Restaurant, now: DateTime<Utc>) -> f64 {
    let reviews: Vec<&Review> = restaurant.valid_reviews().collect();
    if reviews.len() < WEIGHTING_THRESHOLD {
        return average_rating(restaurant);
    }

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for review in reviews {
        let weight = review_weight(review, now);
        weighted_sum += f64::from(review.rating) * weight;
        total_weight += weight;
    }
    if total_weight == 0.0 {
        return 0.0;
    }
    round1(weighted_sum / total_weight)
}

fn review_weight(review: &Review, now: DateTime<Utc>) -> f64 {
    let mut weight = 0.5 + f64::from(review.user_level) * 0.2;
    if review.verified {
        weight *= 1.3;
    }
    weight *= match review.helpful_count {
        count if count > 20 => 1.4,
        count if count > 10 => 1.2,
        count if count > 5 => 1.1,
        _ => 1.0,
    };
    let recent = now
        .checked_sub_months(Months::new(6))
        .is_some_and(|cutoff| review.created_at >= cutoff);
    weight *= if recent { 1.2 } else { 0.9 };
    weight.min(MAX_REVIEW_WEIGHT)
}

/// Classify how the restaurant's ratings have moved over time.
///
/// Needs at least ten valid reviews; they are ordered by creation time,
/// split at the midpoint, and the two halves' means compared. A shift
/// beyond ±0.3 counts as [`RatingTrend::Improving`] or
/// [`RatingTrend::Declining`].
#[must_use]
pub fn rating_trend(restaurant: &Restaurant) -> RatingTrend {
    let mut reviews: Vec<&Review> = restaurant.valid_reviews().collect();
    if reviews.is_empty() {
        return RatingTrend::Unknown;
    }
    if reviews.len() < TREND_THRESHOLD {
        return RatingTrend::InsufficientData;
    }

    reviews.sort_by_key(|review| review.created_at);
    let (early, late) = reviews.split_at(reviews.len() / 2);
    let shift = mean_rating(late) - mean_rating(early);
    if shift > TREND_EPSILON {
        RatingTrend::Improving
    } else if shift < -TREND_EPSILON {
        RatingTrend::Declining
    } else {
        RatingTrend::Stable
    }
}

fn mean_rating(reviews: &[&Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: f64 = reviews.iter().map(|review| f64::from(review.rating)).sum();
    sum / reviews.len() as f64
}

/// Count of reviews per star value, index 0 holding one-star counts.
///
/// Invalid ratings are ignored.
#[must_use]
pub fn rating_distribution(restaurant: &Restaurant) -> [u32; 5] {
    let mut counts = [0u32; 5];
    for review in restaurant.valid_reviews() {
        if let Some(slot) = counts.get_mut((review.rating - 1) as usize) {
            *slot += 1;
        }
    }
    counts
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
