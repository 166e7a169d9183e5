//! Scoring for the Tableside restaurant discovery engine.
//!
//! Three complementary capabilities, all pure functions over catalog
//! snapshots:
//!
//! - **Rating aggregation** ([`rating`]) turns a restaurant's review list
//!   into simple and credibility-weighted averages, a star histogram and a
//!   trend classification.
//! - **Price analysis** ([`price`]) derives an effective price from the
//!   menu, buckets it into the 1–4 tier scale and aggregates statistics
//!   across a catalog.
//! - **Recommendation scoring** ([`recommend`]) ranks restaurants by
//!   preference match, pairwise similarity, Bayesian-smoothed popularity
//!   and proximity-aware top picks.
//!
//! Nothing here fails: absent data degrades to zero scores, `Unknown`
//! classifications or empty result lists.

#![forbid(unsafe_code)]

pub mod price;
pub mod rating;
pub mod recommend;

pub use price::{
    categorize_price_level, effective_price, price_statistics, recommend_by_budget,
    PriceStatistics,
};
pub use rating::{
    average_rating, rating_distribution, rating_trend, weighted_rating, weighted_rating_at,
    RatingTrend,
};
pub use recommend::{
    distance_km, match_score, popular_restaurants, popularity_score, recommend_by_preferences,
    recommend_similar, similarity, top_picks,
};
