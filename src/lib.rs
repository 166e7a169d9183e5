//! Facade crate for the Tableside restaurant discovery engine.
//!
//! This crate re-exports the domain model, the business-hours engine, the
//! scoring functions and the search pipeline so callers can depend on a
//! single crate.

#![forbid(unsafe_code)]

pub use tableside_core::{
    haversine_km, BusinessHours, CuisineType, Location, MenuItem, NearFilter, Restaurant,
    RestaurantStore, Review, SearchCriteria, SortKey, SortOrder, StoreError, TimeSlot,
    UserPreferences, DEFAULT_LIMIT, EARTH_RADIUS_KM, VALID_RATING_RANGE,
};

pub use tableside_hours::{default_holidays, HoursEngine};

pub use tableside_scorer::{
    average_rating, categorize_price_level, distance_km, effective_price, match_score,
    popular_restaurants, popularity_score, price_statistics, rating_distribution, rating_trend,
    recommend_by_budget, recommend_by_preferences, recommend_similar, similarity, top_picks,
    weighted_rating, weighted_rating_at, PriceStatistics, RatingTrend,
};

pub use tableside_search::{fuzzy_name_matches, global_matches, SearchEngine};

#[cfg(feature = "test-support")]
pub use tableside_core::test_support;
