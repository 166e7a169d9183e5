//! Core domain model for the Tableside restaurant discovery engine.
//!
//! This crate holds the catalog data types (restaurants, reviews, menus,
//! schedules), the value objects that drive searches and recommendations
//! ([`SearchCriteria`], [`UserPreferences`]), the [`RestaurantStore`]
//! catalog contract, and the leaf geo/temporal utilities everything else
//! builds on. None of the types here perform scoring themselves; the
//! `tableside-scorer` and `tableside-search` crates do that over snapshots
//! of this model.

#![forbid(unsafe_code)]

pub mod criteria;
pub mod cuisine;
pub mod hours;
pub mod location;
pub mod menu;
pub mod preferences;
pub mod restaurant;
pub mod review;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use criteria::{NearFilter, SearchCriteria, SortKey, SortOrder, DEFAULT_LIMIT};
pub use cuisine::CuisineType;
pub use hours::{BusinessHours, TimeSlot};
pub use location::{haversine_km, Location, EARTH_RADIUS_KM};
pub use menu::MenuItem;
pub use preferences::UserPreferences;
pub use restaurant::Restaurant;
pub use review::{Review, VALID_RATING_RANGE};
pub use store::{RestaurantStore, StoreError};
