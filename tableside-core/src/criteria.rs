//! Multi-criteria search requests.
//!
//! [`SearchCriteria`] aggregates every optional filter dimension into one
//! value. Construction is fluent with last-write-wins semantics; unset
//! dimensions simply do not filter.

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::CuisineType;

/// Default page size when none is requested.
pub const DEFAULT_LIMIT: usize = 20;

/// Key a result page is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Case-insensitive lexicographic name order.
    Name,
    /// Simple average rating.
    Rating,
    /// Effective price.
    Price,
    /// Number of valid reviews.
    ReviewCount,
    /// Distance from the near-filter centre; falls back to name when no
    /// near filter is present.
    Distance,
    /// `rating × log10(review_count + 1)`.
    #[default]
    Relevance,
}

/// Direction a sort key is applied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Smallest first.
    Ascending,
    /// Largest first.
    #[default]
    Descending,
}

/// Geographic radius filter around a centre point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearFilter {
    /// Centre of the search (`x` = longitude, `y` = latitude).
    pub center: Coord<f64>,
    /// Inclusive radius in kilometres.
    pub radius_km: f64,
}

/// Every optional dimension of a catalog search.
///
/// # Examples
/// ```
/// use tableside_core::{CuisineType, SearchCriteria, SortKey, SortOrder};
///
/// let criteria = SearchCriteria::new()
///     .with_city("台北市")
///     .with_cuisine(CuisineType::Japanese)
///     .with_min_rating(4.0)
///     .with_sort(SortKey::Rating, SortOrder::Descending)
///     .with_page(10, 0);
/// assert_eq!(criteria.limit, 10);
/// assert!(criteria.keyword.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Keyword matched against name and description.
    pub keyword: Option<String>,
    /// Exact city match, case-insensitive.
    pub city: Option<String>,
    /// Exact district match, case-insensitive.
    pub district: Option<String>,
    /// Single cuisine the restaurant must serve.
    pub cuisine: Option<CuisineType>,
    /// Any-of cuisine set; empty means no constraint.
    pub cuisines: Vec<CuisineType>,
    /// Minimum average rating, inclusive.
    pub min_rating: Option<f64>,
    /// Maximum average rating, inclusive.
    pub max_rating: Option<f64>,
    /// Minimum effective price, inclusive.
    pub min_price: Option<f64>,
    /// Maximum effective price, inclusive.
    pub max_price: Option<f64>,
    /// Exact price tier; takes priority over the price range.
    pub price_level: Option<u8>,
    /// Only restaurants open at query time.
    pub open_now: bool,
    /// Required delivery flag value.
    pub has_delivery: Option<bool>,
    /// Required takeout flag value.
    pub has_takeout: Option<bool>,
    /// Required parking flag value.
    pub has_parking: Option<bool>,
    /// Required reservation flag value.
    pub accepts_reservations: Option<bool>,
    /// Radius filter around a point.
    pub near: Option<NearFilter>,
    /// Sort key for the result page.
    pub sort_by: SortKey,
    /// Sort direction.
    pub order: SortOrder,
    /// Maximum page length.
    pub limit: usize,
    /// Number of leading results to skip.
    pub offset: usize,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            keyword: None,
            city: None,
            district: None,
            cuisine: None,
            cuisines: Vec::new(),
            min_rating: None,
            max_rating: None,
            min_price: None,
            max_price: None,
            price_level: None,
            open_now: false,
            has_delivery: None,
            has_takeout: None,
            has_parking: None,
            accepts_reservations: None,
            near: None,
            sort_by: SortKey::default(),
            order: SortOrder::default(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl SearchCriteria {
    /// Construct criteria that match every active restaurant.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the keyword while chaining.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Set the city while chaining.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Set the district while chaining.
    #[must_use]
    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    /// Require a single cuisine while chaining.
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: CuisineType) -> Self {
        self.cuisine = Some(cuisine);
        self
    }

    /// Require any of the given cuisines while chaining.
    #[must_use]
    pub fn with_cuisines(mut self, cuisines: impl IntoIterator<Item = CuisineType>) -> Self {
        self.cuisines = cuisines.into_iter().collect();
        self
    }

    /// Set the minimum average rating while chaining.
    #[must_use]
    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// Set the maximum average rating while chaining.
    #[must_use]
    pub fn with_max_rating(mut self, rating: f64) -> Self {
        self.max_rating = Some(rating);
        self
    }

    /// Set the effective-price range while chaining.
    #[must_use]
    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.min_price = Some(min);
        self.max_price = Some(max);
        self
    }

    /// Require an exact price tier while chaining.
    ///
    /// Takes priority over any price range also present.
    #[must_use]
    pub fn with_price_level(mut self, level: u8) -> Self {
        self.price_level = Some(level);
        self
    }

    /// Restrict to restaurants open at query time.
    #[must_use]
    pub fn open_now(mut self) -> Self {
        self.open_now = true;
        self
    }

    /// Require a delivery flag value while chaining.
    #[must_use]
    pub fn with_delivery(mut self, value: bool) -> Self {
        self.has_delivery = Some(value);
        self
    }

    /// Require a takeout flag value while chaining.
    #[must_use]
    pub fn with_takeout(mut self, value: bool) -> Self {
        self.has_takeout = Some(value);
        self
    }

    /// Require a parking flag value while chaining.
    #[must_use]
    pub fn with_parking(mut self, value: bool) -> Self {
        self.has_parking = Some(value);
        self
    }

    /// Require a reservation flag value while chaining.
    #[must_use]
    pub fn with_reservations(mut self, value: bool) -> Self {
        self.accepts_reservations = Some(value);
        self
    }

    /// Restrict to a radius around a centre point while chaining.
    #[must_use]
    pub fn with_near(mut self, center: Coord<f64>, radius_km: f64) -> Self {
        self.near = Some(NearFilter { center, radius_km });
        self
    }

    /// Set the sort key and direction while chaining.
    #[must_use]
    pub fn with_sort(mut self, sort_by: SortKey, order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.order = order;
        self
    }

    /// Set pagination while chaining.
    #[must_use]
    pub fn with_page(mut self, limit: usize, offset: usize) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_permissive() {
        let criteria = SearchCriteria::new();
        assert!(criteria.keyword.is_none());
        assert!(criteria.cuisines.is_empty());
        assert!(!criteria.open_now);
        assert_eq!(criteria.limit, DEFAULT_LIMIT);
        assert_eq!(criteria.offset, 0);
        assert_eq!(criteria.sort_by, SortKey::Relevance);
        assert_eq!(criteria.order, SortOrder::Descending);
    }

    #[test]
    fn last_write_wins() {
        let criteria = SearchCriteria::new().with_city("台北市").with_city("台中市");
        assert_eq!(criteria.city.as_deref(), Some("台中市"));
    }

    #[test]
    fn price_level_and_range_can_coexist() {
        // The pipeline gives the exact level priority; the criteria value
        // object just records both.
        let criteria = SearchCriteria::new()
            .with_price_range(100.0, 500.0)
            .with_price_level(2);
        assert_eq!(criteria.price_level, Some(2));
        assert_eq!(criteria.min_price, Some(100.0));
    }
}
