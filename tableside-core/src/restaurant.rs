//! The restaurant aggregate: identity, menu, reviews and capabilities.

use serde::{Deserialize, Serialize};

use crate::{BusinessHours, CuisineType, Location, MenuItem, Review};

/// A restaurant record as held by the catalog.
///
/// Identity is assigned externally. Inactive restaurants remain in the
/// catalog but are invisible to every search and recommendation.
///
/// # Examples
/// ```
/// use tableside_core::{CuisineType, Restaurant};
///
/// let restaurant = Restaurant::new("r1", "春水堂創始店", CuisineType::Taiwanese)
///     .with_price_level(2)
///     .with_delivery(true);
/// assert!(restaurant.active);
/// assert_eq!(restaurant.price_level, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Unique identifier, assigned by the caller.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Primary cuisine category.
    pub cuisine: CuisineType,
    /// Additional cuisine tags beyond the primary category.
    pub extra_cuisines: Vec<CuisineType>,
    /// Where the restaurant is; `None` when unknown.
    pub location: Option<Location>,
    /// Price tier: 0 = unknown, 1 (cheapest) to 4 (most expensive).
    pub price_level: u8,
    /// Fallback average price when no menu data exists.
    pub average_price: f64,
    /// Menu items.
    pub menu: Vec<MenuItem>,
    /// Customer reviews, append-only.
    pub reviews: Vec<Review>,
    /// Weekly schedule; `None` when hours are unknown.
    pub hours: Option<BusinessHours>,
    /// Offers delivery.
    pub has_delivery: bool,
    /// Offers takeout.
    pub has_takeout: bool,
    /// Has customer parking.
    pub has_parking: bool,
    /// Accepts table reservations.
    pub accepts_reservations: bool,
    /// Whether the restaurant is visible to searches.
    pub active: bool,
}

impl Restaurant {
    /// Construct an active restaurant with neutral defaults.
    pub fn new(id: impl Into<String>, name: impl Into<String>, cuisine: CuisineType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            cuisine,
            extra_cuisines: Vec::new(),
            location: None,
            price_level: 0,
            average_price: 0.0,
            menu: Vec::new(),
            reviews: Vec::new(),
            hours: None,
            has_delivery: false,
            has_takeout: false,
            has_parking: false,
            accepts_reservations: false,
            active: true,
        }
    }

    /// Set the description while chaining.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a secondary cuisine tag while chaining.
    #[must_use]
    pub fn with_extra_cuisine(mut self, cuisine: CuisineType) -> Self {
        if !self.extra_cuisines.contains(&cuisine) {
            self.extra_cuisines.push(cuisine);
        }
        self
    }

    /// Set the location while chaining.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the price tier, clamped into 0–4.
    #[must_use]
    pub fn with_price_level(mut self, level: u8) -> Self {
        self.price_level = level.min(4);
        self
    }

    /// Set the fallback average price while chaining.
    #[must_use]
    pub fn with_average_price(mut self, price: f64) -> Self {
        self.average_price = price;
        self
    }

    /// Set the weekly schedule while chaining.
    #[must_use]
    pub fn with_hours(mut self, hours: BusinessHours) -> Self {
        self.hours = Some(hours);
        self
    }

    /// Toggle delivery availability while chaining.
    #[must_use]
    pub fn with_delivery(mut self, value: bool) -> Self {
        self.has_delivery = value;
        self
    }

    /// Toggle takeout availability while chaining.
    #[must_use]
    pub fn with_takeout(mut self, value: bool) -> Self {
        self.has_takeout = value;
        self
    }

    /// Toggle parking availability while chaining.
    #[must_use]
    pub fn with_parking(mut self, value: bool) -> Self {
        self.has_parking = value;
        self
    }

    /// Toggle reservation support while chaining.
    #[must_use]
    pub fn with_reservations(mut self, value: bool) -> Self {
        self.accepts_reservations = value;
        self
    }

    /// Toggle search visibility while chaining.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Append a review.
    pub fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
    }

    /// Append a review while chaining.
    #[must_use]
    pub fn with_review(mut self, review: Review) -> Self {
        self.add_review(review);
        self
    }

    /// Append a menu item.
    pub fn add_menu_item(&mut self, item: MenuItem) {
        self.menu.push(item);
    }

    /// Append a menu item while chaining.
    #[must_use]
    pub fn with_menu_item(mut self, item: MenuItem) -> Self {
        self.add_menu_item(item);
        self
    }

    /// Iterate over reviews whose rating is inside the valid 1–5 range.
    pub fn valid_reviews(&self) -> impl Iterator<Item = &Review> {
        self.reviews.iter().filter(|r| r.has_valid_rating())
    }

    /// Number of reviews with a valid rating.
    #[must_use]
    pub fn review_count(&self) -> usize {
        self.valid_reviews().count()
    }

    /// Whether `cuisine` matches the primary category or any extra tag.
    #[must_use]
    pub fn serves(&self, cuisine: CuisineType) -> bool {
        self.cuisine == cuisine || self.extra_cuisines.contains(&cuisine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_count_ignores_invalid_ratings() {
        let restaurant = Restaurant::new("r1", "test", CuisineType::Cafe)
            .with_review(Review::new("rv1", "r1", 5, ""))
            .with_review(Review::new("rv2", "r1", 0, ""))
            .with_review(Review::new("rv3", "r1", 7, ""));
        assert_eq!(restaurant.reviews.len(), 3);
        assert_eq!(restaurant.review_count(), 1);
    }

    #[test]
    fn extra_cuisines_deduplicate() {
        let restaurant = Restaurant::new("r1", "test", CuisineType::Japanese)
            .with_extra_cuisine(CuisineType::Seafood)
            .with_extra_cuisine(CuisineType::Seafood);
        assert_eq!(restaurant.extra_cuisines.len(), 1);
    }

    #[test]
    fn serves_checks_primary_and_extras() {
        let restaurant = Restaurant::new("r1", "test", CuisineType::Japanese)
            .with_extra_cuisine(CuisineType::Seafood);
        assert!(restaurant.serves(CuisineType::Japanese));
        assert!(restaurant.serves(CuisineType::Seafood));
        assert!(!restaurant.serves(CuisineType::Thai));
    }

    #[test]
    fn price_level_is_capped_at_four() {
        let restaurant = Restaurant::new("r1", "test", CuisineType::Cafe).with_price_level(9);
        assert_eq!(restaurant.price_level, 4);
    }

    #[test]
    fn serde_round_trip_preserves_the_record() {
        let original = Restaurant::new("r1", "春水堂創始店", CuisineType::Taiwanese)
            .with_description("珍珠奶茶發源地")
            .with_location(Location::new(24.1466, 120.6723, "四維街30號", "台中市", "西區"))
            .with_price_level(2)
            .with_menu_item(MenuItem::new("m1", "珍珠奶茶", 90.0))
            .with_review(Review::new("v1", "r1", 5, "worth the queue"))
            .with_takeout(true);

        let json = serde_json::to_string(&original).expect("serialize restaurant");
        let decoded: Restaurant = serde_json::from_str(&json).expect("deserialize restaurant");
        assert_eq!(decoded, original);
    }
}
