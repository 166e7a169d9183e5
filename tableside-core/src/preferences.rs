//! User taste profiles driving recommendations.
//!
//! Favourite and disliked cuisine sets are mutually exclusive: adding a
//! cuisine to one side removes it from the other. Numeric preferences are
//! clamped into their documented ranges on write.

use std::collections::HashSet;

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::CuisineType;

/// A user's dining preferences.
///
/// # Examples
/// ```
/// use tableside_core::{CuisineType, UserPreferences};
///
/// let mut prefs = UserPreferences::new();
/// prefs.add_favorite(CuisineType::Japanese);
/// prefs.add_disliked(CuisineType::Japanese);
/// // Disliking moved it out of the favourites.
/// assert!(!prefs.is_favorite(CuisineType::Japanese));
/// assert!(prefs.dislikes(CuisineType::Japanese));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    favorite_cuisines: HashSet<CuisineType>,
    disliked_cuisines: HashSet<CuisineType>,
    max_price_level: u8,
    min_acceptable_rating: f64,
    /// Parking is a hard requirement rather than a preference.
    pub requires_parking: bool,
    /// Delivery availability is preferred but not required.
    pub prefers_delivery: bool,
    /// Takeout availability is preferred but not required.
    pub prefers_takeout: bool,
    /// Furthest acceptable distance from the reference location.
    pub max_distance_km: f64,
    /// Reference location for distance scoring, when known.
    pub location: Option<Coord<f64>>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            favorite_cuisines: HashSet::new(),
            disliked_cuisines: HashSet::new(),
            max_price_level: 4,
            min_acceptable_rating: 0.0,
            requires_parking: false,
            prefers_delivery: false,
            prefers_takeout: false,
            max_distance_km: 5.0,
            location: None,
        }
    }
}

impl UserPreferences {
    /// Construct a profile with no likes, no dislikes and permissive limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a cuisine as a favourite, removing any dislike of it.
    pub fn add_favorite(&mut self, cuisine: CuisineType) {
        self.disliked_cuisines.remove(&cuisine);
        self.favorite_cuisines.insert(cuisine);
    }

    /// Mark a cuisine as disliked, removing any favourite mark of it.
    pub fn add_disliked(&mut self, cuisine: CuisineType) {
        self.favorite_cuisines.remove(&cuisine);
        self.disliked_cuisines.insert(cuisine);
    }

    /// Remove a cuisine from both sets.
    pub fn clear_opinion(&mut self, cuisine: CuisineType) {
        self.favorite_cuisines.remove(&cuisine);
        self.disliked_cuisines.remove(&cuisine);
    }

    /// Mark a favourite while chaining.
    #[must_use]
    pub fn with_favorite(mut self, cuisine: CuisineType) -> Self {
        self.add_favorite(cuisine);
        self
    }

    /// Mark a dislike while chaining.
    #[must_use]
    pub fn with_disliked(mut self, cuisine: CuisineType) -> Self {
        self.add_disliked(cuisine);
        self
    }

    /// Whether the cuisine is currently a favourite.
    #[must_use]
    pub fn is_favorite(&self, cuisine: CuisineType) -> bool {
        self.favorite_cuisines.contains(&cuisine)
    }

    /// Whether the cuisine is currently disliked.
    #[must_use]
    pub fn dislikes(&self, cuisine: CuisineType) -> bool {
        self.disliked_cuisines.contains(&cuisine)
    }

    /// The favourite cuisine set.
    #[must_use]
    pub fn favorites(&self) -> &HashSet<CuisineType> {
        &self.favorite_cuisines
    }

    /// The disliked cuisine set.
    #[must_use]
    pub fn disliked(&self) -> &HashSet<CuisineType> {
        &self.disliked_cuisines
    }

    /// Set the price-tier ceiling, clamped into 1–4.
    pub fn set_max_price_level(&mut self, level: u8) {
        self.max_price_level = level.clamp(1, 4);
    }

    /// Price-tier ceiling.
    #[must_use]
    pub fn max_price_level(&self) -> u8 {
        self.max_price_level
    }

    /// Set the price ceiling while chaining.
    #[must_use]
    pub fn with_max_price_level(mut self, level: u8) -> Self {
        self.set_max_price_level(level);
        self
    }

    /// Set the lowest acceptable average rating, clamped into 0–5.
    pub fn set_min_acceptable_rating(&mut self, rating: f64) {
        self.min_acceptable_rating = rating.clamp(0.0, 5.0);
    }

    /// Lowest acceptable average rating.
    #[must_use]
    pub fn min_acceptable_rating(&self) -> f64 {
        self.min_acceptable_rating
    }

    /// Set the rating floor while chaining.
    #[must_use]
    pub fn with_min_acceptable_rating(mut self, rating: f64) -> Self {
        self.set_min_acceptable_rating(rating);
        self
    }

    /// Set the reference location while chaining.
    #[must_use]
    pub fn with_location(mut self, location: Coord<f64>, max_distance_km: f64) -> Self {
        self.location = Some(location);
        self.max_distance_km = max_distance_km;
        self
    }
}
