//! Cuisine categories used to classify restaurants.
//!
//! The enum is a closed set: unrecognised input maps to
//! [`CuisineType::Other`] rather than failing, so lookups stay total.

use serde::{Deserialize, Serialize};

/// Category of food a restaurant primarily serves.
///
/// # Examples
/// ```
/// use tableside_core::CuisineType;
///
/// assert_eq!(CuisineType::Taiwanese.as_str(), "taiwanese");
/// assert_eq!(CuisineType::from_name("hot_pot"), CuisineType::HotPot);
/// assert_eq!(CuisineType::from_name("martian"), CuisineType::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CuisineType {
    /// Taiwanese dishes and street food.
    Taiwanese,
    /// Chinese regional cuisines.
    Chinese,
    /// Japanese cuisine.
    Japanese,
    /// Korean cuisine.
    Korean,
    /// Thai cuisine.
    Thai,
    /// Vietnamese cuisine.
    Vietnamese,
    /// Indian cuisine.
    Indian,
    /// Italian cuisine.
    Italian,
    /// French cuisine.
    French,
    /// American diner and grill fare.
    American,
    /// Hot pot restaurants.
    HotPot,
    /// Barbecue and grill houses.
    Barbecue,
    /// Seafood specialists.
    Seafood,
    /// Vegetarian and plant-based kitchens.
    Vegetarian,
    /// Fast food chains.
    FastFood,
    /// Cafes and coffee houses.
    Cafe,
    /// Dessert and bakery shops.
    Dessert,
    /// Anything that does not fit the closed set.
    Other,
}

impl CuisineType {
    /// Return the stable lowercase identifier for this cuisine.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Taiwanese => "taiwanese",
            Self::Chinese => "chinese",
            Self::Japanese => "japanese",
            Self::Korean => "korean",
            Self::Thai => "thai",
            Self::Vietnamese => "vietnamese",
            Self::Indian => "indian",
            Self::Italian => "italian",
            Self::French => "french",
            Self::American => "american",
            Self::HotPot => "hot_pot",
            Self::Barbecue => "barbecue",
            Self::Seafood => "seafood",
            Self::Vegetarian => "vegetarian",
            Self::FastFood => "fast_food",
            Self::Cafe => "cafe",
            Self::Dessert => "dessert",
            Self::Other => "other",
        }
    }

    /// Return the human-readable display name.
    ///
    /// Display names are what keyword search matches against; identifiers
    /// from [`CuisineType::as_str`] are for storage and lookups.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Taiwanese => "Taiwanese",
            Self::Chinese => "Chinese",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::Thai => "Thai",
            Self::Vietnamese => "Vietnamese",
            Self::Indian => "Indian",
            Self::Italian => "Italian",
            Self::French => "French",
            Self::American => "American",
            Self::HotPot => "Hot Pot",
            Self::Barbecue => "Barbecue",
            Self::Seafood => "Seafood",
            Self::Vegetarian => "Vegetarian",
            Self::FastFood => "Fast Food",
            Self::Cafe => "Cafe",
            Self::Dessert => "Dessert",
            Self::Other => "Other",
        }
    }

    /// Reverse lookup from an identifier or display name.
    ///
    /// Matching is case-insensitive and accepts both the stable identifier
    /// and the display name. Unrecognised input yields
    /// [`CuisineType::Other`] so callers never deal with an absent value.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let needle = name.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == needle || c.display_name().to_lowercase() == needle)
            .unwrap_or(Self::Other)
    }

    /// The full closed set of cuisine categories.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Taiwanese,
            Self::Chinese,
            Self::Japanese,
            Self::Korean,
            Self::Thai,
            Self::Vietnamese,
            Self::Indian,
            Self::Italian,
            Self::French,
            Self::American,
            Self::HotPot,
            Self::Barbecue,
            Self::Seafood,
            Self::Vegetarian,
            Self::FastFood,
            Self::Cafe,
            Self::Dessert,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for CuisineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
