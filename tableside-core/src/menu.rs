//! Menu items offered by a restaurant.

use serde::{Deserialize, Serialize};

/// A single dish or drink on a restaurant's menu.
///
/// Prices are in the restaurant's local currency. Items flagged unavailable
/// are skipped by price aggregation.
///
/// # Examples
/// ```
/// use tableside_core::MenuItem;
///
/// let item = MenuItem::new("m1", "珍珠奶茶", 90.0);
/// assert!(item.available);
/// assert_eq!(item.price, 90.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier within the restaurant.
    pub id: String,
    /// Display name of the dish.
    pub name: String,
    /// Price in local currency; non-positive values are treated as unknown.
    pub price: f64,
    /// Whether the item is currently orderable.
    pub available: bool,
    /// Suitable for vegetarians.
    pub vegetarian: bool,
    /// Suitable for vegans.
    pub vegan: bool,
    /// Free of gluten.
    pub gluten_free: bool,
}

impl MenuItem {
    /// Construct an available item with no dietary flags set.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            available: true,
            vegetarian: false,
            vegan: false,
            gluten_free: false,
        }
    }

    /// Toggle availability while chaining.
    #[must_use]
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_items_default_to_available() {
        let item = MenuItem::new("m1", "noodles", 120.0);
        assert!(item.available);
        assert!(!item.vegan);
    }

    #[test]
    fn with_available_toggles() {
        let item = MenuItem::new("m1", "noodles", 120.0).with_available(false);
        assert!(!item.available);
    }
}
