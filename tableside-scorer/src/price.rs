//! Price derivation, tier categorisation and cross-catalog statistics.

use tableside_core::Restaurant;

use crate::rating::average_rating;

/// Budget multiplier for the "close enough" allowance.
const BUDGET_ALLOWANCE: f64 = 1.1;

/// Tier thresholds: below 200 is tier 1, below 500 tier 2, below 1000
/// tier 3, anything above tier 4.
const TIER_THRESHOLDS: [f64; 3] = [200.0, 500.0, 1000.0];

/// Aggregate price statistics across a set of restaurants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceStatistics {
    /// Number of restaurants with a positive effective price.
    pub count: usize,
    /// Cheapest effective price.
    pub min: f64,
    /// Most expensive effective price.
    pub max: f64,
    /// Mean effective price, rounded to two decimals.
    pub average: f64,
    /// Median effective price; for even counts the upper of the two middle
    /// values is used.
    pub median: f64,
}

/// The price used for filtering and sorting.
///
/// Mean of the available menu items with a positive price, rounded to two
/// decimals; falls back to the restaurant's stored average price when no
/// menu item qualifies.
///
/// # Examples
/// ```
/// use tableside_core::{CuisineType, MenuItem, Restaurant};
/// use tableside_scorer::effective_price;
///
/// let restaurant = Restaurant::new("r1", "test", CuisineType::Cafe)
///     .with_menu_item(MenuItem::new("m1", "tea", 90.0))
///     .with_menu_item(MenuItem::new("m2", "noodles", 130.0));
/// assert_eq!(effective_price(&restaurant), 110.0);
/// ```
#[must_use]
pub fn effective_price(restaurant: &Restaurant) -> f64 {
    let (sum, count) = restaurant
        .menu
        .iter()
        .filter(|item| item.available && item.price > 0.0)
        .fold((0.0, 0usize), |(sum, count), item| {
            (sum + item.price, count + 1)
        });
    if count == 0 {
        return restaurant.average_price;
    }
    round2(sum / count as f64)
}

/// The restaurant's price tier, derived when not stored.
///
/// A stored tier (1–4) wins outright. Otherwise the effective price is
/// bucketed; 0 means no price data exists at all. The derivation is pure,
/// so repeated calls on an unmodified restaurant agree.
#[must_use]
pub fn categorize_price_level(restaurant: &Restaurant) -> u8 {
    if restaurant.price_level > 0 {
        return restaurant.price_level;
    }
    let price = effective_price(restaurant);
    if price <= 0.0 {
        return 0;
    }
    let tier = TIER_THRESHOLDS
        .iter()
        .position(|threshold| price < *threshold);
    match tier {
        Some(index) => index as u8 + 1,
        None => 4,
    }
}

/// Price statistics over the restaurants that have a positive effective
/// price, or `None` when no restaurant does.
#[must_use]
pub fn price_statistics(restaurants: &[Restaurant]) -> Option<PriceStatistics> {
    let mut prices: Vec<f64> = restaurants
        .iter()
        .map(effective_price)
        .filter(|price| *price > 0.0)
        .collect();
    if prices.is_empty() {
        return None;
    }
    prices.sort_by(f64::total_cmp);

    let count = prices.len();
    let min = *prices.first()?;
    let max = *prices.last()?;
    let sum: f64 = prices.iter().sum();
    let median = prices.get(count / 2).copied().unwrap_or(min);
    Some(PriceStatistics {
        count,
        min,
        max,
        average: round2(sum / count as f64),
        median,
    })
}

/// Restaurants affordable on `budget`, best value first.
///
/// Anything priced up to ten percent over the budget still qualifies.
/// Value is `rating × 100 / price`; a restaurant with no price data falls
/// back to its raw rating. Inactive restaurants never appear.
#[must_use]
pub fn recommend_by_budget(restaurants: &[Restaurant], budget: f64) -> Vec<Restaurant> {
    if budget <= 0.0 {
        return Vec::new();
    }
    let ceiling = budget * BUDGET_ALLOWANCE;
    let mut picks: Vec<(Restaurant, f64)> = restaurants
        .iter()
        .filter(|restaurant| restaurant.active)
        .filter_map(|restaurant| {
            let price = effective_price(restaurant);
            (price <= ceiling).then(|| (restaurant.clone(), value_score(restaurant, price)))
        })
        .collect();
    picks.sort_by(|a, b| b.1.total_cmp(&a.1));
    picks.into_iter().map(|(restaurant, _)| restaurant).collect()
}

fn value_score(restaurant: &Restaurant, price: f64) -> f64 {
    let rating = average_rating(restaurant);
    if price > 0.0 {
        rating * 100.0 / price
    } else {
        rating
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
