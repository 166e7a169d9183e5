//! Preference matching, similarity, popularity and proximity scoring.

use geo::Coord;
use tableside_core::{haversine_km, Restaurant, UserPreferences};

use crate::price::categorize_price_level;
use crate::rating::average_rating;

/// Neutral starting point for a preference match.
const MATCH_BASE: f64 = 50.0;

/// Similarity below this never surfaces as a recommendation.
const MIN_SIMILARITY: f64 = 0.2;

/// Cap on similar-restaurant results.
const MAX_SIMILAR: usize = 10;

/// Phantom review count used for Bayesian smoothing.
const SMOOTHING_COUNT: f64 = 5.0;

/// Prior rating the smoothing pulls towards.
const PRIOR_RATING: f64 = 3.5;

/// Default top-picks page size.
const DEFAULT_TOP_PICKS: usize = 5;

/// How well a restaurant fits a user's preferences.
///
/// Additive score starting at 50: cuisine likes and dislikes, price tier
/// versus the user's ceiling, average rating versus their floor, parking
/// requirement, delivery/takeout preferences and a distance term when both
/// sides have a location. Never negative.
///
/// # Examples
/// ```
/// use tableside_core::{CuisineType, Restaurant, UserPreferences};
/// use tableside_scorer::match_score;
///
/// let restaurant = Restaurant::new("r1", "test", CuisineType::Japanese);
/// let fan = UserPreferences::new().with_favorite(CuisineType::Japanese);
/// let critic = UserPreferences::new().with_disliked(CuisineType::Japanese);
/// assert!(match_score(&restaurant, &fan) > match_score(&restaurant, &critic));
/// ```
#[must_use]
pub fn match_score(restaurant: &Restaurant, preferences: &UserPreferences) -> f64 {
    let mut score = MATCH_BASE;

    if preferences.is_favorite(restaurant.cuisine) {
        score += 25.0;
    } else if preferences.dislikes(restaurant.cuisine) {
        score -= 40.0;
    }
    for extra in &restaurant.extra_cuisines {
        if preferences.is_favorite(*extra) {
            score += 10.0;
        } else if preferences.dislikes(*extra) {
            score -= 15.0;
        }
    }

    let tier = categorize_price_level(restaurant);
    if tier > 0 {
        if tier <= preferences.max_price_level() {
            score += 10.0;
        } else {
            score -= 25.0;
        }
    }

    let rating = average_rating(restaurant);
    if rating >= preferences.min_acceptable_rating() {
        score += rating * 5.0;
    } else {
        score -= 20.0;
    }

    if preferences.requires_parking {
        if restaurant.has_parking {
            score += 15.0;
        } else {
            score -= 25.0;
        }
    }
    if preferences.prefers_delivery && restaurant.has_delivery {
        score += 10.0;
    }
    if preferences.prefers_takeout && restaurant.has_takeout {
        score += 10.0;
    }

    if let (Some(here), Some(location)) = (preferences.location, restaurant.location.as_ref()) {
        let distance = haversine_km(here, location.coord);
        if preferences.max_distance_km > 0.0 && distance <= preferences.max_distance_km {
            score += 15.0 - (distance / preferences.max_distance_km) * 10.0;
        } else {
            score -= 20.0;
        }
    }

    score.max(0.0)
}

/// Every active restaurant, best preference match first.
#[must_use]
pub fn recommend_by_preferences(
    restaurants: &[Restaurant],
    preferences: &UserPreferences,
) -> Vec<Restaurant> {
    let mut scored: Vec<(Restaurant, f64)> = restaurants
        .iter()
        .filter(|restaurant| restaurant.active)
        .map(|restaurant| (restaurant.clone(), match_score(restaurant, preferences)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.into_iter().map(|(restaurant, _)| restaurant).collect()
}

/// How alike two restaurants are, normalised to `[0, 1]`.
///
/// Five dimensions, each weighted: cuisine (30, half credit when one's
/// secondary tags cover the other's primary), price-tier closeness (20),
/// rating closeness (20), same city (15) and capability agreement across
/// delivery/takeout/parking (15). Dimensions without comparable data drop
/// out of both the score and the divisor, so two sparsely described
/// restaurants are judged only on what they both declare.
#[must_use]
pub fn similarity(a: &Restaurant, b: &Restaurant) -> f64 {
    let mut points = 0.0;
    let mut weights = 0.0;

    weights += 30.0;
    if a.cuisine == b.cuisine {
        points += 30.0;
    } else if a.extra_cuisines.contains(&b.cuisine) || b.extra_cuisines.contains(&a.cuisine) {
        points += 15.0;
    }

    let tier_a = categorize_price_level(a);
    let tier_b = categorize_price_level(b);
    if tier_a > 0 && tier_b > 0 {
        weights += 20.0;
        points += (20.0 - 7.0 * f64::from(tier_a.abs_diff(tier_b))).max(0.0);
    }

    if a.review_count() > 0 && b.review_count() > 0 {
        weights += 20.0;
        points += (20.0 - 5.0 * (average_rating(a) - average_rating(b)).abs()).max(0.0);
    }

    if let (Some(loc_a), Some(loc_b)) = (a.location.as_ref(), b.location.as_ref()) {
        weights += 15.0;
        if loc_a.city == loc_b.city {
            points += 15.0;
        }
    }

    weights += 15.0;
    let agreements = [
        a.has_delivery == b.has_delivery,
        a.has_takeout == b.has_takeout,
        a.has_parking == b.has_parking,
    ]
    .iter()
    .filter(|same| **same)
    .count();
    points += agreements as f64 * 5.0;

    (points / weights).clamp(0.0, 1.0)
}

/// Up to ten restaurants similar to `reference`, most similar first.
///
/// The reference itself and inactive restaurants never appear; matches
/// below the 0.2 similarity floor are dropped.
#[must_use]
pub fn recommend_similar(reference: &Restaurant, restaurants: &[Restaurant]) -> Vec<Restaurant> {
    let mut scored: Vec<(Restaurant, f64)> = restaurants
        .iter()
        .filter(|candidate| candidate.active && candidate.id != reference.id)
        .map(|candidate| (candidate.clone(), similarity(reference, candidate)))
        .filter(|(_, score)| *score >= MIN_SIMILARITY)
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(MAX_SIMILAR);
    log::debug!(
        "similar to {}: {} candidates above threshold",
        reference.id,
        scored.len()
    );
    scored.into_iter().map(|(restaurant, _)| restaurant).collect()
}

/// Popularity independent of any user preference.
///
/// Bayesian-smoothed rating (`(n·rating + 5·3.5) / (n + 5)`) scaled by 20,
/// plus a `log10(n + 1) × 10` review-volume term, so heavily reviewed
/// restaurants outrank sparsely reviewed ones with the same average.
#[must_use]
pub fn popularity_score(restaurant: &Restaurant) -> f64 {
    let count = restaurant.review_count() as f64;
    let rating = average_rating(restaurant);
    let smoothed =
        (count * rating + SMOOTHING_COUNT * PRIOR_RATING) / (count + SMOOTHING_COUNT);
    smoothed * 20.0 + (count + 1.0).log10() * 10.0
}

/// The most popular reviewed restaurants, capped at `limit`.
#[must_use]
pub fn popular_restaurants(restaurants: &[Restaurant], limit: usize) -> Vec<Restaurant> {
    let mut scored: Vec<(Restaurant, f64)> = restaurants
        .iter()
        .filter(|restaurant| restaurant.active && restaurant.review_count() > 0)
        .map(|restaurant| (restaurant.clone(), popularity_score(restaurant)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(limit);
    scored.into_iter().map(|(restaurant, _)| restaurant).collect()
}

/// Distance in kilometres between two restaurants, or `f64::MAX` when
/// either location is unknown.
#[must_use]
pub fn distance_km(a: &Restaurant, b: &Restaurant) -> f64 {
    match (a.location.as_ref(), b.location.as_ref()) {
        (Some(loc_a), Some(loc_b)) => haversine_km(loc_a.coord, loc_b.coord),
        _ => f64::MAX,
    }
}

/// Highly rated restaurants near a point, best first.
///
/// Scores `rating × 10` plus a review-volume term capped at 20, plus a
/// proximity bonus of 30/20/10 inside 1/3/5 km. A non-positive `limit`
/// falls back to five results.
#[must_use]
pub fn top_picks(restaurants: &[Restaurant], here: Coord<f64>, limit: usize) -> Vec<Restaurant> {
    let limit = if limit == 0 { DEFAULT_TOP_PICKS } else { limit };
    let mut scored: Vec<(Restaurant, f64)> = restaurants
        .iter()
        .filter(|restaurant| restaurant.active)
        .map(|restaurant| {
            let rating_term = average_rating(restaurant) * 10.0;
            let volume_term =
                ((restaurant.review_count() as f64 + 1.0).log10() * 10.0).min(20.0);
            let proximity = restaurant
                .location
                .as_ref()
                .map_or(0.0, |location| {
                    proximity_bonus(haversine_km(here, location.coord))
                });
            (restaurant.clone(), rating_term + volume_term + proximity)
        })
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(limit);
    scored.into_iter().map(|(restaurant, _)| restaurant).collect()
}

fn proximity_bonus(distance_km: f64) -> f64 {
    if distance_km <= 1.0 {
        30.0
    } else if distance_km <= 3.0 {
        20.0
    } else if distance_km <= 5.0 {
        10.0
    } else {
        0.0
    }
}
