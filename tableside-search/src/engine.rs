//! The multi-criteria filter/sort/paginate pipeline.

use std::cmp::Ordering;

use chrono::{Local, NaiveDateTime};
use tableside_core::{
    haversine_km, NearFilter, Restaurant, RestaurantStore, SearchCriteria, SortKey, SortOrder,
};
use tableside_hours::HoursEngine;
use tableside_scorer::{average_rating, categorize_price_level, effective_price};

/// Catalog search with filtering, sorting and pagination.
///
/// The engine owns its collaborators: the catalog store it snapshots on
/// every call and the [`HoursEngine`] that answers open-now questions.
/// Every search operates on a fresh snapshot, so results never observe a
/// partially updated record.
///
/// # Examples
/// ```
/// use tableside_core::test_support::sample_catalog;
/// use tableside_core::SearchCriteria;
/// use tableside_hours::HoursEngine;
/// use tableside_search::SearchEngine;
///
/// let engine = SearchEngine::new(sample_catalog(), HoursEngine::empty());
/// let everything = engine.search(&SearchCriteria::new());
/// assert_eq!(everything.len(), 10);
/// ```
#[derive(Debug)]
pub struct SearchEngine<S: RestaurantStore> {
    store: S,
    hours: HoursEngine,
}

impl<S: RestaurantStore> SearchEngine<S> {
    /// Build an engine over a catalog store and an hours engine.
    pub fn new(store: S, hours: HoursEngine) -> Self {
        Self { store, hours }
    }

    /// Shared access to the underlying catalog store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying catalog store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// The hours engine answering open-now questions.
    pub fn hours(&self) -> &HoursEngine {
        &self.hours
    }

    /// Mutable access to the hours engine, e.g. to adjust holidays.
    pub fn hours_mut(&mut self) -> &mut HoursEngine {
        &mut self.hours
    }

    /// Run the full filter chain, evaluating open-now against the local
    /// clock.
    #[must_use]
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<Restaurant> {
        self.search_at(criteria, Local::now().naive_local())
    }

    /// Run the full filter chain against an explicit instant.
    ///
    /// Filters apply in a fixed order: active, keyword, city, district,
    /// single cuisine, multi cuisine, rating range, price (exact tier wins
    /// over the range), open-now, capability flags, radius. The survivors
    /// are sorted and the requested page sliced out; an offset beyond the
    /// result yields an empty page.
    #[must_use]
    pub fn search_at(&self, criteria: &SearchCriteria, at: NaiveDateTime) -> Vec<Restaurant> {
        let mut results: Vec<Restaurant> = self
            .store
            .find_all()
            .into_iter()
            .filter(|restaurant| restaurant.active)
            .collect();
        let candidates = results.len();

        if let Some(keyword) = criteria.keyword.as_deref() {
            let needle = keyword.trim().to_lowercase();
            if !needle.is_empty() {
                results.retain(|r| {
                    r.name.to_lowercase().contains(&needle)
                        || r.description.to_lowercase().contains(&needle)
                });
            }
        }
        if let Some(city) = criteria.city.as_deref() {
            let wanted = city.to_lowercase();
            results.retain(|r| {
                r.location
                    .as_ref()
                    .is_some_and(|location| location.city.to_lowercase() == wanted)
            });
        }
        if let Some(district) = criteria.district.as_deref() {
            let wanted = district.to_lowercase();
            results.retain(|r| {
                r.location
                    .as_ref()
                    .is_some_and(|location| location.district.to_lowercase() == wanted)
            });
        }
        if let Some(cuisine) = criteria.cuisine {
            results.retain(|r| r.serves(cuisine));
        }
        if !criteria.cuisines.is_empty() {
            results.retain(|r| criteria.cuisines.iter().any(|cuisine| r.serves(*cuisine)));
        }
        if criteria.min_rating.is_some() || criteria.max_rating.is_some() {
            let min = criteria.min_rating.unwrap_or(0.0);
            let max = criteria.max_rating.unwrap_or(5.0);
            results.retain(|r| {
                let rating = average_rating(r);
                rating >= min && rating <= max
            });
        }
        if let Some(level) = criteria.price_level {
            results.retain(|r| categorize_price_level(r) == level);
        } else if criteria.min_price.is_some() || criteria.max_price.is_some() {
            let min = criteria.min_price.unwrap_or(0.0);
            let max = criteria.max_price.unwrap_or(f64::MAX);
            results.retain(|r| {
                let price = effective_price(r);
                price >= min && price <= max
            });
        }
        if criteria.open_now {
            results.retain(|r| self.hours.is_open_at(r, at));
        }
        if let Some(required) = criteria.has_delivery {
            results.retain(|r| r.has_delivery == required);
        }
        if let Some(required) = criteria.has_takeout {
            results.retain(|r| r.has_takeout == required);
        }
        if let Some(required) = criteria.has_parking {
            results.retain(|r| r.has_parking == required);
        }
        if let Some(required) = criteria.accepts_reservations {
            results.retain(|r| r.accepts_reservations == required);
        }
        if let Some(near) = criteria.near {
            results.retain(|r| {
                r.location
                    .as_ref()
                    .is_some_and(|location| haversine_km(near.center, location.coord) <= near.radius_km)
            });
        }

        log::debug!(
            "search matched {} of {candidates} active restaurants",
            results.len()
        );

        sort_results(&mut results, criteria);
        results
            .into_iter()
            .skip(criteria.offset)
            .take(criteria.limit)
            .collect()
    }

    /// Typo-tolerant name search over the catalog.
    #[must_use]
    pub fn search_fuzzy(&self, keyword: &str) -> Vec<Restaurant> {
        crate::keyword::fuzzy_name_matches(&self.store.find_all(), keyword)
    }

    /// Cross-field keyword search over the catalog.
    #[must_use]
    pub fn search_global(&self, keyword: &str) -> Vec<Restaurant> {
        crate::keyword::global_matches(&self.store.find_all(), keyword)
    }
}

fn sort_results(results: &mut [Restaurant], criteria: &SearchCriteria) {
    let near = criteria.near;
    results.sort_by(|a, b| {
        let ordering = compare(a, b, criteria.sort_by, near.as_ref());
        match criteria.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

fn compare(a: &Restaurant, b: &Restaurant, key: SortKey, near: Option<&NearFilter>) -> Ordering {
    match key {
        SortKey::Name => name_ordering(a, b),
        SortKey::Rating => average_rating(a).total_cmp(&average_rating(b)),
        SortKey::Price => effective_price(a).total_cmp(&effective_price(b)),
        SortKey::ReviewCount => a.review_count().cmp(&b.review_count()),
        SortKey::Distance => near.map_or_else(
            || name_ordering(a, b),
            |filter| {
                distance_from(a, filter).total_cmp(&distance_from(b, filter))
            },
        ),
        SortKey::Relevance => relevance(a).total_cmp(&relevance(b)),
    }
}

fn name_ordering(a: &Restaurant, b: &Restaurant) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

fn distance_from(restaurant: &Restaurant, filter: &NearFilter) -> f64 {
    restaurant
        .location
        .as_ref()
        .map_or(f64::MAX, |location| haversine_km(filter.center, location.coord))
}

fn relevance(restaurant: &Restaurant) -> f64 {
    average_rating(restaurant) * (restaurant.review_count() as f64 + 1.0).log10()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tableside_core::test_support::MemoryStore;
    use tableside_core::CuisineType;

    fn named(id: &str, name: &str, cuisine: CuisineType) -> Restaurant {
        Restaurant::new(id, name, cuisine)
    }

    #[fixture]
    fn engine() -> SearchEngine<MemoryStore> {
        let store = MemoryStore::with_restaurants(vec![
            named("r1", "Beta", CuisineType::Japanese).with_delivery(true),
            named("r2", "alpha", CuisineType::Thai),
            named("r3", "Gamma", CuisineType::Japanese)
                .with_extra_cuisine(CuisineType::Seafood)
                .with_active(false),
        ]);
        SearchEngine::new(store, HoursEngine::empty())
    }

    #[rstest]
    fn inactive_restaurants_are_invisible(engine: SearchEngine<MemoryStore>) {
        let results = engine.search(&SearchCriteria::new());
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.id != "r3"));
    }

    #[rstest]
    fn single_cuisine_filter_checks_primary_and_extras(engine: SearchEngine<MemoryStore>) {
        let criteria = SearchCriteria::new().with_cuisine(CuisineType::Japanese);
        let results = engine.search(&criteria);
        assert_eq!(results.len(), 1);
        assert_eq!(results.first().map(|r| r.id.as_str()), Some("r1"));
    }

    #[rstest]
    fn name_sort_is_case_insensitive(engine: SearchEngine<MemoryStore>) {
        let criteria = SearchCriteria::new().with_sort(SortKey::Name, SortOrder::Ascending);
        let names: Vec<String> = engine
            .search(&criteria)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["alpha", "Beta"]);
    }

    #[rstest]
    fn capability_filter_requires_exact_value(engine: SearchEngine<MemoryStore>) {
        let with_delivery = engine.search(&SearchCriteria::new().with_delivery(true));
        assert_eq!(with_delivery.len(), 1);
        let without_delivery = engine.search(&SearchCriteria::new().with_delivery(false));
        assert_eq!(without_delivery.len(), 1);
        assert_eq!(
            without_delivery.first().map(|r| r.id.as_str()),
            Some("r2")
        );
    }

    #[rstest]
    fn offset_beyond_results_yields_empty_page(engine: SearchEngine<MemoryStore>) {
        let criteria = SearchCriteria::new().with_page(10, 99);
        assert!(engine.search(&criteria).is_empty());
    }

    #[rstest]
    fn short_tail_is_truncated_not_padded(engine: SearchEngine<MemoryStore>) {
        let criteria = SearchCriteria::new().with_page(10, 1);
        assert_eq!(engine.search(&criteria).len(), 1);
    }

    #[rstest]
    fn distance_sort_without_near_filter_falls_back_to_name(engine: SearchEngine<MemoryStore>) {
        let criteria = SearchCriteria::new().with_sort(SortKey::Distance, SortOrder::Ascending);
        let names: Vec<String> = engine
            .search(&criteria)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["alpha", "Beta"]);
    }
}
