//! Catalog access for restaurant records.
//!
//! The `RestaurantStore` trait defines the contract the search and
//! recommendation layers consume: a mapping from id to [`Restaurant`]
//! supporting save, lookup and delete. Implementations are expected to be
//! simple in-memory maps; there is no durability requirement.

use thiserror::Error;

use crate::Restaurant;

/// Errors returned by [`RestaurantStore::save`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The restaurant id was empty or whitespace.
    #[error("restaurant id must not be empty")]
    InvalidId,
}

/// Mapping from id to [`Restaurant`] with save/find/delete semantics.
///
/// Saving an existing id replaces the record. The store is not required to
/// be thread-safe; the engine assumes single-writer, single-reader access.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use tableside_core::{CuisineType, Restaurant, RestaurantStore, StoreError};
///
/// #[derive(Default)]
/// struct MapStore {
///     records: HashMap<String, Restaurant>,
/// }
///
/// impl RestaurantStore for MapStore {
///     fn save(&mut self, restaurant: Restaurant) -> Result<Restaurant, StoreError> {
///         if restaurant.id.trim().is_empty() {
///             return Err(StoreError::InvalidId);
///         }
///         self.records.insert(restaurant.id.clone(), restaurant.clone());
///         Ok(restaurant)
///     }
///
///     fn find_by_id(&self, id: &str) -> Option<Restaurant> {
///         self.records.get(id).cloned()
///     }
///
///     fn find_all(&self) -> Vec<Restaurant> {
///         self.records.values().cloned().collect()
///     }
///
///     fn exists(&self, id: &str) -> bool {
///         self.records.contains_key(id)
///     }
///
///     fn delete(&mut self, id: &str) -> bool {
///         self.records.remove(id).is_some()
///     }
///
///     fn count(&self) -> usize {
///         self.records.len()
///     }
/// }
///
/// let mut store = MapStore::default();
/// store.save(Restaurant::new("r1", "test", CuisineType::Cafe))?;
/// assert!(store.exists("r1"));
/// assert_eq!(store.count(), 1);
/// # Ok::<(), StoreError>(())
/// ```
pub trait RestaurantStore {
    /// Insert or replace a restaurant, returning the stored record.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidId`] when the id is empty or whitespace.
    fn save(&mut self, restaurant: Restaurant) -> Result<Restaurant, StoreError>;

    /// Look up a restaurant by id.
    fn find_by_id(&self, id: &str) -> Option<Restaurant>;

    /// Return every stored restaurant, active or not.
    fn find_all(&self) -> Vec<Restaurant>;

    /// Whether a record with this id exists.
    fn exists(&self, id: &str) -> bool;

    /// Remove a record, reporting whether one was present.
    fn delete(&mut self, id: &str) -> bool;

    /// Number of stored records.
    fn count(&self) -> usize;
}
