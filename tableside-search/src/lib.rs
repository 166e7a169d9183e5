//! Search pipeline for the Tableside restaurant discovery engine.
//!
//! [`SearchEngine`] orchestrates the other crates: it pulls a snapshot
//! from the catalog store, applies the [`SearchCriteria`] filter chain in
//! a fixed order, delegates rating/price/open-now decisions to the scorer
//! and hours engines, sorts with the requested comparator and paginates.
//! Keyword lookups come in three flavours: the criteria keyword filter,
//! typo-tolerant fuzzy name search and a global match across name,
//! description, cuisine, city and address.
//!
//! [`SearchCriteria`]: tableside_core::SearchCriteria

#![forbid(unsafe_code)]

mod engine;
mod keyword;

pub use engine::SearchEngine;
pub use keyword::{fuzzy_name_matches, global_matches};
