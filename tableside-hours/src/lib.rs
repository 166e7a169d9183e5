//! Temporal reasoning over restaurant schedules.
//!
//! The [`HoursEngine`] answers "is it open", "when does it open next",
//! "is it about to close" and "how many hours a week does it run" for a
//! [`Restaurant`](tableside_core::Restaurant) snapshot. The engine owns its
//! holiday calendar as an instance field; there is no process-wide state, so
//! two engines with different calendars never interfere.

#![forbid(unsafe_code)]

mod calendar;
mod engine;

pub use calendar::default_holidays;
pub use engine::HoursEngine;
