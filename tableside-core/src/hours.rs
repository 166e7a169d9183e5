//! Weekly opening hours and time slots.
//!
//! A slot whose close time is numerically earlier than its open time spans
//! midnight: 22:00–02:00 is open late evening and into the next morning.
//! Absence of a slot for a weekday means the restaurant is closed that day.

use std::collections::HashMap;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// An opening interval within a single day.
///
/// Containment is inclusive at both boundaries. Overnight slots
/// (`close < open`) wrap past midnight.
///
/// # Examples
/// ```
/// use chrono::NaiveTime;
/// use tableside_core::TimeSlot;
///
/// let late = TimeSlot::new(
///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(2, 0, 0).unwrap(),
/// );
/// assert!(late.is_overnight());
/// assert!(late.contains(NaiveTime::from_hms_opt(23, 30, 0).unwrap()));
/// assert!(late.contains(NaiveTime::from_hms_opt(1, 0, 0).unwrap()));
/// assert!(!late.contains(NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Opening time.
    pub open: NaiveTime,
    /// Closing time; earlier than `open` for overnight slots.
    pub close: NaiveTime,
}

impl TimeSlot {
    /// Construct a slot from open and close times.
    #[must_use]
    pub const fn new(open: NaiveTime, close: NaiveTime) -> Self {
        Self { open, close }
    }

    /// Whether the slot wraps past midnight.
    #[must_use]
    pub fn is_overnight(&self) -> bool {
        self.close < self.open
    }

    /// Whether `time` falls inside the slot, boundaries included.
    #[must_use]
    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.is_overnight() {
            time >= self.open || time <= self.close
        } else {
            time >= self.open && time <= self.close
        }
    }
}

/// Weekly schedule plus holiday behaviour.
///
/// # Examples
/// ```
/// use chrono::{NaiveTime, Weekday};
/// use tableside_core::{BusinessHours, TimeSlot};
///
/// let open = NaiveTime::from_hms_opt(11, 30, 0).unwrap();
/// let close = NaiveTime::from_hms_opt(21, 0, 0).unwrap();
/// let hours = BusinessHours::new().with_slot(Weekday::Mon, TimeSlot::new(open, close));
/// assert!(hours.slot(Weekday::Mon).is_some());
/// assert!(hours.slot(Weekday::Sun).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BusinessHours {
    slots: HashMap<Weekday, TimeSlot>,
    /// Whether the restaurant closes on dates in the holiday calendar.
    pub closed_on_holidays: bool,
}

impl BusinessHours {
    /// Construct an always-closed schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slot for a weekday while chaining. Last write wins.
    #[must_use]
    pub fn with_slot(mut self, weekday: Weekday, slot: TimeSlot) -> Self {
        self.set_slot(weekday, slot);
        self
    }

    /// Apply the same slot to every day of the week.
    #[must_use]
    pub fn with_daily_slot(mut self, slot: TimeSlot) -> Self {
        for weekday in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            self.set_slot(weekday, slot);
        }
        self
    }

    /// Mark the schedule as closed on holidays while chaining.
    #[must_use]
    pub fn with_holiday_closure(mut self, closed: bool) -> Self {
        self.closed_on_holidays = closed;
        self
    }

    /// Insert or replace the slot for a weekday.
    pub fn set_slot(&mut self, weekday: Weekday, slot: TimeSlot) {
        self.slots.insert(weekday, slot);
    }

    /// Remove a weekday's slot, closing the restaurant that day.
    pub fn clear_slot(&mut self, weekday: Weekday) {
        self.slots.remove(&weekday);
    }

    /// Look up the slot for a weekday; `None` means closed that day.
    #[must_use]
    pub fn slot(&self, weekday: Weekday) -> Option<&TimeSlot> {
        self.slots.get(&weekday)
    }

    /// Iterate over all configured weekday slots.
    pub fn slots(&self) -> impl Iterator<Item = (Weekday, &TimeSlot)> {
        self.slots.iter().map(|(weekday, slot)| (*weekday, slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
    }

    #[rstest]
    #[case(at(23, 30), true)]
    #[case(at(1, 0), true)]
    #[case(at(12, 0), false)]
    // Both boundaries are inside the interval.
    #[case(at(22, 0), true)]
    #[case(at(2, 0), true)]
    #[case(at(2, 1), false)]
    #[case(at(21, 59), false)]
    fn overnight_containment(#[case] time: NaiveTime, #[case] expected: bool) {
        let slot = TimeSlot::new(at(22, 0), at(2, 0));
        assert!(slot.is_overnight());
        assert_eq!(slot.contains(time), expected);
    }

    #[rstest]
    #[case(at(11, 30), true)]
    #[case(at(21, 0), true)]
    #[case(at(15, 0), true)]
    #[case(at(11, 29), false)]
    #[case(at(21, 1), false)]
    fn same_day_containment(#[case] time: NaiveTime, #[case] expected: bool) {
        let slot = TimeSlot::new(at(11, 30), at(21, 0));
        assert!(!slot.is_overnight());
        assert_eq!(slot.contains(time), expected);
    }

    #[test]
    fn missing_weekday_means_closed() {
        let hours = BusinessHours::new().with_slot(Weekday::Fri, TimeSlot::new(at(9, 0), at(17, 0)));
        assert!(hours.slot(Weekday::Fri).is_some());
        assert!(hours.slot(Weekday::Mon).is_none());
    }

    #[test]
    fn daily_slot_covers_all_seven_days() {
        let hours = BusinessHours::new().with_daily_slot(TimeSlot::new(at(8, 0), at(20, 0)));
        assert_eq!(hours.slots().count(), 7);
    }

    #[test]
    fn last_write_wins_for_a_weekday() {
        let hours = BusinessHours::new()
            .with_slot(Weekday::Mon, TimeSlot::new(at(9, 0), at(17, 0)))
            .with_slot(Weekday::Mon, TimeSlot::new(at(10, 0), at(18, 0)));
        let slot = hours.slot(Weekday::Mon).expect("slot present");
        assert_eq!(slot.open, at(10, 0));
    }
}
