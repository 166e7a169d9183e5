//! Open/closed reasoning, next-opening search and schedule aggregation.

use std::collections::HashSet;

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, Timelike, Utc};
use tableside_core::Restaurant;

use crate::calendar::default_holidays;

/// How many days ahead [`HoursEngine::next_open_time`] searches.
const NEXT_OPEN_WINDOW_DAYS: i64 = 14;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Answers temporal questions about a restaurant's schedule.
///
/// The engine holds the holiday calendar as plain instance state. A fresh
/// engine starts with the fixed-date holidays of the current year; use
/// [`HoursEngine::empty`] for a blank calendar and
/// [`HoursEngine::add_holiday`]/[`HoursEngine::remove_holiday`] to adjust.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use tableside_hours::HoursEngine;
///
/// let mut engine = HoursEngine::empty();
/// let date = NaiveDate::from_ymd_opt(2026, 10, 10).unwrap();
/// engine.add_holiday(date);
/// assert!(engine.is_holiday(date));
/// ```
#[derive(Debug, Clone)]
pub struct HoursEngine {
    holidays: HashSet<NaiveDate>,
}

impl Default for HoursEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HoursEngine {
    /// Engine seeded with the default calendar for the current year.
    #[must_use]
    pub fn new() -> Self {
        Self {
            holidays: default_holidays(Utc::now().year()).into_iter().collect(),
        }
    }

    /// Engine with no holidays at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            holidays: HashSet::new(),
        }
    }

    /// Engine seeded from an explicit set of dates.
    pub fn with_holidays<I>(holidays: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Add a date to the holiday calendar.
    pub fn add_holiday(&mut self, date: NaiveDate) {
        self.holidays.insert(date);
    }

    /// Remove a date, reporting whether it was present.
    pub fn remove_holiday(&mut self, date: NaiveDate) -> bool {
        self.holidays.remove(&date)
    }

    /// Whether the calendar contains `date`.
    #[must_use]
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// The current holiday calendar.
    #[must_use]
    pub fn holidays(&self) -> &HashSet<NaiveDate> {
        &self.holidays
    }

    /// Whether the restaurant is open at the given instant.
    ///
    /// Three-way decision: an inactive restaurant is closed; a
    /// holiday-observing restaurant is closed on calendar dates; otherwise
    /// the weekday's slot decides, with overnight slots wrapping past
    /// midnight. A restaurant without schedule data is treated as closed.
    #[must_use]
    pub fn is_open_at(&self, restaurant: &Restaurant, at: NaiveDateTime) -> bool {
        if !restaurant.active {
            return false;
        }
        let Some(hours) = restaurant.hours.as_ref() else {
            return false;
        };
        if hours.closed_on_holidays && self.is_holiday(at.date()) {
            return false;
        }
        hours
            .slot(at.weekday())
            .is_some_and(|slot| slot.contains(at.time()))
    }

    /// Whether the restaurant is open right now, on the local clock.
    #[must_use]
    pub fn is_open_now(&self, restaurant: &Restaurant) -> bool {
        self.is_open_at(restaurant, Local::now().naive_local())
    }

    /// The next instant the restaurant is open, within a fourteen-day
    /// window.
    ///
    /// Returns `from` itself when the restaurant is already open. On the
    /// starting day only an opening strictly after `from` counts; on later
    /// days any opening does. Days the holiday calendar closes are skipped.
    /// `None` means the window holds no opening at all.
    #[must_use]
    pub fn next_open_time(&self, restaurant: &Restaurant, from: NaiveDateTime) -> Option<NaiveDateTime> {
        if self.is_open_at(restaurant, from) {
            return Some(from);
        }
        if !restaurant.active {
            return None;
        }
        let hours = restaurant.hours.as_ref()?;

        for day_offset in 0..=NEXT_OPEN_WINDOW_DAYS {
            let date = from.date() + Duration::days(day_offset);
            if hours.closed_on_holidays && self.is_holiday(date) {
                continue;
            }
            let Some(slot) = hours.slot(date.weekday()) else {
                continue;
            };
            let opening = date.and_time(slot.open);
            if day_offset > 0 || opening > from {
                return Some(opening);
            }
        }
        log::debug!(
            "no opening for restaurant {} within {NEXT_OPEN_WINDOW_DAYS} days of {from}",
            restaurant.id
        );
        None
    }

    /// Whether the restaurant closes within `within_minutes` of `at`.
    ///
    /// Always false when the restaurant is not open at `at`. A threshold
    /// that itself crosses midnight reports closing soon unconditionally;
    /// this mirrors the long-standing behaviour downstream clients rely on,
    /// even when the actual close is hours away.
    #[must_use]
    pub fn is_closing_soon(&self, restaurant: &Restaurant, at: NaiveDateTime, within_minutes: u32) -> bool {
        if !self.is_open_at(restaurant, at) {
            return false;
        }
        let Some(slot) = restaurant
            .hours
            .as_ref()
            .and_then(|hours| hours.slot(at.weekday()))
        else {
            return false;
        };

        let now = minutes_of_day(at.time());
        let Some(threshold) = now.checked_add(within_minutes) else {
            return true;
        };
        if threshold >= MINUTES_PER_DAY {
            return true;
        }

        if slot.is_overnight() && now >= minutes_of_day(slot.open) {
            // Evening leg of an overnight slot: the close is tomorrow and a
            // same-day threshold cannot reach it.
            return false;
        }
        let close = minutes_of_day(slot.close);
        close >= now && close <= threshold
    }

    /// Total scheduled hours per week.
    ///
    /// Overnight days contribute whole hours only
    /// (`(24 − open_hour) + close_hour`); same-day slots keep minute
    /// precision. Unknown schedules count as zero.
    #[must_use]
    pub fn weekly_operating_hours(&self, restaurant: &Restaurant) -> f64 {
        let Some(hours) = restaurant.hours.as_ref() else {
            return 0.0;
        };
        hours
            .slots()
            .map(|(_, slot)| {
                if slot.is_overnight() {
                    f64::from(24 - slot.open.hour()) + f64::from(slot.close.hour())
                } else {
                    f64::from(minutes_of_day(slot.close) - minutes_of_day(slot.open)) / 60.0
                }
            })
            .sum()
    }
}

fn minutes_of_day(time: chrono::NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Weekday};
    use rstest::{fixture, rstest};
    use tableside_core::{BusinessHours, CuisineType, Restaurant, TimeSlot};

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
    }

    /// Wednesday.
    fn wednesday(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 12)
            .expect("valid date")
            .and_time(at(h, m))
    }

    /// Monday of the same week.
    fn monday(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 10)
            .expect("valid date")
            .and_time(at(h, m))
    }

    #[fixture]
    fn daytime_restaurant() -> Restaurant {
        Restaurant::new("d1", "daytime", CuisineType::Cafe).with_hours(
            BusinessHours::new().with_daily_slot(TimeSlot::new(at(9, 0), at(17, 30))),
        )
    }

    #[fixture]
    fn overnight_restaurant() -> Restaurant {
        Restaurant::new("n1", "overnight", CuisineType::Barbecue).with_hours(
            BusinessHours::new().with_daily_slot(TimeSlot::new(at(18, 0), at(2, 0))),
        )
    }

    #[rstest]
    #[case(wednesday(12, 0), true)]
    #[case(wednesday(9, 0), true)]
    #[case(wednesday(17, 30), true)]
    #[case(wednesday(8, 59), false)]
    #[case(wednesday(17, 31), false)]
    fn daytime_open_follows_slot(
        daytime_restaurant: Restaurant,
        #[case] when: NaiveDateTime,
        #[case] expected: bool,
    ) {
        let engine = HoursEngine::empty();
        assert_eq!(engine.is_open_at(&daytime_restaurant, when), expected);
    }

    #[rstest]
    #[case(wednesday(23, 0), true)]
    #[case(wednesday(1, 30), true)]
    #[case(wednesday(12, 0), false)]
    fn overnight_open_wraps_midnight(
        overnight_restaurant: Restaurant,
        #[case] when: NaiveDateTime,
        #[case] expected: bool,
    ) {
        let engine = HoursEngine::empty();
        assert_eq!(engine.is_open_at(&overnight_restaurant, when), expected);
    }

    #[rstest]
    fn inactive_restaurant_is_always_closed(daytime_restaurant: Restaurant) {
        let engine = HoursEngine::empty();
        let inactive = daytime_restaurant.with_active(false);
        assert!(!engine.is_open_at(&inactive, wednesday(12, 0)));
    }

    #[rstest]
    fn missing_schedule_means_closed() {
        let engine = HoursEngine::empty();
        let bare = Restaurant::new("b1", "bare", CuisineType::Other);
        assert!(!engine.is_open_at(&bare, wednesday(12, 0)));
    }

    #[rstest]
    fn holiday_closes_observing_restaurants_only(daytime_restaurant: Restaurant) {
        let mut engine = HoursEngine::empty();
        engine.add_holiday(wednesday(0, 0).date());

        let observing = daytime_restaurant.clone().with_hours(
            BusinessHours::new()
                .with_daily_slot(TimeSlot::new(at(9, 0), at(17, 30)))
                .with_holiday_closure(true),
        );
        assert!(!engine.is_open_at(&observing, wednesday(12, 0)));
        // A restaurant that ignores holidays keeps its weekday schedule.
        assert!(engine.is_open_at(&daytime_restaurant, wednesday(12, 0)));
    }

    #[rstest]
    fn next_open_is_now_when_already_open(daytime_restaurant: Restaurant) {
        let engine = HoursEngine::empty();
        let now = wednesday(12, 0);
        assert_eq!(engine.next_open_time(&daytime_restaurant, now), Some(now));
    }

    #[rstest]
    fn next_open_is_later_today_before_opening(daytime_restaurant: Restaurant) {
        let engine = HoursEngine::empty();
        assert_eq!(
            engine.next_open_time(&daytime_restaurant, wednesday(7, 0)),
            Some(wednesday(9, 0))
        );
    }

    #[rstest]
    fn next_open_skips_to_tomorrow_after_close(daytime_restaurant: Restaurant) {
        let engine = HoursEngine::empty();
        let thursday_opening = NaiveDate::from_ymd_opt(2024, 6, 13)
            .expect("valid date")
            .and_time(at(9, 0));
        assert_eq!(
            engine.next_open_time(&daytime_restaurant, wednesday(18, 0)),
            Some(thursday_opening)
        );
    }

    #[rstest]
    fn next_open_skips_closed_weekdays() {
        let engine = HoursEngine::empty();
        let weekend_only = Restaurant::new("w1", "weekend", CuisineType::Cafe).with_hours(
            BusinessHours::new().with_slot(Weekday::Sat, TimeSlot::new(at(10, 0), at(16, 0))),
        );
        let saturday_opening = NaiveDate::from_ymd_opt(2024, 6, 15)
            .expect("valid date")
            .and_time(at(10, 0));
        assert_eq!(
            engine.next_open_time(&weekend_only, monday(12, 0)),
            Some(saturday_opening)
        );
    }

    #[rstest]
    fn next_open_skips_holiday_dates(daytime_restaurant: Restaurant) {
        let mut engine = HoursEngine::empty();
        engine.add_holiday(NaiveDate::from_ymd_opt(2024, 6, 13).expect("valid date"));
        let observing = daytime_restaurant.with_hours(
            BusinessHours::new()
                .with_daily_slot(TimeSlot::new(at(9, 0), at(17, 30)))
                .with_holiday_closure(true),
        );
        // Wednesday evening: Thursday is a holiday, so Friday opens next.
        let friday_opening = NaiveDate::from_ymd_opt(2024, 6, 14)
            .expect("valid date")
            .and_time(at(9, 0));
        assert_eq!(
            engine.next_open_time(&observing, wednesday(18, 0)),
            Some(friday_opening)
        );
    }

    #[rstest]
    fn next_open_gives_up_outside_window() {
        let engine = HoursEngine::empty();
        let never = Restaurant::new("x1", "never", CuisineType::Other)
            .with_hours(BusinessHours::new());
        assert_eq!(engine.next_open_time(&never, wednesday(12, 0)), None);
    }

    #[rstest]
    #[case(wednesday(17, 15), 30, true)]
    #[case(wednesday(17, 30), 30, true)]
    #[case(wednesday(12, 0), 30, false)]
    // Closed restaurants are never "closing soon".
    #[case(wednesday(8, 0), 30, false)]
    fn closing_soon_daytime(
        daytime_restaurant: Restaurant,
        #[case] when: NaiveDateTime,
        #[case] within: u32,
        #[case] expected: bool,
    ) {
        let engine = HoursEngine::empty();
        assert_eq!(
            engine.is_closing_soon(&daytime_restaurant, when, within),
            expected
        );
    }

    #[rstest]
    fn closing_soon_on_morning_leg_of_overnight_slot(overnight_restaurant: Restaurant) {
        let engine = HoursEngine::empty();
        // 01:30 with a 02:00 close: half an hour left.
        assert!(engine.is_closing_soon(&overnight_restaurant, wednesday(1, 30), 60));
    }

    #[rstest]
    fn evening_leg_does_not_reach_tomorrows_close(overnight_restaurant: Restaurant) {
        let engine = HoursEngine::empty();
        // 20:00 with a threshold that stays on today's clock: the 02:00
        // close belongs to tomorrow.
        assert!(!engine.is_closing_soon(&overnight_restaurant, wednesday(20, 0), 30));
    }

    #[rstest]
    fn threshold_past_midnight_always_reports_closing_soon(overnight_restaurant: Restaurant) {
        let engine = HoursEngine::empty();
        // Long-standing quirk kept on purpose: 23:30 + 60 minutes crosses
        // midnight, so this reports true even though the close is hours
        // away for shorter thresholds too.
        assert!(engine.is_closing_soon(&overnight_restaurant, wednesday(23, 30), 60));
    }

    #[rstest]
    fn weekly_hours_keep_minutes_for_same_day_slots(daytime_restaurant: Restaurant) {
        let engine = HoursEngine::empty();
        // 09:00-17:30 is 8.5 hours, seven days a week.
        let total = engine.weekly_operating_hours(&daytime_restaurant);
        assert!((total - 59.5).abs() < 1e-9);
    }

    #[rstest]
    fn weekly_hours_drop_minutes_for_overnight_slots() {
        let engine = HoursEngine::empty();
        let late = Restaurant::new("n2", "late", CuisineType::Barbecue).with_hours(
            BusinessHours::new().with_slot(Weekday::Fri, TimeSlot::new(at(18, 30), at(2, 45))),
        );
        // Whole hours only on the overnight path: (24 - 18) + 2 = 8.
        let total = engine.weekly_operating_hours(&late);
        assert!((total - 8.0).abs() < 1e-9);
    }

    #[rstest]
    fn weekly_hours_zero_without_schedule() {
        let engine = HoursEngine::empty();
        let bare = Restaurant::new("b1", "bare", CuisineType::Other);
        assert_eq!(engine.weekly_operating_hours(&bare), 0.0);
    }
}
