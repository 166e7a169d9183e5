//! Default holiday calendar.

use chrono::NaiveDate;

/// Fixed-date public holidays observed by the default calendar.
///
/// Month/day pairs for the holidays that fall on the same date every year:
/// New Year's Day, Peace Memorial Day, Children's Day, Tomb-Sweeping Day,
/// Labour Day and National Day. Lunar-calendar holidays move yearly and are
/// left to callers to add explicitly.
const FIXED_HOLIDAYS: [(u32, u32); 6] = [(1, 1), (2, 28), (4, 4), (4, 5), (5, 1), (10, 10)];

/// The fixed-date holidays of `year`.
///
/// # Examples
/// ```
/// use chrono::Datelike;
/// use tableside_hours::default_holidays;
///
/// let holidays = default_holidays(2026);
/// assert_eq!(holidays.len(), 6);
/// assert!(holidays.iter().all(|d| d.year() == 2026));
/// ```
#[must_use]
pub fn default_holidays(year: i32) -> Vec<NaiveDate> {
    FIXED_HOLIDAYS
        .iter()
        .filter_map(|&(month, day)| NaiveDate::from_ymd_opt(year, month, day))
        .collect()
}
