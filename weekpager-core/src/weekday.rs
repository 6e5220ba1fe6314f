//! Weekday adjusters and whole-unit distances between dates.
//!
//! The on-or-before / strictly-after distinction matters: week
//! navigation relies on each of them to avoid off-by-one week jumps.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Days to step forward from `from` to reach `to` (0..=6).
fn days_until(from: Weekday, to: Weekday) -> i64 {
    let from = from.num_days_from_monday() as i64;
    let to = to.num_days_from_monday() as i64;
    (to - from).rem_euclid(7)
}

/// The latest `weekday` on or before `date`. Returns `date` itself when it
/// already falls on `weekday`, and `None` past `NaiveDate::MIN`.
pub fn previous_or_same(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    date.checked_sub_signed(Duration::days(days_until(weekday, date.weekday())))
}

/// The earliest `weekday` strictly after `date`, `None` past `NaiveDate::MAX`.
pub fn next(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let days = match days_until(date.weekday(), weekday) {
        0 => 7,
        n => n,
    };
    date.checked_add_signed(Duration::days(days))
}

/// Whole days from `start` to `end`; negative when `end` precedes `start`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Whole weeks from `start` to `end`, truncated toward zero.
pub fn weeks_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_weeks()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_previous_or_same_is_idempotent_on_weekday() {
        // 2024-01-14 is a Sunday
        assert_eq!(previous_or_same(date(2024, 1, 14), Weekday::Sun).unwrap(), date(2024, 1, 14));
        assert_eq!(previous_or_same(date(2024, 1, 15), Weekday::Sun).unwrap(), date(2024, 1, 14));
        assert_eq!(previous_or_same(date(2024, 1, 20), Weekday::Sun).unwrap(), date(2024, 1, 14));
    }

    #[test]
    fn test_next_is_strictly_after() {
        assert_eq!(next(date(2024, 1, 14), Weekday::Sun).unwrap(), date(2024, 1, 21));
        assert_eq!(next(date(2024, 1, 17), Weekday::Sun).unwrap(), date(2024, 1, 21));
        assert_eq!(next(date(2024, 1, 20), Weekday::Sun).unwrap(), date(2024, 1, 21));
        assert_eq!(next(date(2024, 1, 17), Weekday::Mon).unwrap(), date(2024, 1, 22));
    }

    #[test]
    fn test_adjusters_cross_month_and_year() {
        // 2024-12-31 is a Tuesday
        assert_eq!(next(date(2024, 12, 31), Weekday::Mon).unwrap(), date(2025, 1, 6));
        assert_eq!(previous_or_same(date(2025, 1, 1), Weekday::Mon).unwrap(), date(2024, 12, 30));
    }

    #[test]
    fn test_adjusters_stop_at_calendar_bounds() {
        assert_eq!(next(NaiveDate::MAX, Weekday::Sun), None);
        assert_eq!(previous_or_same(NaiveDate::MIN, NaiveDate::MIN.weekday().succ()), None);
        assert_eq!(previous_or_same(NaiveDate::MIN, NaiveDate::MIN.weekday()), Some(NaiveDate::MIN));
    }

    #[test]
    fn test_weeks_between_truncates_toward_zero() {
        let start = date(2024, 1, 14);
        assert_eq!(weeks_between(start, date(2024, 1, 20)), 0);
        assert_eq!(weeks_between(start, date(2024, 1, 21)), 1);
        assert_eq!(weeks_between(start, date(2024, 1, 10)), 0);
        assert_eq!(weeks_between(start, date(2024, 1, 7)), -1);
        assert_eq!(days_between(start, date(2024, 1, 10)), -4);
    }
}
