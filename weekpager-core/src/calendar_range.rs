//! The addressable date window of a calendar.

use chrono::{Months, NaiveDate, Weekday};

use crate::error::{CalendarError, CalendarResult};
use crate::weekday::{days_between, next, previous_or_same, weeks_between};

/// Weekday a week begins on when none is configured.
pub const DEFAULT_START_DAY_OF_WEEK: Weekday = Weekday::Sun;

/// Immutable description of the dates a calendar can show.
///
/// The caller-supplied bounds are widened outward to whole weeks, so every
/// week page holds exactly seven days. `start_date <= end_date` is assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
    start_day_of_week: Weekday,
    start_week_date: NaiveDate,
    end_week_date: NaiveDate,
    total_weeks: i64,
    total_days: i64,
}

impl CalendarRange {
    /// Widens `start_date..=end_date` to whole weeks.
    ///
    /// Fails with [`CalendarError::DateOverflow`] when a widened bound would
    /// fall outside the dates chrono can represent.
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        start_day_of_week: Weekday,
    ) -> CalendarResult<Self> {
        let start_week_date = week_start(start_date, start_day_of_week)?;
        let end_week_date = week_end(end_date, start_day_of_week)?;

        Ok(CalendarRange {
            start_date,
            end_date,
            start_day_of_week,
            start_week_date,
            end_week_date,
            total_weeks: weeks_between(start_week_date, end_week_date) + 1,
            total_days: days_between(start_week_date, end_week_date) + 1,
        })
    }

    /// Range spanning `months_before` months before `anchor` to `months_after`
    /// months after it. Days past the end of a shorter month clamp to its last day.
    pub fn around(
        anchor: NaiveDate,
        months_before: u32,
        months_after: u32,
        start_day_of_week: Weekday,
    ) -> CalendarResult<Self> {
        let start = anchor
            .checked_sub_months(Months::new(months_before))
            .ok_or_else(|| {
                CalendarError::Config(format!("{months_before} months before {anchor} is not a valid date"))
            })?;
        let end = anchor
            .checked_add_months(Months::new(months_after))
            .ok_or_else(|| {
                CalendarError::Config(format!("{months_after} months after {anchor} is not a valid date"))
            })?;

        Self::new(start, end, start_day_of_week)
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn start_day_of_week(&self) -> Weekday {
        self.start_day_of_week
    }

    /// First day of the first week page.
    pub fn start_week_date(&self) -> NaiveDate {
        self.start_week_date
    }

    /// Last day of the last week page.
    pub fn end_week_date(&self) -> NaiveDate {
        self.end_week_date
    }

    pub fn total_weeks(&self) -> i64 {
        self.total_weeks
    }

    pub fn total_days(&self) -> i64 {
        self.total_days
    }

    /// Whether `date` is addressable, i.e. within the week-aligned window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start_week_date..=self.end_week_date).contains(&date)
    }

    /// First day of the week that `date` belongs to.
    pub fn week_start_for(&self, date: NaiveDate) -> CalendarResult<NaiveDate> {
        week_start(date, self.start_day_of_week)
    }

    /// Last day of the week that `date` belongs to.
    pub fn week_end_for(&self, date: NaiveDate) -> CalendarResult<NaiveDate> {
        week_end(date, self.start_day_of_week)
    }

    pub(crate) fn check_contains(&self, date: NaiveDate) -> CalendarResult<()> {
        if self.contains(date) {
            Ok(())
        } else {
            Err(CalendarError::DateOutOfRange {
                date,
                start: self.start_week_date,
                end: self.end_week_date,
            })
        }
    }
}

fn week_start(date: NaiveDate, start_day_of_week: Weekday) -> CalendarResult<NaiveDate> {
    previous_or_same(date, start_day_of_week).ok_or(CalendarError::DateOverflow(date))
}

fn week_end(date: NaiveDate, start_day_of_week: Weekday) -> CalendarResult<NaiveDate> {
    // Strictly-after keeps a date that opens a week inside that week.
    next(date, start_day_of_week)
        .and_then(|following| following.pred_opt())
        .ok_or(CalendarError::DateOverflow(date))
}
