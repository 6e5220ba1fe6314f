//! Error types for weekpager.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while navigating a calendar.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Day index {index} is out of range (0..{total})")]
    DayIndexOutOfRange { index: i64, total: i64 },

    #[error("Week index {index} is out of range (0..{total})")]
    WeekIndexOutOfRange { index: i64, total: i64 },

    #[error("Date {date} is outside the calendar range {start}..={end}")]
    DateOutOfRange {
        date: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("The week around {0} extends past the representable dates")]
    DateOverflow(NaiveDate),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalendarError {
    /// True for the index/date bounds errors raised by navigation calls.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            CalendarError::DayIndexOutOfRange { .. }
                | CalendarError::WeekIndexOutOfRange { .. }
                | CalendarError::DateOutOfRange { .. }
                | CalendarError::DateOverflow(_)
        )
    }
}

/// Result type alias for weekpager operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
