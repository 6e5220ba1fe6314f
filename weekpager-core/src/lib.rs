//! Core state for paginated week-strip calendars.
//!
//! This crate keeps a week strip and a day pager in agreement on one
//! selected date:
//! - `CalendarRange` describes the addressable, week-aligned window
//! - `CalendarState` converts between dates and page indices and steers the pagers
//! - `CalendarSession` runs a headless host loop over two `PagerState`s

pub mod calendar_range;
pub mod calendar_state;
pub mod config;
pub mod error;
pub mod pager;
pub mod session;
pub mod view;
pub mod weekday;

pub use calendar_range::{CalendarRange, DEFAULT_START_DAY_OF_WEEK};
pub use calendar_state::CalendarState;
pub use config::CalendarConfig;
pub use error::{CalendarError, CalendarResult};
pub use pager::{Pager, PagerState};
pub use session::{CalendarSession, SessionSnapshot};
pub use view::{CalendarContent, FnContent, content_fn};
