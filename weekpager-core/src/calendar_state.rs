//! Selected-date state shared by the week strip and the day pager.
//!
//! `current_date` is the single source of truth. The week and day page
//! indices are projections of it, and the pagers are only ever asked to
//! animate toward them. A pager already on its target is left alone, so a
//! pager reporting back the page the state just sent it to changes nothing.

use std::time::Duration;

use chrono::{NaiveDate, TimeDelta};
use tokio::sync::watch;

use crate::calendar_range::CalendarRange;
use crate::error::{CalendarError, CalendarResult};
use crate::pager::{Pager, PagerState};
use crate::weekday::{days_between, weeks_between};

#[derive(Debug)]
pub struct CalendarState<P> {
    range: CalendarRange,
    current_date: NaiveDate,
    current_date_tx: watch::Sender<NaiveDate>,
    week_pager: P,
    day_pager: P,
}

impl CalendarState<PagerState> {
    /// Creates a state with headless pagers positioned on `initial_date`.
    pub fn new_headless(
        initial_date: NaiveDate,
        range: CalendarRange,
        animation: Duration,
    ) -> CalendarResult<Self> {
        range.check_contains(initial_date)?;

        let start = range.start_week_date();
        let week_pager = PagerState::new(
            weeks_between(start, initial_date) as usize,
            range.total_weeks() as usize,
        )
        .with_animation(animation);
        let day_pager = PagerState::new(
            days_between(start, initial_date) as usize,
            range.total_days() as usize,
        )
        .with_animation(animation);

        Self::new(initial_date, range, week_pager, day_pager)
    }
}

impl<P: Pager> CalendarState<P> {
    /// Creates a state over host-provided pagers.
    ///
    /// The pagers are expected to rest on the pages of `initial_date`; if they
    /// don't, the first navigation call brings them there.
    pub fn new(
        initial_date: NaiveDate,
        range: CalendarRange,
        week_pager: P,
        day_pager: P,
    ) -> CalendarResult<Self> {
        range.check_contains(initial_date)?;

        let (current_date_tx, _) = watch::channel(initial_date);

        Ok(CalendarState {
            range,
            current_date: initial_date,
            current_date_tx,
            week_pager,
            day_pager,
        })
    }

    pub fn range(&self) -> &CalendarRange {
        &self.range
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn week_pager(&self) -> &P {
        &self.week_pager
    }

    pub fn day_pager(&self) -> &P {
        &self.day_pager
    }

    /// Week page that shows `current_date`.
    pub fn week_page_index(&self) -> i64 {
        self.week_index_for_date(self.current_date)
    }

    /// Day page that shows `current_date`.
    pub fn day_page_index(&self) -> i64 {
        self.day_index_for_date(self.current_date)
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        date == self.current_date
    }

    /// Receiver notified whenever `current_date` changes.
    pub fn subscribe(&self) -> watch::Receiver<NaiveDate> {
        self.current_date_tx.subscribe()
    }

    /// Whether both pagers are on (or heading to) the pages of `current_date`.
    pub fn is_synchronized(&self) -> bool {
        self.week_pager.target_page() as i64 == self.week_page_index()
            && self.day_pager.target_page() as i64 == self.day_page_index()
    }

    pub fn date_for_day_index(&self, day_index: i64) -> CalendarResult<NaiveDate> {
        self.check_day_index(day_index)?;
        Ok(self.range.start_week_date() + TimeDelta::days(day_index))
    }

    /// Whole days from the first week page to `date`. Not bounds checked.
    pub fn day_index_for_date(&self, date: NaiveDate) -> i64 {
        days_between(self.range.start_week_date(), date)
    }

    /// Whole weeks from the first week page to `date`. Not bounds checked.
    pub fn week_index_for_date(&self, date: NaiveDate) -> i64 {
        weeks_between(self.range.start_week_date(), date)
    }

    /// The seven dates shown on week page `week_index`.
    pub fn week_dates(&self, week_index: i64) -> CalendarResult<[NaiveDate; 7]> {
        if !(0..self.range.total_weeks()).contains(&week_index) {
            return Err(CalendarError::WeekIndexOutOfRange {
                index: week_index,
                total: self.range.total_weeks(),
            });
        }

        let first = self.range.start_week_date() + TimeDelta::weeks(week_index);
        Ok(std::array::from_fn(|i| first + TimeDelta::days(i as i64)))
    }

    pub async fn set_current_date(&mut self, date: NaiveDate) -> CalendarResult<()> {
        let day_index = self.day_index_for_date(date);
        self.set_current_day(day_index).await
    }

    /// Selects day page `day_index` and brings both pagers to it.
    ///
    /// The week scroll is requested before the day scroll. Both animations
    /// run together and the call returns once both have settled.
    pub async fn set_current_day(&mut self, day_index: i64) -> CalendarResult<()> {
        let date = self.date_for_day_index(day_index)?;
        let week_index = self.week_index_for_date(date);

        if self.current_date != date {
            tracing::debug!(from = %self.current_date, to = %date, "current date changed");
            self.current_date = date;
            self.current_date_tx.send_replace(date);
        }

        let week_page = week_index as usize;
        let day_page = day_index as usize;

        let week_pager = &self.week_pager;
        let day_pager = &self.day_pager;
        let week_scroll = async {
            if week_pager.target_page() != week_page {
                tracing::debug!(page = week_page, "scrolling week pager");
                week_pager.animate_scroll_to_page(week_page).await;
            }
        };
        let day_scroll = async {
            if day_pager.target_page() != day_page {
                tracing::debug!(page = day_page, "scrolling day pager");
                day_pager.animate_scroll_to_page(day_page).await;
            }
        };
        tokio::join!(week_scroll, day_scroll);

        Ok(())
    }

    /// Follows the week pager onto week page `week_index`.
    ///
    /// Out-of-range weeks are ignored: this path is fed by the pager's own
    /// scroll position, not by a direct request. Staying within the current
    /// week keeps the selection; moving later selects the first day of the
    /// next week and moving earlier selects the last day of the previous one.
    pub async fn set_current_week(&mut self, week_index: i64) -> CalendarResult<()> {
        if !(0..self.range.total_weeks()).contains(&week_index) {
            tracing::debug!(week_index, "ignoring out-of-range week");
            return Ok(());
        }

        let current = self.current_date;
        let current_week = self.week_page_index();
        let next_date = if week_index == current_week {
            Some(current)
        } else if week_index > current_week {
            self.range.week_end_for(current)?.succ_opt()
        } else {
            self.range.week_start_for(current)?.pred_opt()
        };
        let next_date = next_date.ok_or(CalendarError::DateOverflow(current))?;

        self.set_current_date(next_date).await
    }

    fn check_day_index(&self, day_index: i64) -> CalendarResult<()> {
        if (0..self.range.total_days()).contains(&day_index) {
            Ok(())
        } else {
            Err(CalendarError::DayIndexOutOfRange {
                index: day_index,
                total: self.range.total_days(),
            })
        }
    }
}
