//! Headless host loop wiring pager events back into the calendar state.
//!
//! A [`CalendarSession`] plays the part of the view layer: whenever a pager's
//! target page changes, whether the user swiped it or the state scrolled it,
//! the matching state call runs. State-initiated scrolls come back as no-ops
//! because the state only scrolls pagers that are off target.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::sync::{Mutex, MutexGuard, watch};
use tokio::task::JoinHandle;

use crate::calendar_state::CalendarState;
use crate::error::CalendarResult;
use crate::pager::{Pager, PagerState};

const SETTLE_POLL: Duration = Duration::from_millis(16);

/// Where both pagers and the selection stand at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub current_date: NaiveDate,
    pub week_page_index: i64,
    pub day_page_index: i64,
    pub week_pager_page: usize,
    pub day_pager_page: usize,
}

pub struct CalendarSession {
    state: Arc<Mutex<CalendarState<PagerState>>>,
    week_pager: PagerState,
    day_pager: PagerState,
    current_date_rx: watch::Receiver<NaiveDate>,
    effects: JoinHandle<()>,
}

impl CalendarSession {
    /// Starts listening to both pagers. Must be called within a tokio runtime.
    pub fn start(state: CalendarState<PagerState>) -> Self {
        let week_pager = state.week_pager().clone();
        let day_pager = state.day_pager().clone();
        let current_date_rx = state.subscribe();

        let state = Arc::new(Mutex::new(state));
        let effects = tokio::spawn(run_effects(
            state.clone(),
            week_pager.subscribe(),
            day_pager.subscribe(),
        ));

        CalendarSession {
            state,
            week_pager,
            day_pager,
            current_date_rx,
            effects,
        }
    }

    /// Exclusive access to the state, e.g. for rendering.
    ///
    /// Waits for any in-flight synchronization to finish first.
    pub async fn state(&self) -> MutexGuard<'_, CalendarState<PagerState>> {
        self.state.lock().await
    }

    /// Receiver notified whenever the selected date changes.
    pub fn subscribe(&self) -> watch::Receiver<NaiveDate> {
        self.current_date_rx.clone()
    }

    /// User drag of the week strip onto `page`.
    pub async fn swipe_week(&self, page: usize) {
        tracing::debug!(page, "week pager swiped");
        self.week_pager.animate_scroll_to_page(page).await;
    }

    /// User drag of the day pager onto `page`.
    pub async fn swipe_day(&self, page: usize) {
        tracing::debug!(page, "day pager swiped");
        self.day_pager.animate_scroll_to_page(page).await;
    }

    /// Direct selection of `date`, e.g. a tap on a week strip cell.
    pub async fn select_date(&self, date: NaiveDate) -> CalendarResult<()> {
        self.state.lock().await.set_current_date(date).await
    }

    /// Direct selection of day page `day_index`.
    pub async fn select_day(&self, day_index: i64) -> CalendarResult<()> {
        self.state.lock().await.set_current_day(day_index).await
    }

    /// Waits until both pagers rest on the pages of the selected date.
    pub async fn settle(&self) {
        loop {
            {
                let state = self.state.lock().await;
                if state.is_synchronized()
                    && !self.week_pager.is_scroll_in_progress()
                    && !self.day_pager.is_scroll_in_progress()
                {
                    return;
                }
            }
            tokio::time::sleep(SETTLE_POLL).await;
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.lock().await;
        SessionSnapshot {
            current_date: state.current_date(),
            week_page_index: state.week_page_index(),
            day_page_index: state.day_page_index(),
            week_pager_page: self.week_pager.current_page(),
            day_pager_page: self.day_pager.current_page(),
        }
    }

    /// Stops reacting to pager events. Pending animations are abandoned.
    pub fn shutdown(self) {
        tracing::debug!("calendar session shut down");
    }
}

impl Drop for CalendarSession {
    fn drop(&mut self) {
        self.effects.abort();
    }
}

async fn run_effects(
    state: Arc<Mutex<CalendarState<PagerState>>>,
    mut week_rx: watch::Receiver<usize>,
    mut day_rx: watch::Receiver<usize>,
) {
    loop {
        tokio::select! {
            biased;

            changed = day_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let mut state = state.lock().await;
                // Read under the lock: a swipe made while it was held wins
                // over the page that woke us up.
                let page = *day_rx.borrow_and_update();
                if let Err(e) = state.set_current_day(page as i64).await {
                    tracing::warn!(page, error = %e, "day pager settled outside the calendar");
                }
            }
            changed = week_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let mut state = state.lock().await;
                let page = *week_rx.borrow_and_update();
                if let Err(e) = state.set_current_week(page as i64).await {
                    tracing::warn!(page, error = %e, "week pager settled outside the calendar");
                }
            }
        }
    }
}
