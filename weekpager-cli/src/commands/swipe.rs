use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;
use weekpager_core::{CalendarSession, CalendarState, PagerState};

use crate::render::{self, Render};

/// A pager event replayed against a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerEvent {
    /// The week strip was dragged onto page N.
    Week(usize),
    /// The day pager was dragged onto page N.
    Day(usize),
    /// A date was tapped directly.
    Date(NaiveDate),
    /// The "jump to today" action.
    Today,
}

impl FromStr for PagerEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "today" {
            return Ok(PagerEvent::Today);
        }

        let (kind, value) = s.split_once(':').ok_or_else(|| {
            format!("Invalid event '{}'. Expected week:N, day:N, date:YYYY-MM-DD or today", s)
        })?;

        let page = || {
            value
                .parse::<usize>()
                .map_err(|_| format!("Invalid page '{}' in event '{}'", value, s))
        };

        match kind {
            "week" | "w" => Ok(PagerEvent::Week(page()?)),
            "day" | "d" => Ok(PagerEvent::Day(page()?)),
            "date" => NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(PagerEvent::Date)
                .map_err(|_| format!("Invalid date '{}'. Expected YYYY-MM-DD", value)),
            _ => Err(format!("Unknown event kind '{}'. Expected week, day or date", kind)),
        }
    }
}

impl fmt::Display for PagerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PagerEvent::Week(page) => write!(f, "week:{}", page),
            PagerEvent::Day(page) => write!(f, "day:{}", page),
            PagerEvent::Date(date) => write!(f, "date:{}", date),
            PagerEvent::Today => write!(f, "today"),
        }
    }
}

pub async fn run(state: CalendarState<PagerState>, events: Vec<PagerEvent>) -> Result<()> {
    let session = CalendarSession::start(state);

    println!("{} {}", "start".dimmed(), session.snapshot().await.render());
    for line in replay(&session, &events).await? {
        println!("{}", line);
    }

    session.shutdown();
    Ok(())
}

/// Feeds `events` to the session one at a time, waiting for both pagers to
/// settle after each. Rejected events are reported inline and skipped.
async fn replay(session: &CalendarSession, events: &[PagerEvent]) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    for &event in events {
        let result = match event {
            PagerEvent::Week(page) => {
                session.swipe_week(page).await;
                Ok(())
            }
            PagerEvent::Day(page) => {
                session.swipe_day(page).await;
                Ok(())
            }
            PagerEvent::Date(date) => session.select_date(date).await,
            PagerEvent::Today => session.select_date(Local::now().date_naive()).await,
        };

        if let Err(e) = result {
            lines.push(format!("{} {}", event.to_string().yellow(), e.to_string().red()));
            continue;
        }

        session.settle().await;

        let snapshot = session.snapshot().await;
        let strip = {
            let state = session.state().await;
            render::week_strip(&*state, snapshot.week_page_index)?
        };
        lines.push(format!("{} {}", event.to_string().yellow(), snapshot.render()));
        lines.push(format!("   {}", strip));
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use std::time::Duration;
    use weekpager_core::CalendarRange;

    #[test]
    fn test_parse_events() {
        assert_eq!("week:2".parse::<PagerEvent>().unwrap(), PagerEvent::Week(2));
        assert_eq!("d:14".parse::<PagerEvent>().unwrap(), PagerEvent::Day(14));
        assert_eq!(
            "date:2024-01-21".parse::<PagerEvent>().unwrap(),
            PagerEvent::Date(NaiveDate::from_ymd_opt(2024, 1, 21).unwrap())
        );
    }

    #[test]
    fn test_parse_rejects_malformed_events() {
        assert!("week".parse::<PagerEvent>().is_err());
        assert!("week:-1".parse::<PagerEvent>().is_err());
        assert!("month:2".parse::<PagerEvent>().is_err());
        assert!("date:21-01-2024".parse::<PagerEvent>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let event = PagerEvent::Date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());

        assert_eq!(event.to_string().parse::<PagerEvent>().unwrap(), event);
    }

    fn session_on(initial: NaiveDate, range: CalendarRange) -> CalendarSession {
        let state = CalendarState::new_headless(initial, range, Duration::from_millis(50)).unwrap();
        CalendarSession::start(state)
    }

    #[test]
    fn test_parse_today() {
        assert_eq!("today".parse::<PagerEvent>().unwrap(), PagerEvent::Today);
        assert_eq!(PagerEvent::Today.to_string(), "today");
        assert!("today:1".parse::<PagerEvent>().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_replay_skips_out_of_range_taps() {
        let range = CalendarRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            Weekday::Sun,
        )
        .unwrap();
        let session = session_on(NaiveDate::from_ymd_opt(2024, 1, 17).unwrap(), range);

        let events = [
            PagerEvent::Week(1),
            PagerEvent::Date(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()),
            PagerEvent::Day(2),
        ];
        let lines = replay(&session, &events).await.unwrap();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("week:1"));
        assert!(lines[0].contains("2024-01-21"));
        assert!(lines[2].contains("date:2030-01-01"));
        assert!(lines[2].contains("outside the calendar range"));
        assert!(lines[3].contains("day:2"));
        assert!(lines[3].contains("2024-01-16"));

        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.current_date, NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
        assert_eq!(snapshot.week_pager_page, 0);
        assert_eq!(snapshot.day_pager_page, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replay_today_selects_current_date() {
        let today = Local::now().date_naive();
        let range = CalendarRange::around(today, 1, 1, Weekday::Sun).unwrap();
        let start = range.start_date();
        let session = session_on(start, range);

        replay(&session, &[PagerEvent::Today]).await.unwrap();

        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.current_date, today);
        assert_eq!(snapshot.day_page_index, snapshot.day_pager_page as i64);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_shuts_the_session_down() {
        let range = CalendarRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            Weekday::Sun,
        )
        .unwrap();
        let state = CalendarState::new_headless(
            NaiveDate::from_ymd_opt(2024, 1, 17).unwrap(),
            range,
            Duration::from_millis(50),
        )
        .unwrap();

        run(state, vec![PagerEvent::Day(10)]).await.unwrap();
    }
}
