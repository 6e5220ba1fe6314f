//! Render callbacks for the week strip and the day pager.

use chrono::NaiveDate;

use crate::calendar_state::CalendarState;
use crate::error::CalendarResult;
use crate::pager::Pager;

/// Host-supplied content for the two pagers.
pub trait CalendarContent {
    type Output;

    /// One column of the week strip.
    fn day_header(&self, date: NaiveDate, is_selected: bool) -> Self::Output;

    /// One page of the day pager.
    fn day_detail(&self, date: NaiveDate) -> Self::Output;
}

/// [`CalendarContent`] built from a pair of closures.
pub struct FnContent<H, D> {
    header: H,
    detail: D,
}

pub fn content_fn<H, D, O>(header: H, detail: D) -> FnContent<H, D>
where
    H: Fn(NaiveDate, bool) -> O,
    D: Fn(NaiveDate) -> O,
{
    FnContent { header, detail }
}

impl<H, D, O> CalendarContent for FnContent<H, D>
where
    H: Fn(NaiveDate, bool) -> O,
    D: Fn(NaiveDate) -> O,
{
    type Output = O;

    fn day_header(&self, date: NaiveDate, is_selected: bool) -> O {
        (self.header)(date, is_selected)
    }

    fn day_detail(&self, date: NaiveDate) -> O {
        (self.detail)(date)
    }
}

impl<P: Pager> CalendarState<P> {
    /// Renders week page `week_index`, flagging the selected day.
    pub fn render_week<C: CalendarContent>(
        &self,
        week_index: i64,
        content: &C,
    ) -> CalendarResult<[C::Output; 7]> {
        let week = self.week_dates(week_index)?;
        Ok(week.map(|date| content.day_header(date, self.is_selected(date))))
    }

    /// Renders day page `day_index`.
    pub fn render_day<C: CalendarContent>(
        &self,
        day_index: i64,
        content: &C,
    ) -> CalendarResult<C::Output> {
        let date = self.date_for_day_index(day_index)?;
        Ok(content.day_detail(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar_range::CalendarRange;
    use crate::error::CalendarError;
    use crate::pager::{DEFAULT_ANIMATION, PagerState};
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn state() -> CalendarState<PagerState> {
        let range = CalendarRange::new(date(2024, 1, 15), date(2024, 2, 15), Weekday::Sun).unwrap();
        CalendarState::new_headless(date(2024, 1, 17), range, DEFAULT_ANIMATION).unwrap()
    }

    fn text_content() -> impl CalendarContent<Output = String> {
        content_fn(
            |date: NaiveDate, selected: bool| {
                if selected {
                    format!("[{}]", date.format("%d"))
                } else {
                    date.format("%d").to_string()
                }
            },
            |date: NaiveDate| date.to_string(),
        )
    }

    #[test]
    fn test_render_week_marks_selected_day() {
        let week = state().render_week(0, &text_content()).unwrap();

        assert_eq!(week, ["14", "15", "16", "[17]", "18", "19", "20"].map(String::from));
    }

    #[test]
    fn test_render_week_without_selection() {
        let week = state().render_week(1, &text_content()).unwrap();

        assert!(week.iter().all(|cell| !cell.starts_with('[')));
        assert_eq!(week[0], "21");
    }

    #[test]
    fn test_render_day_and_bounds() {
        let state = state();

        assert_eq!(state.render_day(3, &text_content()).unwrap(), "2024-01-17");
        assert!(matches!(
            state.render_week(5, &text_content()),
            Err(CalendarError::WeekIndexOutOfRange { .. })
        ));
        assert!(matches!(
            state.render_day(35, &text_content()),
            Err(CalendarError::DayIndexOutOfRange { .. })
        ));
    }
}
