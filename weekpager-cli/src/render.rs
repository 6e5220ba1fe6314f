//! Terminal rendering for calendar pages.
//!
//! `TerminalContent` supplies the week strip and day page callbacks, and the
//! `Render` trait adds colored output to weekpager-core types using owo_colors.

use chrono::{Datelike, NaiveDate, Weekday};
use owo_colors::OwoColorize;
use weekpager_core::{CalendarContent, CalendarResult, CalendarState, Pager, SessionSnapshot};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Week strip cells and day pages as colored terminal text.
pub struct TerminalContent;

impl CalendarContent for TerminalContent {
    type Output = String;

    fn day_header(&self, date: NaiveDate, is_selected: bool) -> String {
        let cell = format!("{} {:>2}", weekday_label(date.weekday()), date.day());
        if is_selected {
            cell.red().bold().to_string()
        } else if date.day() == 1 {
            // Month boundaries are easy to miss in a strip of day numbers
            cell.underline().to_string()
        } else {
            cell
        }
    }

    fn day_detail(&self, date: NaiveDate) -> String {
        format!("📅 {}", date.format("%A, %B %-d, %Y").bold())
    }
}

fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// One week page as a single line of cells.
pub fn week_strip<P: Pager>(state: &CalendarState<P>, week_index: i64) -> CalendarResult<String> {
    let cells = state.render_week(week_index, &TerminalContent)?;
    Ok(cells.join("  "))
}

/// The selected date's week strip followed by its day page.
pub fn current_pages<P: Pager>(state: &CalendarState<P>) -> CalendarResult<Vec<String>> {
    let range = state.range();
    let week_index = state.week_page_index();

    Ok(vec![
        format!(
            "{} {}",
            "Week".dimmed(),
            format!("{}/{}", week_index + 1, range.total_weeks()).dimmed()
        ),
        format!("   {}", week_strip(state, week_index)?),
        String::new(),
        format!(
            "   {}",
            state.render_day(state.day_page_index(), &TerminalContent)?
        ),
    ])
}

impl Render for SessionSnapshot {
    fn render(&self) -> String {
        format!(
            "{}  {}",
            self.current_date.to_string().bold(),
            format!(
                "(week page {}, day page {})",
                self.week_pager_page, self.day_pager_page
            )
            .dimmed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_header_plain_cell() {
        assert_eq!(TerminalContent.day_header(date(2024, 1, 17), false), "We 17");
        assert_eq!(TerminalContent.day_header(date(2024, 1, 7), false), "Su  7");
    }

    #[test]
    fn test_selected_header_is_styled() {
        let cell = TerminalContent.day_header(date(2024, 1, 17), true);

        assert_ne!(cell, "We 17");
        assert!(cell.contains("We 17"));
    }

    #[test]
    fn test_day_detail_spells_out_date() {
        let detail = TerminalContent.day_detail(date(2024, 1, 17));

        assert!(detail.contains("Wednesday, January 17, 2024"));
    }
}
