use anyhow::Result;
use owo_colors::OwoColorize;
use weekpager_core::{CalendarState, PagerState};

use crate::render;

pub fn run(state: CalendarState<PagerState>) -> Result<()> {
    let range = state.range();

    println!(
        "{} {} → {} ({} weeks, week starts {})",
        "📅".bold(),
        range.start_week_date(),
        range.end_week_date(),
        range.total_weeks(),
        range.start_day_of_week()
    );

    let current_week = state.week_page_index();
    for week_index in 0..range.total_weeks() {
        let marker = if week_index == current_week { "›" } else { " " };
        let label = format!("{:>3}", week_index);
        println!(
            " {} {}  {}",
            marker.red(),
            label.dimmed(),
            render::week_strip(&state, week_index)?
        );
    }

    Ok(())
}
