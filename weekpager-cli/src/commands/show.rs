use anyhow::Result;
use weekpager_core::{CalendarState, PagerState};

use crate::render;

pub fn run(state: CalendarState<PagerState>) -> Result<()> {
    for line in render::current_pages(&state)? {
        println!("{}", line);
    }

    Ok(())
}
