use anyhow::Result;
use owo_colors::OwoColorize;
use weekpager_core::CalendarConfig;

pub fn run(init: bool) -> Result<()> {
    let config_path = CalendarConfig::config_path()?;

    if init {
        CalendarConfig::create_default_config(&config_path)?;
        println!("{} {}", "Wrote".green(), config_path.display());
    }

    let config = CalendarConfig::load_from(&config_path)?;

    println!("{}", "Paths".bold());
    println!("  Config:         {}", config_path.display());
    println!();
    println!("{}", "Settings".bold());
    println!("  Week start:     {}", config.week_start);
    println!("  Months before:  {}", config.months_before);
    println!("  Months after:   {}", config.months_after);
    println!("  Animation:      {}ms", config.animation_ms);

    Ok(())
}
