mod commands;
mod logging;
mod render;

use anyhow::Result;
use chrono::{Local, NaiveDate, Weekday};
use clap::{Args, Parser, Subcommand};
use weekpager_core::{CalendarConfig, CalendarRange, CalendarState, PagerState};

use crate::commands::swipe::PagerEvent;

#[derive(Parser)]
#[command(name = "weekpager")]
#[command(about = "Browse a week strip and day pager from the terminal")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the week strip and day page of the selected date
    Show {
        #[command(flatten)]
        calendar: CalendarArgs,
    },
    /// List every week page in the range
    Weeks {
        #[command(flatten)]
        calendar: CalendarArgs,
    },
    /// Replay pager events and print the synchronized state after each
    Swipe {
        /// Events: week:N, day:N, date:YYYY-MM-DD or today
        #[arg(required = true)]
        events: Vec<PagerEvent>,

        #[command(flatten)]
        calendar: CalendarArgs,
    },
    /// Show config location and effective settings
    Config {
        /// Write a commented default config file (overwrites an existing one)
        #[arg(long)]
        init: bool,
    },
}

#[derive(Args)]
struct CalendarArgs {
    /// Selected date (YYYY-MM-DD), defaults to today
    #[arg(short, long, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// First date of the range (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    start: Option<NaiveDate>,

    /// Last date of the range (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    end: Option<NaiveDate>,

    /// First day of each week (e.g. "sun", "monday")
    #[arg(long, value_parser = parse_weekday)]
    week_start: Option<Weekday>,
}

impl CalendarArgs {
    fn build_state(&self, config: &CalendarConfig) -> Result<CalendarState<PagerState>> {
        let initial = self.date.unwrap_or_else(|| Local::now().date_naive());
        let week_start = self.week_start.unwrap_or(config.week_start);

        let (start, end) = match (self.start, self.end) {
            (Some(start), Some(end)) => (start, end),
            (start, end) => {
                let around = CalendarRange::around(
                    initial,
                    config.months_before,
                    config.months_after,
                    week_start,
                )?;
                (
                    start.unwrap_or(around.start_date()),
                    end.unwrap_or(around.end_date()),
                )
            }
        };

        if start > end {
            anyhow::bail!("Range start {} is after range end {}", start, end);
        }

        let range = CalendarRange::new(start, end, week_start)?;
        Ok(CalendarState::new_headless(initial, range, config.animation())?)
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}

fn parse_weekday(s: &str) -> Result<Weekday, String> {
    s.parse()
        .map_err(|_| format!("Invalid weekday '{}'. Expected e.g. 'sun' or 'monday'", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Show { calendar } => {
            let config = CalendarConfig::load()?;
            commands::show::run(calendar.build_state(&config)?)
        }
        Commands::Weeks { calendar } => {
            let config = CalendarConfig::load()?;
            commands::weeks::run(calendar.build_state(&config)?)
        }
        Commands::Swipe { events, calendar } => {
            let config = CalendarConfig::load()?;
            commands::swipe::run(calendar.build_state(&config)?, events).await
        }
        Commands::Config { init } => commands::config::run(init),
    }
}
