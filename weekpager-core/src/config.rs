//! User configuration at ~/.config/weekpager/config.toml

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{NaiveDate, Weekday};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::calendar_range::{CalendarRange, DEFAULT_START_DAY_OF_WEEK};
use crate::error::{CalendarError, CalendarResult};

const DEFAULT_MONTHS: u32 = 1;
const DEFAULT_ANIMATION_MS: u64 = 300;

fn default_week_start() -> Weekday {
    DEFAULT_START_DAY_OF_WEEK
}

fn default_months() -> u32 {
    DEFAULT_MONTHS
}

fn default_animation_ms() -> u64 {
    DEFAULT_ANIMATION_MS
}

/// Defaults for calendars created without explicit bounds.
///
/// Every key may also be set through a `WEEKPAGER_` environment variable,
/// e.g. `WEEKPAGER_WEEK_START=mon`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CalendarConfig {
    /// First day of each week page.
    #[serde(default = "default_week_start")]
    pub week_start: Weekday,

    /// Months shown before the anchor date.
    #[serde(default = "default_months")]
    pub months_before: u32,

    /// Months shown after the anchor date.
    #[serde(default = "default_months")]
    pub months_after: u32,

    /// Duration of a pager scroll animation, in milliseconds.
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            week_start: default_week_start(),
            months_before: DEFAULT_MONTHS,
            months_after: DEFAULT_MONTHS,
            animation_ms: DEFAULT_ANIMATION_MS,
        }
    }
}

impl CalendarConfig {
    pub fn config_path() -> CalendarResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalendarError::Config("Could not determine config directory".into()))?
            .join("weekpager");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented default file on first use.
    pub fn load() -> CalendarResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (which may be missing), then apply environment overrides.
    pub fn load_from(path: &Path) -> CalendarResult<Self> {
        let config: CalendarConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("WEEKPAGER").try_parsing(true))
            .build()
            .map_err(|e| CalendarError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalendarError::Config(e.to_string()))?;

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> CalendarResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| CalendarError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| CalendarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalendarResult<()> {
        let contents = format!(
            "\
# weekpager configuration

# First day of each week (mon, tue, ..., sun):
# week_start = \"{}\"

# Months shown around the selected date:
# months_before = {DEFAULT_MONTHS}
# months_after = {DEFAULT_MONTHS}

# Pager scroll animation, in milliseconds:
# animation_ms = {DEFAULT_ANIMATION_MS}
",
            DEFAULT_START_DAY_OF_WEEK
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalendarError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalendarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn animation(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    /// The configured window around `anchor`.
    pub fn range_around(&self, anchor: NaiveDate) -> CalendarResult<CalendarRange> {
        CalendarRange::around(anchor, self.months_before, self.months_after, self.week_start)
    }
}
