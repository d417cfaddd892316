//! Presentation-level configuration
//!
//! Configuration for output formatting and for the calendar the commands
//! are evaluated against.

pub mod loader;

pub use loader::{AppConfig, ConfigLoader};

use crate::humanize::HumanizeFormat;
use calrange_domain::{Clock, FixedClock, SystemClock};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "text" or "json"
    pub format: Option<String>,
    /// Default humanize format for `show` and `humanize`
    pub humanize: HumanizeFormat,
    /// Render ranges equal to a shorthand by its name (`this_month`)
    pub relative: bool,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            humanize: HumanizeFormat::Short,
            relative: true,
            color: true,
        }
    }
}

/// Calendar configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Pin "today" for shorthand resolution instead of reading the system date
    pub today: Option<NaiveDate>,
}

impl CalendarConfig {
    /// The clock shorthands are resolved against, `override_today` first
    pub fn clock(&self, override_today: Option<NaiveDate>) -> Box<dyn Clock> {
        match override_today.or(self.today) {
            Some(today) => Box::new(FixedClock::new(today)),
            None => Box::new(SystemClock),
        }
    }
}
