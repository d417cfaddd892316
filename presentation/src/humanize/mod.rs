//! Human readable descriptions of date ranges
//!
//! A range is described by the coarsest calendar unit that fits it:
//!
//! | Range | Short | Long |
//! |-------|-------|------|
//! | `20130112..20130112` | `Jan 12, 2013` | `January 12, 2013` |
//! | `201301..201312` | `2013` | `2013` |
//! | `201301..201306` | `Q1 - Q2 2013` | `quarter 1 - quarter 2 2013` |
//! | `201301..201301` | `Jan 2013` | `January 2013` |
//! | `20140602..20140628` | `Jun 02 - Jun 28, 2014` | `June 02 - June 28, 2014` |
//!
//! The [`HumanizeFormat::Relative`] format names shorthands first
//! (`this month`, `the previous quarter`), and [`HumanizeFormat::Explicit`]
//! always spells out the first and last day or month.

use calrange_domain::{Clock, DateRange, Relation, SystemClock};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const INFINITY: &str = "∞";

/// How a range is rendered in prose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HumanizeFormat {
    /// Abbreviated month names: `Jan 2013`, `Q1 2013`
    #[default]
    Short,
    /// Full month names: `January 2013`, `quarter 1 2013`
    Long,
    /// Shorthand names when the range is one: `this month`, `the next year`
    Relative,
    /// First and last day or month, never collapsed into quarters or years
    Explicit,
}

impl HumanizeFormat {
    fn style(&self) -> &'static Style {
        match self {
            HumanizeFormat::Short | HumanizeFormat::Relative => &SHORT,
            HumanizeFormat::Long | HumanizeFormat::Explicit => &LONG,
        }
    }
}

impl fmt::Display for HumanizeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HumanizeFormat::Short => "short",
            HumanizeFormat::Long => "long",
            HumanizeFormat::Relative => "relative",
            HumanizeFormat::Explicit => "explicit",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for HumanizeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(HumanizeFormat::Short),
            "long" => Ok(HumanizeFormat::Long),
            "relative" => Ok(HumanizeFormat::Relative),
            "explicit" => Ok(HumanizeFormat::Explicit),
            _ => Err(format!(
                "Invalid humanize format: {}. Valid options: short, long, relative, explicit",
                s
            )),
        }
    }
}

/// strftime patterns for one rendering style
struct Style {
    day: &'static str,
    month: &'static str,
    month_same_year: &'static str,
    day_month: &'static str,
    day_month_same_year: &'static str,
    quarter: &'static str,
}

const SHORT: Style = Style {
    day: "%b %d, %Y",
    month: "%b %Y",
    month_same_year: "%b",
    day_month: "%b %d, %Y",
    day_month_same_year: "%b %d",
    quarter: "Q",
};

const LONG: Style = Style {
    day: "%B %d, %Y",
    month: "%B %Y",
    month_same_year: "%B",
    day_month: "%B %d, %Y",
    day_month_same_year: "%B %d",
    quarter: "quarter ",
};

/// Describes a [`DateRange`] in English
pub struct Humanizer<'a> {
    range: &'a DateRange,
    format: HumanizeFormat,
}

impl<'a> Humanizer<'a> {
    pub fn new(range: &'a DateRange, format: HumanizeFormat) -> Self {
        Self { range, format }
    }

    pub fn format(&self) -> HumanizeFormat {
        self.format
    }

    /// Describe the range, resolving relative names against the system clock
    pub fn humanize(&self) -> String {
        self.humanize_with(&SystemClock)
    }

    /// Describe the range, resolving relative names against `clock`
    pub fn humanize_with(&self, clock: &dyn Clock) -> String {
        let (Some(begin), Some(end)) = (self.range.begin(), self.range.end()) else {
            return self.boundless();
        };

        if self.format == HumanizeFormat::Explicit {
            return self.day_range(begin, end);
        }

        self.relative(clock)
            .or_else(|| self.one_day(begin))
            .or_else(|| self.years(begin, end))
            .or_else(|| self.quarters(begin, end))
            .or_else(|| self.one_month(begin))
            .unwrap_or_else(|| self.day_range(begin, end))
    }

    fn style(&self) -> &'static Style {
        self.format.style()
    }

    fn relative(&self, clock: &dyn Clock) -> Option<String> {
        if self.format != HumanizeFormat::Relative {
            return None;
        }
        let shorthand = self.range.relative_param_with(clock)?;
        let phrase = match shorthand.relation {
            Relation::Current => format!("this {}", shorthand.period),
            Relation::Previous => format!("the previous {}", shorthand.period),
            Relation::Next => format!("the next {}", shorthand.period),
        };
        Some(phrase)
    }

    fn one_day(&self, begin: NaiveDate) -> Option<String> {
        (self.range.days() == Some(1)).then(|| begin.format(self.style().day).to_string())
    }

    fn years(&self, begin: NaiveDate, end: NaiveDate) -> Option<String> {
        if !self.range.is_full_year() {
            return None;
        }
        if self.range.is_one_year() {
            return Some(begin.year().to_string());
        }
        Some(span(begin.year().to_string(), end.year().to_string()))
    }

    fn quarters(&self, begin: NaiveDate, end: NaiveDate) -> Option<String> {
        if !self.range.is_full_quarter() {
            return None;
        }
        let prefix = self.style().quarter;
        let last = format!("{}{} {}", prefix, end.quarter(), end.year());
        if self.range.is_one_quarter() {
            return Some(last);
        }
        let first = if self.range.is_same_year() {
            format!("{}{}", prefix, begin.quarter())
        } else {
            format!("{}{} {}", prefix, begin.quarter(), begin.year())
        };
        Some(span(first, last))
    }

    fn one_month(&self, begin: NaiveDate) -> Option<String> {
        self.range
            .is_one_month()
            .then(|| begin.format(self.style().month).to_string())
    }

    fn day_range(&self, begin: NaiveDate, end: NaiveDate) -> String {
        let style = self.style();
        let (full, same_year) = if self.range.is_full_month() {
            (style.month, style.month_same_year)
        } else {
            (style.day_month, style.day_month_same_year)
        };
        let first = if self.range.is_same_year() { same_year } else { full };
        span(begin.format(first).to_string(), end.format(full).to_string())
    }

    fn boundless(&self) -> String {
        let side = |date: Option<NaiveDate>| {
            date.map(|d| d.format(self.style().day_month).to_string())
                .unwrap_or_else(|| INFINITY.to_string())
        };
        span(side(self.range.begin()), side(self.range.end()))
    }
}

fn span(first: String, last: String) -> String {
    format!("{} - {}", first, last)
}

/// `humanize` directly on a [`DateRange`]
pub trait Humanize {
    fn humanize(&self, format: HumanizeFormat) -> String;

    fn humanize_with(&self, format: HumanizeFormat, clock: &dyn Clock) -> String;
}

impl Humanize for DateRange {
    fn humanize(&self, format: HumanizeFormat) -> String {
        Humanizer::new(self, format).humanize()
    }

    fn humanize_with(&self, format: HumanizeFormat, clock: &dyn Clock) -> String {
        Humanizer::new(self, format).humanize_with(clock)
    }
}
