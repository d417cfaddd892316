//! Textual date range grammar.
//!
//! # Formats
//!
//! | Input | Meaning |
//! |-------|---------|
//! | `20210115..20210220` | explicit begin and end day |
//! | `202101..202103` | whole months: Jan 1 through Mar 31 |
//! | `2021-01-15..2021-02` | dashes are optional, forms can be mixed |
//! | `20210101..` / `..20210501` | unbounded end / begin |
//! | `this_month`, `prev_quarter`, ... | a [`Shorthand`] evaluated against today |

use super::DateRange;
use super::shorthand::Shorthand;
use crate::calendar::clock::{Clock, SystemClock};
use crate::calendar::period::Period;
use crate::core::error::{DateRangeError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

static RANGE_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<year>[12][0-9]{3})-?(?P<month>0[1-9]|1[0-2])-?(?P<day>[0-2][0-9]|3[01])?$")
        .expect("range part pattern is valid")
});

/// Anything [`DateRange::parse`] accepts: text, or a begin/end pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeInput<'a> {
    Text(&'a str),
    Pair(Option<NaiveDate>, Option<NaiveDate>),
}

impl<'a> From<&'a str> for RangeInput<'a> {
    fn from(text: &'a str) -> Self {
        RangeInput::Text(text)
    }
}

impl<'a> From<&'a String> for RangeInput<'a> {
    fn from(text: &'a String) -> Self {
        RangeInput::Text(text.as_str())
    }
}

impl From<(NaiveDate, NaiveDate)> for RangeInput<'_> {
    fn from((begin, end): (NaiveDate, NaiveDate)) -> Self {
        RangeInput::Pair(Some(begin), Some(end))
    }
}

impl From<(Option<NaiveDate>, Option<NaiveDate>)> for RangeInput<'_> {
    fn from((begin, end): (Option<NaiveDate>, Option<NaiveDate>)) -> Self {
        RangeInput::Pair(begin, end)
    }
}

impl From<RangeInclusive<NaiveDate>> for RangeInput<'_> {
    fn from(range: RangeInclusive<NaiveDate>) -> Self {
        let (begin, end) = range.into_inner();
        RangeInput::Pair(Some(begin), Some(end))
    }
}

#[derive(Clone, Copy)]
enum Side {
    Begin,
    End,
}

impl DateRange {
    /// Parse a date range, evaluating shorthands against the system clock.
    ///
    /// ```
    /// use calrange_domain::DateRange;
    ///
    /// let range = DateRange::parse("2014-04..20140515").unwrap();
    /// assert_eq!(range.to_string(), "20140401..20140515");
    /// assert!(DateRange::parse("20160925..20160931").is_err());
    /// ```
    pub fn parse<'a>(input: impl Into<RangeInput<'a>>) -> Result<Self> {
        Self::parse_with(input, &SystemClock)
    }

    /// Parse a date range, evaluating shorthands against `clock`
    pub fn parse_with<'a>(input: impl Into<RangeInput<'a>>, clock: &dyn Clock) -> Result<Self> {
        match input.into() {
            RangeInput::Pair(begin, end) => Self::new(begin, end),
            RangeInput::Text(text) => Self::parse_text(text.trim(), clock),
        }
    }

    fn parse_text(text: &str, clock: &dyn Clock) -> Result<Self> {
        if let Ok(shorthand) = text.parse::<Shorthand>() {
            return Ok(shorthand.range(clock));
        }

        let (begin, end) = text.split_once("..").ok_or_else(|| {
            DateRangeError::InvalidDateRangeFormat(format!(
                "{} doesn't have a begin..end format",
                text
            ))
        })?;
        if begin.is_empty() && end.is_empty() {
            return Err(DateRangeError::InvalidDateRangeFormat(format!(
                "{} needs at least a begin or an end",
                text
            )));
        }

        let begin = parse_bound(begin, Side::Begin)?;
        let end = parse_bound(end, Side::End)?;
        Self::new(begin, end)
    }
}

impl std::str::FromStr for DateRange {
    type Err = DateRangeError;

    fn from_str(s: &str) -> Result<Self> {
        DateRange::parse(s)
    }
}

fn parse_bound(token: &str, side: Side) -> Result<Option<NaiveDate>> {
    if token.is_empty() {
        return Ok(None);
    }

    let invalid = || {
        DateRangeError::InvalidDateRangeFormat(format!(
            "{} isn't a valid date format YYYYMMDD or YYYYMM",
            token
        ))
    };
    let captures = RANGE_PART.captures(token).ok_or_else(invalid)?;
    let year: i32 = captures["year"].parse().map_err(|_| invalid())?;
    let month: u32 = captures["month"].parse().map_err(|_| invalid())?;

    let date = match captures.name("day") {
        Some(day) => {
            let day: u32 = day.as_str().parse().map_err(|_| invalid())?;
            NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                DateRangeError::InvalidDateRangeFormat(format!(
                    "{} isn't a valid calendar date",
                    token
                ))
            })?
        }
        None => {
            let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
            match side {
                Side::Begin => first,
                Side::End => Period::Month.end_of(first),
            }
        }
    };
    Ok(Some(date))
}
