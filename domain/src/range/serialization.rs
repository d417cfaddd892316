//! String and serde representations of a [`DateRange`].
//!
//! The canonical form is `begin..end` where each side is `YYYYMMDD`, or
//! `YYYYMM` when the range is made of whole months. Unbounded sides render
//! as an empty token. Every canonical string parses back to an equal range.

use super::DateRange;
use crate::calendar::clock::{Clock, SystemClock};
use crate::core::error::Result;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;

const DAY_FORMAT: &str = "%Y%m%d";
const MONTH_FORMAT: &str = "%Y%m";

fn render(begin: Option<NaiveDate>, end: Option<NaiveDate>, format: &str) -> String {
    let side = |date: Option<NaiveDate>| {
        date.map_or_else(String::new, |d| d.format(format).to_string())
    };
    format!("{}..{}", side(begin), side(end))
}

impl DateRange {
    /// Param representation, resolving shorthands against `clock`.
    ///
    /// With `relative`, a range equal to a shorthand renders as its name
    /// (`this_month`), which keeps bookmarked URLs pointing at the current
    /// period. Otherwise the canonical `YYYYMM..YYYYMM` or
    /// `YYYYMMDD..YYYYMMDD` form is returned.
    pub fn to_param_with(&self, relative: bool, clock: &dyn Clock) -> String {
        if relative {
            if let Some(shorthand) = self.relative_param_with(clock) {
                return shorthand.name();
            }
        }
        let format = if self.is_full_month() { MONTH_FORMAT } else { DAY_FORMAT };
        render(self.begin, self.end, format)
    }

    /// Param representation using the system clock
    ///
    /// ```
    /// use calrange_domain::DateRange;
    ///
    /// let year = DateRange::parse("202001..202012").unwrap();
    /// assert_eq!(year.to_param(false), "202001..202012");
    /// let days = DateRange::parse("20200101..20201210").unwrap();
    /// assert_eq!(days.to_param(false), "20200101..20201210");
    /// let open = DateRange::parse("20210101..").unwrap();
    /// assert_eq!(open.to_param(true), "20210101..");
    /// ```
    pub fn to_param(&self, relative: bool) -> String {
        self.to_param_with(relative, &SystemClock)
    }

    /// Bounds expanded to instants: begin at midnight, end at the last
    /// representable instant of the end day.
    pub fn to_datetime_range(&self) -> Result<RangeInclusive<NaiveDateTime>> {
        let (begin, end) = self.bounds("a date-time range")?;
        let last_instant = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)
            .unwrap_or(NaiveTime::MIN);
        Ok(begin.and_time(NaiveTime::MIN)..=end.and_time(last_instant))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(self.begin, self.end, DAY_FORMAT))
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_param(false))
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateRange::parse(&s).map_err(serde::de::Error::custom)
    }
}
