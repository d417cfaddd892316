//! Calendar lengths used to size and measure date ranges

use super::period::Period;
use chrono::{Days, NaiveDate};
use std::fmt;

/// A calendar-aware length of time, measured from a starting date.
///
/// Month-based spans follow [`Period::shift`], so one month from January 31
/// ends on the last day of February.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Span {
    Days(u32),
    Weeks(u32),
    Months(u32),
    Quarters(u32),
    Years(u32),
}

impl Span {
    /// Build a span of `amount` whole periods
    pub fn of(amount: u32, period: Period) -> Self {
        match period {
            Period::Week => Span::Weeks(amount),
            Period::Month => Span::Months(amount),
            Period::Quarter => Span::Quarters(amount),
            Period::Year => Span::Years(amount),
        }
    }

    /// The date `self` after `date`, or `None` past the supported calendar
    pub fn add_to(&self, date: NaiveDate) -> Option<NaiveDate> {
        match *self {
            Span::Days(n) => date.checked_add_days(Days::new(u64::from(n))),
            Span::Weeks(n) => Period::Week.shift(date, i64::from(n)),
            Span::Months(n) => Period::Month.shift(date, i64::from(n)),
            Span::Quarters(n) => Period::Quarter.shift(date, i64::from(n)),
            Span::Years(n) => Period::Year.shift(date, i64::from(n)),
        }
    }

    fn parts(&self) -> (u32, &'static str) {
        match *self {
            Span::Days(n) => (n, "day"),
            Span::Weeks(n) => (n, "week"),
            Span::Months(n) => (n, "month"),
            Span::Quarters(n) => (n, "quarter"),
            Span::Years(n) => (n, "year"),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (amount, unit) = self.parts();
        if amount == 1 {
            write!(f, "1 {}", unit)
        } else {
            write!(f, "{} {}s", amount, unit)
        }
    }
}

/// The length of a range built by
/// [`DateRange::from_date_and_duration`](crate::DateRange::from_date_and_duration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeLength {
    /// A number of days, counting the start date
    Days(u32),
    /// From the start date to the end of the period containing it
    Whole(Period),
}

impl From<u32> for RangeLength {
    fn from(days: u32) -> Self {
        RangeLength::Days(days)
    }
}

impl From<Period> for RangeLength {
    fn from(period: Period) -> Self {
        RangeLength::Whole(period)
    }
}
