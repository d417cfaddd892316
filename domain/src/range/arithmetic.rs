//! Arithmetic on date ranges: concatenation, ordering, intersection and
//! shifting to the previous or next period.

use super::DateRange;
use crate::calendar::period::Period;
use crate::calendar::span::Span;
use crate::core::error::{DateRangeError, Result};
use chrono::{Days, NaiveDate};
use std::cmp::Ordering;
use std::ops::Add;

/// Something a range can be compared against with [`DateRange::before`] and
/// [`DateRange::after`]: a single date, or another range.
pub trait DateAnchor {
    /// The earliest day of the anchor, `None` when unbounded
    fn earliest(&self) -> Option<NaiveDate>;

    /// The latest day of the anchor, `None` when unbounded
    fn latest(&self) -> Option<NaiveDate>;
}

impl DateAnchor for NaiveDate {
    fn earliest(&self) -> Option<NaiveDate> {
        Some(*self)
    }

    fn latest(&self) -> Option<NaiveDate> {
        Some(*self)
    }
}

impl DateAnchor for DateRange {
    fn earliest(&self) -> Option<NaiveDate> {
        self.begin
    }

    fn latest(&self) -> Option<NaiveDate> {
        self.end
    }
}

fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or(DateRangeError::OutOfRange)
}

fn sub_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_sub_days(Days::new(days))
        .ok_or(DateRangeError::OutOfRange)
}

fn shift(period: Period, date: NaiveDate, periods: i64) -> Result<NaiveDate> {
    period.shift(date, periods).ok_or(DateRangeError::OutOfRange)
}

impl DateRange {
    /// Join `self` with the range directly following it.
    ///
    /// Fails with [`DateRangeError::InvalidAddition`] unless `other` begins
    /// the day after `self` ends.
    pub fn concat(&self, other: &DateRange) -> Result<DateRange> {
        let adjacent = match (self.end, other.begin) {
            (Some(end), Some(begin)) => end.succ_opt() == Some(begin),
            _ => false,
        };
        if !adjacent {
            return Err(DateRangeError::InvalidAddition {
                left: self.to_string(),
                right: other.to_string(),
            });
        }
        Ok(DateRange {
            begin: self.begin,
            end: other.end,
        })
    }

    /// The overlap of two ranges, `None` when they are disjoint
    pub fn intersection(&self, other: &DateRange) -> Option<DateRange> {
        let begin = match (self.begin, other.begin) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        let end = match (self.end, other.end) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        DateRange::new(begin, end).ok()
    }

    /// The range of the same length directly before this one.
    ///
    /// Ranges with a granularity move by whole periods, other full-month
    /// ranges move by their number of months, anything else moves by its
    /// number of days. `periods` multiplies the distance.
    ///
    /// ```
    /// use calrange_domain::DateRange;
    ///
    /// let range = DateRange::parse("201303..201401").unwrap();
    /// assert_eq!(range.previous(1).unwrap().to_param(false), "201204..201302");
    /// ```
    pub fn previous(&self, periods: u32) -> Result<DateRange> {
        let (begin, _) = self.bounds("previous")?;
        let periods = i64::from(periods);

        let mut new_begin = if let Some(granularity) = self.granularity() {
            shift(granularity, begin, -periods)?
        } else if let Some(months) = self.months() {
            shift(Period::Month, begin, -periods * i64::from(months))?
        } else {
            let days = self.days().unwrap_or(1);
            sub_days(begin, periods.unsigned_abs() * days.unsigned_abs())?
        };

        if self.is_full_month() {
            new_begin = Period::Month.beginning_of(new_begin);
        }

        DateRange::new(new_begin, sub_days(begin, 1)?)
    }

    /// The range of the same length directly after this one.
    ///
    /// Mirrors [`DateRange::previous`]: whole-month ranges move their end by
    /// their number of months, so month counts survive leap years.
    ///
    /// ```
    /// use calrange_domain::DateRange;
    ///
    /// let range = DateRange::parse("201406..201406").unwrap();
    /// assert_eq!(range.next(4).unwrap().to_param(false), "201407..201410");
    /// ```
    pub fn next(&self, periods: u32) -> Result<DateRange> {
        let (_, end) = self.bounds("next")?;
        let periods = i64::from(periods);

        let mut new_end = if let Some(granularity) = self.granularity() {
            shift(granularity, end, periods)?
        } else if let Some(months) = self.months() {
            shift(Period::Month, end, periods * i64::from(months))?
        } else {
            let days = self.days().unwrap_or(1);
            add_days(end, periods.unsigned_abs() * days.unsigned_abs())?
        };

        if self.is_full_month() {
            new_end = Period::Month.end_of(new_end);
        }

        DateRange::new(add_days(end, 1)?, new_end)
    }

    /// Extend the end to the last day of its month
    pub fn stretch_to_end_of_month(&self) -> DateRange {
        match self.end {
            Some(end) => DateRange {
                begin: self.begin,
                end: Some(Period::Month.end_of(end)),
            },
            None => *self,
        }
    }

    /// Check if the range is longer than `span`.
    ///
    /// The span is measured from the begin date, so a 31-day January does not
    /// exceed one month while a 31-day range starting in February does. An
    /// unbounded range exceeds every span.
    pub fn exceeds(&self, span: Span) -> bool {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) => span.add_to(begin).is_some_and(|limit| end >= limit),
            _ => true,
        }
    }

    /// Check if the range ends before `other` starts
    pub fn before(&self, other: &impl DateAnchor) -> bool {
        match (self.end, other.earliest()) {
            (Some(end), Some(target)) => end < target,
            _ => false,
        }
    }

    /// Check if the range starts after `other` ends
    pub fn after(&self, other: &impl DateAnchor) -> bool {
        match (self.begin, other.latest()) {
            (Some(begin), Some(target)) => begin > target,
            _ => false,
        }
    }
}

impl Add for DateRange {
    type Output = Result<DateRange>;

    fn add(self, other: DateRange) -> Self::Output {
        self.concat(&other)
    }
}

impl Ord for DateRange {
    /// Ranges sort by begin date; an unbounded begin sorts first.
    ///
    /// Unlike a begin-only comparison, equal begins fall back to the end date
    /// (an unbounded end sorts last), so `Ordering::Equal` holds exactly when
    /// the ranges are `==`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.begin.cmp(&other.begin).then_with(|| match (self.end, other.end) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
    }
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
