//! Calendar classification of a [`DateRange`].
//!
//! "One" predicates require the range to be exactly one period instance: the
//! end is compared with the end of the period containing the *begin* date.
//! "Full" predicates accept any whole number of periods: the end is compared
//! with the end of its *own* period. Every predicate is `false` when a bound
//! it needs is missing.

use super::DateRange;
use crate::calendar::period::Period;
use chrono::Datelike;

impl DateRange {
    /// Check if the begin date is the first day of its `period`
    pub fn begin_at_beginning_of(&self, period: Period) -> bool {
        matches!(self.begin, Some(begin) if period.beginning_of(begin) == begin)
    }

    pub fn begin_at_beginning_of_month(&self) -> bool {
        self.begin_at_beginning_of(Period::Month)
    }

    pub fn begin_at_beginning_of_quarter(&self) -> bool {
        self.begin_at_beginning_of(Period::Quarter)
    }

    pub fn begin_at_beginning_of_year(&self) -> bool {
        self.begin_at_beginning_of(Period::Year)
    }

    pub fn begin_at_beginning_of_week(&self) -> bool {
        self.begin_at_beginning_of(Period::Week)
    }

    /// Check if the range covers exactly one instance of `period`
    pub fn is_one(&self, period: Period) -> bool {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) => {
                period.beginning_of(begin) == begin && period.end_of(begin) == end
            }
            _ => false,
        }
    }

    pub fn is_one_month(&self) -> bool {
        self.is_one(Period::Month)
    }

    pub fn is_one_quarter(&self) -> bool {
        self.is_one(Period::Quarter)
    }

    pub fn is_one_year(&self) -> bool {
        self.is_one(Period::Year)
    }

    pub fn is_one_week(&self) -> bool {
        self.is_one(Period::Week)
    }

    /// Check if the range covers one or more whole, aligned instances of `period`
    pub fn is_full(&self, period: Period) -> bool {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) => {
                period.beginning_of(begin) == begin && period.end_of(end) == end
            }
            _ => false,
        }
    }

    pub fn is_full_month(&self) -> bool {
        self.is_full(Period::Month)
    }

    pub fn is_full_quarter(&self) -> bool {
        self.is_full(Period::Quarter)
    }

    pub fn is_full_year(&self) -> bool {
        self.is_full(Period::Year)
    }

    pub fn is_full_week(&self) -> bool {
        self.is_full(Period::Week)
    }

    /// Alias of [`DateRange::is_full_month`]
    pub fn is_full_months(&self) -> bool {
        self.is_full_month()
    }

    /// Alias of [`DateRange::is_full_quarter`]
    pub fn is_full_quarters(&self) -> bool {
        self.is_full_quarter()
    }

    /// Alias of [`DateRange::is_full_year`]
    pub fn is_full_years(&self) -> bool {
        self.is_full_year()
    }

    /// Alias of [`DateRange::is_full_week`]
    pub fn is_full_weeks(&self) -> bool {
        self.is_full_week()
    }

    /// The single period this range matches exactly.
    ///
    /// Checked in order year, quarter, month, week, so a calendar year
    /// reports [`Period::Year`] even though it is also a whole number of
    /// quarters.
    pub fn granularity(&self) -> Option<Period> {
        Period::PRECEDENCE
            .into_iter()
            .find(|period| self.is_one(*period))
    }

    /// Check if begin and end fall in the same calendar year
    pub fn is_same_year(&self) -> bool {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) => begin.year() == end.year(),
            _ => false,
        }
    }

    /// Number of whole months, `None` unless the range is a full month
    pub fn months(&self) -> Option<u32> {
        if !self.is_full_month() {
            return None;
        }
        let (begin, end) = self.begin.zip(self.end)?;
        let years = end.year() - begin.year();
        let months = years * 12 + end.month() as i32 - begin.month() as i32 + 1;
        u32::try_from(months).ok()
    }

    /// Number of whole quarters, `None` unless the range is a full quarter
    pub fn quarters(&self) -> Option<u32> {
        if !self.is_full_quarter() {
            return None;
        }
        self.months().map(|months| months / 3)
    }

    /// Number of whole years, `None` unless the range is a full year
    pub fn years(&self) -> Option<u32> {
        if !self.is_full_year() {
            return None;
        }
        self.months().map(|months| months / 12)
    }

    /// Number of whole weeks, `None` unless the range is a full week
    pub fn weeks(&self) -> Option<u32> {
        if !self.is_full_week() {
            return None;
        }
        self.days().and_then(|days| u32::try_from(days / 7).ok())
    }
}
