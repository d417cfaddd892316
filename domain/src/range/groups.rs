//! Splitting a range into consecutive calendar periods.
//!
//! [`Groups`] walks forward one period at a time using boundary arithmetic,
//! so a range without an end yields an endless (but lazy) sequence.

use super::DateRange;
use crate::calendar::period::Period;
use crate::core::error::{DateRangeError, Result};
use chrono::NaiveDate;
use std::iter::FusedIterator;

/// Lazy iterator over the groups of a [`DateRange`].
///
/// Every group covers `amount` whole periods, except the first and last which
/// are clipped to the range. Cloning a `Groups` gives an independent iterator
/// starting from the same position, so a sequence can be restarted by
/// cloning it before consuming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groups {
    cursor: Option<NaiveDate>,
    end: Option<NaiveDate>,
    period: Period,
    amount: u32,
}

impl Groups {
    /// The period each group is aligned to
    pub fn period(&self) -> Period {
        self.period
    }

    /// Number of periods per group
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Check if the sequence never ends
    pub fn is_infinite(&self) -> bool {
        self.end.is_none()
    }
}

impl Iterator for Groups {
    type Item = DateRange;

    fn next(&mut self) -> Option<DateRange> {
        let start = self.cursor?;
        if self.end.is_some_and(|end| start > end) {
            self.cursor = None;
            return None;
        }

        let last_period = self
            .period
            .shift(self.period.beginning_of(start), i64::from(self.amount) - 1);
        let mut stop = last_period.map_or(NaiveDate::MAX, |date| self.period.end_of(date));
        if let Some(end) = self.end {
            stop = stop.min(end);
        }

        self.cursor = stop.succ_opt();
        Some(DateRange {
            begin: Some(start),
            end: Some(stop),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.cursor, self.end) {
            (None, _) => (0, Some(0)),
            (Some(_), None) => (usize::MAX, None),
            (Some(start), Some(end)) => (usize::from(start <= end), None),
        }
    }
}

impl FusedIterator for Groups {}

impl DateRange {
    /// Split the range into groups of `amount` months, quarters or years.
    ///
    /// Weeks are not a valid grouping and fail with
    /// [`DateRangeError::UnknownGranularity`]. A range without a begin cannot
    /// anchor the walk and fails with [`DateRangeError::BoundlessRange`]. A
    /// range without an end produces an infinite sequence; take what you need.
    /// An `amount` of zero is treated as one.
    ///
    /// ```
    /// use calrange_domain::{DateRange, Period};
    ///
    /// let groups: Vec<String> = DateRange::parse("20200115..20200315")
    ///     .unwrap()
    ///     .in_groups_of(Period::Month, 1)
    ///     .unwrap()
    ///     .map(|group| group.to_param(false))
    ///     .collect();
    /// assert_eq!(groups, ["20200115..20200131", "202002..202002", "20200301..20200315"]);
    /// ```
    pub fn in_groups_of(&self, period: Period, amount: u32) -> Result<Groups> {
        let period = period.require_groupable()?;
        let begin = self.begin.ok_or(DateRangeError::BoundlessRange("groups"))?;
        Ok(Groups {
            cursor: Some(begin),
            end: self.end,
            period,
            amount: amount.max(1),
        })
    }

    /// Like [`DateRange::in_groups_of`], with the period given by name
    pub fn in_groups_of_named(&self, period: &str, amount: u32) -> Result<Groups> {
        self.in_groups_of(period.parse()?, amount)
    }
}
