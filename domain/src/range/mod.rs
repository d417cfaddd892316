//! The [`DateRange`] value type.
//!
//! A `DateRange` is an inclusive, closed range of calendar days. Either side
//! may be unbounded (`None`), but not both. Operations are spread over
//! submodules by concern:
//!
//! | Module | Concern |
//! |--------|---------|
//! | [`classify`] | month/quarter/year/week predicates and granularity |
//! | [`arithmetic`] | addition, ordering, intersection, previous/next |
//! | [`groups`] | lazy decomposition into consecutive periods |
//! | [`parsing`] | the textual grammar and shorthand names |
//! | [`serialization`] | `to_param`, `Display`, serde |
//! | [`shorthand`] | today-relative named ranges |

pub mod arithmetic;
pub mod classify;
pub mod groups;
pub mod parsing;
pub mod serialization;
pub mod shorthand;

use crate::calendar::period::Period;
use crate::calendar::span::RangeLength;
use crate::core::error::{DateRangeError, Result};
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, TimeZone};
use std::ops::RangeInclusive;

/// An inclusive range of calendar days (Value Object)
///
/// Construct one with [`DateRange::new`], [`DateRange::parse`] or one of the
/// shorthand factories such as [`DateRange::this_month`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    begin: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

/// A value usable as one side of a [`DateRange`].
///
/// Date-times are truncated to their calendar date; `None` marks an
/// unbounded side.
pub trait IntoBound {
    fn into_bound(self) -> Option<NaiveDate>;
}

impl IntoBound for NaiveDate {
    fn into_bound(self) -> Option<NaiveDate> {
        Some(self)
    }
}

impl IntoBound for NaiveDateTime {
    fn into_bound(self) -> Option<NaiveDate> {
        Some(self.date())
    }
}

impl<Tz: TimeZone> IntoBound for DateTime<Tz> {
    fn into_bound(self) -> Option<NaiveDate> {
        Some(self.date_naive())
    }
}

impl<T: IntoBound> IntoBound for Option<T> {
    fn into_bound(self) -> Option<NaiveDate> {
        self.and_then(IntoBound::into_bound)
    }
}

impl DateRange {
    /// Create a new date range.
    ///
    /// Fails with [`DateRangeError::InvalidDateRange`] when `begin` is after
    /// `end`, or when both sides are unbounded. A single-day range
    /// (`begin == end`) is valid.
    pub fn new(begin: impl IntoBound, end: impl IntoBound) -> Result<Self> {
        let begin = begin.into_bound();
        let end = end.into_bound();

        match (begin, end) {
            (None, None) => Err(DateRangeError::InvalidDateRange(
                "at least one of begin and end should be a date".to_string(),
            )),
            (Some(b), Some(e)) if b > e => Err(DateRangeError::InvalidDateRange(format!(
                "begin {} is after end {}",
                b, e
            ))),
            _ => Ok(Self { begin, end }),
        }
    }

    /// A range from `begin` extending to +∞
    pub fn starting(begin: NaiveDate) -> Self {
        Self { begin: Some(begin), end: None }
    }

    /// A range from −∞ up to and including `end`
    pub fn ending(end: NaiveDate) -> Self {
        Self { begin: None, end: Some(end) }
    }

    /// The whole period containing `date`
    pub fn covering(period: Period, date: NaiveDate) -> Self {
        Self {
            begin: Some(period.beginning_of(date)),
            end: Some(period.end_of(date)),
        }
    }

    /// Build a range of the given length starting at `start`.
    ///
    /// ```
    /// use calrange_domain::{DateRange, Period, RangeLength};
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    /// let fortnight = DateRange::from_date_and_duration(start, RangeLength::Days(15)).unwrap();
    /// assert_eq!(fortnight.to_string(), "20210101..20210115");
    ///
    /// let quarter = DateRange::from_date_and_duration(start, Period::Quarter).unwrap();
    /// assert_eq!(quarter.to_string(), "20210101..20210331");
    /// ```
    pub fn from_date_and_duration(
        start: NaiveDate,
        length: impl Into<RangeLength>,
    ) -> Result<Self> {
        let end = match length.into() {
            RangeLength::Days(0) => {
                return Err(DateRangeError::InvalidDateRange(
                    "a range should span at least one day".to_string(),
                ));
            }
            RangeLength::Days(days) => start
                .checked_add_days(Days::new(u64::from(days) - 1))
                .ok_or(DateRangeError::OutOfRange)?,
            RangeLength::Whole(period) => period.end_of(start),
        };
        Self::new(start, end)
    }

    /// Inclusive lower bound, `None` when unbounded
    pub fn begin(&self) -> Option<NaiveDate> {
        self.begin
    }

    /// Inclusive upper bound, `None` when unbounded
    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Check if either side is unbounded
    pub fn is_boundless(&self) -> bool {
        self.begin.is_none() || self.end.is_none()
    }

    /// Both bounds, or a [`DateRangeError::BoundlessRange`] naming `operation`
    pub(crate) fn bounds(&self, operation: &'static str) -> Result<(NaiveDate, NaiveDate)> {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) => Ok((begin, end)),
            _ => Err(DateRangeError::BoundlessRange(operation)),
        }
    }

    /// Number of days in the range, `None` when boundless
    pub fn days(&self) -> Option<i64> {
        let (begin, end) = self.begin.zip(self.end)?;
        Some((end - begin).num_days() + 1)
    }

    /// Check if `date` lies within the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.begin.is_none_or(|begin| begin <= date) && self.end.is_none_or(|end| date <= end)
    }
}

impl<A: IntoBound, B: IntoBound> TryFrom<(A, B)> for DateRange {
    type Error = DateRangeError;

    fn try_from((begin, end): (A, B)) -> Result<Self> {
        Self::new(begin, end)
    }
}

impl TryFrom<RangeInclusive<NaiveDate>> for DateRange {
    type Error = DateRangeError;

    fn try_from(range: RangeInclusive<NaiveDate>) -> Result<Self> {
        let (begin, end) = range.into_inner();
        Self::new(begin, end)
    }
}

impl TryFrom<[NaiveDate; 2]> for DateRange {
    type Error = DateRangeError;

    fn try_from([begin, end]: [NaiveDate; 2]) -> Result<Self> {
        Self::new(begin, end)
    }
}

impl TryFrom<&[NaiveDate]> for DateRange {
    type Error = DateRangeError;

    fn try_from(dates: &[NaiveDate]) -> Result<Self> {
        match dates {
            [begin, end] => Self::new(*begin, *end),
            _ => Err(DateRangeError::InvalidDateRange(format!(
                "expected a begin and end date, got {} dates",
                dates.len()
            ))),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{NaiveTime, Utc};

    pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub(crate) fn range(input: &str) -> DateRange {
        DateRange::parse(input).unwrap()
    }

    #[test]
    fn test_new() {
        let r = DateRange::new(date(2021, 1, 1), date(2021, 12, 31)).unwrap();
        assert_eq!(r.begin(), Some(date(2021, 1, 1)));
        assert_eq!(r.end(), Some(date(2021, 12, 31)));
        assert!(!r.is_boundless());
    }

    #[test]
    fn test_new_single_day() {
        let r = DateRange::new(date(2021, 5, 5), date(2021, 5, 5)).unwrap();
        assert_eq!(r.days(), Some(1));
    }

    #[test]
    fn test_new_end_before_begin() {
        let result = DateRange::new(date(2021, 12, 31), date(2021, 1, 1));
        assert!(matches!(result, Err(DateRangeError::InvalidDateRange(_))));
    }

    #[test]
    fn test_new_without_any_bound() {
        let result = DateRange::new(None::<NaiveDate>, None::<NaiveDate>);
        assert!(matches!(result, Err(DateRangeError::InvalidDateRange(_))));
    }

    #[test]
    fn test_new_truncates_date_times() {
        let begin = date(2021, 1, 1).and_time(NaiveTime::from_hms_opt(13, 45, 0).unwrap());
        let end = Utc.with_ymd_and_hms(2021, 1, 31, 23, 0, 0).unwrap();
        let r = DateRange::new(begin, end).unwrap();
        assert_eq!(r, range("202101..202101"));
    }

    #[test]
    fn test_new_boundless() {
        let r = DateRange::new(date(2021, 1, 1), None::<NaiveDate>).unwrap();
        assert_eq!(r, DateRange::starting(date(2021, 1, 1)));
        assert!(r.is_boundless());
        assert_eq!(r.end(), None);
        assert_eq!(r.days(), None);

        let r = DateRange::new(None::<NaiveDate>, date(2021, 5, 1)).unwrap();
        assert_eq!(r, DateRange::ending(date(2021, 5, 1)));
        assert_eq!(r.begin(), None);
    }

    #[test]
    fn test_try_from_pairs() {
        let expected = DateRange::new(date(2021, 1, 1), date(2021, 12, 31)).unwrap();
        assert_eq!(DateRange::try_from(date(2021, 1, 1)..=date(2021, 12, 31)), Ok(expected));
        assert_eq!(DateRange::try_from([date(2021, 1, 1), date(2021, 12, 31)]), Ok(expected));
        assert_eq!(DateRange::try_from((date(2021, 1, 1), date(2021, 12, 31))), Ok(expected));

        let dates = vec![date(2021, 1, 1)];
        assert!(matches!(
            DateRange::try_from(dates.as_slice()),
            Err(DateRangeError::InvalidDateRange(_))
        ));
    }

    #[test]
    fn test_from_date_and_duration() {
        let start = date(2021, 1, 1);
        assert_eq!(
            DateRange::from_date_and_duration(start, 15).unwrap(),
            DateRange::new(start, date(2021, 1, 15)).unwrap()
        );
        assert_eq!(
            DateRange::from_date_and_duration(start, Period::Month).unwrap(),
            DateRange::new(start, date(2021, 1, 31)).unwrap()
        );
        assert_eq!(
            DateRange::from_date_and_duration(start, Period::Quarter).unwrap(),
            DateRange::new(start, date(2021, 3, 31)).unwrap()
        );
        assert_eq!(
            DateRange::from_date_and_duration(start, Period::Year).unwrap(),
            DateRange::new(start, date(2021, 12, 31)).unwrap()
        );
        assert!(DateRange::from_date_and_duration(start, 0).is_err());
    }

    #[test]
    fn test_covering() {
        assert_eq!(DateRange::covering(Period::Month, date(2021, 2, 14)), range("202102..202102"));
        assert_eq!(
            DateRange::covering(Period::Week, date(2021, 4, 21)),
            range("20210419..20210425")
        );
    }

    #[test]
    fn test_days() {
        assert_eq!(range("20210101..20210101").days(), Some(1));
        assert_eq!(range("202101..202101").days(), Some(31));
        assert_eq!(range("202101..202112").days(), Some(365));
        assert_eq!(range("202001..202012").days(), Some(366));
    }

    #[test]
    fn test_contains() {
        let year = range("202101..202112");
        assert!(year.contains(date(2021, 6, 15)));
        assert!(year.contains(date(2021, 1, 1)));
        assert!(year.contains(date(2021, 12, 31)));
        assert!(!year.contains(date(2020, 12, 31)));
        assert!(!year.contains(date(2022, 1, 1)));

        assert!(DateRange::starting(date(2021, 1, 1)).contains(date(2999, 1, 1)));
        assert!(!DateRange::ending(date(2021, 1, 1)).contains(date(2021, 1, 2)));
    }
}
