//! Calendar periods and their boundary arithmetic.
//!
//! [`Period`] replaces name-based dispatch ("at_beginning_of_" + period) with
//! an explicit enum: every boundary query is a `match` over the four periods.

use crate::core::error::DateRangeError;
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar period a date range can be measured in.
///
/// Weeks start on Monday, quarters start on January, April, July and October 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    Month,
    Quarter,
    Year,
}

impl Period {
    /// Periods in granularity precedence order (largest first)
    pub const PRECEDENCE: [Period; 4] =
        [Period::Year, Period::Quarter, Period::Month, Period::Week];

    /// Get the lowercase name of this period
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Quarter => "quarter",
            Period::Year => "year",
        }
    }

    /// Number of whole months in one period, `None` for weeks
    pub fn months(&self) -> Option<u32> {
        match self {
            Period::Week => None,
            Period::Month => Some(1),
            Period::Quarter => Some(3),
            Period::Year => Some(12),
        }
    }

    /// Whether ranges can be split into groups of this period
    pub fn is_groupable(&self) -> bool {
        self.months().is_some()
    }

    /// First day of the period containing `date`
    pub fn beginning_of(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Period::Week => {
                let offset = u64::from(date.weekday().num_days_from_monday());
                date.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN)
            }
            Period::Month => first_day(date.year(), date.month()),
            Period::Quarter => first_day(date.year(), first_month_of_quarter(date.month())),
            Period::Year => first_day(date.year(), 1),
        }
    }

    /// Last day of the period containing `date`
    pub fn end_of(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Period::Week => {
                let offset = u64::from(6 - date.weekday().num_days_from_monday());
                date.checked_add_days(Days::new(offset)).unwrap_or(NaiveDate::MAX)
            }
            Period::Month => last_day(date.year(), date.month()),
            Period::Quarter => last_day(date.year(), first_month_of_quarter(date.month()) + 2),
            Period::Year => last_day(date.year(), 12),
        }
    }

    /// Shift `date` by `periods` whole periods (negative moves backwards).
    ///
    /// Month-based periods keep the day of month, clamped to the length of
    /// the target month (January 31 + 1 month = February 28/29).
    pub fn shift(&self, date: NaiveDate, periods: i64) -> Option<NaiveDate> {
        match self.months() {
            Some(months) => {
                let total = periods.unsigned_abs().checked_mul(u64::from(months))?;
                let total = u32::try_from(total).ok()?;
                if periods >= 0 {
                    date.checked_add_months(Months::new(total))
                } else {
                    date.checked_sub_months(Months::new(total))
                }
            }
            None => {
                let days = periods.unsigned_abs().checked_mul(7)?;
                if periods >= 0 {
                    date.checked_add_days(Days::new(days))
                } else {
                    date.checked_sub_days(Days::new(days))
                }
            }
        }
    }

    /// Ensure the period can be used for grouping
    pub(crate) fn require_groupable(self) -> Result<Self, DateRangeError> {
        if self.is_groupable() {
            Ok(self)
        } else {
            Err(DateRangeError::UnknownGranularity(self.to_string()))
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Period {
    type Err = DateRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" | "weeks" => Ok(Period::Week),
            "month" | "months" => Ok(Period::Month),
            "quarter" | "quarters" => Ok(Period::Quarter),
            "year" | "years" => Ok(Period::Year),
            _ => Err(DateRangeError::UnknownGranularity(s.to_string())),
        }
    }
}

/// Calendar queries on a date, expressed through [`Period`].
///
/// The quarter number comes from [`Datelike::quarter`].
pub trait CalendarExt {
    /// First day of the enclosing period
    fn at_beginning_of(&self, period: Period) -> NaiveDate;

    /// Last day of the enclosing period
    fn at_end_of(&self, period: Period) -> NaiveDate;
}

impl CalendarExt for NaiveDate {
    fn at_beginning_of(&self, period: Period) -> NaiveDate {
        period.beginning_of(*self)
    }

    fn at_end_of(&self, period: Period) -> NaiveDate {
        period.end_of(*self)
    }
}

fn first_month_of_quarter(month: u32) -> u32 {
    (month - 1) / 3 * 3 + 1
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

// Both helpers are only called with a year taken from an existing date, and
// chrono supports every day of such a year.
fn first_day(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("the first day of a month is always valid")
}

fn last_day(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))
        .expect("the last day of a month is always valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_quarter_number() {
        assert_eq!(date(2021, 1, 1).quarter(), 1);
        assert_eq!(date(2021, 3, 31).quarter(), 1);
        assert_eq!(date(2021, 4, 1).quarter(), 2);
        assert_eq!(date(2021, 9, 30).quarter(), 3);
        assert_eq!(date(2021, 12, 31).quarter(), 4);
    }

    #[test]
    fn test_month_boundaries() {
        assert_eq!(Period::Month.beginning_of(date(2021, 2, 14)), date(2021, 2, 1));
        assert_eq!(Period::Month.end_of(date(2021, 2, 14)), date(2021, 2, 28));
        assert_eq!(Period::Month.end_of(date(2020, 2, 14)), date(2020, 2, 29));
        assert_eq!(Period::Month.end_of(date(2021, 4, 1)), date(2021, 4, 30));
    }

    #[test]
    fn test_quarter_boundaries() {
        assert_eq!(Period::Quarter.beginning_of(date(2021, 5, 20)), date(2021, 4, 1));
        assert_eq!(Period::Quarter.end_of(date(2021, 5, 20)), date(2021, 6, 30));
        assert_eq!(Period::Quarter.beginning_of(date(2021, 12, 31)), date(2021, 10, 1));
        assert_eq!(Period::Quarter.end_of(date(2021, 10, 1)), date(2021, 12, 31));
    }

    #[test]
    fn test_year_boundaries() {
        assert_eq!(date(2021, 7, 4).at_beginning_of(Period::Year), date(2021, 1, 1));
        assert_eq!(date(2021, 7, 4).at_end_of(Period::Year), date(2021, 12, 31));
    }

    #[test]
    fn test_week_boundaries_start_on_monday() {
        // 2021-04-21 is a Wednesday
        assert_eq!(Period::Week.beginning_of(date(2021, 4, 21)), date(2021, 4, 19));
        assert_eq!(Period::Week.end_of(date(2021, 4, 21)), date(2021, 4, 25));
        assert_eq!(Period::Week.beginning_of(date(2021, 4, 19)), date(2021, 4, 19));
        assert_eq!(Period::Week.end_of(date(2021, 4, 25)), date(2021, 4, 25));
    }

    #[test]
    fn test_shift_clamps_day_of_month() {
        assert_eq!(Period::Month.shift(date(2021, 1, 31), 1), Some(date(2021, 2, 28)));
        assert_eq!(Period::Month.shift(date(2021, 3, 31), -1), Some(date(2021, 2, 28)));
        assert_eq!(Period::Quarter.shift(date(2021, 3, 31), 1), Some(date(2021, 6, 30)));
        assert_eq!(Period::Year.shift(date(2020, 2, 29), 1), Some(date(2021, 2, 28)));
        assert_eq!(Period::Week.shift(date(2021, 4, 19), -2), Some(date(2021, 4, 5)));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("month".parse::<Period>().ok(), Some(Period::Month));
        assert_eq!("Quarters".parse::<Period>().ok(), Some(Period::Quarter));
        assert_eq!("year".parse::<Period>().ok(), Some(Period::Year));
        assert_eq!("week".parse::<Period>().ok(), Some(Period::Week));
        assert_eq!(
            "halve_year".parse::<Period>(),
            Err(DateRangeError::UnknownGranularity("halve_year".to_string()))
        );
    }

    #[test]
    fn test_week_is_not_groupable() {
        assert!(Period::Month.require_groupable().is_ok());
        assert_eq!(
            Period::Week.require_groupable(),
            Err(DateRangeError::UnknownGranularity("week".to_string()))
        );
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&Period::Quarter).unwrap();
        assert_eq!(json, "\"quarter\"");
    }
}
