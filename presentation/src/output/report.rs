//! Serializable summary of a date range

use crate::humanize::{HumanizeFormat, Humanizer};
use calrange_domain::{Clock, DateRange, Period};
use chrono::NaiveDate;
use serde::Serialize;

/// Everything the CLI reports about one range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeReport {
    /// Canonical or shorthand param, e.g. `202101..202103` or `this_quarter`
    pub param: String,
    pub humanized: String,
    pub begin: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub days: Option<i64>,
    pub granularity: Option<Period>,
    pub months: Option<u32>,
    pub quarters: Option<u32>,
    pub years: Option<u32>,
    pub weeks: Option<u32>,
    pub current: bool,
}

impl RangeReport {
    pub fn new(
        range: &DateRange,
        format: HumanizeFormat,
        relative: bool,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            param: range.to_param_with(relative, clock),
            humanized: Humanizer::new(range, format).humanize_with(clock),
            begin: range.begin(),
            end: range.end(),
            days: range.days(),
            granularity: range.granularity(),
            months: range.months(),
            quarters: range.quarters(),
            years: range.years(),
            weeks: range.weeks(),
            current: range.is_current_with(clock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calrange_domain::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::new(NaiveDate::from_ymd_opt(2021, 5, 19).unwrap())
    }

    #[test]
    fn test_report_for_current_quarter() {
        let range = DateRange::parse("202104..202106").unwrap();
        let report = RangeReport::new(&range, HumanizeFormat::Short, true, &clock());

        assert_eq!(report.param, "this_quarter");
        assert_eq!(report.humanized, "Q2 2021");
        assert_eq!(report.days, Some(91));
        assert_eq!(report.granularity, Some(Period::Quarter));
        assert_eq!(report.months, Some(3));
        assert_eq!(report.quarters, Some(1));
        assert_eq!(report.years, None);
        assert!(report.current);
    }

    #[test]
    fn test_report_without_relative_params() {
        let range = DateRange::parse("202104..202106").unwrap();
        let report = RangeReport::new(&range, HumanizeFormat::Relative, false, &clock());

        assert_eq!(report.param, "202104..202106");
        assert_eq!(report.humanized, "this quarter");
    }

    #[test]
    fn test_report_for_boundless_range() {
        let range = DateRange::parse("20210101..").unwrap();
        let report = RangeReport::new(&range, HumanizeFormat::Short, true, &clock());

        assert_eq!(report.param, "20210101..");
        assert_eq!(report.humanized, "Jan 01, 2021 - ∞");
        assert_eq!(report.end, None);
        assert_eq!(report.days, None);
        assert_eq!(report.granularity, None);
        assert!(!report.current);
    }

    #[test]
    fn test_report_serializes_dates_as_iso() {
        let range = DateRange::parse("20210115..20210120").unwrap();
        let report = RangeReport::new(&range, HumanizeFormat::Short, false, &clock());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["begin"], "2021-01-15");
        assert_eq!(json["end"], "2021-01-20");
        assert_eq!(json["days"], 6);
        assert!(json["granularity"].is_null());
    }
}
