//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use crate::output::report::RangeReport;
use serde::Serialize;

/// Formats range reports as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn to_json(value: &impl Serialize) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

#[derive(Serialize)]
struct ReportList<'a> {
    title: &'a str,
    ranges: &'a [RangeReport],
}

#[derive(Serialize)]
struct Humanized<'a> {
    param: &'a str,
    humanized: &'a str,
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RangeReport) -> String {
        Self::to_json(report)
    }

    fn format_list(&self, title: &str, reports: &[RangeReport]) -> String {
        Self::to_json(&ReportList { title, ranges: reports })
    }

    fn format_optional(&self, report: Option<&RangeReport>) -> String {
        Self::to_json(&report)
    }

    fn format_humanized(&self, report: &RangeReport) -> String {
        Self::to_json(&Humanized {
            param: &report.param,
            humanized: &report.humanized,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::humanize::HumanizeFormat;
    use calrange_domain::{DateRange, FixedClock};
    use chrono::NaiveDate;
    use serde_json::Value;

    fn report(input: &str) -> RangeReport {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2021, 5, 19).unwrap());
        let range = DateRange::parse_with(input, &clock).unwrap();
        RangeReport::new(&range, HumanizeFormat::Short, false, &clock)
    }

    #[test]
    fn test_format_report() {
        let output = JsonFormatter.format_report(&report("202101..202103"));
        let json: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["param"], "202101..202103");
        assert_eq!(json["humanized"], "Q1 2021");
        assert_eq!(json["granularity"], "quarter");
        assert_eq!(json["months"], 3);
    }

    #[test]
    fn test_format_list() {
        let reports = [report("202101..202101"), report("202102..202102")];
        let output = JsonFormatter.format_list("groups", &reports);
        let json: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["title"], "groups");
        assert_eq!(json["ranges"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["ranges"][1]["param"], "202102..202102");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(JsonFormatter.format_optional(None), "null");
        let r = report("20210105..20210110");
        let json: Value = serde_json::from_str(&JsonFormatter.format_optional(Some(&r))).unwrap();
        assert_eq!(json["days"], 6);
    }

    #[test]
    fn test_format_humanized() {
        let output = JsonFormatter.format_humanized(&report("202101..202103"));
        let json: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["param"], "202101..202103");
        assert_eq!(json["humanized"], "Q1 2021");
        assert!(json.get("days").is_none());
    }
}
