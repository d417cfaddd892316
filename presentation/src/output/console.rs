//! Console output formatter for date ranges

use crate::output::formatter::OutputFormatter;
use crate::output::report::RangeReport;
use colored::Colorize;

const LABEL_WIDTH: usize = 12;

/// Formats range reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a single report as labelled rows
    pub fn format(report: &RangeReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::row("Range:", &report.param.bold().to_string()));
        output.push_str(&Self::row("Humanized:", &report.humanized));

        if let Some(days) = report.days {
            output.push_str(&Self::row("Days:", &days.to_string()));
        }
        if let Some(granularity) = report.granularity {
            let granularity = granularity.to_string().yellow().to_string();
            output.push_str(&Self::row("Granularity:", &granularity));
        }

        let counts = [
            ("Months:", report.months),
            ("Quarters:", report.quarters),
            ("Years:", report.years),
            ("Weeks:", report.weeks),
        ];
        for (label, count) in counts {
            if let Some(count) = count {
                output.push_str(&Self::row(label, &count.to_string()));
            }
        }

        if report.days.is_none() {
            output.push_str(&Self::row("Bounds:", &"boundless".dimmed().to_string()));
        }
        if report.current {
            output.push_str(&Self::row("Current:", &"yes".green().to_string()));
        }

        output
    }

    /// Format a list as one `param  humanized` line per report
    pub fn format_list(title: &str, reports: &[RangeReport]) -> String {
        let mut output = Self::section_header(title);

        if reports.is_empty() {
            output.push_str(&format!("  {}\n", "(none)".dimmed()));
            return output;
        }

        let width = reports.iter().map(|r| r.param.len()).max().unwrap_or(0);
        for report in reports {
            output.push_str(&format!(
                "  {:<width$}  {}\n",
                report.param,
                report.humanized.dimmed(),
                width = width
            ));
        }

        output
    }

    fn row(label: &str, value: &str) -> String {
        format!("{:<width$} {}\n", label.cyan().bold(), value, width = LABEL_WIDTH)
    }

    fn section_header(title: &str) -> String {
        format!("{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RangeReport) -> String {
        Self::format(report)
    }

    fn format_list(&self, title: &str, reports: &[RangeReport]) -> String {
        Self::format_list(title, reports)
    }

    fn format_optional(&self, report: Option<&RangeReport>) -> String {
        match report {
            Some(report) => Self::format(report),
            None => format!("{}\n", "No overlap".yellow()),
        }
    }

    fn format_humanized(&self, report: &RangeReport) -> String {
        format!("{}\n", report.humanized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::humanize::HumanizeFormat;
    use calrange_domain::{DateRange, FixedClock};
    use chrono::NaiveDate;

    fn report(input: &str) -> RangeReport {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2021, 5, 19).unwrap());
        let range = DateRange::parse_with(input, &clock).unwrap();
        RangeReport::new(&range, HumanizeFormat::Short, true, &clock)
    }

    #[test]
    fn test_format_report() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format(&report("this_month"));

        assert!(output.contains("this_month"));
        assert!(output.contains("May 2021"));
        assert!(output.contains("Days:"));
        assert!(output.contains("31"));
        assert!(output.contains("Granularity:"));
        assert!(output.contains("Current:"));
    }

    #[test]
    fn test_format_boundless_report() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format(&report("20210101.."));

        assert!(output.contains("20210101.."));
        assert!(output.contains("boundless"));
        assert!(!output.contains("Days:"));
    }

    #[test]
    fn test_format_list() {
        colored::control::set_override(false);
        let reports = vec![report("202101..202101"), report("202102..202102")];
        let output = ConsoleFormatter::format_list("Groups", &reports);

        assert!(output.starts_with("Groups"));
        assert!(output.contains("202101..202101  Jan 2021"));
        assert!(output.contains("202102..202102  Feb 2021"));
    }

    #[test]
    fn test_format_empty_list_and_missing_overlap() {
        colored::control::set_override(false);
        assert!(ConsoleFormatter::format_list("Groups", &[]).contains("(none)"));
        assert!(ConsoleFormatter.format_optional(None).contains("No overlap"));
    }

    #[test]
    fn test_format_humanized_is_plain() {
        colored::control::set_override(false);
        let output = ConsoleFormatter.format_humanized(&report("202101..202103"));
        assert_eq!(output, "Q1 2021\n");
    }
}
