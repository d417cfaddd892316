//! Executes parsed commands against the domain layer

use crate::cli::commands::Command;
use crate::config::OutputConfig;
use crate::humanize::HumanizeFormat;
use crate::output::formatter::OutputFormatter;
use crate::output::report::RangeReport;
use calrange_domain::{Clock, DateRange, DateRangeError, Period};
use tracing::debug;

/// Runs one [`Command`] and renders its result
pub struct CommandRunner<'a> {
    clock: &'a dyn Clock,
    formatter: &'a dyn OutputFormatter,
    humanize: HumanizeFormat,
    relative: bool,
}

impl<'a> CommandRunner<'a> {
    pub fn new(
        clock: &'a dyn Clock,
        formatter: &'a dyn OutputFormatter,
        output: &OutputConfig,
    ) -> Self {
        Self {
            clock,
            formatter,
            humanize: output.humanize,
            relative: output.relative,
        }
    }

    pub fn run(&self, command: Command) -> Result<String, DateRangeError> {
        debug!("Running {:?}", command);

        match command {
            Command::Show { range, format } => {
                let range = self.parse(&range)?;
                let format = format.map(HumanizeFormat::from).unwrap_or(self.humanize);
                Ok(self.formatter.format_report(&self.report(&range, format)))
            }
            Command::Groups {
                range,
                by,
                amount,
                limit,
            } => {
                let range = self.parse(&range)?;
                self.groups(&range, by.into(), amount, limit)
            }
            Command::Previous { range, periods } => {
                let previous = self.parse(&range)?.previous(periods)?;
                Ok(self.formatter.format_report(&self.report(&previous, self.humanize)))
            }
            Command::Next { range, periods } => {
                let next = self.parse(&range)?.next(periods)?;
                Ok(self.formatter.format_report(&self.report(&next, self.humanize)))
            }
            Command::Intersect { first, second } => {
                let first = self.parse(&first)?;
                let second = self.parse(&second)?;
                let overlap = first
                    .intersection(&second)
                    .map(|range| self.report(&range, self.humanize));
                Ok(self.formatter.format_optional(overlap.as_ref()))
            }
            Command::Humanize { range, format } => {
                let range = self.parse(&range)?;
                let format = format.map(HumanizeFormat::from).unwrap_or(self.humanize);
                Ok(self.formatter.format_humanized(&self.report(&range, format)))
            }
        }
    }

    fn parse(&self, input: &str) -> Result<DateRange, DateRangeError> {
        DateRange::parse_with(input, self.clock)
    }

    fn report(&self, range: &DateRange, format: HumanizeFormat) -> RangeReport {
        RangeReport::new(range, format, self.relative, self.clock)
    }

    fn groups(
        &self,
        range: &DateRange,
        period: Period,
        amount: u32,
        limit: usize,
    ) -> Result<String, DateRangeError> {
        let groups = range.in_groups_of(period, amount)?;
        let take = if groups.is_infinite() {
            debug!("Range has no end, printing the first {} groups", limit);
            limit
        } else {
            usize::MAX
        };

        let reports: Vec<RangeReport> = groups
            .take(take)
            .map(|group| self.report(&group, self.humanize))
            .collect();

        let title = format!(
            "{} in groups of {} {}",
            range.to_param_with(self.relative, self.clock),
            amount.max(1),
            period
        );
        Ok(self.formatter.format_list(&title, &reports))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::{GroupBy, HumanizeArg};
    use crate::output::console::ConsoleFormatter;
    use crate::output::json::JsonFormatter;
    use calrange_domain::FixedClock;
    use chrono::NaiveDate;
    use serde_json::Value;

    fn clock() -> FixedClock {
        FixedClock::new(NaiveDate::from_ymd_opt(2021, 5, 19).unwrap())
    }

    fn run(command: Command) -> Result<Value, DateRangeError> {
        let clock = clock();
        let output = OutputConfig::default();
        let runner = CommandRunner::new(&clock, &JsonFormatter, &output);
        runner
            .run(command)
            .map(|json| serde_json::from_str(&json).unwrap())
    }

    #[test]
    fn test_show() {
        let json = run(Command::Show {
            range: "this_quarter".to_string(),
            format: None,
        })
        .unwrap();
        assert_eq!(json["param"], "this_quarter");
        assert_eq!(json["humanized"], "Q2 2021");
        assert_eq!(json["current"], true);
    }

    #[test]
    fn test_show_rejects_invalid_range() {
        let result = run(Command::Show {
            range: "20160925..20160931".to_string(),
            format: None,
        });
        assert!(matches!(result, Err(DateRangeError::InvalidDateRangeFormat(_))));
    }

    #[test]
    fn test_groups() {
        let json = run(Command::Groups {
            range: "202101..202112".to_string(),
            by: GroupBy::Quarter,
            amount: 1,
            limit: 12,
        })
        .unwrap();
        let ranges = json["ranges"].as_array().unwrap();
        assert_eq!(ranges.len(), 4);
        assert_eq!(ranges[0]["param"], "prev_quarter");
        assert_eq!(ranges[1]["param"], "this_quarter");
        assert_eq!(ranges[2]["param"], "next_quarter");
        assert_eq!(ranges[3]["param"], "202110..202112");
    }

    #[test]
    fn test_groups_of_unbounded_range_are_limited() {
        let json = run(Command::Groups {
            range: "202101..".to_string(),
            by: GroupBy::Month,
            amount: 1,
            limit: 3,
        })
        .unwrap();
        let ranges = json["ranges"].as_array().unwrap();
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[2]["param"], "202103..202103");
    }

    #[test]
    fn test_groups_without_begin_fail() {
        let result = run(Command::Groups {
            range: "..202105".to_string(),
            by: GroupBy::Month,
            amount: 1,
            limit: 12,
        });
        assert!(matches!(result, Err(DateRangeError::BoundlessRange(_))));
    }

    #[test]
    fn test_previous_and_next() {
        let json = run(Command::Previous {
            range: "202104..202106".to_string(),
            periods: 1,
        })
        .unwrap();
        assert_eq!(json["param"], "prev_quarter");

        let json = run(Command::Next {
            range: "this_month".to_string(),
            periods: 2,
        })
        .unwrap();
        assert_eq!(json["param"], "202106..202107");
    }

    #[test]
    fn test_intersect() {
        let json = run(Command::Intersect {
            first: "202101..202106".to_string(),
            second: "202104..202112".to_string(),
        })
        .unwrap();
        assert_eq!(json["param"], "this_quarter");

        let json = run(Command::Intersect {
            first: "202101..202102".to_string(),
            second: "202104..202112".to_string(),
        })
        .unwrap();
        assert!(json.is_null());
    }

    #[test]
    fn test_humanize_respects_json_output() {
        let json = run(Command::Humanize {
            range: "this_month".to_string(),
            format: Some(HumanizeArg::Relative),
        })
        .unwrap();
        assert_eq!(json["param"], "this_month");
        assert_eq!(json["humanized"], "this month");
    }

    #[test]
    fn test_humanize_as_text() {
        colored::control::set_override(false);
        let clock = clock();
        let output = OutputConfig::default();
        let runner = CommandRunner::new(&clock, &ConsoleFormatter, &output);
        let text = runner
            .run(Command::Humanize {
                range: "this_month".to_string(),
                format: Some(HumanizeArg::Relative),
            })
            .unwrap();
        assert_eq!(text, "this month\n");
    }
}
