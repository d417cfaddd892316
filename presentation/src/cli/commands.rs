//! CLI command definitions

use crate::humanize::HumanizeFormat;
use calrange_domain::Period;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labelled, colored text
    Text,
    /// JSON output
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

/// Humanize format accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HumanizeArg {
    Short,
    Long,
    Relative,
    Explicit,
}

impl From<HumanizeArg> for HumanizeFormat {
    fn from(arg: HumanizeArg) -> Self {
        match arg {
            HumanizeArg::Short => HumanizeFormat::Short,
            HumanizeArg::Long => HumanizeFormat::Long,
            HumanizeArg::Relative => HumanizeFormat::Relative,
            HumanizeArg::Explicit => HumanizeFormat::Explicit,
        }
    }
}

/// Periods a range can be grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupBy {
    Month,
    Quarter,
    Year,
}

impl From<GroupBy> for Period {
    fn from(by: GroupBy) -> Self {
        match by {
            GroupBy::Month => Period::Month,
            GroupBy::Quarter => Period::Quarter,
            GroupBy::Year => Period::Year,
        }
    }
}

/// CLI arguments for calrange
#[derive(Parser, Debug)]
#[command(name = "calrange")]
#[command(author, version, about = "Calendar date ranges - parse, classify, group and shift")]
#[command(long_about = r#"
calrange works with inclusive calendar date ranges.

Ranges are written as begin..end, where each side is YYYYMMDD or YYYYMM
(dashes optional). Either side may be left empty for an unbounded range.
Shorthands such as this_month, prev_quarter or next_week are evaluated
against today, or against --today when given.

Configuration files are loaded from (in priority order):
1. CALRANGE_* environment variables
2. --config <path>     Explicit config file
3. ./calrange.toml     Project-level config
4. ~/.config/calrange/config.toml   Global config

Example:
  calrange show 202101..202103
  calrange groups 202101..202112 --by quarter
  calrange groups 202101.. --limit 6
  calrange previous this_month --periods 2
  calrange humanize 20140602..20140628 --format long
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Evaluate shorthands as if today were this date
    #[arg(long, value_name = "YYYY-MM-DD", global = true)]
    pub today: Option<NaiveDate>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Describe a range: param, humanized form, length and granularity
    Show {
        /// The range, e.g. 202101..202103 or this_quarter
        range: String,

        /// Humanize format (defaults to the configured one)
        #[arg(short, long, value_enum)]
        format: Option<HumanizeArg>,
    },

    /// Split a range into consecutive month, quarter or year groups
    Groups {
        range: String,

        /// Period to group by
        #[arg(long, value_enum, default_value = "month")]
        by: GroupBy,

        /// Number of periods per group
        #[arg(long, default_value_t = 1)]
        amount: u32,

        /// Maximum number of groups to print for ranges without an end
        #[arg(long, default_value_t = 12)]
        limit: usize,
    },

    /// The range directly before, measured in the range's own period
    Previous {
        range: String,

        /// How many periods the new range spans
        #[arg(long, default_value_t = 1)]
        periods: u32,
    },

    /// The range directly after, measured in the range's own period
    Next {
        range: String,

        /// How many periods the new range spans
        #[arg(long, default_value_t = 1)]
        periods: u32,
    },

    /// The days two ranges have in common
    Intersect { first: String, second: String },

    /// Print only the humanized form of a range
    Humanize {
        range: String,

        #[arg(short, long, value_enum)]
        format: Option<HumanizeArg>,
    },
}
