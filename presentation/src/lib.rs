//! Presentation layer for calrange
//!
//! This crate contains the humanizer, CLI definitions, configuration
//! loading and output formatters.

pub mod cli;
pub mod config;
pub mod humanize;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, GroupBy, HumanizeArg, OutputFormat};
pub use cli::runner::CommandRunner;
pub use config::{AppConfig, CalendarConfig, ConfigLoader, OutputConfig};
pub use humanize::{Humanize, HumanizeFormat, Humanizer};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::json::JsonFormatter;
pub use output::report::RangeReport;
