//! Output formatter trait

use crate::output::report::RangeReport;

/// Trait for rendering command results
pub trait OutputFormatter {
    /// Format a single range
    fn format_report(&self, report: &RangeReport) -> String;

    /// Format a titled list of ranges, e.g. groups
    fn format_list(&self, title: &str, reports: &[RangeReport]) -> String;

    /// Format a range that may not exist, e.g. an empty intersection
    fn format_optional(&self, report: Option<&RangeReport>) -> String;

    /// Format only the humanized form of a range
    fn format_humanized(&self, report: &RangeReport) -> String;
}
