//! Domain error types

use thiserror::Error;

/// Errors raised by [`DateRange`](crate::DateRange) construction, parsing and arithmetic
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("Date range invalid, {0}")]
    InvalidDateRange(String),

    #[error("Cannot add {left} and {right}: ranges are not adjacent")]
    InvalidAddition { left: String, right: String },

    #[error("Invalid date range format: {0}")]
    InvalidDateRangeFormat(String),

    #[error("Unknown granularity {0}. Valid are: month, quarter and year")]
    UnknownGranularity(String),

    #[error("Cannot compute {0} for a boundless date range")]
    BoundlessRange(&'static str),

    #[error("Date arithmetic left the supported calendar range")]
    OutOfRange,
}

impl DateRangeError {
    /// Check if this error was caused by malformed textual input
    pub fn is_format_error(&self) -> bool {
        matches!(self, DateRangeError::InvalidDateRangeFormat(_))
    }

    /// Check if this error was caused by a missing bound
    pub fn is_boundless(&self) -> bool {
        matches!(self, DateRangeError::BoundlessRange(_))
    }
}

/// Result alias used throughout the domain crate
pub type Result<T> = std::result::Result<T, DateRangeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundless_error_display() {
        let error = DateRangeError::BoundlessRange("next");
        assert_eq!(
            error.to_string(),
            "Cannot compute next for a boundless date range"
        );
    }

    #[test]
    fn test_unknown_granularity_display() {
        let error = DateRangeError::UnknownGranularity("halve_year".to_string());
        assert_eq!(
            error.to_string(),
            "Unknown granularity halve_year. Valid are: month, quarter and year"
        );
    }

    #[test]
    fn test_kind_checks() {
        assert!(DateRangeError::InvalidDateRangeFormat("x".into()).is_format_error());
        assert!(!DateRangeError::InvalidDateRange("x".into()).is_format_error());
        assert!(DateRangeError::BoundlessRange("previous").is_boundless());
        assert!(!DateRangeError::OutOfRange.is_boundless());
    }
}
