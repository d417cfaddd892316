//! Core domain concepts shared across the crate.
//!
//! - [`error::DateRangeError`]: every failure a date range operation can raise

pub mod error;
