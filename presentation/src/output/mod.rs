//! Output formatting for command results

pub mod console;
pub mod formatter;
pub mod json;
pub mod report;
