//! Domain layer for calrange
//!
//! This crate contains the [`DateRange`] value type and the calendar concepts
//! it is built from. It performs no I/O; the only outside input is the
//! [`Clock`] used to resolve today-relative shorthands.
//!
//! # Core Concepts
//!
//! ## DateRange
//!
//! An inclusive range of calendar days. Either side may be unbounded.
//!
//! - **Parsing**: `YYYYMMDD..YYYYMMDD`, `YYYYMM..YYYYMM`, open sides, shorthands
//! - **Classification**: one/full month, quarter, year or week; granularity
//! - **Arithmetic**: addition of adjacent ranges, previous/next, intersection, groups
//!
//! ## Shorthand
//!
//! Named ranges relative to today: `this_month`, `prev_quarter`, `next_year`,
//! `this_week`, ... Re-evaluated against the clock on every use.

pub mod calendar;
pub mod core;
pub mod range;

// Re-export commonly used types
pub use calendar::{
    clock::{Clock, FixedClock, SystemClock},
    period::{CalendarExt, Period, days_in_month},
    span::{RangeLength, Span},
};
pub use crate::core::error::DateRangeError;
pub use range::{
    DateRange, IntoBound,
    arithmetic::DateAnchor,
    groups::Groups,
    parsing::RangeInput,
    shorthand::{Relation, Shorthand},
};
