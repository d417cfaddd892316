//! Calendar building blocks: periods, spans and the clock.
//!
//! - [`period::Period`]: week/month/quarter/year with boundary arithmetic
//! - [`span::Span`]: a calendar-aware length used by `exceeds`
//! - [`clock::Clock`]: injectable source of "today"

pub mod clock;
pub mod period;
pub mod span;
