//! The source of "today" for relative ranges

use chrono::{Local, NaiveDate};

/// Supplies the current calendar date.
///
/// Shorthands such as `this_month` are evaluated against a clock on every
/// call, so swapping the clock makes them deterministic.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen on a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 15).unwrap();
        assert_eq!(FixedClock::new(date).today(), date);
    }

    #[test]
    fn test_clock_as_trait_object() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 15).unwrap();
        let clocks: Vec<Box<dyn Clock>> =
            vec![Box::new(FixedClock::new(date)), Box::new(SystemClock)];
        assert_eq!(clocks[0].today(), date);
    }
}
