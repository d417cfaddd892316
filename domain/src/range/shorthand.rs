//! Named, today-relative ranges such as `this_month` or `prev_quarter`.

use super::DateRange;
use crate::calendar::clock::{Clock, SystemClock};
use crate::calendar::period::Period;
use crate::core::error::DateRangeError;
use chrono::NaiveDate;
use std::fmt;

/// Position of a shorthand relative to the current period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Previous,
    Current,
    Next,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Previous => "prev",
            Relation::Current => "this",
            Relation::Next => "next",
        }
    }

    fn offset(&self) -> i64 {
        match self {
            Relation::Previous => -1,
            Relation::Current => 0,
            Relation::Next => 1,
        }
    }
}

/// A named range relative to today (Value Object)
///
/// Resolving a shorthand shifts today by -1, 0 or +1 period and takes the
/// whole period containing the result. Nothing is cached: every call reads
/// the clock again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shorthand {
    pub relation: Relation,
    pub period: Period,
}

impl Shorthand {
    /// Every shorthand, grouped by period
    pub const ALL: [Shorthand; 12] = [
        Shorthand::new(Relation::Current, Period::Month),
        Shorthand::new(Relation::Previous, Period::Month),
        Shorthand::new(Relation::Next, Period::Month),
        Shorthand::new(Relation::Current, Period::Quarter),
        Shorthand::new(Relation::Previous, Period::Quarter),
        Shorthand::new(Relation::Next, Period::Quarter),
        Shorthand::new(Relation::Current, Period::Year),
        Shorthand::new(Relation::Previous, Period::Year),
        Shorthand::new(Relation::Next, Period::Year),
        Shorthand::new(Relation::Current, Period::Week),
        Shorthand::new(Relation::Previous, Period::Week),
        Shorthand::new(Relation::Next, Period::Week),
    ];

    pub const fn new(relation: Relation, period: Period) -> Self {
        Self { relation, period }
    }

    /// Shorthands of a single period, e.g. `this_month`, `prev_month`, `next_month`
    pub fn for_period(period: Period) -> impl Iterator<Item = Shorthand> {
        Self::ALL
            .into_iter()
            .filter(move |shorthand| shorthand.period == period)
    }

    /// Name used in the textual grammar, e.g. `prev_quarter`
    pub fn name(&self) -> String {
        format!("{}_{}", self.relation.as_str(), self.period)
    }

    /// Check if this is one of the `this_*` shorthands
    pub fn is_current(&self) -> bool {
        self.relation == Relation::Current
    }

    /// The range this shorthand denotes when today is `today`
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        // Shifting by one period only fails within a period of chrono's limits.
        let reference = self
            .period
            .shift(today, self.relation.offset())
            .unwrap_or(today);
        DateRange::covering(self.period, reference)
    }

    /// The range this shorthand denotes according to `clock`
    pub fn range(&self, clock: &dyn Clock) -> DateRange {
        self.resolve(clock.today())
    }
}

impl fmt::Display for Shorthand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.relation.as_str(), self.period)
    }
}

impl std::str::FromStr for Shorthand {
    type Err = DateRangeError;

    /// Accepts names regardless of case, with `-` or spaces in place of `_`,
    /// and `previous_` as a synonym of `prev_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        let unknown =
            || DateRangeError::InvalidDateRangeFormat(format!("{} isn't a known shorthand", s));

        let (relation, period) = normalized.split_once('_').ok_or_else(unknown)?;
        let relation = match relation {
            "this" => Relation::Current,
            "prev" | "previous" => Relation::Previous,
            "next" => Relation::Next,
            _ => return Err(unknown()),
        };
        let period = match period {
            "week" => Period::Week,
            "month" => Period::Month,
            "quarter" => Period::Quarter,
            "year" => Period::Year,
            _ => return Err(unknown()),
        };
        Ok(Shorthand::new(relation, period))
    }
}

macro_rules! shorthand_factories {
    ($($(#[$doc:meta])* $name:ident $(| $alias:ident)? => $relation:ident $period:ident;)*) => {
        impl DateRange {
            $(
                $(#[$doc])*
                pub fn $name() -> DateRange {
                    Shorthand::new(Relation::$relation, Period::$period).range(&SystemClock)
                }

                $(
                    #[doc = concat!("Alias of [`DateRange::", stringify!($name), "`]")]
                    pub fn $alias() -> DateRange {
                        Self::$name()
                    }
                )?
            )*
        }
    };
}

shorthand_factories! {
    /// The current calendar month
    this_month => Current Month;
    /// The calendar month before the current one
    prev_month | previous_month => Previous Month;
    /// The calendar month after the current one
    next_month => Next Month;
    /// The current quarter
    this_quarter => Current Quarter;
    /// The quarter before the current one
    prev_quarter | previous_quarter => Previous Quarter;
    /// The quarter after the current one
    next_quarter => Next Quarter;
    /// The current calendar year
    this_year => Current Year;
    /// The calendar year before the current one
    prev_year | previous_year => Previous Year;
    /// The calendar year after the current one
    next_year => Next Year;
    /// The current week, Monday through Sunday
    this_week => Current Week;
    /// The week before the current one
    prev_week | previous_week => Previous Week;
    /// The week after the current one
    next_week => Next Week;
}

impl DateRange {
    /// The shorthand currently equal to this range, according to `clock`.
    ///
    /// Only shorthands of the range's own granularity are considered, so a
    /// quarter is never reported as a month shorthand.
    pub fn relative_param_with(&self, clock: &dyn Clock) -> Option<Shorthand> {
        let granularity = self.granularity()?;
        let today = clock.today();
        Shorthand::for_period(granularity).find(|shorthand| shorthand.resolve(today) == *self)
    }

    /// The shorthand currently equal to this range
    pub fn relative_param(&self) -> Option<Shorthand> {
        self.relative_param_with(&SystemClock)
    }

    /// Check if this range is the current week, month, quarter or year
    pub fn is_current_with(&self, clock: &dyn Clock) -> bool {
        self.relative_param_with(clock)
            .is_some_and(|shorthand| shorthand.is_current())
    }

    pub fn is_current(&self) -> bool {
        self.is_current_with(&SystemClock)
    }

    fn is_this(&self, period: Period, clock: &dyn Clock) -> bool {
        *self == Shorthand::new(Relation::Current, period).range(clock)
    }

    pub fn is_this_month_with(&self, clock: &dyn Clock) -> bool {
        self.is_this(Period::Month, clock)
    }

    pub fn is_this_month(&self) -> bool {
        self.is_this_month_with(&SystemClock)
    }

    pub fn is_this_quarter_with(&self, clock: &dyn Clock) -> bool {
        self.is_this(Period::Quarter, clock)
    }

    pub fn is_this_quarter(&self) -> bool {
        self.is_this_quarter_with(&SystemClock)
    }

    pub fn is_this_year_with(&self, clock: &dyn Clock) -> bool {
        self.is_this(Period::Year, clock)
    }

    pub fn is_this_year(&self) -> bool {
        self.is_this_year_with(&SystemClock)
    }

    pub fn is_this_week_with(&self, clock: &dyn Clock) -> bool {
        self.is_this(Period::Week, clock)
    }

    pub fn is_this_week(&self) -> bool {
        self.is_this_week_with(&SystemClock)
    }
}
