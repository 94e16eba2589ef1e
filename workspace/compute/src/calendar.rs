use model::Month;
use std::fmt;

/// How many prior months feed the prediction.
pub const LOOKBACK_MONTHS: u32 = 3;

/// A calendar month in a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthRef {
    pub month: Month,
    pub year: i32,
}

impl MonthRef {
    pub fn new(month: Month, year: i32) -> Self {
        Self { month, year }
    }

    /// Absolute month number since year 0. Year-boundary crossings reduce to
    /// plain integer arithmetic on this value.
    fn absolute(self) -> i32 {
        self.year * 12 + self.month.index() as i32
    }

    fn from_absolute(absolute: i32) -> Self {
        Self {
            month: Month::from_index(absolute.rem_euclid(12) as usize),
            year: absolute.div_euclid(12),
        }
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

/// The `n` calendar months immediately preceding `target`, oldest first.
///
/// A single modulo formula covers the year-end wraparound, so January and
/// February need no special casing.
pub fn lookback(target: MonthRef, n: u32) -> Vec<MonthRef> {
    let absolute = target.absolute();
    (1..=n as i32)
        .rev()
        .map(|back| MonthRef::from_absolute(absolute - back))
        .collect()
}
