//! Source of "today" for date checks.

use chrono::{Local, NaiveDate};

/// Provides the current calendar date.
///
/// Validation and the monthly summary read the date through this trait so
/// tests can pin it.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen on a given day.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
