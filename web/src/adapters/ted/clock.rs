//! System clock

use chrono::{Local, NaiveDate};

use crate::domain::ports::Clock;

/// Reads today's date from the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
