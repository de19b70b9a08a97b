//! Clock port trait

use chrono::NaiveDate;

/// Supplies the calendar date that anchors the lookback window
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
