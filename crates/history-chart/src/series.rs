// File: crates/history-chart/src/series.rs
// Summary: Canonical dated observation and the 14-point chart window.
// Notes:
// - Dates are calendar dates (`NaiveDate`), i.e. pinned to local midnight with no
//   timezone arithmetic, so observations from different days never collide.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::types::WINDOW_LEN;

/// A single dated numeric data point fed to the chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

impl Observation {
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// Days since 0001-01-01; linear in the midnight timestamp of `date`.
    #[inline]
    pub fn day_number(&self) -> f64 {
        day_number(self.date)
    }
}

#[inline]
pub fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Sort ascending by date and keep the most recent [`WINDOW_LEN`] observations.
///
/// The sort is stable, so observations sharing a date keep their input order.
pub fn window(observations: &[Observation]) -> Vec<Observation> {
    window_with_len(observations, WINDOW_LEN)
}

pub fn window_with_len(observations: &[Observation], len: usize) -> Vec<Observation> {
    let mut sorted = observations.to_vec();
    sorted.sort_by_key(|o| o.date);
    let skip = sorted.len().saturating_sub(len);
    if skip > 0 {
        debug!(total = sorted.len(), dropped = skip, "truncating history to chart window");
    }
    sorted.split_off(skip)
}
