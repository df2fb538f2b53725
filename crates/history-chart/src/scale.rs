// File: crates/history-chart/src/scale.rs
// Summary: Value-axis scale (fixed or auto) and the date/value projection onto the logical canvas.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::grid::linspace;
use crate::series::{day_number, Observation};
use crate::types::{AUTO_PAD_RATIO, AUTO_TICK_COUNT, FIXED_TICK_LIMIT, INTEGER_TICK_SPAN};

const MAX_SIGNIFICANT_DIGITS: usize = 17;
const EXACT_EXPANSION_DIGITS: usize = 800;

/// Caller-supplied value range; bypasses auto-scaling entirely.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixedScale {
    pub min: f64,
    pub max: f64,
}

impl FixedScale {
    /// The 1-5 scale used by symptom severity and adherence ratings.
    pub const RATING: FixedScale = FixedScale { min: 1.0, max: 5.0 };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Derived `{min, max, ticks}` triple over the value axis.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
}

impl ValueScale {
    /// Fixed mode: one tick per integer step from `min` up to `max`, at most
    /// [`FIXED_TICK_LIMIT`]. Non-finite or inverted bounds get no ticks.
    pub fn fixed(scale: FixedScale) -> Self {
        let span = scale.max - scale.min;
        let ticks = if scale.min.is_finite() && span.is_finite() && span >= 0.0 {
            let count = (span.floor() as usize).saturating_add(1).min(FIXED_TICK_LIMIT);
            (0..count).map(|i| scale.min + i as f64).collect()
        } else {
            Vec::new()
        };
        Self { min: scale.min, max: scale.max, ticks }
    }

    /// Auto mode: pad the data range by 15% (1 unit when flat), floor at zero,
    /// and emit five evenly spaced rounded ticks.
    pub fn auto(values: &[f64]) -> Self {
        let (lo, hi) = values
            .iter()
            .copied()
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0.0, 0.0));

        let mut pad = (hi - lo) * AUTO_PAD_RATIO;
        if pad == 0.0 || pad.is_nan() {
            pad = 1.0;
        }
        let mut min = (lo - pad).max(0.0);
        let mut max = hi + pad;
        if min == max {
            min = (min - 1.0).max(0.0);
            max += 1.0;
        }

        let span = max - min;
        let ticks = linspace(min, max, AUTO_TICK_COUNT)
            .into_iter()
            .map(|v| round_tick(v, span))
            .collect();
        Self { min, max, ticks }
    }

    pub fn resolve(fixed: Option<FixedScale>, window: &[Observation]) -> Self {
        match fixed {
            Some(f) => Self::fixed(f),
            None => {
                let values: Vec<f64> = window.iter().map(|o| o.value).collect();
                Self::auto(&values)
            }
        }
    }
}

/// Integer when the padded span is at least 10, else two significant digits.
pub fn round_tick(value: f64, span: f64) -> f64 {
    if span < INTEGER_TICK_SPAN {
        round_significant(value, 2)
    } else {
        value.round()
    }
}

/// Round to `digits` significant digits, half away from zero, on the exact
/// decimal value of `value` (so 7.25 becomes 7.3 but 2.65, stored just below,
/// becomes 2.6).
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if value == 0.0 || !value.is_finite() || digits == 0 {
        return value;
    }
    let digits = digits.min(MAX_SIGNIFICANT_DIGITS);
    // Every f64 has a terminating expansion of at most 767 significant digits.
    let exact = format!("{:.*e}", EXACT_EXPANSION_DIGITS, value.abs());
    let Some((mantissa, exp)) = exact.split_once('e') else {
        return value;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return value;
    };
    let all: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let mut kept = all[..digits].iter().fold(0u64, |acc, d| acc * 10 + u64::from(d - b'0'));
    if all.get(digits).is_some_and(|&d| d >= b'5') {
        kept += 1;
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{kept}e{}", exp - digits as i32 + 1).parse().unwrap_or(value)
}

/// Linear mapping of dates (x) and values (y, inverted) onto a padded canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub t_min: f64,
    pub t_max: f64,
    pub v_min: f64,
    pub v_max: f64,
}

impl Projection {
    /// `window` must be sorted ascending by date.
    pub fn new(width: f64, height: f64, padding: f64, window: &[Observation], scale: &ValueScale) -> Self {
        let t_min = window.first().map(Observation::day_number).unwrap_or(0.0);
        let t_max = window.last().map(Observation::day_number).unwrap_or(t_min);
        Self { width, height, padding, t_min, t_max, v_min: scale.min, v_max: scale.max }
    }

    /// Left edge when every date in the window is equal.
    #[inline]
    pub fn x(&self, date: NaiveDate) -> f64 {
        let span = self.t_max - self.t_min;
        if span == 0.0 {
            return self.padding;
        }
        (day_number(date) - self.t_min) / span * (self.width - self.padding * 2.0) + self.padding
    }

    /// Vertical center when the value range is empty.
    #[inline]
    pub fn y(&self, value: f64) -> f64 {
        let span = self.v_max - self.v_min;
        if span == 0.0 {
            return self.height / 2.0;
        }
        self.height - ((value - self.v_min) / span * (self.height - self.padding * 2.0) + self.padding)
    }

    /// Bottom edge of the plot area; the filled area closes onto it.
    #[inline]
    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }

    pub fn left(&self) -> f64 { self.padding }
    pub fn right(&self) -> f64 { self.width - self.padding }
}
