// File: crates/history-chart/src/grid.rs
// Summary: Tick spacing and x-axis label decimation.

use crate::types::DENSE_LABEL_LIMIT;

/// `steps` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let last = (steps - 1) as f64;
    (0..steps).map(|i| start + (i as f64 / last) * (end - start)).collect()
}

/// Whether point `index` of an `n`-point window carries a date label.
///
/// Every point is labelled up to [`DENSE_LABEL_LIMIT`] points. Past that, labels
/// fall on multiples of `floor(n / 5)` plus the first and last index; the last
/// gap can be shorter than the stride (e.g. n = 11 labels 0,2,4,6,8,10).
pub fn is_labelled(index: usize, n: usize) -> bool {
    if n <= DENSE_LABEL_LIMIT || index == 0 || index + 1 == n {
        return true;
    }
    index % (n / 5) == 0
}

pub fn x_label_indices(n: usize) -> Vec<usize> {
    (0..n).filter(|&i| is_labelled(i, n)).collect()
}
