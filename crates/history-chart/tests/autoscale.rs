// File: crates/history-chart/tests/autoscale.rs
// Purpose: Validate fixed and auto value scales (padding, zero floor, tick rounding).

use history_chart::scale::round_significant;
use history_chart::{FixedScale, ValueScale};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn auto_pads_fifteen_percent() {
    let s = ValueScale::auto(&[2.0, 4.0, 6.0]);
    assert!(approx(s.min, 1.4));
    assert!(approx(s.max, 6.6));
    // Span 5.2 < 10: two significant digits.
    assert_eq!(s.ticks, vec![1.4, 2.7, 4.0, 5.3, 6.6]);
}

#[test]
fn flat_values_pad_by_one_unit() {
    let s = ValueScale::auto(&[3.0, 3.0, 3.0]);
    assert_eq!((s.min, s.max), (2.0, 4.0));
    assert_ne!(s.min, s.max);
    assert_eq!(s.ticks, vec![2.0, 2.5, 3.0, 3.5, 4.0]);
}

#[test]
fn floors_at_zero() {
    let s = ValueScale::auto(&[0.5, 10.0]);
    assert_eq!(s.min, 0.0);
    assert!(approx(s.max, 11.425));
}

#[test]
fn all_zero_values_still_have_a_range() {
    let s = ValueScale::auto(&[0.0, 0.0]);
    assert_eq!((s.min, s.max), (0.0, 1.0));
    assert_eq!(s.ticks.len(), 5);
}

#[test]
fn wide_range_rounds_ticks_to_integers() {
    let s = ValueScale::auto(&[0.0, 100.0]);
    assert_eq!((s.min, s.max), (0.0, 115.0));
    assert_eq!(s.ticks, vec![0.0, 29.0, 58.0, 86.0, 115.0]);
}

#[test]
fn step_counts_round_to_integers() {
    let s = ValueScale::auto(&[6000.0, 8000.0, 10000.0]);
    assert_eq!((s.min, s.max), (5400.0, 10600.0));
    assert_eq!(s.ticks, vec![5400.0, 6700.0, 8000.0, 9300.0, 10600.0]);
}

#[test]
fn fixed_scale_ignores_data() {
    let s = ValueScale::fixed(FixedScale::RATING);
    assert_eq!((s.min, s.max), (1.0, 5.0));
    assert_eq!(s.ticks, vec![1.0, 2.0, 3.0, 4.0, 5.0]);

    let wide = ValueScale::fixed(FixedScale::new(0.0, 3.0));
    assert_eq!(wide.ticks, vec![0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn significant_digit_rounding() {
    assert_eq!(round_significant(2.66, 2), 2.7);
    assert_eq!(round_significant(0.01234, 2), 0.012);
    assert_eq!(round_significant(1234.0, 2), 1200.0);
    assert_eq!(round_significant(0.0, 2), 0.0);
}

#[test]
fn exact_ties_round_up() {
    let s = ValueScale::auto(&[7.25, 7.25]);
    assert_eq!((s.min, s.max), (6.25, 8.25));
    assert_eq!(s.ticks, vec![6.3, 6.8, 7.3, 7.8, 8.3]);

    let s = ValueScale::auto(&[1.25, 1.25]);
    assert_eq!(s.ticks, vec![0.25, 0.75, 1.3, 1.8, 2.3]);

    assert_eq!(round_significant(7.25, 2), 7.3);
    assert_eq!(round_significant(-7.25, 2), -7.3);
    // 2.65 is stored just below the tie.
    assert_eq!(round_significant(2.65, 2), 2.6);
    assert_eq!(round_significant(9.96, 2), 10.0);
}

#[test]
fn fixed_scale_with_unbounded_range_is_capped() {
    let inf = ValueScale::fixed(FixedScale::new(0.0, f64::INFINITY));
    assert!(inf.ticks.is_empty());

    let nan = ValueScale::fixed(FixedScale::new(f64::NAN, 5.0));
    assert!(nan.ticks.is_empty());

    let inverted = ValueScale::fixed(FixedScale::new(5.0, 1.0));
    assert!(inverted.ticks.is_empty());

    let huge = ValueScale::fixed(FixedScale::new(0.0, 1e300));
    assert_eq!(huge.ticks.len(), 50);
    assert_eq!(huge.ticks[49], 49.0);
}
