// File: crates/history-chart/tests/window.rs
// Purpose: Validate windowing (sort, last 14) and the not-enough-data placeholder.

use chrono::NaiveDate;
use history_chart::{window, FixedScale, HistoryChart, HoverState, Observation, RenderOptions, Rendered};
use history_chart::theme::Color;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn obs(d: u32, v: f64) -> Observation {
    Observation::new(day(d), v)
}

#[test]
fn keeps_last_fourteen_sorted() {
    // Days 20 down to 1, deliberately reversed.
    let data: Vec<Observation> = (1..=20).rev().map(|d| obs(d, d as f64)).collect();
    let w = window(&data);
    assert_eq!(w.len(), 14);
    assert_eq!(w.first().unwrap().date, day(7));
    assert_eq!(w.last().unwrap().date, day(20));
    assert!(w.windows(2).all(|p| p[0].date <= p[1].date));
}

#[test]
fn short_history_is_kept_whole() {
    let data = vec![obs(5, 1.0), obs(2, 2.0), obs(9, 3.0)];
    let w = window(&data);
    assert_eq!(w.iter().map(|o| o.date).collect::<Vec<_>>(), vec![day(2), day(5), day(9)]);
}

#[test]
fn duplicate_dates_are_kept_in_input_order() {
    let data = vec![obs(4, 1.0), obs(3, 9.0), obs(4, 2.0)];
    let w = window(&data);
    assert_eq!(w.len(), 3);
    assert_eq!(w[1].value, 1.0);
    assert_eq!(w[2].value, 2.0);
}

#[test]
fn fewer_than_two_points_render_placeholder() {
    let opts = RenderOptions::default();
    let color = Color::rgb(0xEF, 0x44, 0x44);
    for data in [vec![], vec![obs(1, 3.0)]] {
        let plain = HistoryChart::new("t", color).with_observations(data.clone());
        let fixed = plain.clone().with_fixed_scale(FixedScale::RATING);
        for chart in [plain, fixed] {
            let out = chart.render(&opts, &HoverState { active: Some(0) });
            match out {
                Rendered::Placeholder { width, height, ref message } => {
                    assert_eq!((width, height), (300.0, 192.0));
                    assert_eq!(message, "Not enough data to display a chart.");
                }
                Rendered::Chart(_) => panic!("expected placeholder"),
            }
            assert!(chart.layout(&opts).is_none());
        }
    }
}

#[test]
fn two_points_render_a_chart() {
    let chart = HistoryChart::new("t", Color::rgb(0, 0, 0)).with_observations(vec![obs(1, 1.0), obs(2, 2.0)]);
    assert!(!chart.render(&RenderOptions::default(), &HoverState::idle()).is_placeholder());
}
