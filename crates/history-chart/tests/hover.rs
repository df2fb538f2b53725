// File: crates/history-chart/tests/hover.rs
// Purpose: Validate the active-point state machine, hit-testing and active marker rendering.

use chrono::NaiveDate;
use history_chart::hover::{hit_test, reduce, HoverEvent, HoverState};
use history_chart::{FixedScale, HistoryChart, Observation, RenderOptions};
use history_chart::drawing::Element;
use history_chart::theme::Color;

fn chart() -> HistoryChart {
    let data = (1..=5)
        .map(|d| Observation::new(NaiveDate::from_ymd_opt(2024, 5, d).unwrap(), d as f64))
        .collect();
    HistoryChart::new("Adherence", Color::rgb(0x3B, 0x82, 0xF6))
        .with_observations(data)
        .with_fixed_scale(FixedScale::RATING)
}

#[test]
fn enter_then_leave_returns_to_idle() {
    let s = reduce(HoverState::idle(), HoverEvent::PointerEnter(2));
    assert_eq!(s.active, Some(2));
    let s = reduce(s, HoverEvent::PointerLeave(2));
    assert_eq!(s, HoverState::idle());
}

#[test]
fn last_enter_wins() {
    let mut s = HoverState::idle();
    s.apply(HoverEvent::PointerEnter(0));
    s.apply(HoverEvent::PointerEnter(3));
    assert_eq!(s.active, Some(3));
    assert!(!s.is_active(0));
    // A late leave for the old point must not clear the new one.
    s.apply(HoverEvent::PointerLeave(0));
    assert_eq!(s.active, Some(3));
}

#[test]
fn hit_test_uses_hit_radius() {
    let c = chart();
    let layout = c.layout(&RenderOptions::default()).unwrap();
    let p = layout.points[1].position;
    assert_eq!(hit_test(&layout, p.x + 7.0, p.y), Some(1));
    assert_eq!(hit_test(&layout, p.x, p.y + 8.5), None);
}

#[test]
fn pointer_moves_drive_the_selection() {
    let c = chart();
    let layout = c.layout(&RenderOptions::default()).unwrap();
    let a = layout.points[0].position;
    let b = layout.points[4].position;

    let mut s = HoverState::idle();
    assert_eq!(s.pointer_move(&layout, a.x, a.y), Some(HoverEvent::PointerEnter(0)));
    assert_eq!(s.pointer_move(&layout, a.x + 1.0, a.y), None);
    assert_eq!(s.pointer_move(&layout, b.x, b.y), Some(HoverEvent::PointerEnter(4)));
    assert_eq!(s.active, Some(4));
    assert_eq!(s.pointer_move(&layout, 150.0, 140.0), Some(HoverEvent::PointerLeave(4)));
    assert_eq!(s.active, None);
}

#[test]
fn active_marker_grows_and_shows_tooltip() {
    let c = chart();
    let opts = RenderOptions::default();

    let idle = c.render(&opts, &HoverState::idle());
    let idle = idle.drawing().unwrap();
    assert!(idle.markers().all(|(_, _, r, active)| r == 3.0 && !active));
    assert!(idle.tooltip().is_none());
    assert_eq!(idle.hit_targets().count(), 5);
    assert!(idle.hit_targets().all(|(_, _, r)| r == 8.0));

    let hovered = c.render(&opts, &HoverState { active: Some(2) });
    let hovered = hovered.drawing().unwrap();
    let active: Vec<_> = hovered.markers().filter(|m| m.3).collect();
    assert_eq!(active.len(), 1);
    assert_eq!((active[0].0, active[0].2), (2, 5.0));

    match hovered.tooltip() {
        Some(Element::Group { translate, children, .. }) => {
            assert_eq!(*translate, active[0].1);
            let texts: Vec<&str> = children
                .iter()
                .filter_map(|e| match e {
                    Element::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect();
            assert_eq!(texts, vec!["3 May", "3"]);
        }
        other => panic!("expected tooltip group, got {other:?}"),
    }
}

#[test]
fn out_of_range_selection_is_ignored() {
    let c = chart();
    let out = c.render(&RenderOptions::default(), &HoverState { active: Some(42) });
    let d = out.drawing().unwrap();
    assert!(d.tooltip().is_none());
    assert!(d.markers().all(|m| !m.3));
}
