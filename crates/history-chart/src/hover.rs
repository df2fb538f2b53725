// File: crates/history-chart/src/hover.rs
// Summary: Active-point selection as a two-state machine with a pure reducer, plus pointer hit-testing.

use crate::chart::ChartLayout;
use crate::geometry::Point;
use crate::types::HIT_RADIUS;

/// Pointer transitions on a point's hit target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    PointerEnter(usize),
    PointerLeave(usize),
}

/// Transient selection owned by one chart instance; `None` is idle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    pub active: Option<usize>,
}

/// Entering a point always makes it the only active one; leaving clears the
/// selection only when the left point is the active one.
pub fn reduce(state: HoverState, event: HoverEvent) -> HoverState {
    match event {
        HoverEvent::PointerEnter(i) => HoverState { active: Some(i) },
        HoverEvent::PointerLeave(i) if state.active == Some(i) => HoverState { active: None },
        HoverEvent::PointerLeave(_) => state,
    }
}

impl HoverState {
    pub const fn idle() -> Self {
        Self { active: None }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn apply(&mut self, event: HoverEvent) {
        *self = reduce(*self, event);
    }

    /// Translate a pointer position into the hover event it triggers, apply it,
    /// and return it. `None` when the selection does not change.
    pub fn pointer_move(&mut self, layout: &ChartLayout, x: f64, y: f64) -> Option<HoverEvent> {
        let event = match (self.active, hit_test(layout, x, y)) {
            (current, Some(hit)) if current != Some(hit) => HoverEvent::PointerEnter(hit),
            (Some(current), None) => HoverEvent::PointerLeave(current),
            _ => return None,
        };
        self.apply(event);
        Some(event)
    }
}

/// Point whose hit radius contains `(x, y)`; the closest wins, and on equal
/// distance the later (top-most) point.
pub fn hit_test(layout: &ChartLayout, x: f64, y: f64) -> Option<usize> {
    let pointer = Point::new(x, y);
    let r2 = HIT_RADIUS * HIT_RADIUS;
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in layout.points.iter().enumerate() {
        let d2 = p.position.distance_sq(pointer);
        if d2 > r2 {
            continue;
        }
        match best {
            Some((_, bd)) if d2 > bd => {}
            _ => best = Some((i, d2)),
        }
    }
    best.map(|(i, _)| i)
}
