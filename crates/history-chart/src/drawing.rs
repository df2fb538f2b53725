// File: crates/history-chart/src/drawing.rs
// Summary: Declarative, backend-independent vector drawing produced by the chart renderer.

use crate::geometry::{Point, Rect};
use crate::theme::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    None,
    /// Fully transparent but still hit-testable.
    Transparent,
    Solid(Color),
    /// Reference to a [`LinearGradient`] by id.
    Gradient(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f64,
    /// Dash and gap lengths.
    pub dash: Option<(f64, f64)>,
}

impl Stroke {
    pub fn solid(color: Color, width: f64) -> Self {
        Self { paint: Paint::Solid(color), width, dash: None }
    }

    pub fn dashed(color: Color, width: f64, dash: f64, gap: f64) -> Self {
        Self { paint: Paint::Solid(color), width, dash: Some((dash, gap)) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub anchor: Anchor,
    pub bold: bool,
    pub fill: Color,
}

/// What a circle stands for in the interactive chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CircleRole {
    /// Invisible pointer target of point `index`.
    HitTarget { index: usize },
    /// Visible marker of point `index`; ignores pointer events.
    Marker { index: usize, active: bool },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Line { from: Point, to: Point, stroke: Stroke },
    Polygon { points: Vec<Point>, fill: Paint },
    Polyline { points: Vec<Point>, stroke: Stroke },
    Circle {
        center: Point,
        radius: f64,
        fill: Paint,
        stroke: Option<Stroke>,
        role: CircleRole,
        aria_label: Option<String>,
    },
    Rect { rect: Rect, corner_radius: f64, fill: Paint },
    Text { at: Point, text: String, style: TextStyle },
    /// Children positioned relative to `translate`; never receives pointer events.
    Group { translate: Point, drop_shadow: bool, children: Vec<Element> },
}

/// Vertical gradient from `y1 = 0` to `y2 = 1` of the filled shape's bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub id: String,
    pub color: Color,
    /// `(offset, opacity)` pairs, offsets in 0..=1.
    pub stops: Vec<(f64, f64)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Drawing {
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub gradients: Vec<LinearGradient>,
    pub elements: Vec<Element>,
}

impl Drawing {
    pub fn gradient(&self, id: &str) -> Option<&LinearGradient> {
        self.gradients.iter().find(|g| g.id == id)
    }

    /// Markers in point order, with their active flag.
    pub fn markers(&self) -> impl Iterator<Item = (usize, Point, f64, bool)> + '_ {
        self.elements.iter().filter_map(|e| match e {
            Element::Circle { center, radius, role: CircleRole::Marker { index, active }, .. } => {
                Some((*index, *center, *radius, *active))
            }
            _ => None,
        })
    }

    pub fn hit_targets(&self) -> impl Iterator<Item = (usize, Point, f64)> + '_ {
        self.elements.iter().filter_map(|e| match e {
            Element::Circle { center, radius, role: CircleRole::HitTarget { index }, .. } => {
                Some((*index, *center, *radius))
            }
            _ => None,
        })
    }

    /// The floating label group, present only while a point is active.
    pub fn tooltip(&self) -> Option<&Element> {
        self.elements.iter().find(|e| matches!(e, Element::Group { .. }))
    }
}

/// Renderer output: a chart, or the terminal "not enough data" state.
#[derive(Clone, Debug, PartialEq)]
pub enum Rendered {
    Placeholder { width: f64, height: f64, message: String },
    Chart(Drawing),
}

impl Rendered {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Rendered::Placeholder { .. })
    }

    pub fn drawing(&self) -> Option<&Drawing> {
        match self {
            Rendered::Chart(d) => Some(d),
            Rendered::Placeholder { .. } => None,
        }
    }

    pub fn size(&self) -> (f64, f64) {
        match self {
            Rendered::Placeholder { width, height, .. } => (*width, *height),
            Rendered::Chart(d) => (d.width, d.height),
        }
    }
}
