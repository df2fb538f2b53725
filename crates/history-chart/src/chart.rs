// File: crates/history-chart/src/chart.rs
// Summary: HistoryChart and the layout/render pipeline from observations to a declarative drawing.

use tracing::debug;

use crate::drawing::{Anchor, CircleRole, Drawing, Element, LinearGradient, Paint, Rendered, Stroke, TextStyle};
use crate::entry::{normalize, AdherenceEntry, SourceEntry, SymptomEntry};
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::grid::x_label_indices;
use crate::hover::HoverState;
use crate::scale::{FixedScale, Projection, ValueScale};
use crate::series::{window, Observation};
use crate::text::{format_value, short_date, Locale};
use crate::theme::{Color, Theme};
use crate::types::*;

/// Symptom severity line color.
pub const SYMPTOM_COLOR: Color = Color::rgb(0xEF, 0x44, 0x44);
/// Plan adherence line color.
pub const ADHERENCE_COLOR: Color = Color::rgb(0x3B, 0x82, 0xF6);

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub theme: Theme,
    pub locale: Locale,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: PADDING,
            theme: Theme::light(),
            locale: Locale::default(),
        }
    }
}

/// A windowed observation and where it lands on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartPoint {
    pub observation: Observation,
    pub position: Point,
}

/// Everything derived from the observations before drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub points: Vec<ChartPoint>,
    pub scale: ValueScale,
    pub projection: Projection,
    /// Window indices that carry an x-axis date label.
    pub labels: Vec<usize>,
}

impl ChartLayout {
    /// `None` when fewer than [`MIN_POINTS`] observations remain in the window.
    pub fn compute(observations: &[Observation], fixed: Option<FixedScale>, opts: &RenderOptions) -> Option<Self> {
        let win = window(observations);
        if win.len() < MIN_POINTS {
            return None;
        }
        let scale = ValueScale::resolve(fixed, &win);
        let projection = Projection::new(opts.width, opts.height, opts.padding, &win, &scale);
        let points = win
            .iter()
            .map(|&o| ChartPoint { observation: o, position: Point::new(projection.x(o.date), projection.y(o.value)) })
            .collect();
        let labels = x_label_indices(win.len());
        Some(Self { points, scale, projection, labels })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A titled, colored chart over one dated series.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryChart {
    pub observations: Vec<Observation>,
    pub title: String,
    pub color: Color,
    pub fixed_scale: Option<FixedScale>,
}

impl HistoryChart {
    pub fn new(title: impl Into<String>, color: Color) -> Self {
        Self { observations: Vec::new(), title: title.into(), color, fixed_scale: None }
    }

    pub fn with_observations(mut self, observations: Vec<Observation>) -> Self {
        self.observations = observations;
        self
    }

    pub fn with_fixed_scale(mut self, scale: FixedScale) -> Self {
        self.fixed_scale = Some(scale);
        self
    }

    /// Normalize stored entries (either shape) into the chart's observations.
    pub fn from_entries(entries: &[SourceEntry], title: impl Into<String>, color: Color) -> Result<Self> {
        Ok(Self::new(title, color).with_observations(normalize(entries)?))
    }

    /// Symptom tracker chart: red line on the fixed 1-5 scale.
    pub fn symptoms(entries: &[SymptomEntry], locale: Locale) -> Result<Self> {
        let entries: Vec<SourceEntry> = entries.iter().cloned().map(SourceEntry::from).collect();
        Ok(Self::from_entries(&entries, locale.symptoms_title(), SYMPTOM_COLOR)?.with_fixed_scale(FixedScale::RATING))
    }

    /// Adherence tracker chart: blue line on the fixed 1-5 scale.
    pub fn adherence(entries: &[AdherenceEntry], locale: Locale) -> Result<Self> {
        let entries: Vec<SourceEntry> = entries.iter().cloned().map(SourceEntry::from).collect();
        Ok(Self::from_entries(&entries, locale.adherence_title(), ADHERENCE_COLOR)?.with_fixed_scale(FixedScale::RATING))
    }

    pub fn gradient_id(&self) -> String {
        format!("gradient-{}", self.color.hex_digits())
    }

    pub fn layout(&self, opts: &RenderOptions) -> Option<ChartLayout> {
        ChartLayout::compute(&self.observations, self.fixed_scale, opts)
    }

    /// Render with the given hover selection. An out-of-range active index is ignored.
    pub fn render(&self, opts: &RenderOptions, hover: &HoverState) -> Rendered {
        match self.layout(opts) {
            Some(layout) => Rendered::Chart(self.draw(&layout, opts, hover)),
            None => {
                debug!(title = %self.title, observations = self.observations.len(), "not enough data for chart");
                Rendered::Placeholder {
                    width: PLACEHOLDER_WIDTH,
                    height: PLACEHOLDER_HEIGHT,
                    message: opts.locale.not_enough_data().to_string(),
                }
            }
        }
    }

    fn draw(&self, layout: &ChartLayout, opts: &RenderOptions, hover: &HoverState) -> Drawing {
        let theme = &opts.theme;
        let proj = &layout.projection;
        let mut elements = Vec::new();

        // y ticks and grid lines
        let tick_style = TextStyle { size: 8.0, anchor: Anchor::End, bold: false, fill: theme.tick_label };
        for &tick in &layout.scale.ticks {
            let y = proj.y(tick);
            elements.push(Element::Text {
                at: Point::new(opts.padding - 10.0, y + 3.0),
                text: format_value(tick),
                style: tick_style.clone(),
            });
            elements.push(Element::Line {
                from: Point::new(proj.left(), y),
                to: Point::new(proj.right(), y),
                stroke: Stroke::dashed(theme.grid, 0.5, 2.0, 2.0),
            });
        }

        // x date labels
        let label_style = TextStyle { size: 8.0, anchor: Anchor::Middle, bold: false, fill: theme.tick_label };
        for &i in &layout.labels {
            let p = &layout.points[i];
            elements.push(Element::Text {
                at: Point::new(p.position.x, opts.height - 5.0),
                text: short_date(p.observation.date),
                style: label_style.clone(),
            });
        }

        let line: Vec<Point> = layout.points.iter().map(|p| p.position).collect();
        let baseline = proj.baseline();
        let mut area = Vec::with_capacity(line.len() + 2);
        area.push(Point::new(line[0].x, baseline));
        area.extend_from_slice(&line);
        area.push(Point::new(line[line.len() - 1].x, baseline));

        let gradient_id = self.gradient_id();
        elements.push(Element::Polygon { points: area, fill: Paint::Gradient(gradient_id.clone()) });
        elements.push(Element::Polyline { points: line, stroke: Stroke::solid(self.color, LINE_WIDTH) });

        let active = hover.active.filter(|&i| i < layout.len());
        for (index, p) in layout.points.iter().enumerate() {
            let is_active = active == Some(index);
            elements.push(Element::Circle {
                center: p.position,
                radius: HIT_RADIUS,
                fill: Paint::Transparent,
                stroke: None,
                role: CircleRole::HitTarget { index },
                aria_label: Some(opts.locale.point_label(p.observation.date, p.observation.value)),
            });
            elements.push(Element::Circle {
                center: p.position,
                radius: if is_active { ACTIVE_MARKER_RADIUS } else { MARKER_RADIUS },
                fill: Paint::Solid(self.color),
                stroke: is_active.then(|| Stroke::solid(theme.marker_ring, ACTIVE_MARKER_STROKE)),
                role: CircleRole::Marker { index, active: is_active },
                aria_label: None,
            });
        }

        if let Some(i) = active {
            elements.push(tooltip(&layout.points[i], opts));
        }

        Drawing {
            width: opts.width,
            height: opts.height,
            title: self.title.clone(),
            gradients: vec![LinearGradient {
                id: gradient_id,
                color: self.color,
                stops: vec![(0.0, 0.4), (1.0, 0.0)],
            }],
            elements,
        }
    }
}

/// Floating label anchored above `point`: full date over the raw value.
fn tooltip(point: &ChartPoint, opts: &RenderOptions) -> Element {
    let theme = &opts.theme;
    Element::Group {
        translate: point.position,
        drop_shadow: true,
        children: vec![
            Element::Rect {
                rect: Rect::from_xywh(-30.0, -45.0, 60.0, 32.0),
                corner_radius: 5.0,
                fill: Paint::Solid(theme.tooltip_fill),
            },
            Element::Text {
                at: Point::new(0.0, -32.0),
                text: opts.locale.full_date(point.observation.date),
                style: TextStyle { size: 9.0, anchor: Anchor::Middle, bold: false, fill: theme.tooltip_text },
            },
            Element::Text {
                at: Point::new(0.0, -19.0),
                text: format_value(point.observation.value),
                style: TextStyle { size: 10.0, anchor: Anchor::Middle, bold: true, fill: theme.tooltip_text },
            },
        ],
    }
}
