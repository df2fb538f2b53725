// File: crates/history-chart/src/lib.rs
// Summary: Core library entry point; exports the history chart API (model, layout, hover, output).

pub mod chart;
pub mod drawing;
pub mod entry;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod hover;
pub mod import;
pub mod scale;
pub mod series;
pub mod svg;
pub mod text;
pub mod theme;
pub mod types;
#[cfg(feature = "raster")]
pub mod raster;

pub use chart::{ChartLayout, ChartPoint, HistoryChart, RenderOptions};
pub use drawing::{Drawing, Element, Rendered};
pub use entry::{AdherenceEntry, ExternalHealthData, SourceEntry, SymptomEntry};
pub use error::{ChartError, Result};
pub use hover::{hit_test, reduce, HoverEvent, HoverState};
pub use import::{group_by_metric, metric_charts, parse_csv, ImportReport};
pub use scale::{FixedScale, Projection, ValueScale};
pub use series::{window, Observation};
pub use svg::to_svg;
pub use text::Locale;
pub use theme::{Color, Theme};
