// File: crates/history-chart/src/types.rs
// Summary: Shared constants (logical canvas, window length, marker radii, scale policy).

/// Logical canvas width.
pub const WIDTH: f64 = 300.0;
/// Logical canvas height.
pub const HEIGHT: f64 = 150.0;
/// Uniform padding between the canvas edge and the plot area.
pub const PADDING: f64 = 25.0;

/// Size of the "not enough data" placeholder.
pub const PLACEHOLDER_WIDTH: f64 = 300.0;
pub const PLACEHOLDER_HEIGHT: f64 = 192.0;

/// Number of most recent observations plotted.
pub const WINDOW_LEN: usize = 14;
/// Fewer windowed points than this renders the placeholder.
pub const MIN_POINTS: usize = 2;

/// Auto scale pads the data range by this fraction on both ends.
pub const AUTO_PAD_RATIO: f64 = 0.15;
/// Auto scale always emits this many ticks.
pub const AUTO_TICK_COUNT: usize = 5;
/// Padded ranges at least this wide get integer ticks.
pub const INTEGER_TICK_SPAN: f64 = 10.0;
/// Upper bound on fixed-scale ticks.
pub const FIXED_TICK_LIMIT: usize = 50;

/// Invisible pointer target around each point.
pub const HIT_RADIUS: f64 = 8.0;
pub const MARKER_RADIUS: f64 = 3.0;
pub const ACTIVE_MARKER_RADIUS: f64 = 5.0;
pub const ACTIVE_MARKER_STROKE: f64 = 2.0;
pub const LINE_WIDTH: f64 = 2.0;

/// Every date label is shown up to this many points.
pub const DENSE_LABEL_LIMIT: usize = 7;
