// File: crates/history-chart/src/error.rs
// Summary: Error type for the boundary operations (date/color parsing, CSV import, output).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid color '{0}': expected #RRGGBB")]
    InvalidColor(String),

    #[error("CSV header must contain 'date', 'metric' and 'value' columns")]
    MissingColumns,

    #[error("CSV input contains no data rows")]
    EmptyCsv,

    #[error("raster rendering failed: {0}")]
    Raster(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
