// File: crates/history-chart/src/import.rs
// Summary: CSV import of external health metrics and per-metric chart grouping.
// Notes:
// - Expected header: `date,metric,value` in any order, case-insensitive.
// - Invalid rows are skipped and counted rather than failing the whole import.

use std::collections::BTreeMap;
use std::io::Read;

use tracing::{debug, info};

use crate::chart::HistoryChart;
use crate::entry::{parse_date, ExternalHealthData, DATE_FORMAT};
use crate::error::{ChartError, Result};
use crate::text::Locale;
use crate::theme::Color;

/// Line colors assigned to metric charts in order.
pub const METRIC_PALETTE: [Color; 7] = [
    Color::rgb(0x4A, 0x90, 0xE2),
    Color::rgb(0x50, 0xE3, 0xC2),
    Color::rgb(0xF5, 0xA6, 0x23),
    Color::rgb(0xBD, 0x10, 0xE0),
    Color::rgb(0x90, 0x13, 0xFE),
    Color::rgb(0x4C, 0xAF, 0x50),
    Color::rgb(0xFB, 0x8C, 0x00),
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImportReport {
    /// Accepted records, newest first.
    pub records: Vec<ExternalHealthData>,
    /// Non-blank rows rejected for a missing field, bad number, bad date or
    /// undecodable text.
    pub skipped: usize,
}

struct Columns {
    date: usize,
    metric: usize,
    value: usize,
}

impl Columns {
    fn locate(header: &csv::StringRecord) -> Option<Self> {
        let find = |name: &str| header.iter().position(|h| h.trim().eq_ignore_ascii_case(name));
        Some(Self { date: find("date")?, metric: find("metric")?, value: find("value")? })
    }
}

pub fn parse_csv<R: Read>(reader: R) -> Result<ImportReport> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let header = rdr.headers()?.clone();
    // `None` marks a record the reader could not decode (e.g. invalid UTF-8).
    let mut rows: Vec<Option<csv::StringRecord>> = Vec::new();
    for record in rdr.records() {
        match record {
            Ok(record) if record.iter().all(|f| f.is_empty()) => continue,
            Ok(record) => rows.push(Some(record)),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                debug!(error = %e, "undecodable CSV record");
                rows.push(None);
            }
        }
    }
    if rows.is_empty() {
        return Err(ChartError::EmptyCsv);
    }
    let cols = Columns::locate(&header).ok_or(ChartError::MissingColumns)?;

    let mut report = ImportReport::default();
    for (line, row) in rows.iter().enumerate() {
        match row.as_ref().and_then(|r| parse_row(r, &cols)) {
            Some(rec) => report.records.push(rec),
            None => {
                debug!(row = line + 1, "skipping invalid CSV row");
                report.skipped += 1;
            }
        }
    }
    // ISO dates sort chronologically as strings.
    report.records.sort_by(|a, b| b.date.cmp(&a.date));
    info!(imported = report.records.len(), skipped = report.skipped, "CSV import finished");
    Ok(report)
}

pub fn parse_csv_str(text: &str) -> Result<ImportReport> {
    parse_csv(text.as_bytes())
}

fn parse_row(row: &csv::StringRecord, cols: &Columns) -> Option<ExternalHealthData> {
    let date = row.get(cols.date).filter(|s| !s.is_empty())?;
    let metric = row.get(cols.metric).filter(|s| !s.is_empty())?;
    let value: f64 = row.get(cols.value)?.parse::<f64>().ok().filter(|v| v.is_finite())?;
    let date = parse_date(date).ok()?;
    Some(ExternalHealthData {
        date: date.format(DATE_FORMAT).to_string(),
        metric: metric.to_string(),
        value,
    })
}

/// Group records by lower-cased metric name, in name order.
pub fn group_by_metric(records: &[ExternalHealthData]) -> BTreeMap<String, Vec<ExternalHealthData>> {
    let mut groups: BTreeMap<String, Vec<ExternalHealthData>> = BTreeMap::new();
    for r in records {
        groups.entry(r.metric.to_lowercase()).or_default().push(r.clone());
    }
    groups
}

/// One auto-scaled chart per metric, colors cycling through [`METRIC_PALETTE`].
pub fn metric_charts(records: &[ExternalHealthData], locale: Locale) -> Result<Vec<HistoryChart>> {
    group_by_metric(records)
        .into_iter()
        .enumerate()
        .map(|(i, (metric, entries))| {
            let observations = entries.iter().map(ExternalHealthData::to_observation).collect::<Result<Vec<_>>>()?;
            let color = METRIC_PALETTE[i % METRIC_PALETTE.len()];
            Ok(HistoryChart::new(locale.metric_title(&metric), color).with_observations(observations))
        })
        .collect()
}
