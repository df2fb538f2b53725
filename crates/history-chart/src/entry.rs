// File: crates/history-chart/src/entry.rs
// Summary: Tracker entry shapes as stored by the app, and their normalization into observations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::series::Observation;

/// Storage date format for every entry kind.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date string as a calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| ChartError::InvalidDate(s.to_string()))
}

/// Symptom journal entry, severity on a 1-5 scale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymptomEntry {
    #[serde(default)]
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub description: String,
    pub severity: f64,
}

/// Daily plan adherence entry, rating on a 1-5 scale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdherenceEntry {
    #[serde(default)]
    pub id: String,
    pub date: String,
    pub rating: f64,
    #[serde(default)]
    pub notes: String,
}

/// One imported metric sample (CSV or a connected device).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExternalHealthData {
    pub date: String,
    pub metric: String,
    pub value: f64,
}

impl ExternalHealthData {
    pub fn to_observation(&self) -> Result<Observation> {
        Ok(Observation::new(parse_date(&self.date)?, self.value))
    }
}

/// Either entry shape accepted by the chart. Deserializes from whichever of
/// `severity` or `rating` the stored object carries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceEntry {
    Severity(SymptomEntry),
    Rating(AdherenceEntry),
}

impl SourceEntry {
    pub fn date(&self) -> &str {
        match self {
            SourceEntry::Severity(e) => &e.date,
            SourceEntry::Rating(e) => &e.date,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            SourceEntry::Severity(e) => e.severity,
            SourceEntry::Rating(e) => e.rating,
        }
    }

    pub fn to_observation(&self) -> Result<Observation> {
        Ok(Observation::new(parse_date(self.date())?, self.value()))
    }
}

impl From<SymptomEntry> for SourceEntry {
    fn from(e: SymptomEntry) -> Self { SourceEntry::Severity(e) }
}

impl From<AdherenceEntry> for SourceEntry {
    fn from(e: AdherenceEntry) -> Self { SourceEntry::Rating(e) }
}

/// Normalize entries into observations; the first malformed date aborts.
pub fn normalize(entries: &[SourceEntry]) -> Result<Vec<Observation>> {
    entries.iter().map(SourceEntry::to_observation).collect()
}

/// Load a stored JSON array of entries (either shape, mixed allowed).
pub fn entries_from_json(json: &str) -> Result<Vec<SourceEntry>> {
    Ok(serde_json::from_str(json)?)
}
