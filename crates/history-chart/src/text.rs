// File: crates/history-chart/src/text.rs
// Summary: Label text: date/value formatting and per-locale strings.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.", "déc.",
];

impl Locale {
    pub fn month_abbrev(&self, month: u32) -> &'static str {
        let i = (month.clamp(1, 12) - 1) as usize;
        match self {
            Locale::En => MONTHS_EN[i],
            Locale::Fr => MONTHS_FR[i],
        }
    }

    /// Tooltip date, e.g. `5 Mar` / `5 mars`.
    pub fn full_date(&self, date: NaiveDate) -> String {
        format!("{} {}", date.day(), self.month_abbrev(date.month()))
    }

    pub fn not_enough_data(&self) -> &'static str {
        match self {
            Locale::En => "Not enough data to display a chart.",
            Locale::Fr => "Pas assez de données pour afficher un graphique.",
        }
    }

    /// Accessible label of a point's hit target.
    pub fn point_label(&self, date: NaiveDate, value: f64) -> String {
        match self {
            Locale::En => format!("Date: {}, Value: {}", self.full_date(date), format_value(value)),
            Locale::Fr => format!("Date: {}, Valeur: {}", self.full_date(date), format_value(value)),
        }
    }

    pub fn symptoms_title(&self) -> &'static str {
        match self {
            Locale::En => "Symptom severity (last 14 days)",
            Locale::Fr => "Sévérité des symptômes (14 derniers jours)",
        }
    }

    pub fn adherence_title(&self) -> &'static str {
        match self {
            Locale::En => "Plan adherence (last 14 days)",
            Locale::Fr => "Adhésion au plan (14 derniers jours)",
        }
    }

    pub fn metric_title(&self, metric: &str) -> String {
        match self {
            Locale::En => format!("Trend: {metric}"),
            Locale::Fr => format!("Évolution de : {metric}"),
        }
    }
}

/// Axis date label: day/month without zero padding.
pub fn short_date(date: NaiveDate) -> String {
    format!("{}/{}", date.day(), date.month())
}

/// Shortest decimal that round-trips (`3`, `7.5`, `1.4`).
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
