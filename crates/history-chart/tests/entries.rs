// File: crates/history-chart/tests/entries.rs
// Purpose: Validate normalization of stored severity/rating entries into observations.

use chrono::NaiveDate;
use history_chart::entry::{entries_from_json, normalize, parse_date};
use history_chart::{AdherenceEntry, ChartError, FixedScale, HistoryChart, Locale, SourceEntry};

#[test]
fn stored_json_of_either_shape_normalizes() {
    let json = r#"[
        {"id": "a", "date": "2024-02-10", "description": "Headache", "severity": 4},
        {"id": "b", "date": "2024-02-08", "rating": 2, "notes": ""}
    ]"#;
    let entries = entries_from_json(json).expect("parse");
    assert!(matches!(entries[0], SourceEntry::Severity(_)));
    assert!(matches!(entries[1], SourceEntry::Rating(_)));

    let obs = normalize(&entries).expect("normalize");
    assert_eq!(obs[0].date, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
    assert_eq!(obs[0].value, 4.0);
    assert_eq!(obs[1].value, 2.0);
}

#[test]
fn malformed_date_is_a_typed_error() {
    let err = parse_date("10/02/2024").unwrap_err();
    assert!(matches!(err, ChartError::InvalidDate(ref s) if s == "10/02/2024"));

    let entries = vec![SourceEntry::from(AdherenceEntry {
        id: "x".into(),
        date: "2024-13-01".into(),
        rating: 3.0,
        notes: String::new(),
    })];
    assert!(normalize(&entries).is_err());
}

#[test]
fn adherence_preset_uses_fixed_rating_scale() {
    let entries: Vec<AdherenceEntry> = (1..=3)
        .map(|d| AdherenceEntry { id: d.to_string(), date: format!("2024-07-0{d}"), rating: d as f64, notes: String::new() })
        .collect();
    let chart = HistoryChart::adherence(&entries, Locale::Fr).unwrap();
    assert_eq!(chart.fixed_scale, Some(FixedScale::RATING));
    assert_eq!(chart.title, "Adhésion au plan (14 derniers jours)");
    assert_eq!(chart.gradient_id(), "gradient-3B82F6");
}
