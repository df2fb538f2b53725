use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use history_chart::{HistoryChart, Observation, RenderOptions};
use history_chart::theme::Color;

fn build_history(n: usize) -> HistoryChart {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    // Reverse order so the window sort has real work to do.
    let data = (0..n)
        .rev()
        .map(|i| {
            let date = start.checked_add_days(Days::new(i as u64)).unwrap();
            Observation::new(date, (i as f64 * 0.3).sin() * 500.0 + 8000.0)
        })
        .collect();
    HistoryChart::new("steps", Color::rgb(0x4A, 0x90, 0xE2)).with_observations(data)
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let opts = RenderOptions::default();
    for &n in &[14usize, 365, 10_000] {
        let chart = build_history(n);
        group.bench_function(format!("history_{n}"), |b| {
            b.iter(|| black_box(chart.layout(&opts)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
