use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use history_chart::svg::to_svg;
use history_chart::{FixedScale, HistoryChart, HoverState, Observation, RenderOptions};
use history_chart::theme::Color;

fn build_ratings(n: usize) -> HistoryChart {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let data = (0..n)
        .map(|i| Observation::new(start.checked_add_days(Days::new(i as u64)).unwrap(), (i % 5 + 1) as f64))
        .collect();
    HistoryChart::new("adherence", Color::rgb(0x3B, 0x82, 0xF6))
        .with_observations(data)
        .with_fixed_scale(FixedScale::RATING)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    let opts = RenderOptions::default();
    let chart = build_ratings(60);
    group.bench_function("idle", |b| {
        b.iter(|| black_box(to_svg(&chart.render(&opts, &HoverState::idle()), &opts.theme)));
    });
    group.bench_function("hovered", |b| {
        let hover = HoverState { active: Some(7) };
        b.iter(|| black_box(to_svg(&chart.render(&opts, &hover), &opts.theme)));
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
