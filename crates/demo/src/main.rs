// File: crates/demo/src/main.rs
// Summary: Demo renders symptom, adherence and imported-metric history charts to SVG (and PNG with `raster`).

mod settings;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate};
use clap::Parser;
use history_chart::entry::DATE_FORMAT;
use history_chart::{svg, AdherenceEntry, HistoryChart, HoverEvent, HoverState, RenderOptions, SymptomEntry, Theme};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::settings::{load_settings, Settings};

#[derive(Parser, Debug)]
#[command(name = "history-chart-demo", about = "Render tracker history charts to SVG")]
struct Cli {
    /// Symptom entries as a JSON array.
    #[arg(long)]
    symptoms: Option<String>,

    /// Adherence entries as a JSON array.
    #[arg(long)]
    adherence: Option<String>,

    /// External metrics CSV with `date,metric,value` columns.
    #[arg(long)]
    csv: Option<String>,

    /// Settings file (TOML, YAML or JSON).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory; overrides the configured `out_dir`.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Also write PNGs (requires the `raster` feature).
    #[arg(long)]
    png: bool,

    /// Render with this window index highlighted.
    #[arg(long)]
    hover: Option<usize>,
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref()).context("failed to load settings")?;
    if let Some(out) = &cli.out {
        settings.out_dir = out.clone();
    }
    let opts = settings.render_options();
    info!(theme = %opts.theme.name, locale = ?opts.locale, out = %settings.out_dir.display(), "settings loaded");

    let mut charts: Vec<(String, HistoryChart)> = Vec::new();
    let has_inputs = cli.symptoms.is_some() || cli.adherence.is_some() || cli.csv.is_some();

    if let Some(raw) = &cli.symptoms {
        let path = resolve_input(raw)?;
        let entries: Vec<SymptomEntry> = read_json(&path)?;
        info!(entries = entries.len(), path = %path.display(), "loaded symptom entries");
        charts.push(("symptoms".into(), HistoryChart::symptoms(&entries, opts.locale)?));
    }
    if let Some(raw) = &cli.adherence {
        let path = resolve_input(raw)?;
        let entries: Vec<AdherenceEntry> = read_json(&path)?;
        info!(entries = entries.len(), path = %path.display(), "loaded adherence entries");
        charts.push(("adherence".into(), HistoryChart::adherence(&entries, opts.locale)?));
    }
    if let Some(raw) = &cli.csv {
        let path = resolve_input(raw)?;
        let file = std::fs::File::open(&path).with_context(|| format!("opening {}", path.display()))?;
        let report = history_chart::parse_csv(file).with_context(|| format!("failed to import '{}'", path.display()))?;
        if report.skipped > 0 {
            warn!(skipped = report.skipped, "some CSV rows were invalid");
        }
        let metric_charts = history_chart::metric_charts(&report.records, opts.locale)?;
        let names = history_chart::group_by_metric(&report.records).into_keys();
        let mut used = HashSet::new();
        for (name, chart) in names.zip(metric_charts) {
            charts.push((unique_name(&mut used, format!("metric_{}", slug(&name))), chart));
        }
    }

    if !has_inputs {
        info!("no inputs given, rendering a sample history");
        let today = Local::now().date_naive();
        charts.push(("symptoms".into(), HistoryChart::symptoms(&sample_symptoms(today), opts.locale)?));
        charts.push(("adherence".into(), HistoryChart::adherence(&sample_adherence(today), opts.locale)?));
    }

    let mut hover = HoverState::default();
    if let Some(i) = cli.hover {
        hover.apply(HoverEvent::PointerEnter(i));
    }

    for (name, chart) in &charts {
        write_chart(name, chart, &opts, &hover, &settings, cli.png)?;
    }
    info!(charts = charts.len(), "done");
    Ok(())
}

fn write_chart(
    name: &str,
    chart: &HistoryChart,
    opts: &RenderOptions,
    hover: &HoverState,
    settings: &Settings,
    png: bool,
) -> Result<()> {
    let rendered = chart.render(opts, hover);
    let out_svg = out_name(&settings.out_dir, name, "svg");
    svg::write_svg(&rendered, &opts.theme, &out_svg).with_context(|| format!("writing {}", out_svg.display()))?;
    info!(path = %out_svg.display(), placeholder = rendered.is_placeholder(), "Wrote SVG");

    if png {
        write_png(name, &rendered, &opts.theme, settings)?;
    }
    Ok(())
}

#[cfg(feature = "raster")]
fn write_png(name: &str, rendered: &history_chart::Rendered, theme: &Theme, settings: &Settings) -> Result<()> {
    use history_chart::raster::{render_to_png, RasterOptions};

    let out_png = out_name(&settings.out_dir, name, "png");
    let ropts = RasterOptions { scale: settings.png_scale, ..RasterOptions::default() };
    render_to_png(rendered, theme, &ropts, &out_png).with_context(|| format!("writing {}", out_png.display()))?;
    info!(path = %out_png.display(), "Wrote PNG");
    Ok(())
}

#[cfg(not(feature = "raster"))]
fn write_png(name: &str, _rendered: &history_chart::Rendered, _theme: &Theme, _settings: &Settings) -> Result<()> {
    warn!(chart = name, "--png ignored: built without the `raster` feature");
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing JSON in {}", path.display()))
}

/// Resolve an input path, accepting a `.csv`/`.cvs` mix-up.
fn resolve_input(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            warn!(requested = %p.display(), using = %alt.display(), "extension swapped between .csv/.cvs");
            return Ok(alt);
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    let alt = match ext.as_str() {
        "cvs" => "csv",
        "csv" => "cvs",
        _ => return None,
    };
    Some(p.with_extension(alt))
}

/// Output file like <out_dir>/chart_<name>.<ext>
fn out_name(out_dir: &Path, name: &str, ext: &str) -> PathBuf {
    out_dir.join(format!("chart_{name}.{ext}"))
}

fn slug(metric: &str) -> String {
    let s: String = metric.chars().map(|c| if c.is_ascii_alphanumeric() { c } else { '_' }).collect();
    if s.is_empty() { "metric".to_string() } else { s }
}

/// `base`, or `base_2`, `base_3`, ... when an earlier chart already took it.
fn unique_name(used: &mut HashSet<String>, base: String) -> String {
    if used.insert(base.clone()) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base}_{n}");
        if used.insert(candidate.clone()) {
            warn!(name = %base, renamed = %candidate, "metric output name collides; renaming");
            return candidate;
        }
        n += 1;
    }
}

fn day(today: NaiveDate, back: i64) -> String {
    (today - Duration::days(back)).format(DATE_FORMAT).to_string()
}

/// Sixteen days of symptom severities; the chart keeps the latest 14.
fn sample_symptoms(today: NaiveDate) -> Vec<SymptomEntry> {
    const SEVERITY: [f64; 16] = [4.0, 4.0, 5.0, 3.0, 4.0, 3.0, 3.0, 2.0, 3.0, 2.0, 2.0, 3.0, 2.0, 1.0, 2.0, 1.0];
    SEVERITY
        .iter()
        .enumerate()
        .map(|(i, &severity)| SymptomEntry {
            id: format!("s{i}"),
            date: day(today, (SEVERITY.len() - 1 - i) as i64),
            description: "fatigue".into(),
            severity,
        })
        .collect()
}

fn sample_adherence(today: NaiveDate) -> Vec<AdherenceEntry> {
    const RATING: [f64; 10] = [2.0, 3.0, 3.0, 4.0, 3.0, 4.0, 5.0, 4.0, 5.0, 5.0];
    RATING
        .iter()
        .enumerate()
        .map(|(i, &rating)| AdherenceEntry {
            id: format!("a{i}"),
            date: day(today, (RATING.len() - 1 - i) as i64),
            rating,
            notes: String::new(),
        })
        .collect()
}
