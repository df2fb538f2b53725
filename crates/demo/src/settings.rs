// File: crates/demo/src/settings.rs
// Summary: Demo configuration: optional TOML file layered with HISTORY_CHART_* environment variables.

use std::path::{Path, PathBuf};

use history_chart::text::Locale;
use history_chart::{theme, RenderOptions};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub theme: String,
    pub locale: Locale,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub out_dir: PathBuf,
    /// Device pixels per logical unit for PNG output.
    pub png_scale: f32,
}

impl Settings {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            padding: self.padding,
            theme: theme::find(&self.theme),
            locale: self.locale,
        }
    }
}

pub fn load_settings(file: Option<&Path>) -> anyhow::Result<Settings> {
    let defaults = RenderOptions::default();
    let mut builder = config::Config::builder()
        .set_default("theme", "light")?
        .set_default("locale", "en")?
        .set_default("width", defaults.width)?
        .set_default("height", defaults.height)?
        .set_default("padding", defaults.padding)?
        .set_default("out_dir", "target/out")?
        .set_default("png_scale", 2.0)?;

    if let Some(path) = file {
        builder = builder.add_source(config::File::from(path));
    }
    let settings = builder
        .add_source(config::Environment::with_prefix("HISTORY_CHART").try_parsing(true))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_canvas() {
        let s = load_settings(None).expect("defaults load");
        let opts = s.render_options();
        assert_eq!((opts.width, opts.height, opts.padding), (300.0, 150.0, 25.0));
        assert_eq!(opts.locale, Locale::En);
        assert_eq!(opts.theme.name, "light");
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = std::env::temp_dir().join("history-chart-demo-settings");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("chart.toml");
        std::fs::write(&path, "theme = \"dark\"\nlocale = \"fr\"\nwidth = 600.0\n").unwrap();

        let s = load_settings(Some(&path)).expect("file load");
        assert_eq!(s.theme, "dark");
        assert_eq!(s.locale, Locale::Fr);
        assert_eq!(s.width, 600.0);
        assert_eq!(s.height, 150.0);
    }
}
