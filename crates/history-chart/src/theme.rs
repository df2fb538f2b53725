// File: crates/history-chart/src/theme.rs
// Summary: Colors and light/dark theming for chart chrome (labels, grid, markers, tooltip).

use std::fmt;
use std::str::FromStr;

use crate::error::{ChartError, Result};

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_argb(255, 255, 255, 255);
    pub const BLACK: Color = Color::from_argb(255, 0, 0, 0);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RRGGBB` or `#RGB` (leading `#` optional).
    pub fn parse_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        let err = || ChartError::InvalidColor(s.to_string());
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize, len: usize| u8::from_str_radix(&hex[i..i + len], 16).map_err(|_| err());
        match hex.len() {
            6 => Ok(Self::rgb(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
            3 => {
                let (r, g, b) = (channel(0, 1)?, channel(1, 1)?, channel(2, 1)?);
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            _ => Err(err()),
        }
    }

    /// `RRGGBB`, uppercase, no leading `#`.
    pub fn hex_digits(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Alpha as a 0..=1 opacity.
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex_digits())
    }
}

impl FromStr for Color {
    type Err = ChartError;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse_hex(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub tick_label: Color,
    pub grid: Color,
    pub marker_ring: Color,
    pub tooltip_fill: Color,
    pub tooltip_text: Color,
    pub placeholder_text: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(0xf9, 0xfa, 0xfb),       // gray-50
            tick_label: Color::rgb(0x6b, 0x72, 0x80),       // gray-500
            grid: Color::rgb(0xe5, 0xe7, 0xeb),             // gray-200
            marker_ring: Color::WHITE,
            tooltip_fill: Color::rgb(0x1f, 0x29, 0x37),     // gray-800
            tooltip_text: Color::WHITE,
            placeholder_text: Color::rgb(0x6b, 0x72, 0x80),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(0x37, 0x41, 0x51),       // gray-700
            tick_label: Color::rgb(0x9c, 0xa3, 0xaf),       // gray-400
            grid: Color::rgb(0x4b, 0x55, 0x63),             // gray-600
            marker_ring: Color::rgb(0x1f, 0x29, 0x37),
            tooltip_fill: Color::BLACK,
            tooltip_text: Color::WHITE,
            placeholder_text: Color::rgb(0x9c, 0xa3, 0xaf),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
