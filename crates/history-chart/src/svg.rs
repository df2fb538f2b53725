// File: crates/history-chart/src/svg.rs
// Summary: Deterministic SVG serialization of a rendered chart or placeholder.

use std::path::Path;

use crate::drawing::{Anchor, CircleRole, Drawing, Element, Paint, Rendered, Stroke, TextStyle};
use crate::error::Result;
use crate::geometry::Point;
use crate::theme::Theme;

const SHADOW_FILTER_ID: &str = "tooltip-shadow";

/// Serialize `rendered` to a standalone SVG document.
pub fn to_svg(rendered: &Rendered, theme: &Theme) -> String {
    match rendered {
        Rendered::Placeholder { width, height, message } => placeholder_svg(*width, *height, message, theme),
        Rendered::Chart(drawing) => drawing_svg(drawing),
    }
}

/// Write the SVG document to `path`, creating parent directories.
pub fn write_svg(rendered: &Rendered, theme: &Theme, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_svg(rendered, theme))?;
    Ok(())
}

fn placeholder_svg(width: f64, height: f64, message: &str, theme: &Theme) -> String {
    let (w, h) = (num(width), num(height));
    let mut out = format!(r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#);
    out.push('\n');
    out.push_str(&format!(r#"<rect x="0" y="0" width="{w}" height="{h}" rx="6" fill="{}"/>"#, theme.background));
    out.push('\n');
    out.push_str(&format!(
        r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="14" fill="{}">{}</text>"#,
        num(width / 2.0),
        num(height / 2.0),
        theme.placeholder_text,
        escape(message),
    ));
    out.push_str("\n</svg>\n");
    out
}

fn drawing_svg(d: &Drawing) -> String {
    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" role="img" aria-labelledby="chart-title">"#,
        num(d.width),
        num(d.height),
    );
    out.push('\n');
    out.push_str(&format!(r#"<title id="chart-title">{}</title>"#, escape(&d.title)));
    out.push_str("\n<defs>\n");
    for g in &d.gradients {
        out.push_str(&format!(r#"<linearGradient id="{}" x1="0" x2="0" y1="0" y2="1">"#, escape(&g.id)));
        for &(offset, opacity) in &g.stops {
            out.push_str(&format!(
                r#"<stop offset="{}%" stop-color="{}" stop-opacity="{}"/>"#,
                num(offset * 100.0),
                g.color,
                num(opacity),
            ));
        }
        out.push_str("</linearGradient>\n");
    }
    if d.tooltip().is_some() {
        out.push_str(&format!(
            r##"<filter id="{SHADOW_FILTER_ID}" x="-0.5" y="-0.5" width="2" height="2"><feDropShadow dx="0" dy="1" stdDeviation="1" flood-color="#000000" flood-opacity="0.3"/></filter>"##
        ));
        out.push('\n');
    }
    out.push_str("</defs>\n");
    for e in &d.elements {
        write_element(&mut out, e);
    }
    out.push_str("</svg>\n");
    out
}

fn write_element(out: &mut String, e: &Element) {
    match e {
        Element::Line { from, to, stroke } => {
            out.push_str(&format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
                num(from.x),
                num(from.y),
                num(to.x),
                num(to.y),
                stroke_attrs(stroke),
            ));
        }
        Element::Polygon { points, fill } => {
            out.push_str(&format!(r#"<polygon points="{}" fill="{}"/>"#, points_attr(points), paint(fill)));
        }
        Element::Polyline { points, stroke } => {
            out.push_str(&format!(r#"<polyline points="{}" fill="none"{}/>"#, points_attr(points), stroke_attrs(stroke)));
        }
        Element::Circle { center, radius, fill, stroke, role, aria_label } => {
            out.push_str(&format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#,
                num(center.x),
                num(center.y),
                num(*radius),
                paint(fill),
            ));
            if let Some(s) = stroke {
                out.push_str(&stroke_attrs(s));
            }
            match role {
                CircleRole::HitTarget { index } => {
                    out.push_str(&format!(r#" data-index="{index}""#));
                }
                CircleRole::Marker { .. } => out.push_str(r#" pointer-events="none""#),
            }
            if let Some(label) = aria_label {
                out.push_str(&format!(r#" aria-label="{}""#, escape(label)));
            }
            out.push_str("/>");
        }
        Element::Rect { rect, corner_radius, fill } => {
            out.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"/>"#,
                num(rect.x),
                num(rect.y),
                num(rect.width),
                num(rect.height),
                num(*corner_radius),
                paint(fill),
            ));
        }
        Element::Text { at, text, style } => {
            out.push_str(&format!(
                r#"<text x="{}" y="{}"{}>{}</text>"#,
                num(at.x),
                num(at.y),
                text_attrs(style),
                escape(text),
            ));
        }
        Element::Group { translate, drop_shadow, children } => {
            out.push_str(&format!(r#"<g transform="translate({}, {})" pointer-events="none">"#, num(translate.x), num(translate.y)));
            if *drop_shadow {
                out.push_str(&format!(r#"<g filter="url(#{SHADOW_FILTER_ID})">"#));
            }
            out.push('\n');
            for c in children {
                write_element(out, c);
            }
            if *drop_shadow {
                out.push_str("</g>");
            }
            out.push_str("</g>");
        }
    }
    out.push('\n');
}

fn paint(p: &Paint) -> String {
    match p {
        Paint::None => "none".to_string(),
        Paint::Transparent => "transparent".to_string(),
        Paint::Solid(c) => c.to_string(),
        Paint::Gradient(id) => format!("url(#{})", escape(id)),
    }
}

fn stroke_attrs(s: &Stroke) -> String {
    let mut a = format!(r#" stroke="{}" stroke-width="{}""#, paint(&s.paint), num(s.width));
    if let Some((dash, gap)) = s.dash {
        a.push_str(&format!(r#" stroke-dasharray="{},{}""#, num(dash), num(gap)));
    }
    a
}

fn text_attrs(s: &TextStyle) -> String {
    let anchor = match s.anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    };
    let mut a = format!(r#" text-anchor="{anchor}" font-size="{}" fill="{}""#, num(s.size), s.fill);
    if s.bold {
        a.push_str(r#" font-weight="bold""#);
    }
    a
}

fn points_attr(points: &[Point]) -> String {
    points.iter().map(|p| format!("{},{}", num(p.x), num(p.y))).collect::<Vec<_>>().join(" ")
}

/// Coordinates rounded to 1/1000 and printed in shortest form.
fn num(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 { "0".to_string() } else { format!("{r}") }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
