// File: crates/history-chart/src/raster.rs
// Summary: Headless PNG rendering of a drawing using a Skia CPU raster surface (feature `raster`).

use std::path::Path;

use skia_safe as skia;

use crate::drawing::{Anchor, Drawing, Element, Paint, Rendered, Stroke, TextStyle};
use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::theme::{Color, Theme};

pub struct RasterOptions {
    /// Device pixels per logical unit.
    pub scale: f32,
    pub background: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { scale: 2.0, background: true }
    }
}

/// Rasterize `rendered` and encode it as PNG.
pub fn to_png_bytes(rendered: &Rendered, theme: &Theme, opts: &RasterOptions) -> Result<Vec<u8>> {
    let (w, h) = rendered.size();
    let scale = opts.scale.max(0.1);
    let px_w = ((w as f32) * scale).ceil() as i32;
    let px_h = ((h as f32) * scale).ceil() as i32;

    let mut surface = skia::surfaces::raster_n32_premul((px_w.max(1), px_h.max(1)))
        .ok_or_else(|| ChartError::Raster("failed to create raster surface".into()))?;
    let canvas = surface.canvas();

    if opts.background {
        canvas.clear(to_skia(theme.background));
    } else {
        canvas.clear(skia::Color::TRANSPARENT);
    }
    canvas.scale((scale, scale));

    match rendered {
        Rendered::Placeholder { width, height, message } => {
            let style = TextStyle { size: 14.0, anchor: Anchor::Middle, bold: false, fill: theme.placeholder_text };
            draw_text(canvas, Point::new(width / 2.0, height / 2.0 + 5.0), message, &style);
        }
        Rendered::Chart(drawing) => {
            for e in &drawing.elements {
                draw_element(canvas, drawing, e);
            }
        }
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| ChartError::Raster("encode PNG failed".into()))?;
    Ok(data.as_bytes().to_vec())
}

/// Render to a PNG file at `path`, creating parent directories.
pub fn render_to_png(rendered: &Rendered, theme: &Theme, opts: &RasterOptions, path: impl AsRef<Path>) -> Result<()> {
    let bytes = to_png_bytes(rendered, theme, opts)?;
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn with_opacity(c: Color, opacity: f64) -> skia::Color {
    let a = (c.opacity() * opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(a, c.r, c.g, c.b)
}

fn sk_point(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn path_through(points: &[Point], close: bool) -> skia::Path {
    let mut path = skia::Path::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to(sk_point(*first));
        for p in rest {
            path.line_to(sk_point(*p));
        }
        if close {
            path.close();
        }
    }
    path
}

/// Fill paint for `paint`; `None` when nothing should be drawn.
fn fill_paint(drawing: &Drawing, paint: &Paint, bounds: (f32, f32)) -> Option<skia::Paint> {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    match paint {
        Paint::None | Paint::Transparent => return None,
        Paint::Solid(c) => {
            p.set_color(to_skia(*c));
        }
        Paint::Gradient(id) => {
            let g = drawing.gradient(id)?;
            let colors: Vec<skia::Color> = g.stops.iter().map(|&(_, o)| with_opacity(g.color, o)).collect();
            let positions: Vec<f32> = g.stops.iter().map(|&(off, _)| off as f32).collect();
            let shader = skia::Shader::linear_gradient(
                ((0.0, bounds.0), (0.0, bounds.1)),
                colors.as_slice(),
                positions.as_slice(),
                skia::TileMode::Clamp,
                None,
                None,
            )?;
            p.set_shader(shader);
        }
    }
    Some(p)
}

fn stroke_paint(stroke: &Stroke) -> Option<skia::Paint> {
    let color = match stroke.paint {
        Paint::Solid(c) => c,
        _ => return None,
    };
    if stroke.width <= 0.0 {
        return None;
    }
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(stroke.width as f32);
    p.set_color(to_skia(color));
    if let Some((dash, gap)) = stroke.dash {
        if let Some(effect) = skia::PathEffect::dash(&[dash as f32, gap as f32], 0.0) {
            p.set_path_effect(effect);
        }
    }
    Some(p)
}

fn draw_text(canvas: &skia::Canvas, at: Point, text: &str, style: &TextStyle) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(to_skia(style.fill));
    let mut font = skia::Font::default();
    font.set_size(style.size as f32);
    font.set_embolden(style.bold);
    let (width, _) = font.measure_str(text, Some(&paint));
    let x = match style.anchor {
        Anchor::Start => at.x as f32,
        Anchor::Middle => at.x as f32 - width / 2.0,
        Anchor::End => at.x as f32 - width,
    };
    canvas.draw_str(text, (x, at.y as f32), &font, &paint);
}

fn draw_element(canvas: &skia::Canvas, drawing: &Drawing, e: &Element) {
    match e {
        Element::Line { from, to, stroke } => {
            if let Some(p) = stroke_paint(stroke) {
                canvas.draw_line(sk_point(*from), sk_point(*to), &p);
            }
        }
        Element::Polygon { points, fill } => {
            let top = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min) as f32;
            let bottom = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max) as f32;
            if let Some(p) = fill_paint(drawing, fill, (top, bottom)) {
                canvas.draw_path(&path_through(points, true), &p);
            }
        }
        Element::Polyline { points, stroke } => {
            if let Some(p) = stroke_paint(stroke) {
                canvas.draw_path(&path_through(points, false), &p);
            }
        }
        Element::Circle { center, radius, fill, stroke, .. } => {
            let r = *radius as f32;
            let bounds = (center.y as f32 - r, center.y as f32 + r);
            if let Some(p) = fill_paint(drawing, fill, bounds) {
                canvas.draw_circle(sk_point(*center), r, &p);
            }
            if let Some(p) = stroke.as_ref().and_then(stroke_paint) {
                canvas.draw_circle(sk_point(*center), r, &p);
            }
        }
        Element::Rect { rect, corner_radius, fill } => {
            let r = skia::Rect::from_ltrb(rect.x as f32, rect.y as f32, rect.right() as f32, rect.bottom() as f32);
            if let Some(p) = fill_paint(drawing, fill, (r.top, r.bottom)) {
                let cr = *corner_radius as f32;
                canvas.draw_round_rect(r, cr, cr, &p);
            }
        }
        Element::Text { at, text, style } => draw_text(canvas, *at, text, style),
        Element::Group { translate, drop_shadow, children } => {
            canvas.save();
            canvas.translate(sk_point(*translate));
            if *drop_shadow {
                draw_shadow(canvas, children);
            }
            for c in children {
                draw_element(canvas, drawing, c);
            }
            canvas.restore();
        }
    }
}

/// Soft offset copy of the group's rectangles (dy = 1, 30% black).
fn draw_shadow(canvas: &skia::Canvas, children: &[Element]) {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_color(skia::Color::from_argb(77, 0, 0, 0));
    if let Some(blur) = skia::MaskFilter::blur(skia::BlurStyle::Normal, 1.0, None) {
        p.set_mask_filter(blur);
    }
    for c in children {
        if let Element::Rect { rect, corner_radius, .. } = c {
            let r = skia::Rect::from_ltrb(rect.x as f32, rect.y as f32 + 1.0, rect.right() as f32, rect.bottom() as f32 + 1.0);
            let cr = *corner_radius as f32;
            canvas.draw_round_rect(r, cr, cr, &p);
        }
    }
}
