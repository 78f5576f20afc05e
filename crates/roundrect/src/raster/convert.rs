//! Paint model and path conversions into `tiny_skia` types.

use tiny_skia::{BlendMode, GradientStop, Paint, PathBuilder, Point, Shader, Transform};

use crate::paint::{Brush, Color, LinearGradient, SpreadMode};
use crate::path::Path;

use super::Rgba8;

/// Quantized to 8 bits, as the pixmap stores it.
pub(super) fn skia_color(color: Color) -> tiny_skia::Color {
    let [r, g, b, a] = Rgba8::from_color(color).to_straight();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

impl From<SpreadMode> for tiny_skia::SpreadMode {
    fn from(mode: SpreadMode) -> Self {
        match mode {
            SpreadMode::Pad => tiny_skia::SpreadMode::Pad,
            SpreadMode::Repeat => tiny_skia::SpreadMode::Repeat,
            SpreadMode::Reflect => tiny_skia::SpreadMode::Reflect,
        }
    }
}

/// Aliased paint for `brush`; the brush is mapped to device space with
/// `transform`.
///
/// Opaque brushes overwrite destination pixels instead of blending.
pub(super) fn brush_paint(brush: &Brush, transform: Transform) -> Paint<'static> {
    let blend_mode = if brush.is_opaque() {
        BlendMode::Source
    } else {
        BlendMode::SourceOver
    };

    Paint {
        shader: brush_shader(brush, transform),
        blend_mode,
        anti_alias: false,
        ..Paint::default()
    }
}

fn brush_shader(brush: &Brush, transform: Transform) -> Shader<'static> {
    match brush {
        Brush::Solid(color) => Shader::SolidColor(skia_color(*color)),
        Brush::LinearGradient(gradient) => gradient_shader(gradient, transform)
            // Unusable gradients paint their first stop.
            .unwrap_or_else(|| Shader::SolidColor(skia_color(gradient.sample(0.0)))),
    }
}

fn gradient_shader(gradient: &LinearGradient, transform: Transform) -> Option<Shader<'static>> {
    if !gradient.is_valid() {
        return None;
    }

    let stops = gradient
        .stops
        .iter()
        .map(|stop| GradientStop::new(stop.t, skia_color(stop.color)))
        .collect();

    tiny_skia::LinearGradient::new(
        Point::from_xy(gradient.start.x, gradient.start.y),
        Point::from_xy(gradient.end.x, gradient.end.y),
        stops,
        gradient.spread.into(),
        transform,
    )
}

/// Builds a `tiny_skia` path, approximating arcs with cubics within
/// `tolerance` path units.
///
/// `None` when nothing drawable remains (no segments at all).
pub(super) fn skia_path(path: &Path, tolerance: f64) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for el in path.to_bez_path(tolerance).elements() {
        match *el {
            kurbo::PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            kurbo::PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            kurbo::PathEl::QuadTo(c, p) => {
                pb.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32)
            }
            kurbo::PathEl::CurveTo(c1, c2, p) => pb.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            kurbo::PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}
