use std::path::Path as FsPath;

use anyhow::{Context, Result};
use tiny_skia::{FillRule, Mask, PathStroker, Pixmap, Stroke, Transform};

use crate::coords::Rect;
use crate::paint::{Brush, Color, Pen, PenAlignment};
use crate::path::Path;
use crate::surface::{PageUnit, Surface};

use super::convert::{brush_paint, skia_color, skia_path};
use super::{CanvasError, Rgba8};

/// Canvas configuration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasOptions {
    /// Resolution used to convert physical page units to device pixels.
    pub dpi: f32,
    /// Maximum error when approximating arcs with cubics, in device pixels.
    pub arc_tolerance: f32,
    /// Initial and `clear()` color.
    pub background: Color,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            dpi: 96.0,
            arc_tolerance: 0.1,
            background: Color::TRANSPARENT,
        }
    }
}

/// CPU pixel surface backed by a `tiny_skia::Pixmap`.
///
/// Rendering is aliased, which keeps the output exactly reproducible.
///
/// Strokes are shifted by half a pixel, so a one-pixel pen on integer
/// coordinate `k` covers exactly pixel `k`. Fills are not: a fill covers the
/// pixels whose centers lie inside the outline, `x0..x1` on straight edges.
/// A stroked and filled rectangle therefore shares its top-left edge pixels
/// with the fill.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixmap: Pixmap,
    page_unit: PageUnit,
    options: CanvasOptions,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        Self::with_options(width, height, CanvasOptions::default())
    }

    pub fn with_options(
        width: u32,
        height: u32,
        options: CanvasOptions,
    ) -> Result<Self, CanvasError> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(CanvasError::InvalidSize { width, height })?;
        pixmap.fill(skia_color(options.background));

        log::debug!("canvas: {width}x{height} at {} dpi", options.dpi);

        Ok(Self {
            pixmap,
            page_unit: PageUnit::default(),
            options,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    #[inline]
    pub fn options(&self) -> &CanvasOptions {
        &self.options
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width() as i32, self.height() as i32)
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        bytemuck::cast_slice(self.pixmap.data())
    }

    /// Raw premultiplied RGBA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.pixmap.data()
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba8> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        let i = y as usize * self.width() as usize + x as usize;
        self.pixels().get(i).copied()
    }

    /// Resets every pixel to the background color.
    pub fn clear(&mut self) {
        self.pixmap.fill(skia_color(self.options.background));
    }

    /// Straight-alpha copy for encoding.
    pub fn to_image(&self) -> Result<image::RgbaImage, CanvasError> {
        let bytes = self.pixels().iter().flat_map(|px| px.to_straight()).collect();
        straight_image(self.width(), self.height(), bytes)
    }

    pub fn save_png(&self, path: impl AsRef<FsPath>) -> Result<()> {
        let path = path.as_ref();
        self.to_image()?
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("failed to write PNG to {}", path.display()))?;
        log::info!(
            "canvas: wrote {}x{} PNG to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(())
    }

    /// Page units to device pixels, for fills.
    fn fill_transform(&self) -> Result<Transform, CanvasError> {
        let scale = self.page_unit.device_scale(self.options.dpi);
        if !scale.is_finite() {
            return Err(CanvasError::NonFiniteGeometry { unit: self.page_unit, scale });
        }
        Ok(Transform::from_scale(scale, scale))
    }

    /// Integer coordinates land on pixel centers.
    fn stroke_transform(&self) -> Result<Transform, CanvasError> {
        Ok(self.fill_transform()?.post_translate(0.5, 0.5))
    }

    /// Converts `path`, keeping arc error within the device tolerance.
    fn device_path(&self, path: &Path, transform: Transform) -> Option<tiny_skia::Path> {
        let scale = transform.sx.abs().max(f32::EPSILON);
        let tolerance = self.options.arc_tolerance.max(1e-3) / scale;
        skia_path(path, tolerance as f64)
    }

    /// Clip for inset pens: the filled interior plus the outline's own pixels.
    fn inset_mask(
        &self,
        path: &tiny_skia::Path,
        transform: Transform,
    ) -> Result<Mask, CanvasError> {
        let (width, height) = (self.width(), self.height());
        let mut mask =
            Mask::new(width, height).ok_or(CanvasError::InvalidSize { width, height })?;
        mask.fill_path(path, FillRule::Winding, false, transform);

        let res_scale = PathStroker::compute_resolution_scale(&transform);
        if let Some(outline) = path.stroke(&Stroke::default(), res_scale) {
            mask.fill_path(&outline, FillRule::Winding, false, transform);
        }
        Ok(mask)
    }
}

fn straight_image(
    width: u32,
    height: u32,
    bytes: Vec<u8>,
) -> Result<image::RgbaImage, CanvasError> {
    let len = bytes.len();
    image::RgbaImage::from_raw(width, height, bytes)
        .ok_or(CanvasError::ImageBuffer { width, height, len })
}

impl Surface for Canvas {
    type Error = CanvasError;

    #[inline]
    fn page_unit(&self) -> PageUnit {
        self.page_unit
    }

    #[inline]
    fn set_page_unit(&mut self, unit: PageUnit) {
        self.page_unit = unit;
    }

    fn draw_path(&mut self, pen: &Pen, path: &Path) -> Result<(), CanvasError> {
        let transform = self.stroke_transform()?;
        let Some(sk_path) = self.device_path(path, transform) else {
            log::trace!("canvas: nothing to stroke");
            return Ok(());
        };

        let paint = brush_paint(&Brush::Solid(pen.color), Transform::identity());
        let width = pen.width() as f32;

        match pen.alignment {
            PenAlignment::Center => {
                let stroke = Stroke { width, ..Stroke::default() };
                self.pixmap.stroke_path(&sk_path, &paint, &stroke, transform, None);
            }
            PenAlignment::Inset => {
                // A centered pen of 2w - 1 clipped to the interior keeps w
                // pixels on the inner side, the outline pixel included.
                let mask = self.inset_mask(&sk_path, transform)?;
                let stroke = Stroke { width: width * 2.0 - 1.0, ..Stroke::default() };
                self.pixmap.stroke_path(&sk_path, &paint, &stroke, transform, Some(&mask));
            }
        }

        log::trace!("canvas: stroke width {width} ({:?})", pen.alignment);
        Ok(())
    }

    fn fill_path(&mut self, brush: &Brush, path: &Path) -> Result<(), CanvasError> {
        let transform = self.fill_transform()?;
        let Some(sk_path) = self.device_path(path, transform) else {
            log::trace!("canvas: nothing to fill");
            return Ok(());
        };

        // Brushes are defined in page units, like the path.
        let paint = brush_paint(brush, transform);
        self.pixmap.fill_path(&sk_path, &paint, FillRule::Winding, transform, None);

        log::trace!("canvas: fill in {:?}", self.page_unit);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    use crate::coords::Vec2;
    use crate::paint::LinearGradient;
    use crate::round_rect::{draw_round_rect, fill_round_rect};

    fn canvas(w: u32, h: u32) -> Canvas {
        Canvas::new(w, h).unwrap()
    }

    fn inked(c: &Canvas, x: i32, y: i32) -> bool {
        c.pixel(x, y).is_some_and(|px| px.a > 0)
    }

    fn count_inked(c: &Canvas) -> usize {
        c.pixels().iter().filter(|px| px.a > 0).count()
    }

    fn polygon(points: &[(f32, f32)]) -> Path {
        let mut path = Path::new();
        for &(x, y) in points {
            path.line_to(Vec2::new(x, y));
        }
        path.close_figure();
        path
    }

    fn square(x0: f32, y0: f32, x1: f32, y1: f32) -> Path {
        polygon(&[(x0, y0), (x1, y0), (x1, y1), (x0, y1)])
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn rejects_invalid_sizes() {
        assert_eq!(
            Canvas::new(0, 4).unwrap_err(),
            CanvasError::InvalidSize { width: 0, height: 4 }
        );
        assert!(Canvas::new(4, 0).is_err());
        assert!(Canvas::new(u32::MAX, u32::MAX).is_err());
    }

    #[test]
    fn starts_with_background() {
        let opts = CanvasOptions { background: Color::WHITE, ..CanvasOptions::default() };
        let c = Canvas::with_options(3, 2, opts).unwrap();
        assert!(c.pixels().iter().all(|&px| px == Rgba8::from_color(Color::WHITE)));
        assert_eq!(c.as_bytes().len(), 3 * 2 * 4);
        assert_eq!(c.pixel(3, 0), None);
    }

    // ── fill ──────────────────────────────────────────────────────────────

    #[test]
    fn sharp_fill_covers_pixels_inside_outline() {
        // Outline runs 2..6 by 3..6.
        let mut c = canvas(10, 10);
        fill_round_rect(&mut c, &Brush::solid(Color::BLACK), Rect::new(2, 3, 5, 4), 0).unwrap();
        assert_eq!(count_inked(&c), 12);
        assert!(inked(&c, 2, 3) && inked(&c, 5, 5));
        assert!(!inked(&c, 6, 5) && !inked(&c, 5, 6));
        assert!(!inked(&c, 1, 3) && !inked(&c, 2, 2));
    }

    #[test]
    fn fill_matches_direct_pixmap_render() {
        let mut c = canvas(10, 10);
        fill_round_rect(&mut c, &Brush::solid(Color::BLACK), Rect::new(2, 3, 5, 4), 0).unwrap();

        let mut expected = Pixmap::new(10, 10).unwrap();
        let rect = tiny_skia::Rect::from_ltrb(2.0, 3.0, 6.0, 6.0).unwrap();
        let mut paint = tiny_skia::Paint::default();
        paint.set_color(tiny_skia::Color::BLACK);
        paint.anti_alias = false;
        expected.fill_path(
            &tiny_skia::PathBuilder::from_rect(rect),
            &paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );

        assert_eq!(c.as_bytes(), expected.data());
    }

    #[test]
    fn rounded_fill_skips_corners() {
        let mut c = canvas(120, 60);
        fill_round_rect(&mut c, &Brush::solid(Color::BLACK), Rect::new(0, 0, 100, 50), 8).unwrap();
        assert!(!inked(&c, 0, 0) && !inked(&c, 98, 48));
        assert!(inked(&c, 50, 25));
        assert!(inked(&c, 0, 25) && inked(&c, 98, 25) && !inked(&c, 99, 25));
        assert!(inked(&c, 50, 0) && inked(&c, 50, 48) && !inked(&c, 50, 49));
    }

    #[test]
    fn fill_gradient_sampled_in_page_space() {
        let mut c = canvas(12, 4);
        let brush = Brush::from(LinearGradient::two_stop(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Color::BLACK,
            Color::WHITE,
        ));
        c.fill_path(&brush, &square(0.0, 0.0, 10.0, 3.0)).unwrap();

        let red = |x| c.pixel(x, 1).map(|px| px.r);
        assert!(red(0).is_some_and(|r| r < 30), "{:?}", red(0));
        assert!(red(9).is_some_and(|r| r > 225), "{:?}", red(9));
        assert!(red(5).is_some_and(|r| (120..=160).contains(&r)), "{:?}", red(5));
        assert!(!inked(&c, 10, 1));
    }

    #[test]
    fn page_unit_scales_direct_fills() {
        let mut c = canvas(120, 120);
        c.set_page_unit(PageUnit::Inch);
        c.fill_path(&Brush::solid(Color::BLACK), &square(0.0, 0.0, 1.0, 1.0)).unwrap();
        assert!(inked(&c, 0, 0) && inked(&c, 95, 95));
        assert!(!inked(&c, 96, 50) && !inked(&c, 50, 96));
    }

    #[test]
    fn round_rect_fill_ignores_page_unit() {
        let mut c = canvas(10, 10);
        c.set_page_unit(PageUnit::Inch);
        fill_round_rect(&mut c, &Brush::solid(Color::BLACK), Rect::new(0, 0, 3, 3), 0).unwrap();
        assert_eq!(count_inked(&c), 4);
        assert_eq!(c.page_unit(), PageUnit::Inch);
    }

    // ── stroke ────────────────────────────────────────────────────────────

    #[test]
    fn hairline_sharp_rect_is_a_one_pixel_ring() {
        let mut c = canvas(12, 12);
        let mut pen = Pen::new(Color::BLACK, 1);
        draw_round_rect(&mut c, &mut pen, Rect::new(0, 0, 10, 10), 0).unwrap();
        assert_eq!(count_inked(&c), 36);
        assert!(inked(&c, 0, 5) && inked(&c, 9, 5) && inked(&c, 5, 0) && inked(&c, 5, 9));
        assert!(!inked(&c, 1, 1) && !inked(&c, 10, 5));
    }

    #[test]
    fn hairline_corrected_diameter_keeps_edge_midpoints() {
        let mut c = canvas(110, 60);
        let mut pen = Pen::new(Color::BLACK, 1);
        draw_round_rect(&mut c, &mut pen, Rect::new(0, 0, 100, 50), 10).unwrap();

        assert!(inked(&c, 0, 25) && inked(&c, 99, 25));
        assert!(inked(&c, 50, 0) && inked(&c, 50, 49));
        assert!(!inked(&c, 1, 25) && !inked(&c, 98, 25) && !inked(&c, 100, 25));
        assert!(!inked(&c, 50, 1) && !inked(&c, 50, 48) && !inked(&c, 50, 50));
        assert!(!inked(&c, 0, 0) && !inked(&c, 50, 25));
    }

    #[test]
    fn wide_pen_nests_outlines() {
        let mut c = canvas(100, 60);
        let mut pen = Pen::new(Color::BLACK, 3);
        draw_round_rect(&mut c, &mut pen, Rect::new(10, 10, 80, 40), 4).unwrap();

        let row: Vec<bool> = (8..=15).map(|x| inked(&c, x, 30)).collect();
        assert_eq!(row, vec![false, true, true, true, true, true, false, false]);
        let right: Vec<bool> = (85..=91).map(|x| inked(&c, x, 30)).collect();
        assert_eq!(right, vec![false, true, true, true, true, true, false]);
    }

    #[test]
    fn inset_pen_stays_inside() {
        let outline = square(2.0, 2.0, 8.0, 8.0);
        let pen = Pen::new(Color::BLACK, 3);

        let mut centered = canvas(12, 12);
        centered.draw_path(&pen, &outline).unwrap();
        let mut inset = canvas(12, 12);
        inset
            .draw_path(&pen.with_alignment(PenAlignment::Inset), &outline)
            .unwrap();

        let row = |c: &Canvas| (0..=10).filter(|&x| inked(c, x, 5)).collect::<Vec<_>>();
        assert_eq!(row(&centered), vec![1, 2, 3, 7, 8, 9]);
        assert_eq!(row(&inset), vec![2, 3, 4, 6, 7, 8]);
    }

    #[test]
    fn translucent_stroke_paints_each_pixel_once() {
        let mut c = canvas(12, 12);
        let pen = Pen::new(Color::from_straight(0.0, 0.0, 0.0, 0.5), 1);
        c.draw_path(&pen, &square(1.0, 1.0, 8.0, 8.0)).unwrap();
        assert_eq!(c.pixel(1, 1), c.pixel(4, 1));
        assert!(c.pixel(8, 8).is_some_and(|px| (127..=129).contains(&px.a)));
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn non_finite_scale_is_reported() {
        let opts = CanvasOptions { dpi: f32::NAN, ..CanvasOptions::default() };
        let mut c = Canvas::with_options(8, 8, opts).unwrap();
        c.set_page_unit(PageUnit::Inch);
        let tri = polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert!(matches!(
            c.fill_path(&Brush::solid(Color::BLACK), &tri),
            Err(CanvasError::NonFiniteGeometry { unit: PageUnit::Inch, .. })
        ));
        assert!(matches!(
            c.draw_path(&Pen::new(Color::BLACK, 1), &tri),
            Err(CanvasError::NonFiniteGeometry { .. })
        ));

        // Rounded-rect helpers switch to pixels, where dpi does not matter.
        fill_round_rect(&mut c, &Brush::solid(Color::BLACK), Rect::new(0, 0, 4, 4), 1).unwrap();
        assert_eq!(c.page_unit(), PageUnit::Inch);
    }

    #[test]
    fn empty_path_draws_nothing() {
        let mut c = canvas(4, 4);
        c.fill_path(&Brush::solid(Color::BLACK), &Path::new()).unwrap();
        c.draw_path(&Pen::new(Color::BLACK, 2), &Path::new()).unwrap();
        assert_eq!(count_inked(&c), 0);
    }

    // ── export ────────────────────────────────────────────────────────────

    #[test]
    fn to_image_unpremultiplies() {
        let mut c = canvas(2, 1);
        let red = Brush::solid(Color::from_straight(1.0, 0.0, 0.0, 0.5));
        c.fill_path(&red, &square(0.0, 0.0, 1.0, 1.0)).unwrap();

        let img = c.to_image().unwrap();
        let [r, g, b, a] = img.get_pixel(0, 0).0;
        assert!(r >= 250 && g == 0 && b == 0, "{:?}", [r, g, b]);
        assert!((127..=129).contains(&a), "alpha {a}");
        assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn short_pixel_buffer_is_an_error() {
        assert_eq!(
            straight_image(2, 2, vec![0; 4]).err(),
            Some(CanvasError::ImageBuffer { width: 2, height: 2, len: 4 })
        );
        assert!(straight_image(1, 1, vec![0; 4]).is_ok());
    }

    #[test]
    fn save_png_round_trips_dimensions() {
        let mut c = canvas(16, 9);
        fill_round_rect(&mut c, &Brush::solid(Color::BLACK), Rect::new(1, 1, 14, 7), 3).unwrap();
        let out = std::env::temp_dir().join(format!("roundrect-canvas-{}.png", std::process::id()));
        c.save_png(&out).unwrap();
        let img = image::open(&out).unwrap();
        assert_eq!(img.dimensions(), (16, 9));
        let _ = std::fs::remove_file(&out);
    }

    #[test]
    fn clear_restores_background() {
        let mut c = canvas(4, 4);
        fill_round_rect(&mut c, &Brush::solid(Color::BLACK), Rect::new(0, 0, 4, 4), 0).unwrap();
        c.clear();
        assert_eq!(count_inked(&c), 0);
    }
}
