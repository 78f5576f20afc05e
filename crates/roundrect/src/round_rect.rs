//! Pixel-aligned rounded rectangles.
//!
//! The outline is four 90° arcs whose corner boxes stay inside the pixels
//! `x..x + width` and `y..y + height` when pixel centers sit on integer
//! coordinates. The corner boxes mirror each other across the rectangle's
//! center lines, except at the corrected diameter of 20, where the right and
//! bottom boxes grow by one pixel and the outline is no longer symmetric.
//! Thick outlines are produced by nesting single-step shrunken outlines
//! rather than by offsetting the path.

use crate::coords::Rect;
use crate::paint::{Brush, Pen, PenAlignment};
use crate::path::Path;
use crate::surface::{PageUnit, PageUnitGuard, PenAlignmentGuard, Surface};

/// Diameter that gets a one-pixel corner correction.
///
/// Observed rendering artifact at exactly this size; other diameters are left
/// untouched.
const CORRECTED_DIAMETER: i32 = 20;

/// Effective corner diameter: `2 * radius`, capped by the rectangle's width
/// and height and floored at zero.
#[inline]
pub fn corner_diameter(rect: Rect, radius: i32) -> i32 {
    radius
        .saturating_mul(2)
        .min(rect.width)
        .min(rect.height)
        .max(0)
}

/// Appends a closed rounded-rectangle figure to `path`.
///
/// Arcs run top-left (180°), top-right (270°), bottom-right (0°), bottom-left
/// (90°), each sweeping 90°. Inputs are clamped, never rejected.
pub fn add_round_rect(path: &mut Path, rect: Rect, radius: i32) {
    let mut r = rect;
    let dia = corner_diameter(r, radius);

    let mut corner = Rect::new(r.x, r.y, dia, dia);

    path.add_arc(corner, 180.0, 90.0);

    if dia == CORRECTED_DIAMETER {
        log::debug!("round_rect: applying diameter-{dia} correction to {rect:?}");
        corner.width += 1;
        corner.height += 1;
        r.width -= 1;
        r.height -= 1;
    }

    let dx = r.width.saturating_sub(dia).saturating_sub(1);
    let dy = r.height.saturating_sub(dia).saturating_sub(1);

    corner.x = corner.x.saturating_add(dx);
    path.add_arc(corner, 270.0, 90.0);

    corner.y = corner.y.saturating_add(dy);
    path.add_arc(corner, 0.0, 90.0);

    corner.x = corner.x.saturating_sub(dx);
    path.add_arc(corner, 90.0, 90.0);

    path.close_figure();
}

/// Strokes a rounded rectangle with `pen`.
///
/// For the duration of the call the surface works in device pixels and the pen
/// is center-aligned; both are restored on return, on error and on unwind.
/// A pen wider than one pixel is emulated by redrawing progressively shrunken
/// outlines: `1 + 2 * (width - 1)` draws in total.
pub fn draw_round_rect<S: Surface + ?Sized>(
    surface: &mut S,
    pen: &mut Pen,
    rect: Rect,
    radius: i32,
) -> Result<(), S::Error> {
    let mut surface = PageUnitGuard::new(surface, PageUnit::Pixel);
    let pen = PenAlignmentGuard::new(pen, PenAlignment::Center);

    let width = pen.width();
    let mut r = rect;
    let mut path = Path::new();

    add_round_rect(&mut path, r, radius);
    surface.draw_path(&pen, &path)?;

    for pass in 1..width {
        r.inflate(-1, 0);
        path.reset();
        add_round_rect(&mut path, r, radius);
        surface.draw_path(&pen, &path)?;

        r.inflate(0, -1);
        path.reset();
        add_round_rect(&mut path, r, radius);
        surface.draw_path(&pen, &path)?;

        log::trace!("round_rect: stroke pass {pass}/{} at {r:?}", width - 1);
    }

    Ok(())
}

/// Fills a rounded rectangle with `brush`, in device pixels.
///
/// The previous page unit is restored on return, on error and on unwind.
pub fn fill_round_rect<S: Surface + ?Sized>(
    surface: &mut S,
    brush: &Brush,
    rect: Rect,
    radius: i32,
) -> Result<(), S::Error> {
    let mut surface = PageUnitGuard::new(surface, PageUnit::Pixel);

    let mut path = Path::new();
    add_round_rect(&mut path, rect, radius);
    surface.fill_path(brush, &path)
}

/// Method-call sugar for the free functions, for any [`Surface`].
pub trait RoundRectExt: Surface {
    #[inline]
    fn draw_round_rect(
        &mut self,
        pen: &mut Pen,
        rect: Rect,
        radius: i32,
    ) -> Result<(), Self::Error> {
        draw_round_rect(self, pen, rect, radius)
    }

    #[inline]
    fn fill_round_rect(
        &mut self,
        brush: &Brush,
        rect: Rect,
        radius: i32,
    ) -> Result<(), Self::Error> {
        fill_round_rect(self, brush, rect, radius)
    }
}

impl<S: Surface + ?Sized> RoundRectExt for S {}

impl Path {
    /// See [`add_round_rect`].
    #[inline]
    pub fn add_round_rect(&mut self, rect: Rect, radius: i32) {
        add_round_rect(self, rect, radius);
    }
}
