//! Drawing surface abstraction.
//!
//! Responsibilities:
//! - define the operations rounded-rect drawing needs from a backend
//! - provide scoped overrides of surface/pen state that restore on drop

mod guard;

pub use guard::{PageUnitGuard, PenAlignmentGuard};

use crate::paint::{Brush, Pen};
use crate::path::Path;

/// Unit in which a surface interprets path coordinates and pen widths.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum PageUnit {
    /// World coordinates; no page scaling.
    World,
    /// Display device units. Device pixels for screen surfaces.
    #[default]
    Display,
    /// Device pixels.
    Pixel,
    /// 1/72 inch.
    Point,
    Inch,
    /// 1/300 inch.
    Document,
    Millimeter,
}

impl PageUnit {
    /// Device pixels per unit at the given resolution.
    pub fn device_scale(self, dpi: f32) -> f32 {
        match self {
            PageUnit::World | PageUnit::Display | PageUnit::Pixel => 1.0,
            PageUnit::Point => dpi / 72.0,
            PageUnit::Inch => dpi,
            PageUnit::Document => dpi / 300.0,
            PageUnit::Millimeter => dpi / 25.4,
        }
    }
}

/// A 2D surface that can stroke and fill paths.
///
/// Errors are backend-defined and propagate through the drawing helpers
/// untouched.
pub trait Surface {
    type Error;

    fn page_unit(&self) -> PageUnit;

    fn set_page_unit(&mut self, unit: PageUnit);

    /// Strokes every figure of `path` with `pen`.
    fn draw_path(&mut self, pen: &Pen, path: &Path) -> Result<(), Self::Error>;

    /// Fills every figure of `path` (non-zero winding) with `brush`.
    fn fill_path(&mut self, brush: &Brush, path: &Path) -> Result<(), Self::Error>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    type Error = S::Error;

    #[inline]
    fn page_unit(&self) -> PageUnit {
        (**self).page_unit()
    }

    #[inline]
    fn set_page_unit(&mut self, unit: PageUnit) {
        (**self).set_page_unit(unit)
    }

    #[inline]
    fn draw_path(&mut self, pen: &Pen, path: &Path) -> Result<(), Self::Error> {
        (**self).draw_path(pen, path)
    }

    #[inline]
    fn fill_path(&mut self, brush: &Brush, path: &Path) -> Result<(), Self::Error> {
        (**self).fill_path(brush, path)
    }
}
