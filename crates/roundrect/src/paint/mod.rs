//! Paint model: colors, fill sources and stroke styles.
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
pub mod pen;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient, SpreadMode};
pub use pen::{Pen, PenAlignment};

use crate::coords::Vec2;

/// Fill source for closed paths.
#[derive(Debug, Clone, PartialEq)]
pub enum Brush {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Brush {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Brush::Solid(c) => c.a >= 1.0,
            Brush::LinearGradient(g) => g.stops.iter().all(|s| s.color.a >= 1.0),
        }
    }

    /// Color of the brush at `p`, in the coordinate space of the path being filled.
    #[inline]
    pub fn color_at(&self, p: Vec2) -> Color {
        match self {
            Brush::Solid(c) => *c,
            Brush::LinearGradient(g) => g.color_at(p),
        }
    }
}

impl From<Color> for Brush {
    #[inline]
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl From<LinearGradient> for Brush {
    #[inline]
    fn from(gradient: LinearGradient) -> Self {
        Brush::LinearGradient(gradient)
    }
}
