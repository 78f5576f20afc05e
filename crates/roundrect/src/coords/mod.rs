//! Coordinate and geometry types.
//!
//! Canonical space:
//! - Origin top-left
//! - +X right, +Y down
//! - Angles in degrees, clockwise from +X
//!
//! `Rect` is integer because rounded-rectangle layout is pixel-snapped; `Vec2`
//! holds the points of arc and line segments.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
