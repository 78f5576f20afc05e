//! CPU raster surface.
//!
//! Scope:
//! - `Canvas`: `Surface` over a `tiny_skia::Pixmap` (aliased fills and strokes)
//! - conversions from paths and brushes to `tiny_skia` types
//! - PNG export through `image`
//!
//! Strokes put integer path coordinates on pixel centers; fills cover the
//! pixels whose centers fall inside the outline.

mod canvas;
mod convert;
mod error;
mod pixel;

pub use canvas::{Canvas, CanvasOptions};
pub use error::CanvasError;
pub use pixel::Rgba8;
