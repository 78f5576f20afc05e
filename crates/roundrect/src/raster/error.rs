use std::fmt;

/// Failure reported by [`Canvas`](super::Canvas).
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasError {
    /// Zero-sized, or too large to address.
    InvalidSize { width: u32, height: u32 },
    /// Geometry became NaN or infinite after page-unit scaling.
    NonFiniteGeometry { unit: crate::surface::PageUnit, scale: f32 },
    /// Pixel data does not match the image dimensions.
    ImageBuffer { width: u32, height: u32, len: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::InvalidSize { width, height } => {
                write!(f, "invalid canvas size {width}x{height}")
            }
            CanvasError::NonFiniteGeometry { unit, scale } => {
                write!(f, "non-finite geometry in {unit:?} (device scale {scale})")
            }
            CanvasError::ImageBuffer { width, height, len } => {
                write!(f, "{len} bytes do not fill a {width}x{height} RGBA image")
            }
        }
    }
}

impl std::error::Error for CanvasError {}
