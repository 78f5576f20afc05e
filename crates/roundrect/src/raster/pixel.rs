use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

/// Premultiplied 8-bit RGBA pixel, laid out as four bytes.
///
/// Same layout as a `tiny_skia::Pixmap` pixel, so canvas storage can be
/// viewed as `&[Rgba8]` without copying.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    #[inline]
    pub fn from_color(color: Color) -> Self {
        let [r, g, b, a] = color.to_premul_u8();
        Self { r, g, b, a }
    }

    /// Straight-alpha bytes, as image formats expect.
    pub fn to_straight(self) -> [u8; 4] {
        if self.a == 0 {
            return [0, 0, 0, 0];
        }
        let a = self.a as u32;
        let un = |c: u8| ((c as u32 * 255 + a / 2) / a).min(255) as u8;
        [un(self.r), un(self.g), un(self.b), self.a]
    }
}
