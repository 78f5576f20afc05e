use super::Color;

/// Where a stroke sits relative to the path it outlines.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum PenAlignment {
    /// Centered on the path.
    #[default]
    Center,
    /// Entirely inside the path.
    Inset,
}

/// Stroke style: color, integer width and alignment.
///
/// Width is in the surface's current page unit and is never below 1.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pen {
    pub color: Color,
    width: u32,
    pub alignment: PenAlignment,
}

impl Pen {
    #[inline]
    pub fn new(color: Color, width: u32) -> Self {
        Self { color, width: width.max(1), alignment: PenAlignment::Center }
    }

    #[inline]
    pub fn with_alignment(mut self, alignment: PenAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn set_width(&mut self, width: u32) {
        self.width = width.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_never_below_one() {
        let mut pen = Pen::new(Color::BLACK, 0);
        assert_eq!(pen.width(), 1);
        pen.set_width(0);
        assert_eq!(pen.width(), 1);
        pen.set_width(4);
        assert_eq!(pen.width(), 4);
    }

    #[test]
    fn default_alignment_is_center() {
        assert_eq!(Pen::new(Color::BLACK, 1).alignment, PenAlignment::Center);
        let inset = Pen::new(Color::BLACK, 1).with_alignment(PenAlignment::Inset);
        assert_eq!(inset.alignment, PenAlignment::Inset);
    }
}
