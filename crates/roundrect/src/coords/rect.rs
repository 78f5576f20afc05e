/// Axis-aligned integer rectangle (top-left origin).
///
/// `width` and `height` are expected to be non-negative. Negative sizes are
/// representable and produce degenerate geometry, never a panic.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Exclusive right edge.
    #[inline]
    pub fn right(self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    #[inline]
    pub fn bottom(self) -> i32 {
        self.y.saturating_add(self.height)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Grows the rectangle by `dx` on the left and right and by `dy` on the top
    /// and bottom. Negative amounts shrink it.
    #[inline]
    pub fn inflate(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_sub(dx);
        self.y = self.y.saturating_sub(dy);
        self.width = self.width.saturating_add(dx.saturating_mul(2));
        self.height = self.height.saturating_add(dy.saturating_mul(2));
    }

    /// Copying variant of [`inflate`](Self::inflate).
    #[inline]
    pub fn inflated(mut self, dx: i32, dy: i32) -> Self {
        self.inflate(dx, dy);
        self
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.right() && y < self.bottom()
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        }
    }
}
