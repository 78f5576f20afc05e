use crate::coords::{Rect, Vec2};

/// Elliptical arc inscribed in an integer bounding box.
///
/// Angles are in degrees, clockwise from +X on a y-down surface:
/// 0° is the right-most point of the ellipse, 90° the bottom-most.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcSegment {
    pub bounds: Rect,
    pub start_deg: f32,
    pub sweep_deg: f32,
}

impl ArcSegment {
    #[inline]
    pub const fn new(bounds: Rect, start_deg: f32, sweep_deg: f32) -> Self {
        Self { bounds, start_deg, sweep_deg }
    }

    #[inline]
    pub fn end_deg(&self) -> f32 {
        self.start_deg + self.sweep_deg
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        let b = self.bounds;
        Vec2::new(
            b.x as f32 + b.width as f32 * 0.5,
            b.y as f32 + b.height as f32 * 0.5,
        )
    }

    /// Point on the ellipse at `deg`.
    pub fn point_at(&self, deg: f32) -> Vec2 {
        let c = self.center();
        let (sin, cos) = deg.to_radians().sin_cos();
        Vec2::new(
            c.x + self.bounds.width as f32 * 0.5 * cos,
            c.y + self.bounds.height as f32 * 0.5 * sin,
        )
    }

    #[inline]
    pub fn start_point(&self) -> Vec2 {
        self.point_at(self.start_deg)
    }

    #[inline]
    pub fn end_point(&self) -> Vec2 {
        self.point_at(self.end_deg())
    }

    /// The same arc as a `kurbo` curve, for cubic approximation.
    pub fn to_kurbo(&self) -> kurbo::Arc {
        let c = self.center();
        kurbo::Arc::new(
            kurbo::Point::new(c.x as f64, c.y as f64),
            kurbo::Vec2::new(
                self.bounds.width as f64 * 0.5,
                self.bounds.height as f64 * 0.5,
            ),
            (self.start_deg as f64).to_radians(),
            (self.sweep_deg as f64).to_radians(),
            0.0,
        )
    }
}
