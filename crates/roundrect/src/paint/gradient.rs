use crate::coords::Vec2;

use super::Color;

/// Gradient spread behavior outside [0, 1] range.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

impl SpreadMode {
    /// Maps an unbounded parameter into [0, 1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            SpreadMode::Pad => t.clamp(0.0, 1.0),
            SpreadMode::Repeat => t - t.floor(),
            SpreadMode::Reflect => {
                let m = t.rem_euclid(2.0);
                if m > 1.0 { 2.0 - m } else { m }
            }
        }
    }
}

/// A single gradient stop.
///
/// `t` is expected in [0, 1]; stops are sorted when sampled.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient in the same coordinate space as the path it fills.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, mut stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        stops.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { start, end, stops, spread }
    }

    /// Two-stop gradient from `from` at `start` to `to` at `end`.
    pub fn two_stop(start: Vec2, end: Vec2, from: Color, to: Color) -> Self {
        Self::new(
            start,
            end,
            vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)],
            SpreadMode::Pad,
        )
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }

    /// Color at gradient parameter `t` (before spread).
    ///
    /// Invalid gradients fall back to the first stop, or transparent when empty.
    pub fn sample(&self, t: f32) -> Color {
        let Some(first) = self.stops.first() else {
            return Color::TRANSPARENT;
        };
        if !self.is_valid() {
            return first.color;
        }

        let t = self.spread.apply(t);
        if t <= first.t {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.t {
                let span = b.t - a.t;
                if span <= f32::EPSILON {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.t) / span);
            }
        }
        self.stops[self.stops.len() - 1].color
    }

    /// Color at a point, projecting it onto the start→end axis.
    pub fn color_at(&self, p: Vec2) -> Color {
        let axis = self.end - self.start;
        let len_sq = axis.dot(axis);
        if len_sq <= f32::EPSILON {
            return self.sample(0.0);
        }
        self.sample((p - self.start).dot(axis) / len_sq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_to_white() -> LinearGradient {
        LinearGradient::two_stop(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Color::BLACK,
            Color::WHITE,
        )
    }

    #[test]
    fn spread_modes() {
        assert_eq!(SpreadMode::Pad.apply(1.5), 1.0);
        assert!((SpreadMode::Repeat.apply(1.25) - 0.25).abs() < 1e-6);
        assert!((SpreadMode::Reflect.apply(1.25) - 0.75).abs() < 1e-6);
        assert!((SpreadMode::Reflect.apply(-0.25) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn new_sorts_stops() {
        let g = LinearGradient::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            vec![ColorStop::new(1.0, Color::WHITE), ColorStop::new(0.0, Color::BLACK)],
            SpreadMode::Pad,
        );
        assert_eq!(g.stops[0].t, 0.0);
    }

    #[test]
    fn color_at_projects_onto_axis() {
        let g = black_to_white();
        assert_eq!(g.color_at(Vec2::new(0.0, 7.0)), Color::BLACK);
        assert_eq!(g.color_at(Vec2::new(5.0, -3.0)), Color::from_premul(0.5, 0.5, 0.5, 1.0));
        assert_eq!(g.color_at(Vec2::new(20.0, 0.0)), Color::WHITE);
    }

    #[test]
    fn degenerate_axis_is_invalid_and_uses_first_stop() {
        let g = LinearGradient::two_stop(
            Vec2::new(3.0, 3.0),
            Vec2::new(3.0, 3.0),
            Color::BLACK,
            Color::WHITE,
        );
        assert!(!g.is_valid());
        assert_eq!(g.color_at(Vec2::new(9.0, 9.0)), Color::BLACK);
    }
}
