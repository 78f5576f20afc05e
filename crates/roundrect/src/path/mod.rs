//! Figure-based vector paths.
//!
//! A [`Path`] is a flat list of [`PathEl`]s grouped into figures. A figure
//! starts with `MoveTo` and ends either at the next `MoveTo` or at `Close`.
//! Arcs join the current figure with an implicit line, so consecutive
//! `add_arc` calls produce one connected outline.

mod arc;

pub use arc::ArcSegment;

use kurbo::BezPath;

use crate::coords::{Rect, Vec2};

/// Path element.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathEl {
    MoveTo(Vec2),
    LineTo(Vec2),
    Arc(ArcSegment),
    Close,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    els: Vec<PathEl>,
    /// Current point of the open figure, if any.
    current: Option<Vec2>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all figures. Keeps allocated capacity for reuse.
    #[inline]
    pub fn reset(&mut self) {
        self.els.clear();
        self.current = None;
    }

    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.els
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.els.is_empty()
    }

    pub fn move_to(&mut self, p: Vec2) {
        self.els.push(PathEl::MoveTo(p));
        self.current = Some(p);
    }

    pub fn line_to(&mut self, p: Vec2) {
        match self.current {
            None => self.move_to(p),
            Some(_) => {
                self.els.push(PathEl::LineTo(p));
                self.current = Some(p);
            }
        }
    }

    /// Appends an elliptical arc inscribed in `bounds`.
    ///
    /// Starts a figure at the arc's start point when none is open; otherwise
    /// the current point is joined to the arc start with a line (skipped when
    /// they coincide).
    pub fn add_arc(&mut self, bounds: Rect, start_deg: f32, sweep_deg: f32) {
        let arc = ArcSegment::new(bounds, start_deg, sweep_deg);
        let start = arc.start_point();
        match self.current {
            None => self.els.push(PathEl::MoveTo(start)),
            Some(p) if p != start => self.els.push(PathEl::LineTo(start)),
            Some(_) => {}
        }
        self.els.push(PathEl::Arc(arc));
        self.current = Some(arc.end_point());
    }

    /// Closes the open figure. No-op when no figure is open.
    pub fn close_figure(&mut self) {
        if self.current.take().is_some() {
            self.els.push(PathEl::Close);
        }
    }

    /// Iterates the arcs in insertion order.
    pub fn arcs(&self) -> impl Iterator<Item = &ArcSegment> + '_ {
        self.els.iter().filter_map(|el| match el {
            PathEl::Arc(arc) => Some(arc),
            _ => None,
        })
    }

    #[inline]
    pub fn figure_count(&self) -> usize {
        self.els.iter().filter(|el| matches!(el, PathEl::MoveTo(_))).count()
    }

    /// True when every figure ends with `Close`.
    pub fn is_closed(&self) -> bool {
        self.current.is_none() && matches!(self.els.last(), Some(PathEl::Close))
    }

    /// Converts the path to a `kurbo` Bézier path.
    ///
    /// Arcs become cubic segments within `tolerance` (in path units) of the
    /// true ellipse.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let mut out = BezPath::new();
        for el in &self.els {
            match *el {
                PathEl::MoveTo(p) => out.move_to(point(p)),
                PathEl::LineTo(p) => out.line_to(point(p)),
                PathEl::Arc(arc) => out.extend(arc.to_kurbo().append_iter(tolerance)),
                PathEl::Close => out.close_path(),
            }
        }
        out
    }
}

#[inline]
fn point(p: Vec2) -> kurbo::Point {
    kurbo::Point::new(p.x as f64, p.y as f64)
}
