use crate::paint::{Brush, Pen};
use crate::path::Path;

/// Recorded stroke: the pen as it was at call time plus the path drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCmd {
    pub pen: Pen,
    pub path: Path,
}

/// Recorded fill.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCmd {
    pub brush: Brush,
    pub path: Path,
}

/// Renderer-agnostic draw command stream.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Stroke(StrokeCmd),
    Fill(FillCmd),
}

impl DrawCmd {
    #[inline]
    pub fn path(&self) -> &Path {
        match self {
            DrawCmd::Stroke(s) => &s.path,
            DrawCmd::Fill(f) => &f.path,
        }
    }

    #[inline]
    pub fn is_stroke(&self) -> bool {
        matches!(self, DrawCmd::Stroke(_))
    }
}
