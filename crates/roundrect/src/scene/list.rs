use core::convert::Infallible;

use crate::paint::{Brush, Pen};
use crate::path::Path;
use crate::surface::{PageUnit, PageUnitGuard, Surface};

use super::cmd::{DrawCmd, FillCmd, StrokeCmd};

/// A single recorded item: call order, page unit at call time, command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub order: u32,
    pub unit: PageUnit,
    pub cmd: DrawCmd,
}

/// Recorded draw stream.
///
/// `push()` is O(1); items are kept in call order. Recording never fails.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
    page_unit: PageUnit,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity and the page unit.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
    }

    /// Returns items in call order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn strokes(&self) -> impl Iterator<Item = &StrokeCmd> + '_ {
        self.items.iter().filter_map(|item| match &item.cmd {
            DrawCmd::Stroke(s) => Some(s),
            DrawCmd::Fill(_) => None,
        })
    }

    pub fn fills(&self) -> impl Iterator<Item = &FillCmd> + '_ {
        self.items.iter().filter_map(|item| match &item.cmd {
            DrawCmd::Fill(f) => Some(f),
            DrawCmd::Stroke(_) => None,
        })
    }

    /// Records a command under the current page unit.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { order, unit: self.page_unit, cmd });
    }

    /// Replays the recorded stream onto another surface.
    ///
    /// Each command is issued under the unit it was recorded with; the
    /// target's own unit is restored afterwards.
    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) -> Result<(), S::Error> {
        let mut target = PageUnitGuard::new(target, PageUnit::Display);
        for item in &self.items {
            target.set_page_unit(item.unit);
            match &item.cmd {
                DrawCmd::Stroke(s) => target.draw_path(&s.pen, &s.path)?,
                DrawCmd::Fill(f) => target.fill_path(&f.brush, &f.path)?,
            }
        }
        Ok(())
    }
}

impl Surface for DrawList {
    type Error = Infallible;

    #[inline]
    fn page_unit(&self) -> PageUnit {
        self.page_unit
    }

    #[inline]
    fn set_page_unit(&mut self, unit: PageUnit) {
        self.page_unit = unit;
    }

    fn draw_path(&mut self, pen: &Pen, path: &Path) -> Result<(), Infallible> {
        self.push(DrawCmd::Stroke(StrokeCmd { pen: *pen, path: path.clone() }));
        Ok(())
    }

    fn fill_path(&mut self, brush: &Brush, path: &Path) -> Result<(), Infallible> {
        self.push(DrawCmd::Fill(FillCmd { brush: brush.clone(), path: path.clone() }));
        Ok(())
    }
}
