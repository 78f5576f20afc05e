use core::ops::{Deref, DerefMut};

use crate::paint::{Pen, PenAlignment};

use super::{PageUnit, Surface};

/// Overrides a surface's page unit until dropped.
///
/// The previous unit is restored on every exit path, including `?` returns
/// and unwinding. Access the surface through `Deref`/`DerefMut` while the
/// guard is alive.
pub struct PageUnitGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    previous: PageUnit,
}

impl<'a, S: Surface + ?Sized> PageUnitGuard<'a, S> {
    pub fn new(surface: &'a mut S, unit: PageUnit) -> Self {
        let previous = surface.page_unit();
        surface.set_page_unit(unit);
        Self { surface, previous }
    }

    #[inline]
    pub fn previous(&self) -> PageUnit {
        self.previous
    }
}

impl<S: Surface + ?Sized> Deref for PageUnitGuard<'_, S> {
    type Target = S;

    #[inline]
    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for PageUnitGuard<'_, S> {
    #[inline]
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for PageUnitGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_page_unit(self.previous);
    }
}

/// Overrides a pen's alignment until dropped.
pub struct PenAlignmentGuard<'a> {
    pen: &'a mut Pen,
    previous: PenAlignment,
}

impl<'a> PenAlignmentGuard<'a> {
    pub fn new(pen: &'a mut Pen, alignment: PenAlignment) -> Self {
        let previous = pen.alignment;
        pen.alignment = alignment;
        Self { pen, previous }
    }

    #[inline]
    pub fn previous(&self) -> PenAlignment {
        self.previous
    }
}

impl Deref for PenAlignmentGuard<'_> {
    type Target = Pen;

    #[inline]
    fn deref(&self) -> &Pen {
        self.pen
    }
}

impl DerefMut for PenAlignmentGuard<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Pen {
        self.pen
    }
}

impl Drop for PenAlignmentGuard<'_> {
    fn drop(&mut self) {
        self.pen.alignment = self.previous;
    }
}
