//! Docked page container for the pinned ribbon.

use flatbar_engine::coords::{Point, Rect};

use crate::control::HitTestable;

/// Docked container below the strip, used while pinned.
///
/// Holds only geometry and visibility; which page it shows is recorded in the
/// [`PageRegistry`](crate::registry::PageRegistry).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixPanel {
    rect: Option<Rect>,
    shown: bool,
    deferred: bool,
}

impl FixPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last applied rectangle, in bar client coordinates.
    #[inline]
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    #[inline]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// `true` while positioning waits for a taller client area.
    #[inline]
    pub fn is_deferred(&self) -> bool {
        self.deferred
    }

    pub(crate) fn place(&mut self, rect: Rect) {
        self.rect = Some(rect);
        self.shown = true;
        self.deferred = false;
    }

    /// Keeps the previous geometry and visibility untouched.
    pub(crate) fn defer(&mut self) {
        self.deferred = true;
    }

    pub(crate) fn hide(&mut self) {
        self.shown = false;
        self.deferred = false;
    }

    /// Pin toggle square in the bottom-right corner.
    pub fn pin_button(&self, size: i32) -> Option<Rect> {
        let rect = self.rect.filter(|_| self.shown)?;
        Some(corner_button(rect, size))
    }
}

/// `size`-square button inset 2 px from the bottom-right corner of `rect`.
pub(crate) fn corner_button(rect: Rect, size: i32) -> Rect {
    Rect::new(rect.right() - size - 2, rect.bottom() - size - 2, size, size).clamp_within(rect)
}

impl HitTestable for FixPanel {
    fn hit_test(&self, pos: Point) -> bool {
        self.shown && self.rect.is_some_and(|r| r.contains(pos))
    }
}
