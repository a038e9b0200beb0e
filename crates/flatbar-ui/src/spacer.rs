//! Separators and gaps around the function slot.

use flatbar_engine::coords::{Point, Rect};

use crate::control::Paintable;
use crate::painter::Painter;

/// Blank region between strip sections, optionally drawing a separator.
///
/// The spacer only reports a width; the layout engine decides where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacerElement {
    width: i32,
    auto_expand: bool,
    draw_separator: bool,
    visible: bool,
}

impl SpacerElement {
    pub fn new(width: i32) -> Self {
        Self { width: width.max(0), auto_expand: false, draw_separator: false, visible: true }
    }

    pub fn auto_expand(mut self, on: bool) -> Self {
        self.auto_expand = on;
        self
    }

    pub fn draw_separator(mut self, on: bool) -> Self {
        self.draw_separator = on;
        self
    }

    /// Configured (minimum) width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn set_width(&mut self, width: i32) {
        self.width = width.max(0);
    }

    #[inline]
    pub fn is_auto_expand(&self) -> bool {
        self.auto_expand
    }

    pub fn set_auto_expand(&mut self, on: bool) {
        self.auto_expand = on;
    }

    #[inline]
    pub fn has_separator(&self) -> bool {
        self.draw_separator
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Width this spacer occupies given the slack the layout pass offers.
    ///
    /// Fixed spacers ignore `remainder`. Auto-expanding spacers take
    /// `max(configured, remainder)`; a negative remainder counts as zero, so the
    /// result never drops below the configured width.
    #[inline]
    pub fn resolved_width(&self, remainder: i32) -> i32 {
        if self.auto_expand {
            self.width.max(remainder.max(0))
        } else {
            self.width
        }
    }
}

impl Paintable for SpacerElement {
    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        if !self.draw_separator || rect.w <= 0 || rect.h <= 4 {
            return;
        }
        let x = rect.x + rect.w / 2;
        let color = painter.theme().separator;
        painter.line(Point::new(x, rect.y + 4), Point::new(x, rect.bottom() - 4), color);
    }
}
