use flatbar_engine::coords::{Point, Rect};
use flatbar_engine::paint::Color;
use flatbar_engine::scene::{DrawList, ZIndex};
use flatbar_engine::text::{FontSpec, TextMeasure};

use crate::theme::Theme;

/// Drawing surface passed to [`Paintable::paint`](crate::control::Paintable::paint).
///
/// Wraps the engine's `DrawList` with theme access and text measurement so
/// widgets can centre labels without owning a font system.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    theme: &'a Theme,
    measure: &'a dyn TextMeasure,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, theme: &'a Theme, measure: &'a dyn TextMeasure) -> Self {
        Self { draw_list, theme, measure, z: 0 }
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        self.theme
    }

    #[inline]
    pub fn measure(&self) -> &dyn TextMeasure {
        self.measure
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let z = self.next_z();
        self.draw_list.push_fill(z, rect, color);
    }

    /// One-pixel outline drawn inside `rect`.
    pub fn stroke_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let (l, t) = (rect.x, rect.y);
        let (r, b) = (rect.right() - 1, rect.bottom() - 1);
        self.line(Point::new(l, t), Point::new(r, t), color);
        self.line(Point::new(r, t), Point::new(r, b), color);
        self.line(Point::new(r, b), Point::new(l, b), color);
        self.line(Point::new(l, b), Point::new(l, t), color);
    }

    pub fn line(&mut self, from: Point, to: Point, color: Color) {
        let z = self.next_z();
        self.draw_list.push_line(z, from, to, color, 1);
    }

    pub fn text(&mut self, text: &str, font: FontSpec, origin: Point, color: Color) {
        if text.is_empty() {
            return;
        }
        let z = self.next_z();
        self.draw_list.push_text(z, text, font, origin, color);
    }

    /// Text centred in `rect` using the injected measurement service.
    pub fn text_centered(&mut self, text: &str, font: FontSpec, rect: Rect, color: Color) {
        let size = self.measure.measure(text, font);
        let origin = Point::new(
            rect.x + (rect.w - size.w).max(0) / 2,
            rect.y + (rect.h - size.h).max(0) / 2,
        );
        self.text(text, font, origin, color);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
