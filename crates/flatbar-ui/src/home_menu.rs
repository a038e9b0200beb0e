//! Command menu dropped down from the home slot.

use flatbar_engine::coords::{Point, Rect};
use flatbar_engine::text::FontSpec;

use crate::control::HitTestable;
use crate::painter::Painter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeMenu {
    items: Vec<MenuItem>,
    anchor: Option<Rect>,
    open: bool,
    width: i32,
    item_height: i32,
}

impl HomeMenu {
    pub fn new(width: i32, item_height: i32) -> Self {
        Self { width: width.max(0), item_height: item_height.max(1), ..Self::default() }
    }

    pub fn item(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.push(id, label);
        self
    }

    pub fn push(&mut self, id: impl Into<String>, label: impl Into<String>) {
        self.items.push(MenuItem { id: id.into(), label: label.into() });
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Tracks where the home slot was placed. A hidden slot closes the menu.
    pub fn set_anchor(&mut self, anchor: Option<Rect>) {
        self.anchor = anchor;
        if anchor.is_none() {
            self.open = false;
        }
    }

    /// Returns the new state. An empty menu never opens.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open && self.anchor.is_some() && !self.items.is_empty();
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn menu_rect(&self) -> Option<Rect> {
        let anchor = self.anchor.filter(|_| self.open)?;
        let h = self.item_height.saturating_mul(self.items.len() as i32);
        Some(Rect::new(anchor.x, anchor.bottom(), self.width.max(anchor.w), h))
    }

    /// Item id under `pos`; closes the menu when something was picked.
    pub fn pick(&mut self, pos: Point) -> Option<String> {
        let menu = self.menu_rect()?;
        if !menu.contains(pos) {
            return None;
        }
        let row = ((pos.y - menu.y) / self.item_height) as usize;
        let id = self.items.get(row).map(|item| item.id.clone());
        self.open = false;
        id
    }

    pub fn paint(&self, painter: &mut Painter<'_>) {
        let Some(menu) = self.menu_rect() else { return };
        let bg = painter.theme().menu_background;
        let border = painter.theme().panel_border;
        let text = painter.theme().button_text;
        painter.fill_rect(menu, bg);
        painter.stroke_rect(menu, border);
        for (row, item) in self.items.iter().enumerate() {
            let r = Rect::new(menu.x, menu.y + row as i32 * self.item_height, menu.w, self.item_height);
            painter.text_centered(&item.label, FontSpec::default(), r, text);
        }
    }
}

impl HitTestable for HomeMenu {
    fn hit_test(&self, pos: Point) -> bool {
        self.menu_rect().is_some_and(|m| m.contains(pos))
    }
}
