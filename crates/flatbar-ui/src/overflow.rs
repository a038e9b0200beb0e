//! Dropdown listing the tabs that did not fit in the strip.

use flatbar_engine::coords::{Point, Rect};
use flatbar_engine::text::FontSpec;

use crate::control::{HitTestable, Paintable};
use crate::painter::Painter;
use crate::tab_strip::TabStrip;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverflowDropdown {
    hidden: Vec<usize>,
    button: Option<Rect>,
    open: bool,
    item_height: i32,
    menu_width: i32,
}

impl OverflowDropdown {
    pub fn new(item_height: i32) -> Self {
        Self { item_height: item_height.max(1), ..Self::default() }
    }

    /// Called after every layout pass.
    pub fn update(&mut self, button: Option<Rect>, hidden: Vec<usize>, tabs: &TabStrip) {
        self.button = button;
        self.menu_width = hidden.iter().filter_map(|&i| tabs.width_of(i)).max().unwrap_or(0);
        self.hidden = hidden;
        if self.button.is_none() || self.hidden.is_empty() {
            self.open = false;
        }
    }

    /// Hidden tab indices, in strip order.
    pub fn entries(&self) -> &[usize] {
        &self.hidden
    }

    pub fn button_rect(&self) -> Option<Rect> {
        self.button
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens if there is anything to list. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open && self.button.is_some() && !self.hidden.is_empty();
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Menu rectangle, anchored under the button and right-aligned to it.
    pub fn menu_rect(&self) -> Option<Rect> {
        let button = self.button.filter(|_| self.open)?;
        let w = self.menu_width.max(button.w);
        let h = self.item_height.saturating_mul(self.hidden.len() as i32);
        Some(Rect::new(button.right() - w, button.bottom(), w, h))
    }

    fn item_rect(&self, menu: Rect, row: usize) -> Rect {
        Rect::new(menu.x, menu.y + row as i32 * self.item_height, menu.w, self.item_height)
    }

    /// Tab index of the entry under `pos`, if the menu is open.
    pub fn entry_at(&self, pos: Point) -> Option<usize> {
        let menu = self.menu_rect()?;
        if !menu.contains(pos) {
            return None;
        }
        let row = ((pos.y - menu.y) / self.item_height) as usize;
        self.hidden.get(row).copied()
    }

    /// Closes the menu and returns the selected tab index.
    ///
    /// `page_count` guards against entries that went stale since the last
    /// layout pass (pages removed or relabelled).
    pub fn select(&mut self, pos: Point, page_count: usize) -> Option<usize> {
        let picked = self.entry_at(pos);
        self.open = false;
        match picked {
            Some(i) if i < page_count => Some(i),
            Some(i) => {
                log::warn!("overflow: stale entry {i} ignored ({page_count} pages)");
                None
            }
            None => None,
        }
    }

    pub fn paint_menu(&self, painter: &mut Painter<'_>, tabs: &TabStrip) {
        let Some(menu) = self.menu_rect() else { return };
        let bg = painter.theme().menu_background;
        let border = painter.theme().panel_border;
        let text = painter.theme().tab_text;
        painter.fill_rect(menu, bg);
        painter.stroke_rect(menu, border);
        for (row, &i) in self.hidden.iter().enumerate() {
            if let Some(label) = tabs.label(i) {
                painter.text_centered(label, tabs.font(), self.item_rect(menu, row), text);
            }
        }
    }
}

impl HitTestable for OverflowDropdown {
    /// Button or open menu.
    fn hit_test(&self, pos: Point) -> bool {
        self.button.is_some_and(|b| b.contains(pos))
            || self.menu_rect().is_some_and(|m| m.contains(pos))
    }
}

impl Paintable for OverflowDropdown {
    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        let color = painter.theme().tab_text;
        painter.text_centered(">>", FontSpec::default(), rect, color);
    }
}
