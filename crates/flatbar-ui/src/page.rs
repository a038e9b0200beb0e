//! Page content: panels holding button bars and galleries.
//!
//! A [`Page`] is created by the application, handed to the bar once, and
//! from then on lives in the [`PageRegistry`](crate::registry::PageRegistry).
//! Panels are moved into their page, so a panel can never sit in two pages.

use flatbar_engine::coords::{Point, Rect, Size};
use flatbar_engine::text::{FontSpec, TextMeasure};

use crate::config::PanelConfig;
use crate::painter::Painter;

/// Stable identity of a page: its index in the bar's page list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageId(pub usize);

impl PageId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Flow direction inside a panel.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

// ── items ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarButton {
    pub id: String,
    pub label: String,
}

/// Row of labelled buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonBar {
    buttons: Vec<BarButton>,
}

impl ButtonBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn button(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.buttons.push(BarButton { id: id.into(), label: label.into() });
        self
    }

    pub fn buttons(&self) -> &[BarButton] {
        &self.buttons
    }
}

/// Row of fixed-size tiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    items: Vec<String>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, id: impl Into<String>) -> Self {
        self.items.push(id.into());
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelItem {
    ButtonBar(ButtonBar),
    Gallery(Gallery),
}

impl PanelItem {
    fn size(&self, measure: &dyn TextMeasure, cfg: &PanelConfig) -> Size {
        match self {
            PanelItem::ButtonBar(bar) => {
                let w: i32 = bar
                    .buttons
                    .iter()
                    .map(|b| button_width(&b.label, measure, cfg))
                    .sum();
                Size::new(w, if bar.buttons.is_empty() { 0 } else { cfg.button_height })
            }
            PanelItem::Gallery(gallery) => {
                let n = gallery.items.len() as i32;
                Size::new(n * cfg.gallery_tile, if n == 0 { 0 } else { cfg.gallery_tile })
            }
        }
    }
}

fn panel_font(cfg: &PanelConfig) -> FontSpec {
    FontSpec { size: cfg.font_size, ..FontSpec::default() }
}

fn button_width(label: &str, measure: &dyn TextMeasure, cfg: &PanelConfig) -> i32 {
    measure.measure(label, panel_font(cfg)).w + 2 * cfg.button_padding
}

// ── Panel ─────────────────────────────────────────────────────────────────

/// Labelled group of items flowing along one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    label: String,
    axis: Axis,
    items: Vec<PanelItem>,
}

impl Panel {
    pub fn new(label: impl Into<String>, axis: Axis) -> Self {
        Self { label: label.into(), axis, items: Vec::new() }
    }

    pub fn button_bar(mut self, bar: ButtonBar) -> Self {
        self.items.push(PanelItem::ButtonBar(bar));
        self
    }

    pub fn gallery(mut self, gallery: Gallery) -> Self {
        self.items.push(PanelItem::Gallery(gallery));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn items(&self) -> &[PanelItem] {
        &self.items
    }

    /// Inner size of the item flow, excluding padding and the label row.
    fn flow_size(&self, measure: &dyn TextMeasure, cfg: &PanelConfig) -> Size {
        let sizes: Vec<Size> = self.items.iter().map(|i| i.size(measure, cfg)).collect();
        let gaps = sizes.len().saturating_sub(1) as i32 * cfg.spacing;
        match self.axis {
            Axis::Horizontal => Size::new(
                sizes.iter().map(|s| s.w).sum::<i32>() + gaps,
                sizes.iter().map(|s| s.h).max().unwrap_or(0),
            ),
            Axis::Vertical => Size::new(
                sizes.iter().map(|s| s.w).max().unwrap_or(0),
                sizes.iter().map(|s| s.h).sum::<i32>() + gaps,
            ),
        }
    }

    /// Outer size including padding and the label row.
    pub fn content_size(&self, measure: &dyn TextMeasure, cfg: &PanelConfig) -> Size {
        let flow = self.flow_size(measure, cfg);
        let label_w = measure.measure(&self.label, panel_font(cfg)).w;
        Size::new(
            flow.w.max(label_w) + 2 * cfg.padding,
            flow.h + cfg.label_height + 2 * cfg.padding,
        )
    }
}

// ── Page ──────────────────────────────────────────────────────────────────

/// Where one piece of page content landed, shared by paint and hit testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placed<'a> {
    Panel { panel: &'a Panel, rect: Rect },
    Button { id: &'a str, label: &'a str, rect: Rect },
    Tile { id: &'a str, rect: Rect },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    label: String,
    panels: Vec<Panel>,
    active: bool,
}

impl Page {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), panels: Vec::new(), active: false }
    }

    /// Builder form of [`add_panel`](Self::add_panel).
    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.add_panel(panel);
        self
    }

    /// Takes ownership of `panel`; the panel cannot be added anywhere else.
    pub fn add_panel(&mut self, panel: Panel) {
        self.panels.push(panel);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Natural size of the whole page: panels side by side.
    pub fn content_size(&self, measure: &dyn TextMeasure, cfg: &PanelConfig) -> Size {
        let sizes: Vec<Size> = self.panels.iter().map(|p| p.content_size(measure, cfg)).collect();
        let gaps = sizes.len().saturating_sub(1) as i32 * cfg.spacing;
        Size::new(
            sizes.iter().map(|s| s.w).sum::<i32>() + gaps + 2 * cfg.padding,
            sizes.iter().map(|s| s.h).max().unwrap_or(0) + 2 * cfg.padding,
        )
    }

    /// Lays the page out inside `area`. Everything returned is clipped to `area`.
    pub fn place<'a>(
        &'a self,
        area: Rect,
        measure: &dyn TextMeasure,
        cfg: &PanelConfig,
    ) -> Vec<Placed<'a>> {
        let mut out = Vec::new();
        let panel_h = (area.h - 2 * cfg.padding).max(0);
        let mut x = area.x + cfg.padding;

        for panel in &self.panels {
            let size = panel.content_size(measure, cfg);
            let panel_rect = Rect::new(x, area.y + cfg.padding, size.w, panel_h).clamp_within(area);
            out.push(Placed::Panel { panel, rect: panel_rect });

            let mut cursor = Point::new(panel_rect.x + cfg.padding, panel_rect.y + cfg.padding);
            for item in &panel.items {
                let item_size = item.size(measure, cfg);
                place_item(item, cursor, measure, cfg, area, &mut out);
                match panel.axis {
                    Axis::Horizontal => cursor.x += item_size.w + cfg.spacing,
                    Axis::Vertical => cursor.y += item_size.h + cfg.spacing,
                }
            }
            x += size.w + cfg.spacing;
        }
        out
    }

    /// Button or tile id under `pos` when the page is laid out in `area`.
    pub fn hit_button(
        &self,
        area: Rect,
        pos: Point,
        measure: &dyn TextMeasure,
        cfg: &PanelConfig,
    ) -> Option<String> {
        self.place(area, measure, cfg).into_iter().find_map(|placed| match placed {
            Placed::Button { id, rect, .. } | Placed::Tile { id, rect } if rect.contains(pos) => {
                Some(id.to_string())
            }
            _ => None,
        })
    }

    /// Paints the page into `area`.
    pub fn paint(&self, painter: &mut Painter<'_>, area: Rect, cfg: &PanelConfig) {
        let theme = painter.theme().clone();
        let font = panel_font(cfg);
        painter.fill_rect(area, theme.panel_background);
        painter.push_clip(area);
        let placed = self.place(area, painter.measure(), cfg);
        for item in placed {
            match item {
                Placed::Panel { panel, rect } => {
                    painter.stroke_rect(rect, theme.panel_border);
                    let label_row = Rect::new(
                        rect.x,
                        rect.bottom() - cfg.label_height,
                        rect.w,
                        cfg.label_height,
                    );
                    painter.text_centered(panel.label(), font, label_row, theme.button_text);
                }
                Placed::Button { label, rect, .. } => {
                    painter.text_centered(label, font, rect, theme.button_text);
                }
                Placed::Tile { rect, .. } => {
                    painter.stroke_rect(rect, theme.separator);
                }
            }
        }
        painter.pop_clip();
    }
}

fn place_item<'a>(
    item: &'a PanelItem,
    origin: Point,
    measure: &dyn TextMeasure,
    cfg: &PanelConfig,
    clip: Rect,
    out: &mut Vec<Placed<'a>>,
) {
    match item {
        PanelItem::ButtonBar(bar) => {
            let mut x = origin.x;
            for b in &bar.buttons {
                let w = button_width(&b.label, measure, cfg);
                let rect = Rect::new(x, origin.y, w, cfg.button_height).clamp_within(clip);
                out.push(Placed::Button { id: &b.id, label: &b.label, rect });
                x += w;
            }
        }
        PanelItem::Gallery(gallery) => {
            for (i, id) in gallery.items.iter().enumerate() {
                let x = origin.x + i as i32 * cfg.gallery_tile;
                let rect =
                    Rect::new(x, origin.y, cfg.gallery_tile, cfg.gallery_tile).clamp_within(clip);
                out.push(Placed::Tile { id, rect });
            }
        }
    }
}
