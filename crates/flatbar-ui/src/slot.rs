//! Host-supplied strip elements such as the home, function and profile
//! slots. The layout engine sees them only through [`LayoutSlot`].

use flatbar_engine::coords::Rect;
use flatbar_engine::text::FontSpec;

use crate::control::Paintable;
use crate::painter::Painter;

/// What the layout engine needs to know about an opaque strip element.
pub trait LayoutSlot {
    /// Width the element asks for; `0` means it takes no space.
    fn required_width(&self) -> i32;

    /// Preferred height; `0` fills the strip band.
    fn slot_height(&self) -> i32 {
        0
    }

    /// Visible, has content, and a positive width.
    fn effectively_visible(&self) -> bool;
}

/// Which strip position a [`FixedWidthSlot`] fills.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Home,
    Function,
    Profile,
}

/// Leaf strip element with a known width: home button, function area
/// (search box, quick actions), profile area.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedWidthSlot {
    kind: SlotKind,
    requested_width: i32,
    height: i32,
    visible: bool,
    label: Option<String>,
}

impl FixedWidthSlot {
    pub fn new(kind: SlotKind, width: i32) -> Self {
        Self { kind, requested_width: width.max(0), height: 0, visible: true, label: None }
    }

    /// Attaches displayable content. A slot without content never takes space.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_height(mut self, height: i32) -> Self {
        self.height = height.max(0);
        self
    }

    #[inline]
    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    pub fn set_width(&mut self, width: i32) {
        self.requested_width = width.max(0);
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[inline]
    pub fn has_content(&self) -> bool {
        self.label.is_some()
    }
}

impl LayoutSlot for FixedWidthSlot {
    fn required_width(&self) -> i32 {
        self.requested_width
    }

    fn slot_height(&self) -> i32 {
        self.height
    }

    fn effectively_visible(&self) -> bool {
        self.visible && self.has_content() && self.requested_width > 0
    }
}

impl Paintable for FixedWidthSlot {
    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        let Some(label) = self.label.as_deref() else { return };
        let theme = painter.theme().clone();
        if self.kind == SlotKind::Home {
            painter.fill_rect(rect, theme.tab_active_indicator);
            painter.text_centered(label, FontSpec::default(), rect, theme.panel_background);
        } else {
            painter.stroke_rect(rect, theme.panel_border);
            painter.text_centered(label, FontSpec::default(), rect, theme.button_text);
        }
    }
}
