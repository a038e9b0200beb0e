//! Boundary between the ribbon core and the native control layer.
//!
//! The layout engine computes geometry; a [`ControlSurface`] realises it.
//! No geometry math lives behind this trait.

use std::collections::BTreeMap;

use flatbar_engine::coords::{Point, Rect, Size};

use crate::painter::Painter;

/// Every separately positioned part of the ribbon.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ControlId {
    HomeSpace,
    TabStrip,
    TabOverflow,
    LeftSpacer,
    FunctionSpace,
    RightSpacer,
    ProfileSpace,
    SystemButtons,
    FixPanel,
    /// Top-level auxiliary surface; its rect is in screen coordinates.
    FloatPanel,
}

impl ControlId {
    /// Controls positioned by the strip layout pass, in placement order.
    pub const STRIP: [ControlId; 8] = [
        ControlId::HomeSpace,
        ControlId::TabStrip,
        ControlId::TabOverflow,
        ControlId::LeftSpacer,
        ControlId::FunctionSpace,
        ControlId::RightSpacer,
        ControlId::ProfileSpace,
        ControlId::SystemButtons,
    ];
}

/// Window/control primitive consumed by the layout pass.
pub trait ControlSurface {
    fn set_rect(&mut self, id: ControlId, rect: Rect);
    fn show(&mut self, id: ControlId, shown: bool);
    fn refresh(&mut self, id: ControlId);
}

// ── capability traits ─────────────────────────────────────────────────────

/// Something that can draw itself into a rectangle.
pub trait Paintable {
    fn paint(&self, painter: &mut Painter<'_>, rect: Rect);
}

/// Something that answers "is this point mine?".
pub trait HitTestable {
    fn hit_test(&self, pos: Point) -> bool;
}

/// Something that reacts to a new client size.
pub trait Resizable {
    fn resize(&mut self, size: Size);
}

// ── RecordingSurface ──────────────────────────────────────────────────────

/// Last realised state of one control.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ControlState {
    pub rect: Option<Rect>,
    pub shown: bool,
    pub refreshes: u32,
}

/// In-memory [`ControlSurface`]: remembers what was applied, draws nothing.
///
/// Backs the headless studio shell and every integration test.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    controls: BTreeMap<ControlId, ControlState>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: ControlId) -> ControlState {
        self.controls.get(&id).copied().unwrap_or_default()
    }

    #[inline]
    pub fn is_shown(&self, id: ControlId) -> bool {
        self.state(id).shown
    }

    #[inline]
    pub fn rect(&self, id: ControlId) -> Option<Rect> {
        self.state(id).rect
    }

    /// Rects of every control currently shown.
    pub fn shown_rects(&self) -> impl Iterator<Item = (ControlId, Rect)> + '_ {
        self.controls
            .iter()
            .filter(|(_, s)| s.shown)
            .filter_map(|(id, s)| s.rect.map(|r| (*id, r)))
    }
}

impl ControlSurface for RecordingSurface {
    fn set_rect(&mut self, id: ControlId, rect: Rect) {
        self.controls.entry(id).or_default().rect = Some(rect);
    }

    fn show(&mut self, id: ControlId, shown: bool) {
        self.controls.entry(id).or_default().shown = shown;
    }

    fn refresh(&mut self, id: ControlId) {
        let state = self.controls.entry(id).or_default();
        state.refreshes = state.refreshes.saturating_add(1);
    }
}
