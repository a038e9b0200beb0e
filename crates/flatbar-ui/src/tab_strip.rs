//! Page labels along the strip: measurement, truncation and hit testing.
//!
//! Widths come from the text measurement service and are cached per entry.
//! The layout pass decides how many entries fit ([`TabStrip::fit`]) and then
//! records its decision ([`TabStrip::set_placement`]); hit testing and painting
//! walk the same left-to-right accumulation afterwards.

use flatbar_engine::coords::{Point, Rect};
use flatbar_engine::text::{FontSpec, TextMeasure};

use crate::control::HitTestable;
use crate::pin::PinState;

/// `textWidth + 2 × tab_padding` for every label.
pub fn measure_all(
    labels: &[&str],
    measure: &dyn TextMeasure,
    font: FontSpec,
    tab_padding: i32,
) -> Vec<i32> {
    labels
        .iter()
        .map(|label| measure.measure(label, font).w + 2 * tab_padding)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TabEntry {
    label: String,
    width: i32,
}

/// How many leading tabs fit into a given width.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TabFit {
    pub visible: usize,
    /// Width of the visible tabs including the spacing between them.
    pub width: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabStrip {
    entries: Vec<TabEntry>,
    font: FontSpec,
    tab_padding: i32,
    tab_spacing: i32,
    area: Rect,
    visible: usize,
}

impl TabStrip {
    pub fn new(font: FontSpec, tab_padding: i32, tab_spacing: i32) -> Self {
        Self {
            entries: Vec::new(),
            font,
            tab_padding: tab_padding.max(0),
            tab_spacing: tab_spacing.max(0),
            area: Rect::default(),
            visible: 0,
        }
    }

    /// Appends a tab, measuring its label now. Returns its index.
    pub fn push(&mut self, label: impl Into<String>, measure: &dyn TextMeasure) -> usize {
        let label = label.into();
        let width = measure.measure(&label, self.font).w + 2 * self.tab_padding;
        self.entries.push(TabEntry { label, width });
        self.entries.len() - 1
    }

    /// Re-measures every label after the measurement service changed.
    pub fn remeasure(&mut self, measure: &dyn TextMeasure) {
        let labels: Vec<&str> = self.entries.iter().map(|e| e.label.as_str()).collect();
        let widths = measure_all(&labels, measure, self.font, self.tab_padding);
        for (entry, width) in self.entries.iter_mut().zip(widths) {
            entry.width = width;
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.label.as_str())
    }

    pub fn width_of(&self, index: usize) -> Option<i32> {
        self.entries.get(index).map(|e| e.width)
    }

    #[inline]
    pub fn font(&self) -> FontSpec {
        self.font
    }

    #[inline]
    pub fn spacing(&self) -> i32 {
        self.tab_spacing
    }

    /// Σ widths + (n − 1) × spacing; zero for an empty strip.
    pub fn total_width(&self) -> i32 {
        let sum: i32 = self.entries.iter().map(|e| e.width).sum();
        let gaps = self.entries.len().saturating_sub(1) as i32;
        sum + gaps * self.tab_spacing
    }

    /// Leading tabs that fit entirely inside `available` pixels.
    pub fn fit(&self, available: i32) -> TabFit {
        let mut used = 0;
        let mut visible = 0;
        for (i, entry) in self.entries.iter().enumerate() {
            let next = used + if i == 0 { 0 } else { self.tab_spacing } + entry.width;
            if next > available {
                break;
            }
            used = next;
            visible += 1;
        }
        TabFit { visible, width: used }
    }

    /// Records the layout pass's decision.
    pub fn set_placement(&mut self, area: Rect, visible: usize) {
        self.area = area;
        self.visible = visible.min(self.entries.len());
    }

    #[inline]
    pub fn area(&self) -> Rect {
        self.area
    }

    #[inline]
    pub fn visible_count(&self) -> usize {
        self.visible
    }

    #[inline]
    pub fn is_hidden(&self, index: usize) -> bool {
        index >= self.visible && index < self.entries.len()
    }

    /// Rectangles of the visible tabs, in order, clipped to the tab area.
    pub fn tab_rects(&self) -> impl Iterator<Item = (usize, Rect)> + '_ {
        let area = self.area;
        let spacing = self.tab_spacing;
        self.entries[..self.visible]
            .iter()
            .enumerate()
            .scan(area.x, move |x, (i, entry)| {
                let rect = Rect::new(*x, area.y, entry.width, area.h).clamp_within(area);
                *x += entry.width + spacing;
                Some((i, rect))
            })
    }

    /// Rectangle of a visible tab; `None` for hidden or unknown indices.
    pub fn tab_rect(&self, index: usize) -> Option<Rect> {
        self.tab_rects().find(|(i, _)| *i == index).map(|(_, r)| r)
    }

    /// Visible tab under `pos`. Overflowed tabs are only reachable through the dropdown.
    pub fn hit_test_index(&self, pos: Point) -> Option<usize> {
        let hit = self.tab_rects().find(|(_, r)| r.contains(pos)).map(|(i, _)| i);
        log::trace!("tab hit test at {:?} -> {:?}", pos, hit);
        hit
    }

    /// Whether tab `index` is drawn as active under the current pin state.
    #[inline]
    pub fn active_indicator_for(&self, index: usize, state: &PinState) -> bool {
        index < self.entries.len() && state.is_tab_active(index)
    }
}

impl HitTestable for TabStrip {
    fn hit_test(&self, pos: Point) -> bool {
        self.hit_test_index(pos).is_some()
    }
}
