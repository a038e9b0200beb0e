use core::cmp::Ordering;

use crate::coords::{Point, Rect};
use crate::paint::Color;
use crate::text::FontSpec;

use super::{DrawCmd, ZIndex};

/// Stable sort key: z ascending, then insertion order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.z.cmp(&other.z).then(self.order.cmp(&other.order))
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A single draw item: sort key + command + clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Scissor rect. `None` = no clipping.
    pub clip_rect: Option<Rect>,
}

/// Recorded draw stream for one paint pass.
///
/// Clips pushed with [`push_clip`](Self::push_clip) are intersected with the
/// current parent clip, so nested regions never draw outside their owner.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack, keeping capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.clip_stack.clear();
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem {
            key: SortKey { z, order },
            cmd,
            clip_rect: self.clip_stack.last().copied(),
        });
    }

    #[inline]
    pub fn push_fill(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push(z, DrawCmd::FillRect { rect, color });
    }

    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Point, to: Point, color: Color, width: i32) {
        self.push(z, DrawCmd::Line { from, to, color, width });
    }

    #[inline]
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: FontSpec,
        origin: Point,
        color: Color,
    ) {
        self.push(z, DrawCmd::Text { text: text.into(), font, origin, color });
    }

    /// Begins a scissor region; must be balanced with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            Some(&parent) => parent
                .intersect(rect)
                .unwrap_or(Rect::new(rect.x, rect.y, 0, 0)),
        };
        self.clip_stack.push(effective);
    }

    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Items sorted back-to-front.
    pub fn in_paint_order(&self) -> Vec<&DrawItem> {
        let mut sorted: Vec<&DrawItem> = self.items.iter().collect();
        sorted.sort_by_key(|item| item.key);
        sorted
    }
}
