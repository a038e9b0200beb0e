//! Transient page surface shown while unpinned, with mouse-driven auto-hide.
//!
//! The panel polls: while shown and not held open by an enter/activate/focus
//! event, a [`Deadline`] is armed at the configured cadence. When it comes due
//! the host's global mouse position is compared against the panel (inflated by
//! a margin) and the bar. Outside both → hide; otherwise re-arm.

use std::time::{Duration, Instant};

use flatbar_engine::coords::{Point, Rect};
use flatbar_engine::time::Deadline;

use crate::config::FloatConfig;
use crate::control::HitTestable;
use crate::event::FloatEvent;
use crate::fix_panel::corner_button;

/// Outcome of one auto-hide poll.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AutoHideCheck {
    /// Hidden, held open, or the deadline has not come due.
    Idle,
    /// Mouse still over the panel or the bar; deadline re-armed.
    Keep,
    /// Mouse left both; the panel has been hidden.
    Hide,
}

#[derive(Debug, Clone)]
pub struct FloatPanel {
    shown: bool,
    screen_rect: Rect,
    interval: Duration,
    margin: i32,
    deadline: Deadline,
}

impl FloatPanel {
    pub fn new(config: &FloatConfig) -> Self {
        Self {
            shown: false,
            screen_rect: Rect::default(),
            interval: config.auto_hide_interval(),
            margin: config.hide_margin,
            deadline: Deadline::disarmed(),
        }
    }

    #[inline]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Placement in screen coordinates.
    #[inline]
    pub fn screen_rect(&self) -> Rect {
        self.screen_rect
    }

    #[inline]
    pub fn auto_hide_armed(&self) -> bool {
        self.deadline.is_armed()
    }

    /// Pin toggle square, screen coordinates.
    pub fn pin_button(&self, size: i32) -> Option<Rect> {
        self.shown.then(|| corner_button(self.screen_rect, size))
    }

    /// Shows the panel at `screen_rect` and starts auto-hide polling.
    pub(crate) fn show_at(&mut self, screen_rect: Rect, now: Instant) {
        self.screen_rect = screen_rect;
        self.shown = true;
        self.deadline.arm(now, self.interval);
    }

    pub(crate) fn hide(&mut self) {
        self.shown = false;
        self.deadline.cancel();
    }

    /// Applies an enter/leave/activation/focus event to the auto-hide timer.
    pub fn on_event(&mut self, event: &FloatEvent, now: Instant) {
        if !self.shown {
            return;
        }
        if event.cancels_auto_hide() {
            self.deadline.cancel();
        } else if event.arms_auto_hide() {
            self.deadline.arm(now, self.interval);
        }
    }

    /// Runs the auto-hide check if its deadline came due.
    pub fn poll(&mut self, now: Instant, mouse: Point, bar_screen_rect: Rect) -> AutoHideCheck {
        if !self.shown || !self.deadline.is_due(now) {
            return AutoHideCheck::Idle;
        }

        let outside_panel = !self.screen_rect.inflate(self.margin).contains(mouse);
        let outside_bar = !bar_screen_rect.contains(mouse);
        if outside_panel && outside_bar {
            self.hide();
            AutoHideCheck::Hide
        } else {
            self.deadline.arm(now, self.interval);
            AutoHideCheck::Keep
        }
    }
}

impl HitTestable for FloatPanel {
    /// `pos` in screen coordinates.
    fn hit_test(&self, pos: Point) -> bool {
        self.shown && self.screen_rect.contains(pos)
    }
}
