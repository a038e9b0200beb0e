use flatbar_engine::coords::{Point, Size};

/// Input events the host forwards to the ribbon bar.
///
/// Positions are in bar client coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Primary mouse button pressed and released at `pos`.
    Click { pos: Point },
    /// Mouse moved to `pos`.
    Hover { pos: Point },
    /// The bar's client area changed size.
    Resize { size: Size },
}

/// Events delivered by the floating page surface.
///
/// Enter / activation / focus cancel the pending auto-hide; leave /
/// deactivation / focus loss re-arm it.
#[derive(Debug, Clone, PartialEq)]
pub enum FloatEvent {
    MouseEnter,
    MouseLeave,
    Activate,
    Deactivate,
    FocusGained,
    FocusLost,
    /// Click at `pos`, in float-panel local coordinates.
    Click { pos: Point },
}

impl FloatEvent {
    /// `true` for events that keep the floating page open.
    #[inline]
    pub fn cancels_auto_hide(&self) -> bool {
        matches!(self, FloatEvent::MouseEnter | FloatEvent::Activate | FloatEvent::FocusGained)
    }

    /// `true` for events that start the auto-hide countdown.
    #[inline]
    pub fn arms_auto_hide(&self) -> bool {
        matches!(self, FloatEvent::MouseLeave | FloatEvent::Deactivate | FloatEvent::FocusLost)
    }
}

/// Result of routing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled.
    Consumed,
    /// Event was not handled, the host may route it elsewhere.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
