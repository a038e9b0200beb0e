//! Flatbar UI: a flat, tabbed ribbon bar on top of `flatbar-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use flatbar_ui::prelude::*;
//!
//! let services = Services::new(RibbonConfig::default(), Box::new(MonoMeasure::default()))?;
//! let mut bar = RibbonBar::new(services, RecordingSurface::new());
//! bar.resize(Size::new(800, 126));
//! bar.add_page(Page::new("Home").with_panel(
//!     Panel::new("Clipboard", Axis::Horizontal)
//!         .button_bar(ButtonBar::new().button("paste", "Paste")),
//! ));
//!
//! // In your event loop:
//! bar.on_event(&UiEvent::Click { pos }, Instant::now());
//! bar.tick(Instant::now(), global_mouse);
//! for event in bar.drain_events() { /* ... */ }
//! ```
//!
//! # Pieces
//!
//! - [`layout::LayoutEngine`] places home, tabs, spacers, function, profile
//!   and system buttons in one left-to-right pass and sizes the dock.
//! - [`pin::PinStateController`] decides whether a page shows docked
//!   ([`fix_panel::FixPanel`]) or floating ([`float_panel::FloatPanel`]).
//! - [`registry::PageRegistry`] owns the pages; containers only refer to them.
//! - [`bar::RibbonBar`] wires everything to a [`control::ControlSurface`].

pub mod bar;
pub mod config;
pub mod control;
pub mod drag;
pub mod event;
pub mod fix_panel;
pub mod float_panel;
pub mod home_menu;
pub mod layout;
pub mod overflow;
pub mod page;
pub mod painter;
pub mod pin;
pub mod registry;
pub mod services;
pub mod slot;
pub mod spacer;
pub mod system_buttons;
pub mod tab_strip;
pub mod theme;

pub use bar::RibbonBar;

/// Everything a host needs. Import this in the application shell.
pub mod prelude {
    pub use crate::bar::RibbonBar;
    pub use crate::config::{ConfigError, RibbonConfig};
    pub use crate::control::{
        ControlId, ControlSurface, HitTestable, Paintable, RecordingSurface, Resizable,
    };
    pub use crate::drag::{FrameZone, ResizeGrip, WindowDragController};
    pub use crate::event::{EventResult, FloatEvent, UiEvent};
    pub use crate::home_menu::HomeMenu;
    pub use crate::layout::{FixPanelPlacement, LayoutEngine, LayoutInput, RibbonLayout};
    pub use crate::page::{Axis, ButtonBar, Gallery, Page, PageId, Panel};
    pub use crate::pin::{PinMode, PinState, PinTransition, TabClickOutcome};
    pub use crate::registry::Container;
    pub use crate::services::{EventBus, HideReason, Language, RibbonEvent, Services};
    pub use crate::slot::{FixedWidthSlot, LayoutSlot, SlotKind};
    pub use crate::spacer::SpacerElement;
    pub use crate::system_buttons::{SystemButtons, SystemCommand};
    pub use crate::theme::Theme;

    // Re-export the engine primitives everyone needs.
    pub use flatbar_engine::coords::{Point, Rect, Size};
    pub use flatbar_engine::scene::DrawList;
    pub use flatbar_engine::text::{FontSystem, MonoMeasure, TextMeasure};
}
