//! Pinned / unpinned display of the active page.
//!
//! Pinned: the active page sits in the docked [`FixPanel`] and the layout
//! reserves vertical space for it. Unpinned: the strip collapses, and a tab
//! click shows the page transiently in the [`FloatPanel`].
//!
//! Two indices are tracked. `active_page` is what the docked panel shows (or
//! would show after pinning); `active_floating_page` is what the floating
//! preview shows. Tab clicks while unpinned update both, so pinning captures
//! the most recently viewed tab.
//!
//! Every transition detaches a page from its old container before attaching
//! it to the new one (see [`PageRegistry::show`]).

use std::time::Instant;

use flatbar_engine::coords::Rect;

use crate::fix_panel::FixPanel;
use crate::float_panel::FloatPanel;
use crate::page::PageId;
use crate::registry::{Container, PageRegistry};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PinMode {
    Pinned,
    Unpinned,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PinState {
    pub mode: PinMode,
    /// Meaningful while pinned.
    pub active_page: Option<usize>,
    /// Meaningful while unpinned.
    pub active_floating_page: Option<usize>,
}

impl PinState {
    #[inline]
    pub fn is_pinned(&self) -> bool {
        self.mode == PinMode::Pinned
    }

    /// Which index drives the tab highlight depends on the mode.
    #[inline]
    pub fn is_tab_active(&self, index: usize) -> bool {
        match self.mode {
            PinMode::Pinned => self.active_page == Some(index),
            PinMode::Unpinned => self.active_floating_page == Some(index),
        }
    }
}

/// Mutable access to everything a pin transition touches.
pub struct Containers<'a> {
    pub registry: &'a mut PageRegistry,
    pub fix: &'a mut FixPanel,
    pub float: &'a mut FloatPanel,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PinTransition {
    /// Now pinned; `page` is docked (if any page exists).
    Pinned { page: Option<PageId> },
    /// Now unpinned; nothing is shown until the next tab click.
    Unpinned,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TabClickOutcome {
    /// Index out of range.
    Ignored,
    /// Clicked the page that is already active.
    Unchanged,
    /// Pinned mode: the docked page changed.
    Activated { previous: Option<PageId>, page: PageId },
    /// Unpinned mode: the floating panel appeared with `page`.
    FloatShown { page: PageId },
    /// Unpinned mode: the already visible floating panel now shows `page`.
    FloatSwapped { page: PageId },
}

impl TabClickOutcome {
    /// Whether the strip/dock geometry must be recomputed.
    #[inline]
    pub fn needs_layout(self) -> bool {
        matches!(self, TabClickOutcome::Activated { .. })
    }
}

#[derive(Debug, Clone)]
pub struct PinStateController {
    state: PinState,
}

impl PinStateController {
    pub fn new(pinned: bool) -> Self {
        Self {
            state: PinState {
                mode: if pinned { PinMode::Pinned } else { PinMode::Unpinned },
                active_page: None,
                active_floating_page: None,
            },
        }
    }

    #[inline]
    pub fn state(&self) -> &PinState {
        &self.state
    }

    #[inline]
    pub fn is_pinned(&self) -> bool {
        self.state.is_pinned()
    }

    /// First page added while pinned becomes the docked page.
    pub fn on_page_added(&mut self, id: PageId, c: &mut Containers<'_>) {
        if self.state.active_page.is_some() {
            return;
        }
        self.state.active_page = Some(id.index());
        if self.is_pinned() {
            Self::dock(id, c);
        }
    }

    /// Flips between pinned and unpinned.
    pub fn toggle_pin(&mut self, c: &mut Containers<'_>) -> PinTransition {
        match self.state.mode {
            PinMode::Unpinned => {
                let target = self
                    .state
                    .active_floating_page
                    .or(self.state.active_page)
                    .and_then(|i| c.registry.id(i));

                c.float.hide();
                if let Some(prev) = c.registry.clear(Container::Float) {
                    Self::set_page_active(c.registry, prev, false);
                }

                self.state.mode = PinMode::Pinned;
                self.state.active_page = target.map(PageId::index);
                if let Some(page) = target {
                    Self::dock(page, c);
                }
                log::info!("ribbon pinned (page {:?})", target);
                PinTransition::Pinned { page: target }
            }
            PinMode::Pinned => {
                c.fix.hide();
                if let Some(prev) = c.registry.clear(Container::Fix) {
                    Self::set_page_active(c.registry, prev, false);
                }
                self.state.mode = PinMode::Unpinned;
                self.state.active_floating_page = self.state.active_page;
                log::info!("ribbon unpinned");
                PinTransition::Unpinned
            }
        }
    }

    /// Pinned-mode activation. Same-page requests are a no-op.
    pub fn set_active_page(&mut self, index: usize, c: &mut Containers<'_>) -> TabClickOutcome {
        let Some(page) = c.registry.id(index) else {
            log::warn!("set_active_page: index {index} out of range ({} pages)", c.registry.len());
            return TabClickOutcome::Ignored;
        };
        if self.state.active_page == Some(index) && c.registry.contains(Container::Fix, page) {
            return TabClickOutcome::Unchanged;
        }

        let previous = c.registry.occupant(Container::Fix);
        if let Some(prev) = previous {
            Self::set_page_active(c.registry, prev, false);
            c.registry.return_to_background(prev);
        }
        self.state.active_page = Some(index);
        Self::dock(page, c);
        log::info!("page {:?} activated", page);
        TabClickOutcome::Activated { previous, page }
    }

    /// Tab click routing for both modes.
    ///
    /// `float_rect` is where the floating panel goes if it is not yet shown
    /// (screen coordinates, computed by the bar for this tab).
    pub fn on_tab_clicked(
        &mut self,
        index: usize,
        float_rect: Rect,
        now: Instant,
        c: &mut Containers<'_>,
    ) -> TabClickOutcome {
        if self.is_pinned() {
            return self.set_active_page(index, c);
        }

        let Some(page) = c.registry.id(index) else {
            log::warn!("tab click: index {index} out of range ({} pages)", c.registry.len());
            return TabClickOutcome::Ignored;
        };

        self.state.active_floating_page = Some(index);
        self.state.active_page = Some(index);

        if c.float.is_shown() {
            if c.registry.contains(Container::Float, page) {
                return TabClickOutcome::Unchanged;
            }
            if let Some(prev) = c.registry.show(page, Container::Float) {
                Self::set_page_active(c.registry, prev, false);
            }
            Self::set_page_active(c.registry, page, true);
            log::debug!("floating content swapped to {:?}", page);
            TabClickOutcome::FloatSwapped { page }
        } else {
            if let Some(stale) = c.registry.show(page, Container::Float) {
                Self::set_page_active(c.registry, stale, false);
            }
            Self::set_page_active(c.registry, page, true);
            c.float.show_at(float_rect, now);
            log::debug!("floating panel shown with {:?} at {:?}", page, float_rect);
            TabClickOutcome::FloatShown { page }
        }
    }

    /// Click on empty strip area. While unpinned this dismisses the floating panel.
    pub fn on_strip_clicked(&mut self, c: &mut Containers<'_>) -> bool {
        !self.is_pinned() && self.dismiss_float(c)
    }

    /// Hides the floating panel and returns its page to the background.
    pub fn dismiss_float(&mut self, c: &mut Containers<'_>) -> bool {
        let was_shown = c.float.is_shown();
        c.float.hide();
        if let Some(prev) = c.registry.clear(Container::Float) {
            Self::set_page_active(c.registry, prev, false);
        }
        was_shown
    }

    fn dock(page: PageId, c: &mut Containers<'_>) {
        c.registry.show(page, Container::Fix);
        Self::set_page_active(c.registry, page, true);
    }

    fn set_page_active(registry: &mut PageRegistry, id: PageId, active: bool) {
        if let Some(p) = registry.get_mut(id) {
            p.set_active(active);
        }
    }
}
