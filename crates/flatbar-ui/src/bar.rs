//! `RibbonBar`: the composition root.
//!
//! Owns every ribbon part and the injected [`Services`]. Input arrives as
//! [`UiEvent`]s plus a cooperative [`tick`](RibbonBar::tick); geometry leaves
//! through the [`ControlSurface`]; everything the host should react to is
//! queued on the event bus and collected with
//! [`drain_events`](RibbonBar::drain_events).
//!
//! Coordinates: the strip and the dock use bar client coordinates. The
//! floating panel and the global mouse position use screen coordinates;
//! `screen_origin` is the bar's client origin on screen.

use std::time::Instant;

use flatbar_engine::coords::{Point, Rect, Size};
use flatbar_engine::scene::DrawList;
use flatbar_engine::text::{FontSpec, TextMeasure};

use crate::control::{ControlId, ControlSurface, HitTestable, Paintable, RecordingSurface, Resizable};
use crate::event::{EventResult, FloatEvent, UiEvent};
use crate::fix_panel::FixPanel;
use crate::float_panel::{AutoHideCheck, FloatPanel};
use crate::home_menu::HomeMenu;
use crate::layout::{FixPanelPlacement, LayoutEngine, LayoutInput, RibbonLayout};
use crate::overflow::OverflowDropdown;
use crate::page::{Page, PageId};
use crate::painter::Painter;
use crate::pin::{Containers, PinState, PinStateController, PinTransition, TabClickOutcome};
use crate::registry::{Container, PageRegistry};
use crate::services::{HideReason, RibbonEvent, Services};
use crate::slot::{FixedWidthSlot, SlotKind};
use crate::spacer::SpacerElement;
use crate::system_buttons::SystemButtons;
use crate::tab_strip::TabStrip;

const HOME_MENU_WIDTH: i32 = 160;

fn hidden_spacer() -> SpacerElement {
    let mut s = SpacerElement::new(0);
    s.set_visible(false);
    s
}

pub struct RibbonBar<S: ControlSurface = RecordingSurface> {
    services: Services,
    surface: S,
    engine: LayoutEngine,

    pages: PageRegistry,
    tabs: TabStrip,
    pin: PinStateController,
    fix: FixPanel,
    float: FloatPanel,

    home: FixedWidthSlot,
    function: FixedWidthSlot,
    profile: FixedWidthSlot,
    system_buttons: SystemButtons,
    left_spacer: SpacerElement,
    right_spacer: SpacerElement,
    overflow: OverflowDropdown,
    home_menu: HomeMenu,

    client: Size,
    screen_origin: Point,
    layout: RibbonLayout,
    retry_layout: bool,
}

impl<S: ControlSurface> RibbonBar<S> {
    pub fn new(services: Services, surface: S) -> Self {
        let cfg = &services.config;
        let tab_font = FontSpec { size: cfg.layout.tab_font_size, ..FontSpec::default() };
        let item_h = cfg.layout.overflow_item_height;

        Self {
            engine: LayoutEngine::new(&cfg.layout),
            pages: PageRegistry::new(),
            tabs: TabStrip::new(tab_font, cfg.layout.tab_padding, cfg.layout.tab_spacing),
            pin: PinStateController::new(cfg.layout.start_pinned),
            fix: FixPanel::new(),
            float: FloatPanel::new(&cfg.float),
            home: FixedWidthSlot::new(SlotKind::Home, 0),
            function: FixedWidthSlot::new(SlotKind::Function, 0),
            profile: FixedWidthSlot::new(SlotKind::Profile, 0),
            system_buttons: SystemButtons::new(0),
            left_spacer: hidden_spacer(),
            right_spacer: hidden_spacer(),
            overflow: OverflowDropdown::new(item_h),
            home_menu: HomeMenu::new(HOME_MENU_WIDTH, item_h),
            client: Size::zero(),
            screen_origin: Point::zero(),
            layout: RibbonLayout::default(),
            retry_layout: false,
            services,
            surface,
        }
    }

    // ── configuration of the strip ────────────────────────────────────────

    pub fn set_home(&mut self, slot: FixedWidthSlot) {
        self.home = slot;
        self.relayout();
    }

    pub fn set_function(&mut self, slot: FixedWidthSlot) {
        self.function = slot;
        self.relayout();
    }

    pub fn set_profile(&mut self, slot: FixedWidthSlot) {
        self.profile = slot;
        self.relayout();
    }

    pub fn set_system_buttons(&mut self, buttons: SystemButtons) {
        self.system_buttons = buttons;
        self.relayout();
    }

    pub fn set_spacers(&mut self, left: SpacerElement, right: SpacerElement) {
        self.left_spacer = left;
        self.right_spacer = right;
        self.relayout();
    }

    pub fn set_home_menu(&mut self, menu: HomeMenu) {
        self.home_menu = menu;
        self.home_menu.set_anchor(self.layout.home);
    }

    /// Swaps the text measurement service (a font finished loading, say) and
    /// re-measures every tab.
    pub fn set_text_measure(&mut self, measure: Box<dyn TextMeasure>) {
        self.services.measure = measure;
        self.tabs.remeasure(self.services.measure.as_ref());
        self.relayout();
    }

    /// Where the bar's client origin sits on screen.
    pub fn set_screen_origin(&mut self, origin: Point) {
        self.screen_origin = origin;
    }

    /// Appends a page. Its label goes through the language table.
    pub fn add_page(&mut self, mut page: Page) -> PageId {
        let label = self.services.language.tr(page.label()).to_string();
        page.set_label(label.clone());
        self.tabs.push(label, self.services.measure.as_ref());
        let id = self.pages.add(page);

        let mut c = Containers { registry: &mut self.pages, fix: &mut self.fix, float: &mut self.float };
        self.pin.on_page_added(id, &mut c);
        self.relayout();
        id
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn layout(&self) -> &RibbonLayout {
        &self.layout
    }

    pub fn pin_state(&self) -> &PinState {
        self.pin.state()
    }

    pub fn is_pinned(&self) -> bool {
        self.pin.is_pinned()
    }

    pub fn pages(&self) -> &PageRegistry {
        &self.pages
    }

    pub fn tabs(&self) -> &TabStrip {
        &self.tabs
    }

    pub fn fix_panel(&self) -> &FixPanel {
        &self.fix
    }

    pub fn float_panel(&self) -> &FloatPanel {
        &self.float
    }

    pub fn overflow(&self) -> &OverflowDropdown {
        &self.overflow
    }

    pub fn home_menu(&self) -> &HomeMenu {
        &self.home_menu
    }

    pub fn client_size(&self) -> Size {
        self.client
    }

    /// Outstanding events, oldest first.
    pub fn drain_events(&mut self) -> Vec<RibbonEvent> {
        self.services.events.take_events()
    }

    /// Strip height, plus the dock while pinned.
    pub fn preferred_height(&self) -> i32 {
        let l = &self.services.config.layout;
        if self.pin.is_pinned() {
            l.bar_strip_height + l.bottom_margin + l.fix_panel_height
        } else {
            l.bar_strip_height
        }
    }

    fn strip_rect(&self) -> Rect {
        Rect::new(0, 0, self.client.w, self.services.config.layout.bar_strip_height)
            .clamp_within(Rect::from_size(self.client))
    }

    fn bar_screen_rect(&self) -> Rect {
        self.strip_rect().translate(self.screen_origin)
    }

    // ── layout ────────────────────────────────────────────────────────────

    /// Recomputes and applies every rectangle.
    pub fn relayout(&mut self) {
        let input = LayoutInput {
            client: self.client,
            home: Some(&self.home),
            function: Some(&self.function),
            profile: Some(&self.profile),
            system_buttons: Some(&self.system_buttons),
            left_spacer: Some(&self.left_spacer),
            right_spacer: Some(&self.right_spacer),
            tabs: &self.tabs,
            pinned: self.pin.is_pinned(),
        };
        let layout = self.engine.compute(&input);
        self.engine.apply(&layout, &mut self.surface);

        self.tabs.set_placement(layout.tab_area.unwrap_or_default(), layout.visible_tabs);
        self.overflow.update(layout.overflow_button, layout.hidden_tabs.clone(), &self.tabs);
        self.home_menu.set_anchor(layout.home);

        match layout.fix_panel {
            FixPanelPlacement::Placed(rect) => {
                self.fix.place(rect);
                self.retry_layout = false;
            }
            FixPanelPlacement::Deferred { height } => {
                self.fix.defer();
                if !self.retry_layout {
                    self.services.events.emit(RibbonEvent::LayoutDeferred { height });
                }
                self.retry_layout = true;
            }
            FixPanelPlacement::Unpinned => {
                self.fix.hide();
                self.retry_layout = false;
            }
        }
        self.layout = layout;
    }

    fn sync_float_surface(&mut self) {
        if self.float.is_shown() {
            self.surface.set_rect(ControlId::FloatPanel, self.float.screen_rect());
            self.surface.show(ControlId::FloatPanel, true);
            self.surface.refresh(ControlId::FloatPanel);
        } else {
            self.surface.show(ControlId::FloatPanel, false);
        }
    }

    /// Floating panel placement for tab `index`, screen coordinates.
    ///
    /// Anchored under the tab (or the overflow button for hidden tabs), wide
    /// enough for the page content, kept inside the bar horizontally.
    pub fn float_rect_for(&self, index: usize) -> Rect {
        let cfg = &self.services.config;
        let anchor = if self.tabs.is_hidden(index) {
            self.overflow.button_rect()
        } else {
            self.tabs.tab_rect(index)
        }
        .unwrap_or(self.tabs.area());
        let content = self
            .pages
            .id(index)
            .and_then(|id| self.pages.get(id))
            .map(|p| p.content_size(self.services.measure.as_ref(), &cfg.panel))
            .unwrap_or_default();

        let client_w = self.client.w.max(0);
        let w = content.w.max(cfg.float.min_width).min(client_w);
        let h = content.h.max(cfg.float.height);
        let x = anchor.x.clamp(0, (client_w - w).max(0));
        let y = cfg.layout.bar_strip_height;
        Rect::new(x, y, w, h).translate(self.screen_origin)
    }

    // ── pin / tabs ────────────────────────────────────────────────────────

    /// Same as clicking tab `index`, whether or not it is currently visible.
    pub fn activate_tab(&mut self, index: usize, now: Instant) -> TabClickOutcome {
        let float_rect = self.float_rect_for(index);
        let mut c = Containers { registry: &mut self.pages, fix: &mut self.fix, float: &mut self.float };
        let outcome = self.pin.on_tab_clicked(index, float_rect, now, &mut c);

        match outcome {
            TabClickOutcome::Activated { page, .. } => {
                self.services.events.emit(RibbonEvent::PageActivated(page));
            }
            TabClickOutcome::FloatShown { page } => {
                self.services.events.emit(RibbonEvent::FloatShown(page));
                self.sync_float_surface();
            }
            TabClickOutcome::FloatSwapped { page } => {
                self.services.events.emit(RibbonEvent::PageActivated(page));
                self.surface.refresh(ControlId::FloatPanel);
            }
            TabClickOutcome::Unchanged | TabClickOutcome::Ignored => return outcome,
        }
        if outcome.needs_layout() {
            self.relayout();
        }
        self.surface.refresh(ControlId::TabStrip);
        outcome
    }

    pub fn toggle_pin(&mut self) -> PinTransition {
        let float_was_shown = self.float.is_shown();
        let mut c = Containers { registry: &mut self.pages, fix: &mut self.fix, float: &mut self.float };
        let transition = self.pin.toggle_pin(&mut c);

        let pinned = matches!(transition, PinTransition::Pinned { .. });
        if pinned && float_was_shown {
            self.services.events.emit(RibbonEvent::FloatHidden(HideReason::Pinned));
        }
        self.services.events.emit(RibbonEvent::PinChanged { pinned });
        if let PinTransition::Pinned { page: Some(page) } = transition {
            self.services.events.emit(RibbonEvent::PageActivated(page));
        }
        self.sync_float_surface();
        self.relayout();
        transition
    }

    fn dismiss_float(&mut self, reason: HideReason) {
        let mut c = Containers { registry: &mut self.pages, fix: &mut self.fix, float: &mut self.float };
        self.pin.dismiss_float(&mut c);
        self.services.events.emit(RibbonEvent::FloatHidden(reason));
        self.sync_float_surface();
        self.surface.refresh(ControlId::TabStrip);
    }

    // ── input ─────────────────────────────────────────────────────────────

    pub fn on_event(&mut self, event: &UiEvent, now: Instant) -> EventResult {
        match *event {
            UiEvent::Click { pos } => self.on_click(pos, now),
            UiEvent::Resize { size } => {
                self.resize(size);
                EventResult::Consumed
            }
            UiEvent::Hover { .. } => EventResult::Ignored,
        }
    }

    /// Click in bar client coordinates.
    pub fn on_click(&mut self, pos: Point, now: Instant) -> EventResult {
        // open menus first: they float above everything
        if self.overflow.is_open() {
            if let Some(menu) = self.overflow.menu_rect().filter(|m| m.contains(pos)) {
                log::trace!("overflow menu click at {:?} in {:?}", pos, menu);
                if let Some(index) = self.overflow.select(pos, self.pages.len()) {
                    self.activate_tab(index, now);
                }
                return EventResult::Consumed;
            }
            if !self.overflow.button_rect().is_some_and(|b| b.contains(pos)) {
                self.overflow.close();
            }
        }
        if self.home_menu.is_open() {
            if self.home_menu.hit_test(pos) {
                if let Some(id) = self.home_menu.pick(pos) {
                    self.services.events.emit(RibbonEvent::HomeMenuToggled { open: false });
                    self.services.events.emit(RibbonEvent::HomeMenuCommand(id));
                }
                return EventResult::Consumed;
            }
            if !self.layout.home.is_some_and(|h| h.contains(pos)) {
                self.home_menu.close();
                self.services.events.emit(RibbonEvent::HomeMenuToggled { open: false });
            }
        }

        if self.layout.home.is_some_and(|h| h.contains(pos)) {
            let open = self.home_menu.toggle();
            self.services.events.emit(RibbonEvent::HomeMenuToggled { open });
            return EventResult::Consumed;
        }
        if let Some(rect) = self.layout.system_buttons {
            if let Some(cmd) = self.system_buttons.command_at(rect, pos) {
                self.services.events.emit(RibbonEvent::SystemCommand(cmd));
                return EventResult::Consumed;
            }
        }
        if self.overflow.button_rect().is_some_and(|b| b.contains(pos)) {
            self.overflow.toggle();
            return EventResult::Consumed;
        }
        if let Some(index) = self.tabs.hit_test_index(pos) {
            self.activate_tab(index, now);
            return EventResult::Consumed;
        }
        if self.strip_rect().contains(pos) {
            let mut c = Containers { registry: &mut self.pages, fix: &mut self.fix, float: &mut self.float };
            if self.pin.on_strip_clicked(&mut c) {
                self.services.events.emit(RibbonEvent::FloatHidden(HideReason::StripClick));
                self.sync_float_surface();
                return EventResult::Consumed;
            }
            return EventResult::Ignored;
        }

        if self.fix.hit_test(pos) {
            return self.on_fix_panel_click(pos);
        }
        EventResult::Ignored
    }

    fn on_fix_panel_click(&mut self, pos: Point) -> EventResult {
        let pin_size = self.services.config.layout.pin_button_size;
        if self.fix.pin_button(pin_size).is_some_and(|b| b.contains(pos)) {
            self.toggle_pin();
            return EventResult::Consumed;
        }
        let (Some(area), Some(page_id)) = (self.fix.rect(), self.pages.occupant(Container::Fix)) else {
            return EventResult::Ignored;
        };
        self.click_page_button(page_id, area, pos)
    }

    /// Click on the floating panel, screen coordinates.
    pub fn on_float_click(&mut self, screen_pos: Point, now: Instant) -> EventResult {
        if !self.float.hit_test(screen_pos) {
            return EventResult::Ignored;
        }
        self.float.on_event(&FloatEvent::Click { pos: screen_pos }, now);

        let pin_size = self.services.config.layout.pin_button_size;
        if self.float.pin_button(pin_size).is_some_and(|b| b.contains(screen_pos)) {
            self.toggle_pin();
            return EventResult::Consumed;
        }
        let Some(page_id) = self.pages.occupant(Container::Float) else {
            return EventResult::Consumed;
        };
        self.click_page_button(page_id, self.float.screen_rect(), screen_pos);
        EventResult::Consumed
    }

    fn click_page_button(&mut self, page_id: PageId, area: Rect, pos: Point) -> EventResult {
        let hit = self.pages.get(page_id).and_then(|page| {
            page.hit_button(area, pos, self.services.measure.as_ref(), &self.services.config.panel)
        });
        match hit {
            Some(id) => {
                self.services.events.emit(RibbonEvent::ButtonClicked { page: page_id, id });
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    /// Enter / leave / activation / focus notifications for the floating surface.
    pub fn on_float_event(&mut self, event: &FloatEvent, now: Instant) {
        self.float.on_event(event, now);
    }

    /// Cooperative scheduler tick: retries a deferred layout and runs the
    /// floating panel's auto-hide check.
    pub fn tick(&mut self, now: Instant, global_mouse: Point) {
        if self.retry_layout {
            log::debug!("retrying deferred layout");
            self.relayout();
        }
        let bar = self.bar_screen_rect();
        if self.float.poll(now, global_mouse, bar) == AutoHideCheck::Hide {
            log::debug!("floating panel auto-hidden, mouse at {:?}", global_mouse);
            self.dismiss_float(HideReason::AutoHide);
        }
    }

    /// Empty strip area that may act as a window caption.
    pub fn is_caption(&self, pos: Point) -> bool {
        if !self.strip_rect().contains(pos) {
            return false;
        }
        let l = &self.layout;
        let interactive = [l.home, l.overflow_button, l.function, l.profile, l.system_buttons];
        !interactive.iter().flatten().any(|r| r.contains(pos)) && self.tabs.hit_test_index(pos).is_none()
    }

    // ── painting ──────────────────────────────────────────────────────────

    /// Paints the strip, the docked page and any open menu.
    pub fn paint(&self, draw_list: &mut DrawList) {
        let theme = &self.services.theme;
        let mut painter = Painter::new(draw_list, theme, self.services.measure.as_ref());
        let l = &self.layout;

        painter.fill_rect(self.strip_rect(), theme.bar_background);

        if let Some(r) = l.home {
            self.home.paint(&mut painter, r);
        }
        let state = self.pin.state();
        for (i, r) in self.tabs.tab_rects() {
            if self.tabs.active_indicator_for(i, state) {
                painter.fill_rect(r, theme.tab_active_background);
                painter.fill_rect(Rect::new(r.x, r.bottom() - 2, r.w, 2), theme.tab_active_indicator);
            }
            if let Some(label) = self.tabs.label(i) {
                painter.text_centered(label, self.tabs.font(), r, theme.tab_text);
            }
        }
        if let Some(r) = l.overflow_button {
            self.overflow.paint(&mut painter, r);
        }
        if let Some(r) = l.left_spacer {
            self.left_spacer.paint(&mut painter, r);
        }
        if let Some(r) = l.function {
            self.function.paint(&mut painter, r);
        }
        if let Some(r) = l.right_spacer {
            self.right_spacer.paint(&mut painter, r);
        }
        if let Some(r) = l.profile {
            self.profile.paint(&mut painter, r);
        }
        if let Some(r) = l.system_buttons {
            self.system_buttons.paint(&mut painter, r);
        }

        if let (Some(area), Some(page)) = (
            self.fix.rect().filter(|_| self.fix.is_shown()),
            self.pages.occupant(Container::Fix).and_then(|id| self.pages.get(id)),
        ) {
            page.paint(&mut painter, area, &self.services.config.panel);
            if let Some(b) = self.fix.pin_button(self.services.config.layout.pin_button_size) {
                painter.stroke_rect(b, theme.separator);
                painter.text_centered("^", FontSpec::default(), b, theme.button_text);
            }
        }

        self.home_menu.paint(&mut painter);
        self.overflow.paint_menu(&mut painter, &self.tabs);
    }

    /// Paints the floating surface in its own local coordinates.
    pub fn paint_float(&self, draw_list: &mut DrawList) {
        if !self.float.is_shown() {
            return;
        }
        let theme = &self.services.theme;
        let mut painter = Painter::new(draw_list, theme, self.services.measure.as_ref());
        let local = Rect::from_size(self.float.screen_rect().size());

        if let Some(page) = self.pages.occupant(Container::Float).and_then(|id| self.pages.get(id)) {
            page.paint(&mut painter, local, &self.services.config.panel);
        }
        painter.stroke_rect(local, theme.float_border);
        let pin = crate::fix_panel::corner_button(local, self.services.config.layout.pin_button_size);
        painter.stroke_rect(pin, theme.separator);
        painter.text_centered("v", FontSpec::default(), pin, theme.button_text);
    }
}

impl<S: ControlSurface> Resizable for RibbonBar<S> {
    fn resize(&mut self, size: Size) {
        self.client = Size::new(size.w, size.h);
        log::debug!("ribbon resized to {}x{}", self.client.w, self.client.h);
        self.relayout();
    }
}
