//! End-to-end scenarios driving `RibbonBar` through a `RecordingSurface`.
//!
//! Geometry: padding 0, element spacing 5, home slot 30 px, three 32 px system
//! buttons (96 px), five tabs of exactly 70 px with 10 px between them.

use std::time::{Duration, Instant};

use flatbar_ui::prelude::*;
use flatbar_ui::page::Placed;

const CONFIG: &str = r#"
[layout]
padding = 0
element_spacing = 5
bar_strip_height = 30
tab_padding = 5
tab_spacing = 10
overflow_button_width = 12
overflow_item_height = 20
fix_panel_min_height = 60
start_pinned = true

[float]
auto_hide_interval_ms = 400
hide_margin = 8
"#;

fn ribbon(pinned: bool, width: i32) -> RibbonBar {
    let mut config = RibbonConfig::from_toml_str(CONFIG).expect("test config parses");
    config.layout.start_pinned = pinned;
    let services = Services::new(config, Box::new(MonoMeasure::new(10, 16))).expect("services");
    let mut bar = RibbonBar::new(services, RecordingSurface::new());
    bar.set_home(FixedWidthSlot::new(SlotKind::Home, 30).with_label("F"));
    bar.set_system_buttons(SystemButtons::new(32));
    bar.resize(Size::new(width, 200));
    for name in ["Home  ", "Insert", "Design", "Layout", "Review"] {
        bar.add_page(Page::new(name).with_panel(
            Panel::new("Tools", Axis::Horizontal)
                .button_bar(ButtonBar::new().button("run", "Run").button("stop", "Stop")),
        ));
    }
    bar.drain_events();
    bar
}

fn center(r: Rect) -> Point {
    Point::new(r.x + r.w / 2, r.y + r.h / 2)
}

fn click_tab(bar: &mut RibbonBar, index: usize, now: Instant) -> EventResult {
    let r = bar.tabs().tab_rect(index).expect("tab is visible");
    bar.on_event(&UiEvent::Click { pos: center(r) }, now)
}

// ── Scenario A: everything fits ────────────────────────────────────────────

#[test]
fn wide_bar_shows_all_tabs() {
    let bar = ribbon(true, 800);
    let layout = bar.layout();
    assert_eq!(layout.home, Some(Rect::new(0, 0, 30, 30)));
    assert_eq!(layout.tab_area, Some(Rect::new(35, 0, 390, 30)));
    assert_eq!(layout.tab_area.unwrap().right(), 425);
    assert_eq!(layout.system_buttons, Some(Rect::new(704, 0, 96, 30)));
    assert!(layout.hidden_tabs.is_empty());
    assert!(!bar.surface().is_shown(ControlId::TabOverflow));
    assert_eq!(bar.tabs().visible_count(), 5);
}

// ── Scenario B: truncation and the overflow dropdown ───────────────────────

#[test]
fn narrow_bar_hides_trailing_tabs() {
    let mut bar = ribbon(true, 300);
    let layout = bar.layout().clone();
    assert_eq!(layout.visible_tabs, 2);
    assert_eq!(layout.hidden_tabs, vec![2, 3, 4]);
    let button = layout.overflow_button.expect("overflow button placed");
    assert!(bar.surface().is_shown(ControlId::TabOverflow));

    // hidden tabs are not hit-testable on the strip
    assert_eq!(bar.tabs().tab_rect(2), None);

    bar.on_event(&UiEvent::Click { pos: center(button) }, Instant::now());
    assert!(bar.overflow().is_open());
    assert_eq!(bar.overflow().entries(), &[2, 3, 4]);

    // third entry → tab 4, exactly like a tab click
    let menu = bar.overflow().menu_rect().unwrap();
    let pos = Point::new(menu.x + 2, menu.y + 2 * 20 + 5);
    bar.on_event(&UiEvent::Click { pos }, Instant::now());
    assert!(!bar.overflow().is_open());
    assert_eq!(bar.pin_state().active_page, Some(4));
    assert_eq!(bar.pages().occupant(Container::Fix), Some(PageId(4)));
    assert_eq!(bar.drain_events(), vec![RibbonEvent::PageActivated(PageId(4))]);
}

#[test]
fn overflow_selection_while_unpinned_floats_page() {
    let mut bar = ribbon(false, 300);
    let button = bar.layout().overflow_button.unwrap();
    let now = Instant::now();
    bar.on_click(center(button), now);
    let menu = bar.overflow().menu_rect().unwrap();
    bar.on_click(Point::new(menu.x + 2, menu.y + 5), now);

    assert!(bar.float_panel().is_shown());
    assert_eq!(bar.pin_state().active_floating_page, Some(2));
    assert_eq!(bar.pin_state().active_page, Some(2));
    assert_eq!(bar.pages().occupant(Container::Float), Some(PageId(2)));
}

#[test]
fn widening_again_restores_all_tabs() {
    let mut bar = ribbon(true, 300);
    bar.resize(Size::new(800, 200));
    assert!(bar.layout().hidden_tabs.is_empty());
    assert!(!bar.surface().is_shown(ControlId::TabOverflow));
    assert_eq!(bar.overflow().entries(), &[] as &[usize]);
}

// ── Scenario C: floating preview swaps content ─────────────────────────────

#[test]
fn unpinned_clicks_swap_floating_content() {
    let mut bar = ribbon(false, 800);
    let now = Instant::now();

    click_tab(&mut bar, 2, now);
    assert_eq!(bar.pin_state().active_floating_page, Some(2));
    assert!(bar.float_panel().is_shown());
    assert_eq!(bar.pages().occupant(Container::Float), Some(PageId(2)));
    let rect_before = bar.surface().rect(ControlId::FloatPanel);

    click_tab(&mut bar, 4, now);
    assert!(bar.float_panel().is_shown());
    assert!(bar.surface().is_shown(ControlId::FloatPanel));
    assert_eq!(bar.surface().rect(ControlId::FloatPanel), rect_before);
    assert_eq!(bar.pages().occupant(Container::Float), Some(PageId(4)));
    assert_eq!(bar.pin_state().active_floating_page, Some(4));
    assert_eq!(bar.pin_state().active_page, Some(4));
    assert!(bar.tabs().active_indicator_for(4, bar.pin_state()));
    assert!(!bar.tabs().active_indicator_for(2, bar.pin_state()));

    assert_eq!(
        bar.drain_events(),
        vec![RibbonEvent::FloatShown(PageId(2)), RibbonEvent::PageActivated(PageId(4))]
    );
}

// ── Scenario D: pinning captures the floating page ─────────────────────────

#[test]
fn pinning_docks_floating_page() {
    let mut bar = ribbon(false, 800);
    click_tab(&mut bar, 2, Instant::now());
    bar.drain_events();

    bar.toggle_pin();
    assert!(bar.is_pinned());
    assert_eq!(bar.pin_state().active_page, Some(2));
    assert_eq!(bar.pages().occupant(Container::Fix), Some(PageId(2)));
    assert_eq!(bar.pages().occupant(Container::Float), None);
    assert!(!bar.float_panel().is_shown());
    assert!(!bar.surface().is_shown(ControlId::FloatPanel));
    assert!(bar.surface().is_shown(ControlId::FixPanel));
    assert_eq!(
        bar.drain_events(),
        vec![
            RibbonEvent::FloatHidden(HideReason::Pinned),
            RibbonEvent::PinChanged { pinned: true },
            RibbonEvent::PageActivated(PageId(2)),
        ]
    );
}

#[test]
fn float_pin_button_pins() {
    let mut bar = ribbon(false, 800);
    let now = Instant::now();
    click_tab(&mut bar, 3, now);
    let pin = bar.float_panel().pin_button(14).unwrap();
    assert_eq!(bar.on_float_click(center(pin), now), EventResult::Consumed);
    assert!(bar.is_pinned());
    assert_eq!(bar.pages().occupant(Container::Fix), Some(PageId(3)));
}

#[test]
fn unpinning_shows_nothing_until_next_click() {
    let mut bar = ribbon(true, 800);
    bar.toggle_pin();
    assert!(!bar.is_pinned());
    assert!(!bar.float_panel().is_shown());
    assert!(!bar.surface().is_shown(ControlId::FixPanel));
    assert_eq!(bar.preferred_height(), 30);
}

// ── Scenario E: deferred dock ──────────────────────────────────────────────

#[test]
fn short_window_defers_dock_until_taller() {
    let mut bar = ribbon(true, 800);
    let placed = bar.surface().rect(ControlId::FixPanel);
    bar.drain_events();

    bar.resize(Size::new(800, 70));
    assert!(bar.fix_panel().is_deferred());
    assert_eq!(bar.surface().rect(ControlId::FixPanel), placed);
    assert_ne!(bar.fix_panel().rect().map(|r| r.h), Some(40));
    assert_eq!(bar.drain_events(), vec![RibbonEvent::LayoutDeferred { height: 40 }]);

    // retry on tick: still too short, no duplicate event
    bar.tick(Instant::now(), Point::new(0, 0));
    assert!(bar.fix_panel().is_deferred());
    assert!(bar.drain_events().is_empty());

    bar.resize(Size::new(800, 160));
    assert!(!bar.fix_panel().is_deferred());
    assert_eq!(bar.fix_panel().rect(), Some(Rect::new(0, 30, 800, 130)));
    assert_eq!(bar.surface().rect(ControlId::FixPanel), Some(Rect::new(0, 30, 800, 130)));
}

// ── auto-hide ──────────────────────────────────────────────────────────────

#[test]
fn float_auto_hides_when_mouse_leaves() {
    let mut bar = ribbon(false, 800);
    bar.set_screen_origin(Point::new(100, 100));
    let t0 = Instant::now();
    click_tab(&mut bar, 1, t0);
    bar.drain_events();
    let far = Point::new(5000, 5000);

    bar.tick(t0 + Duration::from_millis(100), far);
    assert!(bar.float_panel().is_shown());

    bar.tick(t0 + Duration::from_millis(450), far);
    assert!(!bar.float_panel().is_shown());
    assert_eq!(bar.pages().occupant(Container::Float), None);
    assert!(!bar.surface().is_shown(ControlId::FloatPanel));
    assert_eq!(bar.drain_events(), vec![RibbonEvent::FloatHidden(HideReason::AutoHide)]);
}

#[test]
fn float_stays_while_mouse_over_bar_or_held() {
    let mut bar = ribbon(false, 800);
    bar.set_screen_origin(Point::new(100, 100));
    let t0 = Instant::now();
    click_tab(&mut bar, 1, t0);

    bar.tick(t0 + Duration::from_millis(450), Point::new(150, 110));
    assert!(bar.float_panel().is_shown());

    bar.on_float_event(&FloatEvent::MouseEnter, t0 + Duration::from_millis(500));
    bar.tick(t0 + Duration::from_secs(5), Point::new(5000, 5000));
    assert!(bar.float_panel().is_shown());

    bar.on_float_event(&FloatEvent::MouseLeave, t0 + Duration::from_secs(5));
    bar.tick(t0 + Duration::from_millis(5450), Point::new(5000, 5000));
    assert!(!bar.float_panel().is_shown());
}

// ── home menu, system buttons, page buttons ────────────────────────────────

#[test]
fn home_menu_command_round_trip() {
    let mut bar = ribbon(true, 800);
    bar.set_home_menu(HomeMenu::new(120, 20).item("open", "Open").item("exit", "Exit"));
    let now = Instant::now();

    bar.on_click(Point::new(10, 10), now);
    assert!(bar.home_menu().is_open());
    let menu = bar.home_menu().menu_rect().unwrap();
    bar.on_click(Point::new(menu.x + 3, menu.y + 25), now);
    assert!(!bar.home_menu().is_open());
    assert_eq!(
        bar.drain_events(),
        vec![
            RibbonEvent::HomeMenuToggled { open: true },
            RibbonEvent::HomeMenuToggled { open: false },
            RibbonEvent::HomeMenuCommand("exit".into()),
        ]
    );
}

#[test]
fn system_button_click_emits_command() {
    let mut bar = ribbon(true, 800);
    bar.on_click(Point::new(799, 10), Instant::now());
    assert_eq!(bar.drain_events(), vec![RibbonEvent::SystemCommand(SystemCommand::Close)]);
}

#[test]
fn floating_page_button_click() {
    let mut bar = ribbon(false, 800);
    let now = Instant::now();
    click_tab(&mut bar, 0, now);
    bar.drain_events();

    let area = bar.float_panel().screen_rect();
    let page = bar.pages().get(PageId(0)).unwrap();
    let cfg = bar.services().config.panel.clone();
    let stop = page
        .place(area, bar.services().measure.as_ref(), &cfg)
        .into_iter()
        .find_map(|p| match p {
            Placed::Button { id: "stop", rect, .. } => Some(rect),
            _ => None,
        })
        .unwrap();
    bar.on_float_click(center(stop), now);
    assert_eq!(
        bar.drain_events(),
        vec![RibbonEvent::ButtonClicked { page: PageId(0), id: "stop".into() }]
    );
}

#[test]
fn out_of_range_activation_is_ignored() {
    let mut bar = ribbon(true, 800);
    assert_eq!(bar.activate_tab(17, Instant::now()), TabClickOutcome::Ignored);
    assert_eq!(bar.pin_state().active_page, Some(0));
    assert!(bar.drain_events().is_empty());
}

#[test]
fn language_table_translates_tab_labels() {
    let mut config = RibbonConfig::from_toml_str(CONFIG).unwrap();
    config.language.insert("home".into(), "Start".into());
    let services = Services::new(config, Box::new(MonoMeasure::default())).unwrap();
    let mut bar = RibbonBar::new(services, RecordingSurface::new());
    bar.resize(Size::new(400, 150));
    bar.add_page(Page::new("home"));
    bar.add_page(Page::new("view"));
    assert_eq!(bar.tabs().label(0), Some("Start"));
    assert_eq!(bar.tabs().label(1), Some("view"));
}
