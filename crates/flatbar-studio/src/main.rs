//! `flatbar-studio [config.toml]`
//!
//! Builds a ribbon with five sample pages and replays a scripted session
//! against it, printing the layout after each step and every event the bar
//! queued.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use flatbar_engine::logging::{LoggingConfig, init_logging};
use flatbar_engine::time::FrameClock;
use flatbar_ui::prelude::*;

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

/// Where the bar's client area sits on the simulated screen.
const WINDOW: Rect = Rect::new(100, 80, 800, 130);

fn main() -> Result<()> {
    let _logging = init_logging(LoggingConfig::default());

    let config = load_config(std::env::args_os().nth(1).map(PathBuf::from))?;
    let services = Services::new(config, Box::new(MonoMeasure::default()))
        .context("building ribbon services")?;

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          FLATBAR STUDIO v0.1           ║");
    println!("  ║   ribbon layout  ·  scripted session   ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let mut bar = build_ribbon(services);
    match system_font() {
        Some(fonts) => bar.set_text_measure(Box::new(fonts)),
        None => log::warn!("measuring text with a monospace stand-in"),
    }
    run_session(&mut bar);
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<RibbonConfig> {
    match path {
        Some(path) => RibbonConfig::from_toml_file(&path)
            .with_context(|| format!("loading ribbon config from {}", path.display())),
        None => {
            log::info!("no config path given, using the built-in ribbon config");
            RibbonConfig::from_toml_str(DEFAULT_CONFIG).context("parsing built-in ribbon config")
        }
    }
}

fn system_font() -> Option<FontSystem> {
    let Some(bytes) = FONT_CANDIDATES.iter().find_map(|p| std::fs::read(p).ok()) else {
        log::warn!("no system font found");
        return None;
    };
    let mut fonts = FontSystem::new();
    match fonts.load_font(&bytes) {
        Ok(_) => Some(fonts),
        Err(e) => {
            log::warn!("system font rejected: {e}");
            None
        }
    }
}

fn build_ribbon(services: Services) -> RibbonBar {
    let item_h = services.config.layout.overflow_item_height;
    let mut bar = RibbonBar::new(services, RecordingSurface::new());

    bar.set_screen_origin(WINDOW.origin());
    bar.resize(WINDOW.size());

    bar.set_home(FixedWidthSlot::new(SlotKind::Home, 48).with_label("File"));
    bar.set_function(FixedWidthSlot::new(SlotKind::Function, 160).with_label("Search"));
    bar.set_profile(FixedWidthSlot::new(SlotKind::Profile, 64).with_label("Guest"));
    bar.set_spacers(SpacerElement::new(8).auto_expand(true), SpacerElement::new(8).draw_separator(true));
    bar.set_system_buttons(SystemButtons::new(32));
    bar.set_home_menu(
        HomeMenu::new(160, item_h)
            .item("new", "New")
            .item("open", "Open...")
            .item("save", "Save")
            .item("quit", "Quit"),
    );

    for page in sample_pages() {
        bar.add_page(page);
    }
    bar
}

fn sample_pages() -> Vec<Page> {
    let clipboard = |label: &str| {
        Panel::new(label, Axis::Horizontal)
            .button_bar(ButtonBar::new().button("cut", "Cut").button("copy", "Copy").button("paste", "Paste"))
    };
    vec![
        Page::new("home").with_panel(clipboard("Clipboard")).with_panel(
            Panel::new("Font", Axis::Horizontal)
                .button_bar(ButtonBar::new().button("bold", "B").button("italic", "I")),
        ),
        Page::new("insert").with_panel(
            Panel::new("Shapes", Axis::Horizontal)
                .gallery(Gallery::new().item("rect").item("ellipse").item("arrow")),
        ),
        Page::new("design").with_panel(
            Panel::new("Themes", Axis::Vertical).button_bar(ButtonBar::new().button("light", "Light").button("dark", "Dark")),
        ),
        Page::new("review").with_panel(
            Panel::new("Proofing", Axis::Horizontal).button_bar(ButtonBar::new().button("spell", "Spelling")),
        ),
        Page::new("view").with_panel(clipboard("Windows")),
    ]
}

// ── scripted session ──────────────────────────────────────────────────────

fn run_session(bar: &mut RibbonBar) {
    let start = Instant::now();
    let mut clock = FrameClock::starting_at(start);
    let at = |ms: u64| start + Duration::from_millis(ms);

    step(bar, "initial layout (pinned, wide)");

    click_tab(bar, 2, at(100));
    clock.tick_at(at(100));
    step(bar, "clicked the third tab");

    bar.resize(Size::new(420, WINDOW.h));
    step(bar, "narrowed to 420px");

    if let Some(button) = bar.layout().overflow_button {
        bar.on_click(center(button), at(200));
        if let Some(menu) = bar.overflow().menu_rect() {
            let last = Point::new(menu.x + menu.w / 2, menu.y + menu.h - 1);
            bar.on_click(last, at(250));
        }
        step(bar, "picked the last entry of the overflow menu");
    }

    bar.resize(WINDOW.size());
    bar.toggle_pin();
    step(bar, "unpinned");

    click_tab(bar, 1, at(400));
    step(bar, "clicked the second tab while unpinned");

    let far_away = Point::new(WINDOW.x + 2000, WINDOW.y + 2000);
    let interval = bar.services().config.float.auto_hide_interval_ms;
    for n in 1..=3 {
        let now = at(400 + n * interval);
        clock.tick_at(now);
        bar.tick(now, far_away);
    }
    step(bar, "mouse left the floating page");

    bar.toggle_pin();
    step(bar, "pinned again");

    if let Some(home) = bar.layout().home {
        bar.on_click(center(home), at(900));
        if let Some(menu) = bar.home_menu().menu_rect() {
            bar.on_click(Point::new(menu.x + 4, menu.y + 2), at(950));
        }
        step(bar, "picked the first home menu entry");
    }

    drag_window(bar);

    let frame = clock.tick_at(at(1000));
    let mut draw_list = DrawList::new();
    bar.paint(&mut draw_list);
    println!("  painted {} draw commands on frame {}", draw_list.len(), frame.frame_index);
    println!();
}

fn click_tab(bar: &mut RibbonBar, index: usize, now: Instant) {
    match bar.tabs().tab_rect(index) {
        Some(rect) => {
            bar.on_event(&UiEvent::Click { pos: center(rect) }, now);
        }
        None => {
            log::warn!("tab {index} is not visible, activating it directly");
            bar.activate_tab(index, now);
        }
    }
}

fn drag_window(bar: &mut RibbonBar) {
    let strip_h = bar.services().config.layout.bar_strip_height;
    let size = bar.client_size();
    let Some(grab) = (0..size.w).rev().map(|x| Point::new(x, strip_h / 2)).find(|p| bar.is_caption(*p))
    else {
        println!("  no empty strip area to drag the window by");
        return;
    };

    let mut drag = WindowDragController::new(4, Size::new(320, strip_h));
    let zone = drag.classify(size, grab, bar.is_caption(grab));
    let window = Rect::from_origin_size(WINDOW.origin(), size);
    let screen = Point::new(WINDOW.x + grab.x, WINDOW.y + grab.y);
    if drag.begin(zone, screen, window) {
        drag.update(Point::new(screen.x + 40, screen.y + 25));
        if let Some(moved) = drag.end() {
            println!("  dragged the window by its caption {:?} -> {:?}", window, moved);
            bar.set_screen_origin(moved.origin());
        }
    }
    println!();
}

fn center(r: Rect) -> Point {
    Point::new(r.x + r.w / 2, r.y + r.h / 2)
}

// ── output ────────────────────────────────────────────────────────────────

fn step(bar: &mut RibbonBar, title: &str) {
    let l = bar.layout();
    println!("  ── {title} ──");
    println!("    mode       {}", if bar.is_pinned() { "pinned" } else { "unpinned" });
    print_rect("home", l.home);
    print_rect("tabs", l.tab_area);
    print_rect("overflow", l.overflow_button);
    print_rect("spacer L", l.left_spacer);
    print_rect("function", l.function);
    print_rect("spacer R", l.right_spacer);
    print_rect("profile", l.profile);
    print_rect("system", l.system_buttons);
    println!("    visible    {} tab(s), hidden {:?}", l.visible_tabs, l.hidden_tabs);
    println!("    dock       {:?}", l.fix_panel);
    if bar.float_panel().is_shown() {
        println!("    float      {:?}", bar.float_panel().screen_rect());
    }
    for event in bar.drain_events() {
        println!("    event      {event:?}");
    }
    println!();
}

fn print_rect(name: &str, rect: Option<Rect>) {
    match rect {
        Some(r) => println!("    {name:<10} x={:<4} y={:<3} w={:<4} h={}", r.x, r.y, r.w, r.h),
        None => println!("    {name:<10} -"),
    }
}
