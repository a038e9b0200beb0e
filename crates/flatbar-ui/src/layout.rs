//! Single-pass strip layout.
//!
//! [`LayoutEngine::compute`] is a pure function of its input: it places every
//! strip element left to right, decides tab truncation, and computes the
//! docked panel rectangle. [`LayoutEngine::apply`] pushes the result to a
//! [`ControlSurface`]. No geometry math happens on the surface side.
//!
//! Order of placement:
//!
//! 1. home slot at `padding`
//! 2. system buttons, right-anchored, never left of the home slot
//! 3. right boundary = system buttons' left edge minus spacing
//! 4. tabs, truncated to what remains after reserving function, profile and
//!    spacer widths; the overflow button takes the right end of the tab area
//!    and keeps its width even when that squeezes the band
//! 5. the band between tabs and profile: centred or sequential, every
//!    element cut at the band's right end so nothing overlaps
//! 6. docked panel below the strip, deferred when too short

use flatbar_engine::coords::{Rect, Size};

use crate::config::LayoutConfig;
use crate::control::{ControlId, ControlSurface};
use crate::slot::LayoutSlot;
use crate::spacer::SpacerElement;
use crate::tab_strip::TabStrip;

// ── input / output ────────────────────────────────────────────────────────

/// Everything one layout pass reads. Absent collaborators are `None`.
#[derive(Clone, Copy)]
pub struct LayoutInput<'a> {
    pub client: Size,
    pub home: Option<&'a dyn LayoutSlot>,
    pub function: Option<&'a dyn LayoutSlot>,
    pub profile: Option<&'a dyn LayoutSlot>,
    pub system_buttons: Option<&'a dyn LayoutSlot>,
    pub left_spacer: Option<&'a SpacerElement>,
    pub right_spacer: Option<&'a SpacerElement>,
    pub tabs: &'a TabStrip,
    pub pinned: bool,
}

impl<'a> LayoutInput<'a> {
    /// Input with only tabs; slots can be filled in with struct update syntax.
    pub fn new(client: Size, tabs: &'a TabStrip, pinned: bool) -> Self {
        Self {
            client,
            home: None,
            function: None,
            profile: None,
            system_buttons: None,
            left_spacer: None,
            right_spacer: None,
            tabs,
            pinned,
        }
    }
}

/// Where the docked panel goes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum FixPanelPlacement {
    #[default]
    Unpinned,
    Placed(Rect),
    /// Computed height was below the usable minimum; retry later.
    Deferred { height: i32 },
}

/// Output of one pass. `None` means "hide this control".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RibbonLayout {
    pub bounds: Rect,
    pub home: Option<Rect>,
    pub tab_area: Option<Rect>,
    pub overflow_button: Option<Rect>,
    pub left_spacer: Option<Rect>,
    pub function: Option<Rect>,
    pub right_spacer: Option<Rect>,
    pub profile: Option<Rect>,
    pub system_buttons: Option<Rect>,
    pub visible_tabs: usize,
    pub hidden_tabs: Vec<usize>,
    pub fix_panel: FixPanelPlacement,
}

impl RibbonLayout {
    pub fn rect_of(&self, id: ControlId) -> Option<Rect> {
        match id {
            ControlId::HomeSpace => self.home,
            ControlId::TabStrip => self.tab_area,
            ControlId::TabOverflow => self.overflow_button,
            ControlId::LeftSpacer => self.left_spacer,
            ControlId::FunctionSpace => self.function,
            ControlId::RightSpacer => self.right_spacer,
            ControlId::ProfileSpace => self.profile,
            ControlId::SystemButtons => self.system_buttons,
            ControlId::FixPanel => match self.fix_panel {
                FixPanelPlacement::Placed(r) => Some(r),
                _ => None,
            },
            ControlId::FloatPanel => None,
        }
    }

    /// Every positioned rectangle, strip first, then the dock.
    pub fn placed(&self) -> impl Iterator<Item = (ControlId, Rect)> + '_ {
        ControlId::STRIP
            .iter()
            .chain(std::iter::once(&ControlId::FixPanel))
            .filter_map(|id| self.rect_of(*id).map(|r| (*id, r)))
    }

    #[inline]
    pub fn is_deferred(&self) -> bool {
        matches!(self.fix_panel, FixPanelPlacement::Deferred { .. })
    }
}

// ── engine ────────────────────────────────────────────────────────────────

/// Numeric inputs of the pass, taken from [`LayoutConfig`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LayoutParams {
    pub padding: i32,
    pub spacing: i32,
    pub bar_strip_height: i32,
    pub top_margin: i32,
    pub bottom_margin: i32,
    pub overflow_button_width: i32,
    pub center_function: bool,
    pub fix_panel_min_height: i32,
}

impl From<&LayoutConfig> for LayoutParams {
    fn from(c: &LayoutConfig) -> Self {
        Self {
            padding: c.padding.max(0),
            spacing: c.element_spacing.max(0),
            bar_strip_height: c.bar_strip_height.max(0),
            top_margin: c.top_margin.clamp(0, c.bar_strip_height.max(0)),
            bottom_margin: c.bottom_margin.max(0),
            overflow_button_width: c.overflow_button_width.max(0),
            center_function: c.function_space_center_align,
            fix_panel_min_height: c.fix_panel_min_height.max(0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayoutEngine {
    params: LayoutParams,
}

fn effective<'a>(slot: Option<&'a dyn LayoutSlot>) -> Option<&'a dyn LayoutSlot> {
    slot.filter(|s| s.effectively_visible() && s.required_width() > 0)
}

fn shown(spacer: Option<&SpacerElement>) -> Option<&SpacerElement> {
    spacer.filter(|s| s.is_visible())
}

/// Width of an element starting at `x` that must end by `limit`. `None` when
/// a non-empty element has no room left at all.
fn clip_to(x: i32, wanted: i32, limit: i32) -> Option<i32> {
    let wanted = wanted.max(0);
    let room = limit - x;
    if wanted > 0 && room <= 0 {
        return None;
    }
    Some(wanted.min(room.max(0)))
}

impl LayoutEngine {
    pub fn new(config: &LayoutConfig) -> Self {
        Self { params: LayoutParams::from(config) }
    }

    pub fn with_params(params: LayoutParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Rectangle in the strip band, vertically centred when `slot_h` is
    /// smaller than the band.
    fn band_rect(&self, bounds: Rect, x: i32, w: i32, slot_h: i32) -> Rect {
        let p = &self.params;
        let band_h = p.bar_strip_height - p.top_margin;
        let h = if slot_h > 0 { slot_h.min(band_h) } else { band_h };
        let y = p.top_margin + (band_h - h) / 2;
        Rect::new(x, y, w.max(0), h).clamp_within(bounds)
    }

    pub fn compute(&self, input: &LayoutInput<'_>) -> RibbonLayout {
        let p = self.params;
        let sp = p.spacing;
        let client_w = input.client.w.max(0);
        let client_h = input.client.h.max(0);
        let bounds = Rect::new(0, 0, client_w, client_h);
        let mut out = RibbonLayout { bounds, ..RibbonLayout::default() };

        let home = effective(input.home);
        let function = effective(input.function);
        let profile = effective(input.profile);
        let system = effective(input.system_buttons);
        let left_spacer = shown(input.left_spacer);
        let right_spacer = shown(input.right_spacer);

        // 1. home
        let mut x = p.padding;
        let mut home_end = x;
        if let Some(h) = home {
            out.home = Some(self.band_rect(bounds, x, h.required_width(), h.slot_height()));
            home_end = x + h.required_width();
            x = home_end + sp;
        }

        // 2./3. system buttons and right boundary
        let right_boundary = match system {
            Some(s) => {
                let sw = s.required_width();
                let sys_x = (client_w - p.padding - sw).max(home_end);
                out.system_buttons = Some(self.band_rect(bounds, sys_x, sw, s.slot_height()));
                sys_x - sp
            }
            None => client_w - p.padding,
        };

        // 4. tabs
        let reserved = function.map_or(0, |f| f.required_width() + sp)
            + profile.map_or(0, |pr| pr.required_width() + sp)
            + left_spacer.map_or(0, |s| s.width() + sp)
            + right_spacer.map_or(0, |s| s.width() + sp);
        let space = (right_boundary - x).max(0);
        let available = (space - reserved).max(0);
        let total = input.tabs.total_width();
        let tabs_used = if total <= available {
            out.visible_tabs = input.tabs.len();
            out.tab_area = Some(self.band_rect(bounds, x, total, 0));
            total
        } else {
            // hidden tabs need the dropdown: its button outranks the band elements
            let tab_w = available.max(p.overflow_button_width.min(space));
            let obw = p.overflow_button_width.min(tab_w);
            let fit = input.tabs.fit(tab_w - obw);
            out.visible_tabs = fit.visible;
            out.hidden_tabs = (fit.visible..input.tabs.len()).collect();
            out.tab_area = Some(self.band_rect(bounds, x, tab_w - obw, 0));
            if obw > 0 {
                out.overflow_button = Some(self.band_rect(bounds, x + tab_w - obw, obw, 0));
            }
            tab_w
        };
        if tabs_used > 0 {
            x += tabs_used + sp;
        }

        // 5. band between tabs and profile; nothing crosses `band_end`
        let band_start = x;
        let mut band_end = right_boundary;
        if let Some(pr) = profile {
            let pw = pr.required_width();
            let profile_x = (right_boundary - pw).max(band_start);
            if let Some(w) = clip_to(profile_x, pw, right_boundary) {
                out.profile = Some(self.band_rect(bounds, profile_x, w, pr.slot_height()));
                band_end = profile_x - sp;
            }
        }

        match function {
            Some(f) if p.center_function => {
                let fw = f.required_width();
                let free = (band_end - band_start - fw).max(0);
                let left_claim = left_spacer.map_or(0, |s| s.width() + sp);
                let right_claim = right_spacer.map_or(0, |s| s.width() + sp);
                let left_gap = (free / 2).min((free - right_claim).max(0)).max(left_claim);

                let mut fx = band_start + left_gap;
                if let Some(ls) = left_spacer {
                    let wanted = ls.resolved_width(left_gap - sp);
                    if let Some(w) = clip_to(band_start, wanted, band_end) {
                        out.left_spacer = Some(self.band_rect(bounds, band_start, w, 0));
                        fx = fx.max(band_start + w + sp);
                    }
                }
                let mut rx = fx;
                if let Some(w) = clip_to(fx, fw, band_end) {
                    out.function = Some(self.band_rect(bounds, fx, w, f.slot_height()));
                    rx = fx + w + sp;
                }
                if let Some(rs) = right_spacer {
                    if let Some(w) = clip_to(rx, rs.resolved_width(band_end - rx), band_end) {
                        out.right_spacer = Some(self.band_rect(bounds, rx, w, 0));
                    }
                }
            }
            _ => {
                let mut cursor = band_start;
                let claimed_after_left = function.map_or(0, |f| f.required_width() + sp)
                    + right_spacer.map_or(0, |s| s.width() + sp);
                if let Some(ls) = left_spacer {
                    let wanted = ls.resolved_width(band_end - cursor - claimed_after_left);
                    if let Some(w) = clip_to(cursor, wanted, band_end) {
                        out.left_spacer = Some(self.band_rect(bounds, cursor, w, 0));
                        cursor += w + sp;
                    }
                }
                if let Some(f) = function {
                    if let Some(w) = clip_to(cursor, f.required_width(), band_end) {
                        out.function = Some(self.band_rect(bounds, cursor, w, f.slot_height()));
                        cursor += w + sp;
                    }
                }
                if let Some(rs) = right_spacer {
                    if let Some(w) = clip_to(cursor, rs.resolved_width(band_end - cursor), band_end) {
                        out.right_spacer = Some(self.band_rect(bounds, cursor, w, 0));
                    }
                }
            }
        }

        // 6. docked panel
        if input.pinned {
            let y = p.bar_strip_height + p.bottom_margin;
            let height = client_h - y;
            out.fix_panel = if height < p.fix_panel_min_height {
                FixPanelPlacement::Deferred { height }
            } else {
                FixPanelPlacement::Placed(Rect::new(0, y, client_w, height).clamp_within(bounds))
            };
        }

        log::debug!(
            "layout {}x{}: tabs {}/{} visible, available {}, fix {:?}",
            client_w,
            client_h,
            out.visible_tabs,
            input.tabs.len(),
            available,
            out.fix_panel
        );
        out
    }

    /// Realises `layout` on `surface`. Absent elements are hidden explicitly;
    /// a deferred dock is left untouched.
    pub fn apply(&self, layout: &RibbonLayout, surface: &mut dyn ControlSurface) {
        for id in ControlId::STRIP {
            match layout.rect_of(id) {
                Some(rect) => {
                    surface.set_rect(id, rect);
                    surface.show(id, true);
                    surface.refresh(id);
                }
                None => surface.show(id, false),
            }
        }
        match layout.fix_panel {
            FixPanelPlacement::Placed(rect) => {
                surface.set_rect(ControlId::FixPanel, rect);
                surface.show(ControlId::FixPanel, true);
                surface.refresh(ControlId::FixPanel);
            }
            FixPanelPlacement::Unpinned => surface.show(ControlId::FixPanel, false),
            FixPanelPlacement::Deferred { height } => {
                log::warn!("dock height {height} below minimum, layout deferred");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::RecordingSurface;
    use crate::slot::{FixedWidthSlot, SlotKind};
    use crate::system_buttons::SystemButtons;
    use flatbar_engine::text::{FontSpec, MonoMeasure};

    fn params() -> LayoutParams {
        LayoutParams {
            padding: 0,
            spacing: 5,
            bar_strip_height: 30,
            top_margin: 0,
            bottom_margin: 0,
            overflow_button_width: 12,
            center_function: false,
            fix_panel_min_height: 60,
        }
    }

    /// `n` tabs of exactly 70 px, 10 px apart.
    fn tabs(n: usize) -> TabStrip {
        let m = MonoMeasure::new(10, 16);
        let mut t = TabStrip::new(FontSpec::default(), 5, 10);
        for i in 0..n {
            t.push(format!("page{i:02}"), &m);
        }
        t
    }

    fn slot(kind: SlotKind, w: i32) -> FixedWidthSlot {
        FixedWidthSlot::new(kind, w).with_label("x")
    }

    // ── strip ─────────────────────────────────────────────────────────────

    #[test]
    fn wide_bar_shows_every_tab() {
        let t = tabs(5);
        let home = slot(SlotKind::Home, 30);
        let sys = SystemButtons::new(32);
        let input = LayoutInput {
            home: Some(&home),
            system_buttons: Some(&sys),
            ..LayoutInput::new(Size::new(800, 200), &t, false)
        };
        let out = LayoutEngine::with_params(params()).compute(&input);
        assert_eq!(out.home, Some(Rect::new(0, 0, 30, 30)));
        assert_eq!(out.tab_area, Some(Rect::new(35, 0, 390, 30)));
        assert_eq!(out.system_buttons, Some(Rect::new(704, 0, 96, 30)));
        assert_eq!(out.visible_tabs, 5);
        assert!(out.hidden_tabs.is_empty());
        assert_eq!(out.overflow_button, None);
    }

    #[test]
    fn narrow_bar_truncates_tabs() {
        let t = tabs(5);
        let home = slot(SlotKind::Home, 30);
        let sys = SystemButtons::new(32);
        let input = LayoutInput {
            home: Some(&home),
            system_buttons: Some(&sys),
            ..LayoutInput::new(Size::new(300, 200), &t, false)
        };
        let out = LayoutEngine::with_params(params()).compute(&input);
        assert_eq!(out.visible_tabs, 2);
        assert_eq!(out.hidden_tabs, vec![2, 3, 4]);
        assert_eq!(out.tab_area, Some(Rect::new(35, 0, 152, 30)));
        assert_eq!(out.overflow_button, Some(Rect::new(187, 0, 12, 30)));
    }

    #[test]
    fn system_buttons_never_cross_home() {
        let t = tabs(1);
        let home = slot(SlotKind::Home, 50);
        let sys = SystemButtons::new(32);
        let input = LayoutInput {
            home: Some(&home),
            system_buttons: Some(&sys),
            ..LayoutInput::new(Size::new(100, 30), &t, false)
        };
        let out = LayoutEngine::with_params(params()).compute(&input);
        let s = out.system_buttons.unwrap();
        assert_eq!(s.x, 50);
        assert!(bounds_hold(&out));
    }

    #[test]
    fn invisible_slots_are_hidden_not_skipped() {
        let t = tabs(2);
        let mut home = slot(SlotKind::Home, 30);
        home.set_visible(false);
        let empty_function = FixedWidthSlot::new(SlotKind::Function, 80);
        let input = LayoutInput {
            home: Some(&home),
            function: Some(&empty_function),
            ..LayoutInput::new(Size::new(400, 100), &t, false)
        };
        let engine = LayoutEngine::with_params(params());
        let out = engine.compute(&input);
        assert_eq!(out.home, None);
        assert_eq!(out.function, None);
        assert_eq!(out.tab_area.unwrap().x, 0);

        let mut surface = RecordingSurface::new();
        engine.apply(&out, &mut surface);
        assert!(!surface.is_shown(ControlId::HomeSpace));
        assert!(!surface.is_shown(ControlId::FunctionSpace));
        assert!(surface.is_shown(ControlId::TabStrip));
    }

    #[test]
    fn sequential_mode_left_spacer_takes_slack() {
        let t = tabs(1);
        let function = slot(SlotKind::Function, 100);
        let profile = slot(SlotKind::Profile, 40);
        let ls = SpacerElement::new(10).auto_expand(true);
        let rs = SpacerElement::new(10).auto_expand(true);
        let input = LayoutInput {
            function: Some(&function),
            profile: Some(&profile),
            left_spacer: Some(&ls),
            right_spacer: Some(&rs),
            ..LayoutInput::new(Size::new(600, 100), &t, false)
        };
        let out = LayoutEngine::with_params(params()).compute(&input);
        // tabs 0..70, band 75..555 (profile at 560)
        assert_eq!(out.profile, Some(Rect::new(560, 0, 40, 30)));
        let left = out.left_spacer.unwrap();
        let func = out.function.unwrap();
        let right = out.right_spacer.unwrap();
        assert_eq!(left.x, 75);
        assert_eq!(left.w, 555 - 75 - (100 + 5) - (10 + 5));
        assert_eq!(func.x, left.right() + 5);
        assert_eq!(right.x, func.right() + 5);
        // right spacer keeps its configured width: the left one claimed the slack
        assert_eq!(right.w, 10);
        assert_eq!(right.right(), 555);
    }

    #[test]
    fn centered_mode_splits_free_space() {
        let t = tabs(1);
        let function = slot(SlotKind::Function, 100);
        let ls = SpacerElement::new(0).auto_expand(true);
        let rs = SpacerElement::new(0).auto_expand(true);
        let p = LayoutParams { center_function: true, ..params() };
        let input = LayoutInput {
            function: Some(&function),
            left_spacer: Some(&ls),
            right_spacer: Some(&rs),
            ..LayoutInput::new(Size::new(575, 100), &t, false)
        };
        let out = LayoutEngine::with_params(p).compute(&input);
        // band 75..575, free 400, half 200
        let func = out.function.unwrap();
        assert_eq!(func.x, 275);
        assert_eq!(out.left_spacer.unwrap().w, 195);
        let right = out.right_spacer.unwrap();
        assert_eq!(right.x, 380);
        assert_eq!(right.right(), 575);
    }

    #[test]
    fn centered_flag_without_function_falls_back_to_sequential() {
        let t = tabs(1);
        let ls = SpacerElement::new(20).auto_expand(true);
        let p = LayoutParams { center_function: true, ..params() };
        let input = LayoutInput { left_spacer: Some(&ls), ..LayoutInput::new(Size::new(300, 100), &t, false) };
        let out = LayoutEngine::with_params(p).compute(&input);
        let left = out.left_spacer.unwrap();
        assert_eq!(left.x, 75);
        assert_eq!(left.right(), 300);
    }

    fn strip_overlaps(out: &RibbonLayout) -> Vec<(ControlId, ControlId)> {
        let strip: Vec<_> = out.placed().filter(|(id, _)| *id != ControlId::FixPanel).collect();
        let mut hits = Vec::new();
        for (i, (a, ra)) in strip.iter().enumerate() {
            for (b, rb) in &strip[i + 1..] {
                if ra.intersect(*rb).is_some() {
                    hits.push((*a, *b));
                }
            }
        }
        hits
    }

    #[test]
    fn tight_band_clips_function_and_drops_right_spacer() {
        let t = tabs(5);
        let home = slot(SlotKind::Home, 30);
        let sys = SystemButtons::new(32);
        let function = slot(SlotKind::Function, 150);
        let profile = slot(SlotKind::Profile, 80);
        let rs = SpacerElement::new(40);
        let input = LayoutInput {
            home: Some(&home),
            system_buttons: Some(&sys),
            function: Some(&function),
            profile: Some(&profile),
            right_spacer: Some(&rs),
            ..LayoutInput::new(Size::new(300, 100), &t, false)
        };
        let out = LayoutEngine::with_params(params()).compute(&input);
        assert_eq!(strip_overlaps(&out), vec![]);

        // every tab is hidden, but the dropdown still gets its button
        assert_eq!(out.visible_tabs, 0);
        assert_eq!(out.hidden_tabs, vec![0, 1, 2, 3, 4]);
        assert_eq!(out.overflow_button, Some(Rect::new(35, 0, 12, 30)));

        // band 52..114, profile right-anchored at 119
        assert_eq!(out.profile, Some(Rect::new(119, 0, 80, 30)));
        assert_eq!(out.function, Some(Rect::new(52, 0, 62, 30)));
        assert_eq!(out.right_spacer, None);
        assert_eq!(out.system_buttons, Some(Rect::new(204, 0, 96, 30)));
    }

    #[test]
    fn tight_centered_band_stays_left_of_profile() {
        let t = tabs(1);
        let function = slot(SlotKind::Function, 100);
        let profile = slot(SlotKind::Profile, 40);
        let ls = SpacerElement::new(0).auto_expand(true);
        let rs = SpacerElement::new(80).auto_expand(true);
        let p = LayoutParams { center_function: true, ..params() };
        let input = LayoutInput {
            function: Some(&function),
            profile: Some(&profile),
            left_spacer: Some(&ls),
            right_spacer: Some(&rs),
            ..LayoutInput::new(Size::new(300, 100), &t, false)
        };
        let out = LayoutEngine::with_params(p).compute(&input);
        assert_eq!(strip_overlaps(&out), vec![]);
        let band_end = out.profile.unwrap().x - 5;
        for r in [out.left_spacer, out.function, out.right_spacer].into_iter().flatten() {
            assert!(r.right() <= band_end, "{r:?} crosses {band_end}");
        }
    }

    // ── dock ──────────────────────────────────────────────────────────────

    #[test]
    fn pinned_layout_places_dock_below_strip() {
        let t = tabs(2);
        let p = LayoutParams { bottom_margin: 4, ..params() };
        let out = LayoutEngine::with_params(p)
            .compute(&LayoutInput::new(Size::new(500, 200), &t, true));
        assert_eq!(out.fix_panel, FixPanelPlacement::Placed(Rect::new(0, 34, 500, 166)));
    }

    #[test]
    fn short_window_defers_dock() {
        let t = tabs(2);
        let engine = LayoutEngine::with_params(params());
        let out = engine.compute(&LayoutInput::new(Size::new(500, 70), &t, true));
        assert_eq!(out.fix_panel, FixPanelPlacement::Deferred { height: 40 });

        let mut surface = RecordingSurface::new();
        surface.set_rect(ControlId::FixPanel, Rect::new(0, 30, 500, 90));
        surface.show(ControlId::FixPanel, true);
        engine.apply(&out, &mut surface);
        assert_eq!(surface.rect(ControlId::FixPanel), Some(Rect::new(0, 30, 500, 90)));
        assert_ne!(surface.rect(ControlId::FixPanel).map(|r| r.h), Some(40));
    }

    #[test]
    fn unpinned_layout_hides_dock() {
        let t = tabs(2);
        let engine = LayoutEngine::with_params(params());
        let out = engine.compute(&LayoutInput::new(Size::new(500, 300), &t, false));
        let mut surface = RecordingSurface::new();
        engine.apply(&out, &mut surface);
        assert!(!surface.is_shown(ControlId::FixPanel));
    }

    // ── degenerate sizes ──────────────────────────────────────────────────

    fn bounds_hold(out: &RibbonLayout) -> bool {
        out.placed().all(|(_, r)| out.bounds.contains_rect(r) && r.w >= 0 && r.h >= 0)
    }

    #[test]
    fn zero_and_negative_sizes_stay_in_bounds() {
        let t = tabs(4);
        let home = slot(SlotKind::Home, 30);
        let sys = SystemButtons::new(32);
        let ls = SpacerElement::new(15).auto_expand(true);
        for size in [Size::new(0, 0), Size { w: -40, h: -10 }, Size::new(20, 10)] {
            let input = LayoutInput {
                home: Some(&home),
                system_buttons: Some(&sys),
                left_spacer: Some(&ls),
                ..LayoutInput::new(size, &t, true)
            };
            let out = LayoutEngine::with_params(params()).compute(&input);
            assert!(bounds_hold(&out), "{size:?}: {out:?}");
        }
    }

    #[test]
    fn compute_is_idempotent() {
        let t = tabs(5);
        let home = slot(SlotKind::Home, 30);
        let input = LayoutInput { home: Some(&home), ..LayoutInput::new(Size::new(333, 120), &t, true) };
        let engine = LayoutEngine::with_params(params());
        assert_eq!(engine.compute(&input), engine.compute(&input));
    }
}
