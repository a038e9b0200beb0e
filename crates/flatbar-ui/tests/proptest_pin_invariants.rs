//! Property-based invariant tests for pin / float handoff.
//!
//! 1. After any operation sequence no page is hosted twice and each container
//!    holds at most one page.
//! 2. A page is active exactly while some container hosts it.
//! 3. Pinned: nothing floats, and the dock shows the active page.
//!    Unpinned: nothing is docked, and the float surface shows a page iff it is shown.
//! 4. Toggling the pin twice restores the mode and the docked page.
//! 5. Arbitrary `show` sequences on the registry keep it consistent.

use std::time::Instant;

use flatbar_engine::coords::Rect;
use flatbar_ui::config::FloatConfig;
use flatbar_ui::fix_panel::FixPanel;
use flatbar_ui::float_panel::FloatPanel;
use flatbar_ui::page::{Page, PageId};
use flatbar_ui::pin::{Containers, PinStateController};
use flatbar_ui::registry::{Container, PageRegistry};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Op {
    Click(usize),
    Toggle,
    StripClick,
    Dismiss,
}

fn op(pages: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..pages + 2).prop_map(Op::Click),
        2 => Just(Op::Toggle),
        1 => Just(Op::StripClick),
        1 => Just(Op::Dismiss),
    ]
}

struct World {
    registry: PageRegistry,
    fix: FixPanel,
    float: FloatPanel,
    pin: PinStateController,
}

impl World {
    fn new(pages: usize, pinned: bool) -> Self {
        let mut w = Self {
            registry: PageRegistry::new(),
            fix: FixPanel::new(),
            float: FloatPanel::new(&FloatConfig::default()),
            pin: PinStateController::new(pinned),
        };
        for i in 0..pages {
            let id = w.registry.add(Page::new(format!("page {i}")));
            let mut c = Containers { registry: &mut w.registry, fix: &mut w.fix, float: &mut w.float };
            w.pin.on_page_added(id, &mut c);
        }
        w
    }

    fn apply(&mut self, op: Op) {
        let mut c = Containers { registry: &mut self.registry, fix: &mut self.fix, float: &mut self.float };
        match op {
            Op::Click(i) => {
                self.pin.on_tab_clicked(i, Rect::new(0, 30, 240, 96), Instant::now(), &mut c);
            }
            Op::Toggle => {
                self.pin.toggle_pin(&mut c);
            }
            Op::StripClick => {
                self.pin.on_strip_clicked(&mut c);
            }
            Op::Dismiss => {
                self.pin.dismiss_float(&mut c);
            }
        }
    }

    fn check(&self) -> Result<(), TestCaseError> {
        prop_assert!(self.registry.is_consistent());
        for (id, page) in self.registry.iter() {
            let hosted = [Container::Fix, Container::Float]
                .iter()
                .filter(|c| self.registry.contains(**c, id))
                .count();
            prop_assert!(hosted <= 1, "{:?} hosted {} times", id, hosted);
            prop_assert_eq!(page.is_active(), hosted == 1, "{:?} active flag out of sync", id);
        }

        let state = self.pin.state();
        if self.pin.is_pinned() {
            prop_assert_eq!(self.registry.occupant(Container::Float), None);
            prop_assert!(!self.float.is_shown());
            prop_assert_eq!(
                self.registry.occupant(Container::Fix).map(PageId::index),
                state.active_page
            );
        } else {
            prop_assert_eq!(self.registry.occupant(Container::Fix), None);
            prop_assert_eq!(self.float.is_shown(), self.registry.occupant(Container::Float).is_some());
            if let Some(page) = self.registry.occupant(Container::Float) {
                prop_assert_eq!(Some(page.index()), state.active_floating_page);
            }
        }
        Ok(())
    }
}

fn world_and_ops() -> impl Strategy<Value = (usize, bool, Vec<Op>)> {
    (1..7usize, any::<bool>()).prop_flat_map(|(pages, pinned)| {
        (Just(pages), Just(pinned), proptest::collection::vec(op(pages), 0..40))
    })
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. Exclusivity and mode consistency
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn exclusivity_holds_after_every_op((pages, pinned, ops) in world_and_ops()) {
        let mut w = World::new(pages, pinned);
        w.check()?;
        for op in ops {
            w.apply(op);
            w.check()?;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Pin round-trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn double_toggle_restores_state((pages, pinned, ops) in world_and_ops()) {
        let mut w = World::new(pages, pinned);
        for op in ops {
            w.apply(op);
        }
        let was_pinned = w.pin.is_pinned();
        let docked = w.registry.occupant(Container::Fix);
        let active = w.pin.state().active_page;

        w.apply(Op::Toggle);
        w.apply(Op::Toggle);

        prop_assert_eq!(w.pin.is_pinned(), was_pinned);
        if was_pinned {
            prop_assert_eq!(w.pin.state().active_page, active);
            prop_assert_eq!(w.registry.occupant(Container::Fix), docked);
        }
        w.check()?;
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Registry handoff
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn registry_show_sequences_stay_consistent(
        moves in proptest::collection::vec((0..6usize, any::<bool>()), 0..50)
    ) {
        let mut registry = PageRegistry::new();
        for i in 0..4 {
            registry.add(Page::new(format!("p{i}")));
        }
        for (index, to_fix) in moves {
            let container = if to_fix { Container::Fix } else { Container::Float };
            registry.show(PageId(index), container);
            prop_assert!(registry.is_consistent());
            if index < registry.len() {
                prop_assert!(registry.contains(container, PageId(index)));
                let other = if to_fix { Container::Float } else { Container::Fix };
                prop_assert!(!registry.contains(other, PageId(index)));
            }
        }
    }
}
