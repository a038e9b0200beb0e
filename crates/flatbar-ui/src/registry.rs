//! Arena of pages and the page ↔ container association.
//!
//! Containers never own pages. The registry owns every [`Page`] and records,
//! per page, which container (if any) currently displays it. Moving a page
//! between the docked and floating containers is a change of that record, so
//! a page can never be hosted twice.

use crate::page::{Page, PageId};

/// Surfaces that can display a page.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Container {
    /// Docked below the strip (pinned mode).
    Fix,
    /// Transient auxiliary surface (unpinned mode).
    Float,
}

#[derive(Debug, Clone)]
struct Slot {
    page: Page,
    host: Option<Container>,
}

#[derive(Debug, Clone, Default)]
pub struct PageRegistry {
    slots: Vec<Slot>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a page in the background (hosted nowhere).
    pub fn add(&mut self, page: Page) -> PageId {
        self.slots.push(Slot { page, host: None });
        PageId(self.slots.len() - 1)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Checked conversion from a raw index.
    pub fn id(&self, index: usize) -> Option<PageId> {
        (index < self.slots.len()).then_some(PageId(index))
    }

    pub fn get(&self, id: PageId) -> Option<&Page> {
        self.slots.get(id.0).map(|s| &s.page)
    }

    pub fn get_mut(&mut self, id: PageId) -> Option<&mut Page> {
        self.slots.get_mut(id.0).map(|s| &mut s.page)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PageId, &Page)> {
        self.slots.iter().enumerate().map(|(i, s)| (PageId(i), &s.page))
    }

    pub fn host_of(&self, id: PageId) -> Option<Container> {
        self.slots.get(id.0).and_then(|s| s.host)
    }

    /// The page `container` currently displays.
    pub fn occupant(&self, container: Container) -> Option<PageId> {
        self.slots.iter().position(|s| s.host == Some(container)).map(PageId)
    }

    #[inline]
    pub fn contains(&self, container: Container, id: PageId) -> bool {
        self.host_of(id) == Some(container)
    }

    /// Displays `id` in `container`.
    ///
    /// The page is detached from its old container first, then whatever
    /// `container` held is sent to the background, then the page is attached.
    /// Returns the evicted occupant. Unknown ids are ignored.
    pub fn show(&mut self, id: PageId, container: Container) -> Option<PageId> {
        if id.0 >= self.slots.len() {
            log::warn!("show: page {:?} does not exist", id);
            return None;
        }
        if self.slots[id.0].host == Some(container) {
            return None;
        }

        if let Some(old) = self.slots[id.0].host.take() {
            log::debug!("page {:?} detached from {:?}", id, old);
        }
        let evicted = self.occupant(container);
        if let Some(prev) = evicted {
            self.slots[prev.0].host = None;
            log::debug!("page {:?} returned to background from {:?}", prev, container);
        }
        self.slots[id.0].host = Some(container);
        log::debug!("page {:?} attached to {:?}", id, container);
        evicted
    }

    /// Detaches `id` from whatever hosts it. Returns the former container.
    pub fn return_to_background(&mut self, id: PageId) -> Option<Container> {
        let former = self.slots.get_mut(id.0)?.host.take();
        if let Some(c) = former {
            log::debug!("page {:?} returned to background from {:?}", id, c);
        }
        former
    }

    /// Empties `container`. Returns the page it held.
    pub fn clear(&mut self, container: Container) -> Option<PageId> {
        let id = self.occupant(container)?;
        self.slots[id.0].host = None;
        Some(id)
    }

    /// Every container holds at most one page.
    pub fn is_consistent(&self) -> bool {
        [Container::Fix, Container::Float].iter().all(|c| {
            self.slots.iter().filter(|s| s.host == Some(*c)).count() <= 1
        })
    }
}
