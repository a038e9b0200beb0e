//! Services handed to the ribbon by its host.
//!
//! The host builds one [`Services`] value and moves it into
//! [`RibbonBar::new`](crate::bar::RibbonBar::new). Nothing here is global.

use std::collections::BTreeMap;

use flatbar_engine::text::TextMeasure;

use crate::config::{ConfigError, RibbonConfig};
use crate::page::PageId;
use crate::system_buttons::SystemCommand;
use crate::theme::Theme;

// ── Language ──────────────────────────────────────────────────────────────

/// Label lookup with fallback to the key itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Language {
    table: BTreeMap<String, String>,
}

impl Language {
    pub fn new(table: BTreeMap<String, String>) -> Self {
        Self { table }
    }

    pub fn tr<'a>(&'a self, key: &'a str) -> &'a str {
        self.table.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.table.insert(key.into(), value.into());
    }
}

// ── events ────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HideReason {
    AutoHide,
    StripClick,
    Pinned,
}

/// Something the host may want to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RibbonEvent {
    PageActivated(PageId),
    PinChanged { pinned: bool },
    FloatShown(PageId),
    FloatHidden(HideReason),
    HomeMenuToggled { open: bool },
    HomeMenuCommand(String),
    SystemCommand(SystemCommand),
    ButtonClicked { page: PageId, id: String },
    /// The dock was too short; layout will be retried on the next tick.
    LayoutDeferred { height: i32 },
}

/// Outgoing event queue. The host drains it after each dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBus {
    queue: Vec<RibbonEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: RibbonEvent) {
        log::trace!("event: {:?}", event);
        self.queue.push(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn take_events(&mut self) -> Vec<RibbonEvent> {
        self.queue.drain(..).collect()
    }
}

// ── Services ──────────────────────────────────────────────────────────────

pub struct Services {
    pub config: RibbonConfig,
    pub theme: Theme,
    pub language: Language,
    pub measure: Box<dyn TextMeasure>,
    pub events: EventBus,
}

impl Services {
    /// Validates `config` and resolves its theme and language table.
    pub fn new(config: RibbonConfig, measure: Box<dyn TextMeasure>) -> Result<Self, ConfigError> {
        config.validate()?;
        let theme = Theme::from_config(&config.theme)?;
        let language = Language::new(config.language.clone());
        Ok(Self { config, theme, language, measure, events: EventBus::new() })
    }
}
