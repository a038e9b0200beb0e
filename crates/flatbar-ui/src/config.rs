//! Ribbon configuration.
//!
//! All numeric constants the layout engine, pin controller and page painter
//! consume live here. The host loads them once (TOML) and hands the result to
//! [`crate::services::Services`]; nothing reads configuration lazily.
//!
//! ```toml
//! [layout]
//! padding = 2
//! element_spacing = 5
//! function_space_center_align = true
//!
//! [float]
//! auto_hide_interval_ms = 400
//!
//! [theme]
//! bar_background = "#f3f3f3"
//!
//! [language]
//! home = "Start"
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use flatbar_engine::paint::ColorParseError;

// ── sections ──────────────────────────────────────────────────────────────

/// Geometry of the bar strip and docked panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal inset at both ends of the strip.
    pub padding: i32,
    /// Gap between consecutive strip elements.
    pub element_spacing: i32,
    /// Height of the strip holding home, tabs, slots and system buttons.
    pub bar_strip_height: i32,
    pub top_margin: i32,
    /// Gap between the strip and the docked page.
    pub bottom_margin: i32,
    /// Horizontal padding on each side of a tab label.
    pub tab_padding: i32,
    /// Gap between tabs.
    pub tab_spacing: i32,
    pub tab_font_size: f32,
    /// Width of the "more tabs" dropdown button.
    pub overflow_button_width: i32,
    pub overflow_item_height: i32,
    pub function_space_center_align: bool,
    /// Below this height the docked page is not positioned at all.
    pub fix_panel_min_height: i32,
    /// Height the docked page asks the host for.
    pub fix_panel_height: i32,
    pub pin_button_size: i32,
    pub start_pinned: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: 2,
            element_spacing: 5,
            bar_strip_height: 30,
            top_margin: 0,
            bottom_margin: 0,
            tab_padding: 10,
            tab_spacing: 2,
            tab_font_size: 13.0,
            overflow_button_width: 12,
            overflow_item_height: 22,
            function_space_center_align: false,
            fix_panel_min_height: 60,
            fix_panel_height: 96,
            pin_button_size: 14,
            start_pinned: true,
        }
    }
}

/// Floating (unpinned) page surface.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FloatConfig {
    /// Cadence of the auto-hide mouse check.
    pub auto_hide_interval_ms: u64,
    /// The float rectangle is inflated by this much before the mouse test.
    pub hide_margin: i32,
    pub min_width: i32,
    pub height: i32,
}

impl FloatConfig {
    pub fn auto_hide_interval(&self) -> Duration {
        Duration::from_millis(self.auto_hide_interval_ms)
    }
}

impl Default for FloatConfig {
    fn default() -> Self {
        Self { auto_hide_interval_ms: 400, hide_margin: 8, min_width: 240, height: 96 }
    }
}

/// Metrics for panels, button bars and galleries inside a page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub padding: i32,
    pub spacing: i32,
    pub button_padding: i32,
    pub button_height: i32,
    pub label_height: i32,
    pub gallery_tile: i32,
    pub font_size: f32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            padding: 4,
            spacing: 4,
            button_padding: 6,
            button_height: 22,
            label_height: 16,
            gallery_tile: 40,
            font_size: 12.0,
        }
    }
}

/// Theme colours as hex literals; resolved by [`crate::theme::Theme::from_config`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub bar_background: String,
    pub tab_text: String,
    pub tab_active_background: String,
    pub tab_active_indicator: String,
    pub separator: String,
    pub panel_background: String,
    pub panel_border: String,
    pub float_border: String,
    pub button_text: String,
    pub menu_background: String,
    pub close_button: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            bar_background: "#f3f3f3".into(),
            tab_text: "#202020".into(),
            tab_active_background: "#ffffff".into(),
            tab_active_indicator: "#2b579a".into(),
            separator: "#c8c8c8".into(),
            panel_background: "#ffffff".into(),
            panel_border: "#d4d4d4".into(),
            float_border: "#8a8a8a".into(),
            button_text: "#303030".into(),
            menu_background: "#fafafa".into(),
            close_button: "#e81123".into(),
        }
    }
}

// ── RibbonConfig ──────────────────────────────────────────────────────────

/// Complete configuration for one ribbon bar.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RibbonConfig {
    pub layout: LayoutConfig,
    pub float: FloatConfig,
    pub panel: PanelConfig,
    pub theme: ThemeConfig,
    /// Label translations, key → display text.
    pub language: BTreeMap<String, String>,
}

impl RibbonConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Rejects values the layout math cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let l = &self.layout;
        let non_negative = [
            ("layout.padding", l.padding),
            ("layout.element_spacing", l.element_spacing),
            ("layout.bar_strip_height", l.bar_strip_height),
            ("layout.top_margin", l.top_margin),
            ("layout.bottom_margin", l.bottom_margin),
            ("layout.tab_padding", l.tab_padding),
            ("layout.tab_spacing", l.tab_spacing),
            ("layout.overflow_button_width", l.overflow_button_width),
            ("layout.overflow_item_height", l.overflow_item_height),
            ("layout.fix_panel_min_height", l.fix_panel_min_height),
            ("layout.fix_panel_height", l.fix_panel_height),
            ("layout.pin_button_size", l.pin_button_size),
            ("float.hide_margin", self.float.hide_margin),
            ("float.min_width", self.float.min_width),
            ("float.height", self.float.height),
            ("panel.padding", self.panel.padding),
            ("panel.spacing", self.panel.spacing),
            ("panel.button_padding", self.panel.button_padding),
            ("panel.button_height", self.panel.button_height),
            ("panel.label_height", self.panel.label_height),
            ("panel.gallery_tile", self.panel.gallery_tile),
        ];
        if let Some((key, value)) = non_negative.iter().find(|(_, v)| *v < 0) {
            return Err(ConfigError::Invalid(format!("{key} must be >= 0, got {value}")));
        }

        if l.top_margin > l.bar_strip_height {
            return Err(ConfigError::Invalid(format!(
                "layout.top_margin ({}) exceeds layout.bar_strip_height ({})",
                l.top_margin, l.bar_strip_height
            )));
        }
        if l.overflow_button_width == 0 {
            return Err(ConfigError::Invalid(
                "layout.overflow_button_width must be > 0, hidden tabs are reached through it".into(),
            ));
        }
        if self.float.auto_hide_interval_ms == 0 {
            return Err(ConfigError::Invalid("float.auto_hide_interval_ms must be > 0".into()));
        }
        if !(l.tab_font_size > 0.0) || !(self.panel.font_size > 0.0) {
            return Err(ConfigError::Invalid("font sizes must be positive".into()));
        }
        Ok(())
    }
}

// ── Error type ────────────────────────────────────────────────────────────

/// Errors that can occur while loading a ribbon configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    InvalidColor { key: &'static str, source: ColorParseError },
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error reading ribbon config: {e}"),
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::InvalidColor { key, source } => write!(f, "theme.{key}: {source}"),
            Self::Invalid(msg) => write!(f, "invalid ribbon config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::InvalidColor { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}
