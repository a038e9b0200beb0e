use flatbar_engine::paint::Color;

use crate::config::{ConfigError, ThemeConfig};

/// Resolved colours used by the paint pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub bar_background: Color,
    pub tab_text: Color,
    pub tab_active_background: Color,
    pub tab_active_indicator: Color,
    pub separator: Color,
    pub panel_background: Color,
    pub panel_border: Color,
    pub float_border: Color,
    pub button_text: Color,
    pub menu_background: Color,
    pub close_button: Color,
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ConfigError> {
        let parse = |key: &'static str, literal: &str| {
            Color::from_hex(literal).map_err(|source| ConfigError::InvalidColor { key, source })
        };

        Ok(Self {
            bar_background: parse("bar_background", &config.bar_background)?,
            tab_text: parse("tab_text", &config.tab_text)?,
            tab_active_background: parse("tab_active_background", &config.tab_active_background)?,
            tab_active_indicator: parse("tab_active_indicator", &config.tab_active_indicator)?,
            separator: parse("separator", &config.separator)?,
            panel_background: parse("panel_background", &config.panel_background)?,
            panel_border: parse("panel_border", &config.panel_border)?,
            float_border: parse("float_border", &config.float_border)?,
            button_text: parse("button_text", &config.button_text)?,
            menu_background: parse("menu_background", &config.menu_background)?,
            close_button: parse("close_button", &config.close_button)?,
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bar_background: Color::from_srgb_u8(0xf3, 0xf3, 0xf3, 0xff),
            tab_text: Color::from_srgb_u8(0x20, 0x20, 0x20, 0xff),
            tab_active_background: Color::from_srgb_u8(0xff, 0xff, 0xff, 0xff),
            tab_active_indicator: Color::from_srgb_u8(0x2b, 0x57, 0x9a, 0xff),
            separator: Color::from_srgb_u8(0xc8, 0xc8, 0xc8, 0xff),
            panel_background: Color::from_srgb_u8(0xff, 0xff, 0xff, 0xff),
            panel_border: Color::from_srgb_u8(0xd4, 0xd4, 0xd4, 0xff),
            float_border: Color::from_srgb_u8(0x8a, 0x8a, 0x8a, 0xff),
            button_text: Color::from_srgb_u8(0x30, 0x30, 0x30, 0xff),
            menu_background: Color::from_srgb_u8(0xfa, 0xfa, 0xfa, 0xff),
            close_button: Color::from_srgb_u8(0xe8, 0x11, 0x23, 0xff),
        }
    }
}
