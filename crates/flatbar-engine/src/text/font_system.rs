use std::fmt;

use crate::coords::Size;

use super::{FontSpec, TextMeasure};

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

impl FontId {
    /// The first font loaded into a system; measurement services without real
    /// fonts ignore the id entirely.
    pub const DEFAULT: FontId = FontId(0);
}

/// Owns the loaded fonts and measures text with their glyph advances.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {:?}", id);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for FontSystem {
    fn measure(&self, text: &str, font: FontSpec) -> Size {
        let line_height = (font.size * 1.2).ceil() as i32;
        let Some(face) = self.fonts.get(font.id.0) else {
            return Size::new(0, line_height);
        };

        // Sum advances rather than bitmap extents so trailing spaces count and
        // the result matches where the next glyph would start.
        let advance: f32 = text
            .chars()
            .map(|c| face.metrics(c, font.size).advance_width)
            .sum();
        Size::new(advance.ceil() as i32, line_height)
    }
}
