use crate::coords::Size;

use super::FontId;

/// Font handle plus pixel size, everything a measurement needs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FontSpec {
    pub id: FontId,
    /// Font size in logical pixels.
    pub size: f32,
}

impl FontSpec {
    #[inline]
    pub const fn new(id: FontId, size: f32) -> Self {
        Self { id, size }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self { id: FontId::DEFAULT, size: 12.0 }
    }
}

/// Text measurement service consumed by intrinsic sizing.
///
/// Must be deterministic: the same text and font always yield the same size.
pub trait TextMeasure {
    fn measure(&self, text: &str, font: FontSpec) -> Size;
}

/// Fixed-advance measurement: every `char` is `advance` pixels wide.
///
/// Used headless (no font file available) and in tests where exact widths matter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MonoMeasure {
    pub advance: i32,
    pub line_height: i32,
}

impl MonoMeasure {
    pub const fn new(advance: i32, line_height: i32) -> Self {
        Self { advance, line_height }
    }
}

impl Default for MonoMeasure {
    fn default() -> Self {
        Self::new(7, 16)
    }
}

impl TextMeasure for MonoMeasure {
    fn measure(&self, text: &str, _font: FontSpec) -> Size {
        let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        Size::new(chars.saturating_mul(self.advance), self.line_height)
    }
}
