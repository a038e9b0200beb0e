//! Text measurement.
//!
//! Layout code never talks to a font rasteriser directly; it asks a
//! [`TextMeasure`] for the box a label occupies. [`FontSystem`] answers with
//! real glyph advances, [`MonoMeasure`] with a fixed advance per character.

mod font_system;
mod measure;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use measure::{FontSpec, MonoMeasure, TextMeasure};
