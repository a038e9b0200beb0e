//! Colour model shared between the toolkit and whatever backend draws it.
//!
//! Colours are stored as linear premultiplied RGBA; themes and config files
//! speak straight-alpha hex literals and convert on the way in.

pub mod color;

pub use color::{Color, ColorParseError};
