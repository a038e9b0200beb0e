//! Pixel geometry shared by the engine and the ribbon toolkit.
//!
//! Canonical space:
//! - integer logical pixels
//! - origin top-left
//! - +X right, +Y down
//!
//! Sizes are never negative once they leave this module's constructors;
//! arithmetic that could underflow goes through the saturating helpers.

mod point;
mod rect;
mod size;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
