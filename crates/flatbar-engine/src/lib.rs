//! Flatbar engine crate.
//!
//! Leaf services the ribbon toolkit builds on: integer pixel geometry,
//! colours, the draw list, text measurement, tick timing and logging setup.
//! Nothing here knows about ribbons, pages or pin state.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
pub mod time;
