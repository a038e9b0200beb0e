//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store backend-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)

mod cmd;
mod list;
mod z_index;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList, SortKey};
pub use z_index::ZIndex;
