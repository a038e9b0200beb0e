//! Time subsystem.
//!
//! The host loop owns one [`FrameClock`] and calls `tick()` once per UI tick;
//! components that need timers hold a [`Deadline`] and compare it against the
//! tick's `now` instead of owning platform timer objects.

mod deadline;
mod frame_clock;

pub use deadline::Deadline;
pub use frame_clock::{FrameClock, FrameTime};
