//! Time subsystem.
//!
//! Provides stable, testable frame timing without coupling to the runtime.
//! Intended usage: one `FrameClock` per run loop, `tick()` once per frame.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
