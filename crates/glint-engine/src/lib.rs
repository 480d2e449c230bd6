//! Glint engine crate.
//!
//! This crate owns the platform + GL runtime pieces used by the demo program:
//! the GL object model, the window/platform layer, and the frame loop runner.

pub mod core;
pub mod gl;
pub mod window;

pub mod logging;
pub mod time;

#[cfg(test)]
pub(crate) mod testing;
