//! Core engine-facing contracts.
//!
//! Defines the stable interface between the platform loop and the program:
//! the [`App`] lifecycle, the per-frame context, and the runner that drives
//! setup → frames → teardown in a fixed order.

mod app;
mod ctx;
mod runner;

pub use app::App;
pub use ctx::FrameCtx;
pub use runner::run;
