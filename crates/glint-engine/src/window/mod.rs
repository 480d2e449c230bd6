//! Window + platform subsystem.
//!
//! Defines the [`Platform`] contract the frame loop runs against and the real
//! desktop implementation over `winit` + `glutin`. The contract is a trait so
//! teardown ordering and startup failure paths are testable against a fake.

mod desktop;
mod platform;

pub use desktop::{DesktopPlatform, DesktopWindow};
pub use platform::{Platform, PlatformError, WindowConfig};
