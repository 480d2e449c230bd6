//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade. All
//! diagnostics in this repo go through `log`; nothing prints to stderr
//! directly.

mod init;

pub use init::{LoggingConfig, init_logging};
