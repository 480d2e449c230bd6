use thiserror::Error;

use crate::gl::GlApi;

/// Typed failures of the windowing subsystem.
///
/// `WindowCreation` aborts startup: the runner shuts the subsystem down and
/// never enters the frame loop. `FunctionTable` is reported but non-fatal —
/// the reference program continues after a failed function-table load, and
/// that observable behavior is preserved (later GL calls may misbehave; see
/// DESIGN.md).
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("failed to initialize the windowing subsystem: {0}")]
    Subsystem(String),

    #[error("failed to create window: {0}")]
    WindowCreation(String),

    #[error("failed to create GL context: {0}")]
    ContextCreation(String),

    #[error("GL function table failed to initialize: {0}")]
    FunctionTable(String),
}

/// Window parameters. The surface is created at exactly this logical size and
/// is not resizable; the viewport is established once at setup.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "glint".to_string(),
            width: 800,
            height: 800,
        }
    }
}

/// Windowing subsystem contract.
///
/// One window, one GL backend, single-threaded. Construction of the
/// implementing type initializes the subsystem; `shutdown` consumes it and
/// releases the subsystem exactly once. Every method is a synchronous call on
/// the owning thread.
pub trait Platform {
    type Gl: GlApi;
    type Window;

    /// Creates the window plus its GL backend. On failure the caller must
    /// still call `shutdown`.
    fn create_window(&mut self, config: &WindowConfig)
    -> Result<(Self::Window, Self::Gl), PlatformError>;

    /// Drawable size in physical pixels.
    fn surface_size(&self, window: &Self::Window) -> (u32, u32);

    /// Pumps pending events without blocking. Returns true once the user has
    /// requested the window to close.
    fn poll_events(&mut self, window: &mut Self::Window) -> bool;

    /// Presents the frame. The one intended blocking point per iteration:
    /// may wait until the display is ready.
    fn present(&mut self, window: &mut Self::Window);

    /// Releases the window and its GL context/surface.
    fn destroy_window(&mut self, window: Self::Window);

    /// Releases the subsystem. Must happen last, after every window is gone.
    fn shutdown(self);
}
