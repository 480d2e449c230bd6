use crate::gl::GlApi;
use crate::time::FrameTime;

/// Per-frame context passed to every [`App`](super::App) operation.
///
/// Carries the GL backend, the current frame timing and the drawable size in
/// physical pixels. The size is fixed for the lifetime of the window.
pub struct FrameCtx<'a, G: GlApi> {
    pub gl: &'a G,
    pub time: FrameTime,
    pub surface_size: (u32, u32),
}
