use anyhow::Result;

use crate::gl::GlApi;

use super::ctx::FrameCtx;

/// Application contract.
///
/// All GL and window state lives in the context passed to these four
/// operations — no globals. The runner calls `setup` once before the first
/// frame, `update` then `render` once per frame, and `cleanup` exactly once
/// on the way out (also after a failed `setup`, so partially built state is
/// still released).
pub trait App<G: GlApi> {
    /// Builds GPU resources. A failure here aborts the run.
    fn setup(&mut self, ctx: &mut FrameCtx<'_, G>) -> Result<()>;

    /// Per-frame state update; recomputes time-derived values.
    fn update(&mut self, ctx: &mut FrameCtx<'_, G>) {
        let _ = ctx;
    }

    /// Issues the frame's draw calls. Presentation is the runner's job.
    fn render(&mut self, ctx: &mut FrameCtx<'_, G>);

    /// Releases GPU resources. Runs before the window is destroyed.
    fn cleanup(&mut self, ctx: &mut FrameCtx<'_, G>);
}

impl<G: GlApi, A: App<G>> App<G> for &mut A {
    fn setup(&mut self, ctx: &mut FrameCtx<'_, G>) -> Result<()> {
        (**self).setup(ctx)
    }

    fn update(&mut self, ctx: &mut FrameCtx<'_, G>) {
        (**self).update(ctx)
    }

    fn render(&mut self, ctx: &mut FrameCtx<'_, G>) {
        (**self).render(ctx)
    }

    fn cleanup(&mut self, ctx: &mut FrameCtx<'_, G>) {
        (**self).cleanup(ctx)
    }
}
