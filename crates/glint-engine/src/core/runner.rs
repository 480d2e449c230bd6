use anyhow::{Context, Result};

use crate::time::{FrameClock, FrameTime};
use crate::window::{Platform, WindowConfig};

use super::app::App;
use super::ctx::FrameCtx;

/// Drives a full application run: window creation, setup, the frame loop,
/// and teardown in a fixed order.
///
/// Teardown order is a contract: app GL releases first, then window
/// destruction, then subsystem shutdown — later steps rely on the earlier
/// layers still being alive. Each step happens exactly once, including on the
/// startup failure paths.
pub fn run<P, A>(mut platform: P, config: WindowConfig, mut app: A) -> Result<()>
where
    P: Platform,
    A: App<P::Gl>,
{
    let (mut window, gl) = match platform.create_window(&config) {
        Ok(pair) => pair,
        Err(err) => {
            // The frame loop is never entered; the subsystem still shuts
            // down exactly once.
            platform.shutdown();
            return Err(err).context("window creation failed during startup");
        }
    };

    let surface_size = platform.surface_size(&window);
    let mut clock = FrameClock::new();

    let setup_result = {
        let mut ctx = FrameCtx {
            gl: &gl,
            time: FrameTime::startup(),
            surface_size,
        };
        app.setup(&mut ctx)
    };

    if let Err(err) = setup_result {
        let mut ctx = FrameCtx {
            gl: &gl,
            time: FrameTime::startup(),
            surface_size,
        };
        app.cleanup(&mut ctx);
        platform.destroy_window(window);
        platform.shutdown();
        return Err(err).context("application setup failed");
    }

    let mut last_time = FrameTime::startup();

    loop {
        if platform.poll_events(&mut window) {
            break;
        }

        last_time = clock.tick();

        let mut ctx = FrameCtx {
            gl: &gl,
            time: last_time,
            surface_size,
        };
        app.update(&mut ctx);
        app.render(&mut ctx);

        platform.present(&mut window);
    }

    let mut ctx = FrameCtx {
        gl: &gl,
        time: last_time,
        surface_size,
    };
    app.cleanup(&mut ctx);

    platform.destroy_window(window);
    platform.shutdown();

    Ok(())
}
