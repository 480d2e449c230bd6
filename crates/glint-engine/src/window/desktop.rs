use std::num::NonZeroU32;
use std::time::Duration;

use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::gl::GlowGl;

use super::platform::{Platform, PlatformError, WindowConfig};

/// Real windowing subsystem: winit event loop + glutin GL context.
///
/// The event loop is pumped with a zero timeout each frame, so polling never
/// suspends the loop; vsync inside `present` is the only blocking point.
pub struct DesktopPlatform {
    event_loop: EventLoop<()>,
}

/// One live window with its GL surface and current context.
pub struct DesktopWindow {
    window: Window,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
}

impl DesktopPlatform {
    /// Initializes the windowing subsystem.
    pub fn init() -> Result<Self, PlatformError> {
        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::Subsystem(e.to_string()))?;
        Ok(Self { event_loop })
    }
}

impl Platform for DesktopPlatform {
    type Gl = GlowGl;
    type Window = DesktopWindow;

    fn create_window(
        &mut self,
        config: &WindowConfig,
    ) -> Result<(DesktopWindow, GlowGl), PlatformError> {
        // winit only hands out window-creation capability inside the handler,
        // so pump until `resumed` has run the bootstrap.
        let mut bootstrap = WindowBootstrap {
            config,
            result: None,
        };

        loop {
            let status = self
                .event_loop
                .pump_app_events(Some(Duration::ZERO), &mut bootstrap);

            if let Some(result) = bootstrap.result.take() {
                return result;
            }
            if let PumpStatus::Exit(code) = status {
                return Err(PlatformError::WindowCreation(format!(
                    "event loop exited during startup (code {code})"
                )));
            }
        }
    }

    fn surface_size(&self, window: &DesktopWindow) -> (u32, u32) {
        let size = window.window.inner_size();
        (size.width, size.height)
    }

    fn poll_events(&mut self, _window: &mut DesktopWindow) -> bool {
        let mut sink = EventSink {
            close_requested: false,
        };
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut sink);

        sink.close_requested || matches!(status, PumpStatus::Exit(_))
    }

    fn present(&mut self, window: &mut DesktopWindow) {
        window.window.pre_present_notify();
        if let Err(err) = window.surface.swap_buffers(&window.context) {
            log::warn!("swap_buffers failed: {err}");
        }
    }

    fn destroy_window(&mut self, window: DesktopWindow) {
        // Surface and context release on drop while the event loop is still
        // alive; subsystem teardown follows in `shutdown`.
        drop(window);
    }

    fn shutdown(self) {
        drop(self.event_loop);
    }
}

struct WindowBootstrap<'a> {
    config: &'a WindowConfig,
    result: Option<Result<(DesktopWindow, GlowGl), PlatformError>>,
}

impl ApplicationHandler for WindowBootstrap<'_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.result.is_none() {
            self.result = Some(build_window(event_loop, self.config));
        }
    }

    fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, _: WindowEvent) {}
}

struct EventSink {
    close_requested: bool,
}

impl ApplicationHandler for EventSink {
    fn resumed(&mut self, _: &ActiveEventLoop) {}

    fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        if let WindowEvent::CloseRequested = event {
            self.close_requested = true;
        }
    }
}

fn build_window(
    event_loop: &ActiveEventLoop,
    config: &WindowConfig,
) -> Result<(DesktopWindow, GlowGl), PlatformError> {
    let attrs = Window::default_attributes()
        .with_title(&config.title)
        .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64))
        .with_resizable(false);

    let display_builder = DisplayBuilder::new().with_window_attributes(Some(attrs));
    let (window, gl_config) = display_builder
        .build(event_loop, ConfigTemplateBuilder::new(), pick_gl_config)
        .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;

    let window = window.ok_or_else(|| {
        PlatformError::WindowCreation("display builder produced no window".to_string())
    })?;

    let raw_window_handle = window
        .window_handle()
        .map_err(|e| PlatformError::WindowCreation(e.to_string()))?
        .as_raw();

    let gl_display = gl_config.display();

    // GLSL 330 shaders; request at least a 3.3 context.
    let context_attributes = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
        .build(Some(raw_window_handle));

    let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
        .map_err(|e| PlatformError::ContextCreation(e.to_string()))?;

    let surface_attributes = window
        .build_surface_attributes(Default::default())
        .map_err(|e| PlatformError::ContextCreation(e.to_string()))?;
    let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
        .map_err(|e| PlatformError::ContextCreation(e.to_string()))?;

    let context = not_current
        .make_current(&surface)
        .map_err(|e| PlatformError::ContextCreation(e.to_string()))?;

    // Vsync: `present` is the frame loop's one blocking point.
    if let Err(err) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
        log::warn!("failed to enable vsync: {err}");
    }

    let gl = GlowGl::new(unsafe {
        glow::Context::from_loader_function_cstr(|name| gl_display.get_proc_address(name))
    });

    // Function-table probe. The reference program continues after a failed
    // load, so this is reported but non-fatal.
    let version = gl.version();
    if version.is_empty() {
        let err = PlatformError::FunctionTable("driver reported no version string".to_string());
        log::warn!("{err}; continuing, later GL calls may misbehave");
    } else {
        log::info!("using OpenGL {version}");
    }

    Ok((
        DesktopWindow {
            window,
            surface,
            context,
        },
        gl,
    ))
}

fn pick_gl_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    // Prefer more samples; the picker contract requires returning a config.
    configs
        .reduce(|best, candidate| {
            if candidate.num_samples() > best.num_samples() {
                candidate
            } else {
                best
            }
        })
        .expect("platform offered no GL framebuffer configs")
}
