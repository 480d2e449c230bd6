//! Recording fakes for lifecycle tests.
//!
//! [`RecordingGl`] and [`FakePlatform`] append to one shared [`CallLog`], so
//! tests can assert cross-layer ordering (GL releases before window destroy
//! before subsystem shutdown) from a single sequence.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::gl::{AttribType, AttributeLink, BufferKind, GlApi, GlError};
use crate::window::{Platform, PlatformError, WindowConfig};

/// One observed backend or platform call, in issue order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateBuffer(u32),
    BindBuffer(BufferKind, Option<u32>),
    BufferData(BufferKind, usize),
    DeleteBuffer(u32),

    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    EnableAttrib(u32),
    AttribPointer(u32, i32, AttribType, i32, i32),

    CreateProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    UniformLookup(u32, String),
    Uniform1F(i32, f32),

    Viewport(i32, i32, i32, i32),
    ClearColor(f32, f32, f32, f32),
    Clear,
    DrawIndexed(i32),

    CreateWindow,
    PollEvents,
    Present,
    DestroyWindow,
    Shutdown,
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

/// Fake backend that records every call and hands out sequential ids.
pub struct RecordingGl {
    log: CallLog,
    next_id: Cell<u32>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::with_log(Rc::new(RefCell::new(Vec::new())))
    }

    pub fn with_log(log: CallLog) -> Self {
        Self {
            log,
            next_id: Cell::new(0),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    fn push(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }

    fn alloc_id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }
}

impl GlApi for RecordingGl {
    type Buffer = u32;
    type VertexArray = u32;
    type Program = u32;
    type Uniform = i32;

    fn create_buffer(&self) -> Result<Self::Buffer, GlError> {
        let id = self.alloc_id();
        self.push(Call::CreateBuffer(id));
        Ok(id)
    }

    fn bind_buffer(&self, kind: BufferKind, buffer: Option<Self::Buffer>) {
        self.push(Call::BindBuffer(kind, buffer));
    }

    fn buffer_data(&self, kind: BufferKind, data: &[u8]) {
        self.push(Call::BufferData(kind, data.len()));
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        self.push(Call::DeleteBuffer(buffer));
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, GlError> {
        let id = self.alloc_id();
        self.push(Call::CreateVertexArray(id));
        Ok(id)
    }

    fn bind_vertex_array(&self, array: Option<Self::VertexArray>) {
        self.push(Call::BindVertexArray(array));
    }

    fn delete_vertex_array(&self, array: Self::VertexArray) {
        self.push(Call::DeleteVertexArray(array));
    }

    fn enable_vertex_attrib_array(&self, slot: u32) {
        self.push(Call::EnableAttrib(slot));
    }

    fn vertex_attrib_pointer(&self, link: &AttributeLink) {
        self.push(Call::AttribPointer(
            link.slot,
            link.component_count,
            link.component_type,
            link.stride_bytes,
            link.offset_bytes,
        ));
    }

    fn create_program(&self, _vertex_src: &str, _fragment_src: &str) -> Result<Self::Program, GlError> {
        let id = self.alloc_id();
        self.push(Call::CreateProgram(id));
        Ok(id)
    }

    fn use_program(&self, program: Option<Self::Program>) {
        self.push(Call::UseProgram(program));
    }

    fn delete_program(&self, program: Self::Program) {
        self.push(Call::DeleteProgram(program));
    }

    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::Uniform> {
        self.push(Call::UniformLookup(program, name.to_owned()));
        Some(0)
    }

    fn set_uniform_f32(&self, location: &Self::Uniform, value: f32) {
        self.push(Call::Uniform1F(*location, value));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.push(Call::Viewport(x, y, width, height));
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.push(Call::ClearColor(r, g, b, a));
    }

    fn clear(&self) {
        self.push(Call::Clear);
    }

    fn draw_indexed_triangles(&self, index_count: i32) {
        self.push(Call::DrawIndexed(index_count));
    }
}

/// Fake windowing subsystem driving the runner through a fixed number of
/// frames before reporting a close request.
pub struct FakePlatform {
    pub log: CallLog,
    pub frames_before_close: u32,
    pub fail_window_creation: bool,
}

impl FakePlatform {
    pub fn new(frames_before_close: u32) -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            frames_before_close,
            fail_window_creation: false,
        }
    }

    pub fn failing() -> Self {
        let mut platform = Self::new(0);
        platform.fail_window_creation = true;
        platform
    }
}

impl Platform for FakePlatform {
    type Gl = RecordingGl;
    type Window = ();

    fn create_window(&mut self, _config: &WindowConfig) -> Result<((), RecordingGl), PlatformError> {
        if self.fail_window_creation {
            return Err(PlatformError::WindowCreation("forced failure".into()));
        }
        self.log.borrow_mut().push(Call::CreateWindow);
        Ok(((), RecordingGl::with_log(self.log.clone())))
    }

    fn surface_size(&self, _window: &Self::Window) -> (u32, u32) {
        (800, 800)
    }

    fn poll_events(&mut self, _window: &mut Self::Window) -> bool {
        self.log.borrow_mut().push(Call::PollEvents);
        if self.frames_before_close == 0 {
            true
        } else {
            self.frames_before_close -= 1;
            false
        }
    }

    fn present(&mut self, _window: &mut Self::Window) {
        self.log.borrow_mut().push(Call::Present);
    }

    fn destroy_window(&mut self, _window: Self::Window) {
        self.log.borrow_mut().push(Call::DestroyWindow);
    }

    fn shutdown(self) {
        self.log.borrow_mut().push(Call::Shutdown);
    }
}
