use glow::HasContext;

use super::api::{AttribType, AttributeLink, BufferKind, GlApi, GlError};

/// The real backend: thin unsafe passthroughs over a live [`glow::Context`].
///
/// All state mutation happens on the thread that owns the context; nothing
/// here is `Send` or `Sync` and nothing retries.
pub struct GlowGl {
    ctx: glow::Context,
}

impl GlowGl {
    pub fn new(ctx: glow::Context) -> Self {
        Self { ctx }
    }

    /// Version string reported by the driver.
    ///
    /// Empty when the function table failed to load; callers use this as the
    /// function-table probe.
    pub fn version(&self) -> String {
        unsafe { self.ctx.get_parameter_string(glow::VERSION) }
    }

    fn compile_stage(
        &self,
        shader_type: u32,
        stage: &'static str,
        source: &str,
    ) -> Result<glow::NativeShader, GlError> {
        unsafe {
            let shader = self
                .ctx
                .create_shader(shader_type)
                .map_err(|e| GlError::ObjectCreation("shader", e))?;
            self.ctx.shader_source(shader, source);
            self.ctx.compile_shader(shader);

            if !self.ctx.get_shader_compile_status(shader) {
                let info_log = self.ctx.get_shader_info_log(shader);
                self.ctx.delete_shader(shader);
                return Err(GlError::ShaderCompile { stage, info_log });
            }

            Ok(shader)
        }
    }
}

fn gl_target(kind: BufferKind) -> u32 {
    match kind {
        BufferKind::Vertex => glow::ARRAY_BUFFER,
        BufferKind::Index => glow::ELEMENT_ARRAY_BUFFER,
    }
}

impl GlApi for GlowGl {
    type Buffer = glow::NativeBuffer;
    type VertexArray = glow::NativeVertexArray;
    type Program = glow::NativeProgram;
    type Uniform = glow::NativeUniformLocation;

    fn create_buffer(&self) -> Result<Self::Buffer, GlError> {
        unsafe { self.ctx.create_buffer() }.map_err(|e| GlError::ObjectCreation("buffer", e))
    }

    fn bind_buffer(&self, kind: BufferKind, buffer: Option<Self::Buffer>) {
        unsafe { self.ctx.bind_buffer(gl_target(kind), buffer) }
    }

    fn buffer_data(&self, kind: BufferKind, data: &[u8]) {
        // Data is uploaded once at creation; STATIC_DRAW matches that usage.
        unsafe {
            self.ctx
                .buffer_data_u8_slice(gl_target(kind), data, glow::STATIC_DRAW)
        }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { self.ctx.delete_buffer(buffer) }
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, GlError> {
        unsafe { self.ctx.create_vertex_array() }
            .map_err(|e| GlError::ObjectCreation("vertex array", e))
    }

    fn bind_vertex_array(&self, array: Option<Self::VertexArray>) {
        unsafe { self.ctx.bind_vertex_array(array) }
    }

    fn delete_vertex_array(&self, array: Self::VertexArray) {
        unsafe { self.ctx.delete_vertex_array(array) }
    }

    fn enable_vertex_attrib_array(&self, slot: u32) {
        unsafe { self.ctx.enable_vertex_attrib_array(slot) }
    }

    fn vertex_attrib_pointer(&self, link: &AttributeLink) {
        unsafe {
            match link.component_type {
                AttribType::F32 => self.ctx.vertex_attrib_pointer_f32(
                    link.slot,
                    link.component_count,
                    glow::FLOAT,
                    false,
                    link.stride_bytes,
                    link.offset_bytes,
                ),
                AttribType::I32 => self.ctx.vertex_attrib_pointer_i32(
                    link.slot,
                    link.component_count,
                    glow::INT,
                    link.stride_bytes,
                    link.offset_bytes,
                ),
            }
        }
    }

    fn create_program(&self, vertex_src: &str, fragment_src: &str) -> Result<Self::Program, GlError> {
        let vs = self.compile_stage(glow::VERTEX_SHADER, "vertex", vertex_src)?;
        let fs = self.compile_stage(glow::FRAGMENT_SHADER, "fragment", fragment_src)?;

        unsafe {
            let program = self
                .ctx
                .create_program()
                .map_err(|e| GlError::ObjectCreation("program", e))?;

            self.ctx.attach_shader(program, vs);
            self.ctx.attach_shader(program, fs);
            self.ctx.link_program(program);

            // Stage objects are no longer needed once the program is linked.
            self.ctx.detach_shader(program, vs);
            self.ctx.detach_shader(program, fs);
            self.ctx.delete_shader(vs);
            self.ctx.delete_shader(fs);

            if !self.ctx.get_program_link_status(program) {
                let info_log = self.ctx.get_program_info_log(program);
                self.ctx.delete_program(program);
                return Err(GlError::ProgramLink(info_log));
            }

            Ok(program)
        }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { self.ctx.use_program(program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { self.ctx.delete_program(program) }
    }

    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::Uniform> {
        unsafe { self.ctx.get_uniform_location(program, name) }
    }

    fn set_uniform_f32(&self, location: &Self::Uniform, value: f32) {
        unsafe { self.ctx.uniform_1_f32(Some(location), value) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { self.ctx.viewport(x, y, width, height) }
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { self.ctx.clear_color(r, g, b, a) }
    }

    fn clear(&self) {
        unsafe { self.ctx.clear(glow::COLOR_BUFFER_BIT) }
    }

    fn draw_indexed_triangles(&self, index_count: i32) {
        unsafe {
            self.ctx
                .draw_elements(glow::TRIANGLES, index_count, glow::UNSIGNED_INT, 0)
        }
    }
}
