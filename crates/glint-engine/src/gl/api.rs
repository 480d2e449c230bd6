use std::fmt;
use std::ops::Range;

use thiserror::Error;

/// Errors surfaced by backend object creation.
///
/// Runtime GL failures (out-of-memory during upload, invalid draw state) are
/// not trapped here; the underlying API reports them through its own channels
/// and this layer stays permissive, matching the driver contract.
#[derive(Debug, Error)]
pub enum GlError {
    #[error("failed to create {0} object: {1}")]
    ObjectCreation(&'static str, String),

    #[error("{stage} shader failed to compile: {info_log}")]
    ShaderCompile {
        stage: &'static str,
        info_log: String,
    },

    #[error("shader program failed to link: {0}")]
    ProgramLink(String),
}

/// Which binding target a buffer object attaches to.
///
/// Vertex and index buffers are structurally identical GPU allocations; the
/// kind only selects the pipeline slot they bind to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BufferKind {
    Vertex,
    Index,
}

/// Component type of a vertex attribute.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttribType {
    F32,
    I32,
}

impl AttribType {
    pub fn size_in_bytes(self) -> i32 {
        match self {
            AttribType::F32 | AttribType::I32 => 4,
        }
    }
}

/// One slot-to-byte-range binding within a vertex array.
///
/// `stride_bytes` is the distance between consecutive vertices in the linked
/// buffer; `offset_bytes` is where this attribute starts inside each stride
/// window. Offsets and strides are taken at face value — staying within the
/// linked buffer's uploaded size is the caller's responsibility, as it is at
/// the driver boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AttributeLink {
    /// Pipeline input slot. Caller-assigned; re-linking an occupied slot
    /// replaces the previous link.
    pub slot: u32,
    pub component_count: i32,
    pub component_type: AttribType,
    pub stride_bytes: i32,
    pub offset_bytes: i32,
}

impl AttributeLink {
    /// Bytes this attribute reads per vertex.
    pub fn byte_len(&self) -> i32 {
        self.component_count * self.component_type.size_in_bytes()
    }

    /// The byte range read within each stride window.
    pub fn byte_range(&self) -> Range<i32> {
        self.offset_bytes..self.offset_bytes + self.byte_len()
    }
}

/// The slice of the GL surface this program needs, behind a trait so the
/// object wrappers can be driven by a recording fake in tests.
///
/// Handle types are opaque and backend-defined, in the manner of
/// `glow::HasContext`. Creation is fallible; bind/unbind/delete are pure
/// pipeline-state toggles with no return value and no use-after-delete
/// detection.
pub trait GlApi {
    type Buffer: Copy + Eq + fmt::Debug;
    type VertexArray: Copy + Eq + fmt::Debug;
    type Program: Copy + Eq + fmt::Debug;
    type Uniform: Clone + fmt::Debug;

    fn create_buffer(&self) -> Result<Self::Buffer, GlError>;
    fn bind_buffer(&self, kind: BufferKind, buffer: Option<Self::Buffer>);
    fn buffer_data(&self, kind: BufferKind, data: &[u8]);
    fn delete_buffer(&self, buffer: Self::Buffer);

    fn create_vertex_array(&self) -> Result<Self::VertexArray, GlError>;
    fn bind_vertex_array(&self, array: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, array: Self::VertexArray);

    fn enable_vertex_attrib_array(&self, slot: u32);
    fn vertex_attrib_pointer(&self, link: &AttributeLink);

    /// Compiles both stages and links them into a program. Compile and link
    /// failures carry the driver info log.
    fn create_program(&self, vertex_src: &str, fragment_src: &str) -> Result<Self::Program, GlError>;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::Uniform>;
    fn set_uniform_f32(&self, location: &Self::Uniform, value: f32);

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn clear(&self);

    /// Indexed draw over `index_count` u32 indices, triangle list topology.
    fn draw_indexed_triangles(&self, index_count: i32);
}
