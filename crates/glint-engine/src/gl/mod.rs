//! GL object model.
//!
//! This module is responsible for:
//! - the [`GlApi`] trait, the narrow slice of the GL surface the program uses
//! - owning wrappers for buffer objects, vertex arrays and shader programs
//! - the real backend over [`glow`]
//!
//! Wrappers are generic over the backend so lifecycle behavior is testable
//! against a recording fake without a live context.

mod api;
mod backend;
mod buffer;
mod shader;
mod vertex_array;

pub use api::{AttribType, AttributeLink, BufferKind, GlApi, GlError};
pub use backend::GlowGl;
pub use buffer::BufferObject;
pub use shader::ShaderProgram;
pub use vertex_array::VertexArray;
