use std::path::Path;

use anyhow::{Context, Result};

use super::api::GlApi;

/// Owning wrapper around one linked shader program.
///
/// Compilation and linking live behind [`GlApi::create_program`]; this type
/// only handles source loading, uniform lookup and the usual lifecycle. A
/// compile or link failure is fatal to startup and propagates as an error.
pub struct ShaderProgram<G: GlApi> {
    handle: G::Program,
}

impl<G: GlApi> std::fmt::Debug for ShaderProgram<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShaderProgram")
            .field("handle", &self.handle)
            .finish()
    }
}

impl<G: GlApi> ShaderProgram<G> {
    /// Reads the two stage sources from disk and links them into a program.
    pub fn from_files(gl: &G, vertex_path: &Path, fragment_path: &Path) -> Result<Self> {
        let vertex_src = std::fs::read_to_string(vertex_path)
            .with_context(|| format!("failed to read vertex shader {}", vertex_path.display()))?;
        let fragment_src = std::fs::read_to_string(fragment_path).with_context(|| {
            format!("failed to read fragment shader {}", fragment_path.display())
        })?;

        let handle = gl
            .create_program(&vertex_src, &fragment_src)
            .context("shader program creation failed")?;

        Ok(Self { handle })
    }

    /// Selects this program for subsequent draw calls.
    pub fn bind(&self, gl: &G) {
        gl.use_program(Some(self.handle));
    }

    pub fn unbind(&self, gl: &G) {
        gl.use_program(None);
    }

    pub fn delete(self, gl: &G) {
        gl.delete_program(self.handle);
    }

    /// Looks up a named uniform. `None` means the driver optimized it out or
    /// the name doesn't exist; setting values goes through the returned handle.
    pub fn uniform(&self, gl: &G, name: &str) -> Option<G::Uniform> {
        gl.uniform_location(self.handle, name)
    }
}
