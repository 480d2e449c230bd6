use super::api::{BufferKind, GlApi, GlError};

/// Owning wrapper around one GPU-resident buffer.
///
/// The backing allocation is created and filled exactly once at construction;
/// there is no re-upload or resize path. Deletion consumes the wrapper, so a
/// released handle cannot be bound again.
pub struct BufferObject<G: GlApi> {
    handle: G::Buffer,
    kind: BufferKind,
    byte_len: usize,
}

impl<G: GlApi> BufferObject<G> {
    /// Allocates a buffer of `kind` and uploads `bytes` immediately.
    ///
    /// The buffer is left bound to its target, matching the upload; callers
    /// that care unbind explicitly once configuration is done.
    pub fn new(gl: &G, kind: BufferKind, bytes: &[u8]) -> Result<Self, GlError> {
        let handle = gl.create_buffer()?;
        gl.bind_buffer(kind, Some(handle));
        gl.buffer_data(kind, bytes);
        Ok(Self {
            handle,
            kind,
            byte_len: bytes.len(),
        })
    }

    /// Makes this buffer the active one for its kind. Global pipeline state
    /// mutation; no return value.
    pub fn bind(&self, gl: &G) {
        gl.bind_buffer(self.kind, Some(self.handle));
    }

    /// Resets the active buffer of this kind to none, so later code cannot
    /// mutate this buffer by accident.
    pub fn unbind(&self, gl: &G) {
        gl.bind_buffer(self.kind, None);
    }

    /// Releases the GPU-side allocation.
    pub fn delete(self, gl: &G) {
        gl.delete_buffer(self.handle);
    }

    pub fn kind(&self) -> BufferKind {
        self.kind
    }

    /// Size of the uploaded contents in bytes.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingGl};

    #[test]
    fn create_bind_unbind_delete_allocates_and_releases_once() {
        let gl = RecordingGl::new();
        let buffer = BufferObject::new(&gl, BufferKind::Vertex, &[0u8; 24]).unwrap();
        buffer.bind(&gl);
        buffer.unbind(&gl);
        buffer.delete(&gl);

        let calls = gl.calls();
        let allocations = calls
            .iter()
            .filter(|c| matches!(c, Call::CreateBuffer(_)))
            .count();
        let releases = calls
            .iter()
            .filter(|c| matches!(c, Call::DeleteBuffer(_)))
            .count();
        assert_eq!(allocations, 1);
        assert_eq!(releases, 1);

        // Bind/unbind observed strictly in the order issued. Creation binds
        // once for the upload; the explicit pair follows.
        let toggles: Vec<_> = calls
            .iter()
            .filter_map(|c| match c {
                Call::BindBuffer(BufferKind::Vertex, id) => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(toggles, vec![Some(1), Some(1), None]);
    }

    #[test]
    fn delete_without_bind_still_releases_once() {
        let gl = RecordingGl::new();
        let buffer = BufferObject::new(&gl, BufferKind::Index, &[0u8; 12]).unwrap();
        buffer.delete(&gl);

        let releases = gl
            .calls()
            .iter()
            .filter(|c| matches!(c, Call::DeleteBuffer(_)))
            .count();
        assert_eq!(releases, 1);
    }

    #[test]
    fn upload_happens_exactly_once_with_full_size() {
        let gl = RecordingGl::new();
        let buffer = BufferObject::new(&gl, BufferKind::Vertex, &[7u8; 144]).unwrap();
        assert_eq!(buffer.byte_len(), 144);

        let uploads: Vec<_> = gl
            .calls()
            .iter()
            .filter_map(|c| match c {
                Call::BufferData(kind, len) => Some((*kind, *len)),
                _ => None,
            })
            .collect();
        assert_eq!(uploads, vec![(BufferKind::Vertex, 144)]);
    }
}
