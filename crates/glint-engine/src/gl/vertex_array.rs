use super::api::{AttributeLink, BufferKind, GlApi, GlError};
use super::buffer::BufferObject;

/// Owning wrapper around one vertex array: the binding table that tells the
/// pipeline how to read bound buffers as typed attributes.
///
/// The array owns no buffer memory. It keeps a CPU-side copy of the link
/// table (slot-keyed, last-write-wins) and the index count of the associated
/// index buffer, so draw calls don't have to re-derive either.
pub struct VertexArray<G: GlApi> {
    handle: G::VertexArray,
    links: Vec<AttributeLink>,
    index_count: Option<usize>,
}

impl<G: GlApi> VertexArray<G> {
    /// Allocates a new, empty binding-table handle.
    pub fn new(gl: &G) -> Result<Self, GlError> {
        let handle = gl.create_vertex_array()?;
        Ok(Self {
            handle,
            links: Vec::new(),
            index_count: None,
        })
    }

    pub fn bind(&self, gl: &G) {
        gl.bind_vertex_array(Some(self.handle));
    }

    pub fn unbind(&self, gl: &G) {
        gl.bind_vertex_array(None);
    }

    /// Releases the binding-table handle. Linked buffers are unaffected.
    pub fn delete(self, gl: &G) {
        gl.delete_vertex_array(self.handle);
    }

    /// Records `link` and enables its slot for drawing.
    ///
    /// This array and `buffer` must both be bound when called; the pointer
    /// call captures whichever vertex buffer is active. Linking a slot that
    /// is already in use replaces the previous link.
    pub fn link_buffer(&mut self, gl: &G, buffer: &BufferObject<G>, link: AttributeLink) {
        debug_assert_eq!(buffer.kind(), BufferKind::Vertex);

        gl.enable_vertex_attrib_array(link.slot);
        gl.vertex_attrib_pointer(&link);

        match self.links.iter_mut().find(|l| l.slot == link.slot) {
            Some(existing) => *existing = link,
            None => self.links.push(link),
        }
    }

    /// Attaches `buffer` as this array's index buffer.
    ///
    /// The array must be bound: binding an index buffer while a vertex array
    /// is active records the association in the array's state. The array
    /// keeps only the element count, not ownership.
    pub fn set_index_buffer(&mut self, gl: &G, buffer: &BufferObject<G>) {
        debug_assert_eq!(buffer.kind(), BufferKind::Index);

        buffer.bind(gl);
        self.index_count = Some(buffer.byte_len() / size_of::<u32>());
    }

    /// Element count of the attached index buffer, if one was set.
    pub fn index_count(&self) -> Option<usize> {
        self.index_count
    }

    /// The recorded attribute links, one entry per occupied slot.
    pub fn links(&self) -> &[AttributeLink] {
        &self.links
    }
}
