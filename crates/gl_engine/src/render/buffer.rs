//! Vertex buffer and vertex array objects
//!
//! Device-side geometry storage following RAII patterns.

use gl::types::{GLfloat, GLsizeiptr, GLuint};

/// Vertex buffer object holding static per-vertex data
pub struct VertexBuffer {
    handle: GLuint,
}

impl VertexBuffer {
    /// Create a buffer and upload `vertices` with the static-draw usage
    /// hint; the data is not modified again after upload. The
    /// array-buffer binding is cleared before returning.
    pub fn new(vertices: &[GLfloat]) -> Self {
        let mut handle: GLuint = 0;
        unsafe {
            gl::GenBuffers(1, &mut handle);
            gl::BindBuffer(gl::ARRAY_BUFFER, handle);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                std::mem::size_of_val(vertices) as GLsizeiptr,
                vertices.as_ptr().cast(),
                gl::STATIC_DRAW,
            );
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }
        Self { handle }
    }

    /// Bind at the array-buffer target
    pub fn bind(&self) {
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, self.handle);
        }
    }

    /// Clear the array-buffer binding
    pub fn unbind() {
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }
    }

    /// Raw buffer object id
    pub fn handle(&self) -> GLuint {
        self.handle
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.handle);
        }
    }
}

/// Vertex array object recording buffer bindings and attribute layout.
///
/// While bound, buffer and attribute calls are captured so a later bind
/// replays them without redoing the setup.
pub struct VertexArray {
    handle: GLuint,
}

impl VertexArray {
    /// Create an unbound vertex array object
    pub fn new() -> Self {
        let mut handle: GLuint = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut handle);
        }
        Self { handle }
    }

    /// Bind; subsequent buffer and attribute calls are recorded
    pub fn bind(&self) {
        unsafe {
            gl::BindVertexArray(self.handle);
        }
    }

    /// Clear the vertex-array binding
    pub fn unbind() {
        unsafe {
            gl::BindVertexArray(0);
        }
    }

    /// Raw vertex array object id
    pub fn handle(&self) -> GLuint {
        self.handle
    }
}

impl Default for VertexArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.handle);
        }
    }
}
