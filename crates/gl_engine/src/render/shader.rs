//! Shader compilation and program linking
//!
//! GLSL source loading and shader object lifecycle following RAII
//! patterns. Compile and link failures carry the full driver diagnostic
//! log; callers choose how to present it.

use std::ffi::{CStr, CString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::ptr;

use gl::types::{GLenum, GLint, GLsizei, GLuint};
use thiserror::Error;

use crate::assets::text_from_file;

/// Shader pipeline errors
#[derive(Error, Debug)]
pub enum ShaderError {
    #[error("shader source {} is missing or empty", .path.display())]
    MissingSource { path: PathBuf },

    #[error("shader source {} contains an interior nul byte", .path.display())]
    InvalidSource { path: PathBuf },

    #[error("{} shader {} failed to compile:\n{}", .stage, .path.display(), .log)]
    CompileFailed {
        stage: ShaderStage,
        path: PathBuf,
        log: String,
    },

    #[error("shader program link failed:\n{log}")]
    LinkFailed { log: String },
}

/// Result alias for shader operations
pub type ShaderResult<T> = Result<T, ShaderError>;

/// Programmable pipeline stage a shader object is compiled for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Per-vertex stage
    Vertex,
    /// Per-fragment stage
    Fragment,
}

impl ShaderStage {
    /// The OpenGL shader-kind enum for this stage
    pub fn gl_enum(self) -> GLenum {
        match self {
            Self::Vertex => gl::VERTEX_SHADER,
            Self::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex"),
            Self::Fragment => write!(f, "fragment"),
        }
    }
}

/// Compiled shader object with RAII cleanup.
///
/// Exists only between compilation and attachment to a program; once
/// attached, the program holds its own copy and the standalone object
/// can be dropped.
#[derive(Debug)]
pub struct Shader {
    handle: GLuint,
    stage: ShaderStage,
}

impl Shader {
    /// Load the source at `path` and compile it for `stage`.
    ///
    /// Missing or empty source fails before any device call is made. A
    /// compile failure deletes the partially created shader object and
    /// returns the driver's diagnostic log.
    pub fn from_file<P: AsRef<Path>>(stage: ShaderStage, path: P) -> ShaderResult<Self> {
        let path = path.as_ref();

        let source = text_from_file(path);
        if source.is_empty() {
            return Err(ShaderError::MissingSource {
                path: path.to_path_buf(),
            });
        }
        let source = CString::new(source).map_err(|_| ShaderError::InvalidSource {
            path: path.to_path_buf(),
        })?;

        log::info!("Compiling {} shader {}", stage, path.display());
        match compile(stage, &source) {
            Ok(handle) => {
                log::info!("{} compiled OK", path.display());
                Ok(Self { handle, stage })
            }
            Err(log) => Err(ShaderError::CompileFailed {
                stage,
                path: path.to_path_buf(),
                log,
            }),
        }
    }

    /// Raw shader object id
    pub fn handle(&self) -> GLuint {
        self.handle
    }

    /// Stage this shader was compiled for
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.handle);
        }
    }
}

/// Submit `source` to the driver; returns the compiled object id or the
/// compiler log. The failed object is deleted rather than leaked.
fn compile(stage: ShaderStage, source: &CStr) -> Result<GLuint, String> {
    let handle = unsafe { gl::CreateShader(stage.gl_enum()) };
    unsafe {
        gl::ShaderSource(handle, 1, &source.as_ptr(), ptr::null());
        gl::CompileShader(handle);
    }

    let mut status: GLint = 0;
    unsafe {
        gl::GetShaderiv(handle, gl::COMPILE_STATUS, &mut status);
    }
    if status == GLint::from(gl::TRUE) {
        Ok(handle)
    } else {
        let log = shader_info_log(handle);
        unsafe {
            gl::DeleteShader(handle);
        }
        Err(log)
    }
}

/// Linked shader program with RAII cleanup
pub struct ShaderProgram {
    handle: GLuint,
}

impl ShaderProgram {
    /// Create an empty program object. Requires a current context.
    pub fn new() -> Self {
        Self {
            handle: unsafe { gl::CreateProgram() },
        }
    }

    /// Compile both stages from disk, attach them, and link.
    ///
    /// The standalone shader objects are destroyed once attached; the
    /// program retains its own copies.
    pub fn from_files<P: AsRef<Path>>(vertex_path: P, fragment_path: P) -> ShaderResult<Self> {
        let vertex = Shader::from_file(ShaderStage::Vertex, vertex_path)?;
        let fragment = Shader::from_file(ShaderStage::Fragment, fragment_path)?;

        let mut program = Self::new();
        program.attach(&vertex);
        program.attach(&fragment);
        drop(vertex);
        drop(fragment);

        program.link()?;
        log::info!("Shader program linked");
        Ok(program)
    }

    /// Attach a compiled shader stage; the program keeps its own copy.
    pub fn attach(&mut self, shader: &Shader) {
        unsafe {
            gl::AttachShader(self.handle, shader.handle());
        }
    }

    /// Link the currently attached stages into an executable program.
    ///
    /// Does not attach or detach shaders; that is the caller's job.
    pub fn link(&mut self) -> ShaderResult<()> {
        unsafe {
            gl::LinkProgram(self.handle);
        }

        let mut status: GLint = 0;
        unsafe {
            gl::GetProgramiv(self.handle, gl::LINK_STATUS, &mut status);
        }
        if status == GLint::from(gl::TRUE) {
            Ok(())
        } else {
            Err(ShaderError::LinkFailed {
                log: program_info_log(self.handle),
            })
        }
    }

    /// Activate the program for subsequent draw calls
    pub fn bind(&self) {
        unsafe {
            gl::UseProgram(self.handle);
        }
    }

    /// Raw program object id
    pub fn handle(&self) -> GLuint {
        self.handle
    }
}

impl Default for ShaderProgram {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.handle);
        }
    }
}

/// Fetch the compiler log for a shader object into a growable string.
fn shader_info_log(handle: GLuint) -> String {
    let mut len: GLint = 0;
    unsafe {
        gl::GetShaderiv(handle, gl::INFO_LOG_LENGTH, &mut len);
    }
    if len <= 0 {
        return String::new();
    }

    let mut buf = vec![0u8; len as usize];
    let mut written: GLsizei = 0;
    unsafe {
        gl::GetShaderInfoLog(handle, len, &mut written, buf.as_mut_ptr().cast());
    }
    buf.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Fetch the linker log for a program object into a growable string.
fn program_info_log(handle: GLuint) -> String {
    let mut len: GLint = 0;
    unsafe {
        gl::GetProgramiv(handle, gl::INFO_LOG_LENGTH, &mut len);
    }
    if len <= 0 {
        return String::new();
    }

    let mut buf = vec![0u8; len as usize];
    let mut written: GLsizei = 0;
    unsafe {
        gl::GetProgramInfoLog(handle, len, &mut written, buf.as_mut_ptr().cast());
    }
    buf.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_stage_maps_to_gl_enum() {
        assert_eq!(ShaderStage::Vertex.gl_enum(), gl::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_enum(), gl::FRAGMENT_SHADER);
    }

    #[test]
    fn test_stage_display_names() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }

    #[test]
    fn test_missing_source_fails_before_any_device_call() {
        // The test process owns no GL context, so reaching the driver
        // would abort; a missing file must fail purely on the CPU side.
        let result = Shader::from_file(ShaderStage::Fragment, "no/such/shader.glsl");
        assert!(matches!(result, Err(ShaderError::MissingSource { .. })));
    }

    #[test]
    fn test_missing_source_message_names_the_path() {
        let err = Shader::from_file(ShaderStage::Vertex, "no/such/shader.glsl").unwrap_err();
        assert!(err.to_string().contains("no/such/shader.glsl"));
    }

    #[test]
    fn test_interior_nul_rejected_before_compile() {
        let path = env::temp_dir().join("gl_engine_nul_shader_test.glsl");
        fs::write(&path, b"void main() {\0}").expect("failed to write fixture");

        let result = Shader::from_file(ShaderStage::Vertex, &path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ShaderError::InvalidSource { .. })));
    }
}
