//! # Rendering System
//!
//! OpenGL context bootstrap, shader pipeline, and per-frame drawing.
//!
//! The pieces mirror the program's startup order:
//! - **Window**: GLFW window owning the OpenGL context
//! - **Shader / ShaderProgram**: GLSL compilation and program linking
//! - **Buffers**: vertex buffer and vertex array wrappers
//! - **Renderer**: the quad geometry and the per-frame draw
//!
//! Everything targets the single context made current on the main
//! thread; no other thread touches the device.

pub mod buffer;
pub mod renderer;
pub mod shader;
pub mod window;

// High-level types that applications use
pub use renderer::{check_gl_error, RenderError, RenderResult, Renderer};
pub use window::{Window, WindowError, WindowResult};
