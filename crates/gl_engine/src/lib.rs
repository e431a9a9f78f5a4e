//! # GL Engine
//!
//! A minimal OpenGL rendering library built on GLFW. It covers the
//! smallest useful slice of a renderer: open a window, bring up a
//! core-profile context, compile a shader pair, and draw a fixed quad
//! every frame.
//!
//! ## Features
//!
//! - **Context Bootstrap**: GLFW window creation with OpenGL 3.3 core profile
//! - **Shader Pipeline**: GLSL compilation and program linking with full driver logs
//! - **RAII Resources**: Every device object is released when its wrapper drops
//! - **Typed Errors**: Failures carry the originating diagnostic, callers choose presentation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::default();
//!     let mut window = Window::new(&config.window)?;
//!     let renderer = Renderer::new(&window, &config.shaders)?;
//!
//!     while !window.should_close() {
//!         renderer.render_frame();
//!         window.swap_buffers();
//!         window.poll_events();
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod assets;
pub mod core;
pub mod foundation;
pub mod render;

/// Common imports for library users
pub mod prelude {
    pub use crate::core::config::{AppConfig, ShaderConfig, WindowConfig};
    pub use crate::render::{
        check_gl_error,
        shader::{Shader, ShaderError, ShaderProgram, ShaderStage},
        RenderError, Renderer, Window, WindowError,
    };
}
