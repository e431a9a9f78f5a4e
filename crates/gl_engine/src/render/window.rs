//! Window and OpenGL context management using GLFW
//!
//! Provides window creation, context bootstrap, and event plumbing for
//! the render loop.

use glfw::Context;
use thiserror::Error;

use crate::core::config::WindowConfig;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("invalid window configuration: dimensions must be positive and the title non-empty")]
    InvalidConfig,

    #[error("GLFW initialization failed")]
    InitializationFailed,

    #[error("window creation failed")]
    CreationFailed,

    #[error("OpenGL function loading failed: {0}")]
    GlLoadFailed(String),
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper owning the OpenGL context.
///
/// At most one is created per process run. Dropping it destroys the
/// window and releases GLFW's process-wide state, on error paths too.
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl Window {
    /// Create the window and make its OpenGL context current.
    ///
    /// Initializes GLFW, requests a core-profile 3.3 context with the
    /// framebuffer layout the renderer expects, loads the OpenGL entry
    /// points against the new context, and sizes the viewport to the
    /// actual framebuffer. The caller decides whether a failure
    /// terminates the process.
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        if !config.is_valid() {
            return Err(WindowError::InvalidConfig);
        }

        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| WindowError::InitializationFailed)?;
        log::info!("GLFW initialized");

        // Core-profile OpenGL 3.3 minimum with a fixed framebuffer layout
        // and 4x multisampling.
        glfw.window_hint(glfw::WindowHint::RedBits(Some(8)));
        glfw.window_hint(glfw::WindowHint::GreenBits(Some(8)));
        glfw.window_hint(glfw::WindowHint::BlueBits(Some(8)));
        glfw.window_hint(glfw::WindowHint::AlphaBits(Some(0)));
        glfw.window_hint(glfw::WindowHint::DepthBits(Some(24)));
        glfw.window_hint(glfw::WindowHint::StencilBits(Some(8)));
        glfw.window_hint(glfw::WindowHint::Samples(Some(4)));
        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));

        let (mut window, events) = glfw
            .create_window(
                config.width,
                config.height,
                &config.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or(WindowError::CreationFailed)?;
        log::info!("Window created ({}x{})", config.width, config.height);

        window.make_current();

        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);
        if !gl::Viewport::is_loaded() || !gl::DrawArrays::is_loaded() {
            return Err(WindowError::GlLoadFailed(
                "core entry points did not resolve".to_string(),
            ));
        }
        log::info!("OpenGL functions loaded");

        // The framebuffer can be larger than the requested window size on
        // high-density displays; the viewport must match the framebuffer.
        let (fb_width, fb_height) = window.get_framebuffer_size();
        unsafe {
            gl::Viewport(0, 0, fb_width, fb_height);
        }

        glfw.set_swap_interval(glfw::SwapInterval::None);

        // Latch key presses so a quick Escape tap is never missed between
        // polls.
        window.set_sticky_keys(true);
        window.set_key_polling(true);
        window.set_close_polling(true);

        Ok(Self {
            glfw,
            window,
            events,
        })
    }

    /// Check if the window should close
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Set the window's close flag
    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Process pending window-system events
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Iterate the events drained by the last `poll_events`
    pub fn flush_events(&self) -> glfw::FlushedMessages<(f64, glfw::WindowEvent)> {
        glfw::flush_messages(&self.events)
    }

    /// Present the back buffer
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    /// Framebuffer size in pixels
    pub fn get_framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_rejected_before_glfw_init() {
        // Validation must fail before any process-wide GLFW state is
        // touched; these run headless.
        let config = WindowConfig::new(0, 768, "quad");
        assert!(matches!(Window::new(&config), Err(WindowError::InvalidConfig)));

        let config = WindowConfig::new(1024, 0, "quad");
        assert!(matches!(Window::new(&config), Err(WindowError::InvalidConfig)));

        let config = WindowConfig::new(1024, 768, "");
        assert!(matches!(Window::new(&config), Err(WindowError::InvalidConfig)));
    }

    #[test]
    fn test_error_messages_name_the_failed_step() {
        assert!(WindowError::InitializationFailed
            .to_string()
            .contains("GLFW"));
        assert!(WindowError::CreationFailed.to_string().contains("creation"));
        assert!(WindowError::GlLoadFailed("x".to_string())
            .to_string()
            .contains("loading"));
    }
}
