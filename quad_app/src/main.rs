//! Quad demo application
//!
//! Opens a window, brings up an OpenGL 3.3 core context, compiles the
//! quad shader pair, and draws two triangles per frame until the user
//! closes the window or presses Escape.

use gl_engine::core::config::AppConfig;
use gl_engine::foundation::logging;
use gl_engine::render::{check_gl_error, Renderer, Window};
use glfw::{Action, Key, WindowEvent};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    logging::init_with_level(log::LevelFilter::Info);

    log::info!("Starting quad demo");

    let config = AppConfig::default();

    let mut window = match Window::new(&config.window) {
        Ok(window) => window,
        Err(err) => {
            log::error!("Window bootstrap failed: {err}");
            return Err(err.into());
        }
    };

    let renderer = match Renderer::new(&window, &config.shaders) {
        Ok(renderer) => renderer,
        Err(err) => {
            // The window and GLFW state are released when `window` drops;
            // the render loop never starts.
            log::error!("Geometry setup failed: {err}");
            return Err(err.into());
        }
    };
    check_gl_error();

    while !window.should_close() {
        renderer.render_frame();

        window.swap_buffers();
        window.poll_events();

        let pending: Vec<(f64, WindowEvent)> = window.flush_events().collect();
        for (_, event) in pending {
            if let WindowEvent::Key(Key::Escape, _, Action::Press, _) = event {
                window.set_should_close(true);
            }
        }
    }

    check_gl_error();
    log::info!("Quad demo finished");
    Ok(())
}
