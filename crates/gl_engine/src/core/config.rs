//! Window and shader configuration
//!
//! Plain in-memory configuration with sensible defaults. There is no
//! config file, environment, or CLI surface: the demo's only persisted
//! inputs are the two shader source files.

use std::path::Path;

/// Window creation parameters
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Requested width in screen coordinates
    pub width: u32,
    /// Requested height in screen coordinates
    pub height: u32,
    /// Window title
    pub title: String,
}

impl WindowConfig {
    /// Create window parameters
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
        }
    }

    /// Whether the parameters satisfy the window preconditions:
    /// positive dimensions and a non-empty title.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0 && !self.title.is_empty()
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new(1024, 768, "Quad demo")
    }
}

/// Shader source locations for the quad pipeline
#[derive(Debug, Clone)]
pub struct ShaderConfig {
    /// Path to the vertex shader GLSL file
    pub vertex_shader_path: String,
    /// Path to the fragment shader GLSL file
    pub fragment_shader_path: String,
}

impl ShaderConfig {
    /// Create a shader configuration from explicit paths
    pub fn new(vertex_path: impl Into<String>, fragment_path: impl Into<String>) -> Self {
        Self {
            vertex_shader_path: vertex_path.into(),
            fragment_shader_path: fragment_path.into(),
        }
    }

    /// Create shader config with automatic path resolution.
    ///
    /// Tries a fixed list of conventional shader directories, useful when
    /// the demo is launched from the workspace root, the crate directory,
    /// or next to the binary. Falls back to the first candidate when no
    /// file is found, so the later load failure reports a sensible path.
    pub fn with_path_resolution(vertex_name: &str, fragment_name: &str) -> Self {
        let shader_dirs = [
            "resources/shaders/",
            "shaders/",
            "../resources/shaders/",
            "../../resources/shaders/",
            "./",
        ];

        let resolve = |name: &str| {
            for dir in &shader_dirs {
                let candidate = format!("{dir}{name}");
                if Path::new(&candidate).exists() {
                    return candidate;
                }
            }
            format!("{}{}", shader_dirs[0], name)
        };

        Self {
            vertex_shader_path: resolve(vertex_name),
            fragment_shader_path: resolve(fragment_name),
        }
    }
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self::with_path_resolution("quad.vert", "quad.frag")
    }
}

/// Top-level configuration for the demo application
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Window creation parameters
    pub window: WindowConfig,
    /// Shader source locations
    pub shaders: ShaderConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_config_is_valid() {
        let config = WindowConfig::default();
        assert!(config.is_valid());
        assert_eq!((config.width, config.height), (1024, 768));
    }

    #[test]
    fn test_zero_dimensions_are_invalid() {
        assert!(!WindowConfig::new(0, 768, "quad").is_valid());
        assert!(!WindowConfig::new(1024, 0, "quad").is_valid());
    }

    #[test]
    fn test_empty_title_is_invalid() {
        assert!(!WindowConfig::new(1024, 768, "").is_valid());
    }

    #[test]
    fn test_shader_paths_fall_back_to_resources_dir() {
        let config = ShaderConfig::with_path_resolution("missing.vert", "missing.frag");
        assert_eq!(config.vertex_shader_path, "resources/shaders/missing.vert");
        assert_eq!(config.fragment_shader_path, "resources/shaders/missing.frag");
    }
}
