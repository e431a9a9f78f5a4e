//! Whole-file text loading, used for shader sources

use std::fs;
use std::path::Path;

/// Read a text file fully into memory.
///
/// Returns the empty string when the file cannot be read, logging a
/// warning that names the path. Callers treat empty content as "no
/// source" and fail before touching the graphics device.
pub fn text_from_file<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            log::warn!("Could not load {}: {}", path.display(), err);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_missing_file_yields_empty_content() {
        let content = text_from_file("no/such/file.glsl");
        assert!(content.is_empty());
    }

    #[test]
    fn test_known_file_round_trips_exactly() {
        let path = env::temp_dir().join("gl_engine_text_loader_test.glsl");
        let expected = "#version 330 core\nvoid main() {}\n";
        fs::write(&path, expected).expect("failed to write fixture");

        let content = text_from_file(&path);
        fs::remove_file(&path).ok();

        assert_eq!(content, expected);
    }
}
