//! Logging setup for the engine and its demo binaries

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from the `RUST_LOG` environment.
pub fn init() {
    env_logger::init();
}

/// Initialize logging with a default level.
///
/// `RUST_LOG` still overrides the default when set.
pub fn init_with_level(level: log::LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
