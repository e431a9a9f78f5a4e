//! Asset loading

pub mod text_loader;

pub use text_loader::text_from_file;
