// src/infrastructure/mod.rs
pub mod archive_writer;
pub mod config;
pub mod json_source;

pub use archive_writer::DirectoryArchiveSink;
pub use config::Config;
pub use json_source::JsonDirectorySource;
