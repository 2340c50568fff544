// src/application/mod.rs
pub mod converter;

pub use converter::{
    ArchiveSink, ConversionReport, ExportOptions, NoteConverter, NoteSource,
};
