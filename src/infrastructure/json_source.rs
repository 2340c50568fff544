// src/infrastructure/json_source.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use walkdir::WalkDir;

use crate::application::NoteSource;
use crate::domain::{DomainError, KeepNote};

/// Keep Takeout directory: every `*.json` file directly inside it is one note
#[derive(Debug)]
pub struct JsonDirectorySource {
    input_dir: PathBuf,
}

impl JsonDirectorySource {
    pub fn new(input_dir: impl AsRef<Path>) -> Self {
        Self {
            input_dir: input_dir.as_ref().to_path_buf(),
        }
    }
}

impl NoteSource for JsonDirectorySource {
    fn entries(&mut self) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(&self.input_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.with_context(|| {
                format!("Failed to read input directory {}", self.input_dir.display())
            })?;
            let is_json = entry.path().extension().is_some_and(|ext| ext == "json");

            // Symlinks count too; a dangling one surfaces later as a read failure
            if !entry.file_type().is_dir() && is_json {
                entries.push(entry.into_path());
            }
        }

        debug!(dir = %self.input_dir.display(), count = entries.len(), "Listed note files");
        Ok(entries)
    }

    #[instrument(level = "debug", skip(self))]
    fn load(&mut self, entry: &Path) -> Result<KeepNote, DomainError> {
        read_keep_note(entry)
    }
}

/// Read and parse one Keep JSON note file
pub fn read_keep_note(path: impl AsRef<Path>) -> Result<KeepNote, DomainError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&content)?)
}
