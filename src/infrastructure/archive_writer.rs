// src/infrastructure/archive_writer.rs
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::application::ArchiveSink;

/// Writes archives as files inside one output directory
#[derive(Debug)]
pub struct DirectoryArchiveSink {
    output_dir: PathBuf,
}

impl DirectoryArchiveSink {
    /// The directory itself is only created by `prepare`
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl ArchiveSink for DirectoryArchiveSink {
    /// Create `output_dir` (and parents) if absent
    fn prepare(&mut self) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output directory {}", self.output_dir.display())
        })
    }

    fn write_archive(&mut self, file_name: &str, contents: &str) -> Result<PathBuf> {
        let file_path = self.output_dir.join(file_name);

        File::create(&file_path)
            .with_context(|| format!("Failed to create archive at {}", file_path.display()))?
            .write_all(contents.as_bytes())
            .context("Failed to write archive contents")?;

        Ok(file_path)
    }
}
