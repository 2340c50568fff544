use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary Keep Takeout directory plus an output directory next to it
#[allow(dead_code)]
pub struct TakeoutFixture {
    _temp_dir: TempDir,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

#[allow(dead_code)]
impl TakeoutFixture {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let input_dir = temp_dir.path().join("Keep");
        std::fs::create_dir_all(&input_dir).context("Failed to create input directory")?;
        let output_dir = temp_dir.path().join("enex");

        Ok(Self {
            _temp_dir: temp_dir,
            input_dir,
            output_dir,
        })
    }

    /// Write one note file into the input directory
    pub fn add_note(&self, file_name: &str, note: &Value) -> Result<()> {
        self.add_raw(file_name, &serde_json::to_string_pretty(note)?)
    }

    pub fn add_raw(&self, file_name: &str, content: &str) -> Result<()> {
        std::fs::write(self.input_dir.join(file_name), content)
            .with_context(|| format!("Failed to write fixture {file_name}"))
    }

    /// `count` plain text notes titled `Note 000`, `Note 001`, ...
    pub fn add_text_notes(&self, count: usize) -> Result<()> {
        for i in 0..count {
            self.add_note(&format!("note_{i:03}.json"), &text_note(&format!("Note {i:03}")))?;
        }
        Ok(())
    }

    /// Sorted paths of everything written to the output directory
    pub fn output_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = match std::fs::read_dir(&self.output_dir) {
            Ok(entries) => entries.filter_map(|e| e.ok().map(|e| e.path())).collect(),
            Err(_) => vec![],
        };
        files.sort();
        files
    }

    pub fn read_output(&self, file_name: &str) -> String {
        read(&self.output_dir.join(file_name))
    }
}

#[allow(dead_code)]
pub fn text_note(title: &str) -> Value {
    json!({
        "title": title,
        "textContent": "Body",
        "createdTimestampUsec": 1582955199253000_i64,
        "userEditedTimestampUsec": 1582955199253000_i64,
    })
}

#[allow(dead_code)]
pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
}

#[allow(dead_code)]
pub fn count_notes(archive: &str) -> usize {
    archive.matches("<note>").count()
}

#[allow(dead_code)]
pub fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect()
}
