// src/util/testing.rs

use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{ArchiveSink, NoteSource};
use crate::domain::{DomainError, KeepNote};

enum MockEntry {
    Note(KeepNote),
    InvalidJson,
    ReadFailure,
}

/// In-memory note source for exercising the batch driver
///
/// Entries are offered in the order they were added.
///
/// # Examples
///
/// ```
/// use keep2enex::util::testing::MockNoteSource;
/// use keep2enex::domain::KeepNote;
///
/// let source = MockNoteSource::builder()
///     .with_note("a.json", KeepNote::default())
///     .with_invalid_json("b.json")
///     .build();
/// ```
pub struct MockNoteSource {
    entries: Vec<(PathBuf, MockEntry)>,
}

impl MockNoteSource {
    pub fn builder() -> MockNoteSourceBuilder {
        MockNoteSourceBuilder::new()
    }
}

impl NoteSource for MockNoteSource {
    fn entries(&mut self) -> Result<Vec<PathBuf>> {
        Ok(self.entries.iter().map(|(path, _)| path.clone()).collect())
    }

    fn load(&mut self, entry: &Path) -> Result<KeepNote, DomainError> {
        match self.entries.iter().find(|(path, _)| path == entry) {
            Some((_, MockEntry::Note(note))) => Ok(note.clone()),
            Some((_, MockEntry::InvalidJson)) => {
                Err(serde_json::from_str::<KeepNote>("{").unwrap_err().into())
            }
            Some((_, MockEntry::ReadFailure)) | None => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", entry.display()),
            )
            .into()),
        }
    }
}

/// Builder for MockNoteSource
pub struct MockNoteSourceBuilder {
    entries: Vec<(PathBuf, MockEntry)>,
}

impl MockNoteSourceBuilder {
    pub fn new() -> Self {
        Self { entries: vec![] }
    }

    /// Add an entry that loads as `note`
    pub fn with_note(mut self, name: &str, note: KeepNote) -> Self {
        self.entries.push((PathBuf::from(name), MockEntry::Note(note)));
        self
    }

    /// Add an entry whose JSON cannot be parsed
    pub fn with_invalid_json(mut self, name: &str) -> Self {
        self.entries.push((PathBuf::from(name), MockEntry::InvalidJson));
        self
    }

    /// Add an entry that cannot be read
    pub fn with_read_failure(mut self, name: &str) -> Self {
        self.entries.push((PathBuf::from(name), MockEntry::ReadFailure));
        self
    }

    pub fn build(self) -> MockNoteSource {
        MockNoteSource {
            entries: self.entries,
        }
    }
}

impl Default for MockNoteSourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Archive sink that keeps `(file name, contents)` pairs in memory
#[derive(Debug, Default)]
pub struct MemoryArchiveSink {
    pub prepared: bool,
    pub archives: Vec<(String, String)>,
}

impl ArchiveSink for MemoryArchiveSink {
    fn prepare(&mut self) -> Result<()> {
        self.prepared = true;
        Ok(())
    }

    fn write_archive(&mut self, file_name: &str, contents: &str) -> Result<PathBuf> {
        self.archives
            .push((file_name.to_string(), contents.to_string()));
        Ok(PathBuf::from(file_name))
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["html5ever", "selectors", "scraper"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
