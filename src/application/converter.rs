// src/application/converter.rs
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use tracing::{debug, error, info, warn};

use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_FILE_STEM, ENEX_EXTENSION};
use crate::domain::{DomainError, KeepNote, RecordOutcome, SkipReason};
use crate::ports::enex::render_archive;
use crate::ports::EnexNote;
use crate::util::time::format_enex_date;

/// Where source records come from
pub trait NoteSource {
    /// Candidate records, in processing order
    fn entries(&mut self) -> Result<Vec<PathBuf>>;

    fn load(&mut self, entry: &Path) -> Result<KeepNote, DomainError>;
}

/// Where finished archives go
pub trait ArchiveSink {
    /// Called once the source has been listed, before any record is converted
    fn prepare(&mut self) -> Result<()> {
        Ok(())
    }

    /// Persist one archive under `file_name`, returning where it ended up
    fn write_archive(&mut self, file_name: &str, contents: &str) -> Result<PathBuf>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub split: bool,
    pub chunk_size: usize,
    pub file_stem: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            split: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
            file_stem: DEFAULT_FILE_STEM.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ConversionReport {
    pub converted: usize,
    pub skipped: Vec<(PathBuf, SkipReason)>,
    pub written: Vec<PathBuf>,
}

/// Batch driver: convert every record the source offers, then write archives
pub struct NoteConverter<S: NoteSource, W: ArchiveSink> {
    source: S,
    sink: W,
    options: ExportOptions,
}

impl<S: NoteSource, W: ArchiveSink> NoteConverter<S, W> {
    pub fn new(source: S, sink: W, options: ExportOptions) -> Self {
        Self {
            source,
            sink,
            options,
        }
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Convert one record; failures are reported, never propagated
    pub fn convert_entry(&mut self, entry: &Path) -> RecordOutcome {
        let note = match self.source.load(entry) {
            Ok(note) => note,
            Err(e) => return RecordOutcome::Skipped(e.into()),
        };

        if note.is_trashed {
            return RecordOutcome::Skipped(SkipReason::Trashed);
        }

        match EnexNote::from_keep(&note) {
            Ok(enex) => {
                info!(title = %note.title, "Converted note");
                RecordOutcome::Converted(enex.to_xml())
            }
            Err(e) => RecordOutcome::Skipped(e.into()),
        }
    }

    /// Run the whole batch.
    ///
    /// Only failures to list the source or to write an archive are errors;
    /// an empty batch writes nothing and returns an empty report.
    pub fn convert(&mut self) -> Result<ConversionReport> {
        let entries = self.source.entries()?;
        debug!(count = entries.len(), "Found candidate note files");
        self.sink.prepare()?;

        let mut report = ConversionReport::default();
        let mut fragments = Vec::with_capacity(entries.len());

        for entry in entries {
            match self.convert_entry(&entry) {
                RecordOutcome::Converted(fragment) => fragments.push(fragment),
                RecordOutcome::Skipped(reason) => {
                    if reason.is_error() {
                        error!(path = %entry.display(), %reason, "Failed to convert note file");
                    } else {
                        info!(path = %entry.display(), "Skipping trashed note");
                    }
                    report.skipped.push((entry, reason));
                }
            }
        }
        report.converted = fragments.len();

        if fragments.is_empty() {
            warn!("No valid notes found to convert");
            return Ok(report);
        }

        let export_date = format_enex_date(&Local::now());
        for (file_name, chunk) in plan_archives(&fragments, &self.options) {
            let path = self
                .sink
                .write_archive(&file_name, &render_archive(&export_date, chunk))?;
            info!(path = %path.display(), notes = chunk.len(), "Created archive");
            report.written.push(path);
        }

        Ok(report)
    }
}

/// Split into numbered files of `chunk_size` only when asked to and when
/// there are more fragments than fit in one chunk
pub fn plan_archives<'a>(
    fragments: &'a [String],
    options: &ExportOptions,
) -> Vec<(String, &'a [String])> {
    let stem = &options.file_stem;

    if options.split && fragments.len() > options.chunk_size {
        fragments
            .chunks(options.chunk_size.max(1))
            .enumerate()
            .map(|(i, chunk)| (format!("{stem}_{}.{ENEX_EXTENSION}", i + 1), chunk))
            .collect()
    } else {
        vec![(format!("{stem}.{ENEX_EXTENSION}"), fragments)]
    }
}
