// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::Result;
use application::{ConversionReport, NoteConverter};
use infrastructure::{Config, DirectoryArchiveSink, JsonDirectorySource};
use tracing::{debug, info};

use crate::cli::args::Args;

pub fn run(args: Args) -> Result<ConversionReport> {
    debug!(?args, "Starting keep2enex with arguments");

    let config = Config::load_or_default(args.config.as_deref())?;
    debug!(?config, "Loaded configuration");

    let source = JsonDirectorySource::new(&args.input_dir);
    let sink = DirectoryArchiveSink::new(&args.output_dir);
    let mut converter = NoteConverter::new(source, sink, config.export_options(args.split));

    let report = converter.convert()?;
    info!(
        converted = report.converted,
        skipped = report.skipped.len(),
        files = report.written.len(),
        "Conversion finished"
    );

    Ok(report)
}
