// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Args {
    /// Directory containing Keep JSON files
    #[arg(long, value_name = "PATH")]
    pub input_dir: PathBuf,

    /// Directory to save ENEX files (created if missing)
    #[arg(long, value_name = "PATH")]
    pub output_dir: PathBuf,

    /// Split output into multiple files if there are many notes
    #[arg(long)]
    pub split: bool,

    /// Optional TOML config file
    #[arg(long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
