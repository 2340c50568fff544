// src/infrastructure/config.rs
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::application::ExportOptions;
use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_FILE_STEM};

/// Optional TOML configuration for an export run
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ExportConfig {
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_file_stem")]
    pub file_stem: String,
}

fn default_chunk_size() -> usize { DEFAULT_CHUNK_SIZE }
fn default_file_stem() -> String { DEFAULT_FILE_STEM.to_string() }

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            file_stem: default_file_stem(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.export.chunk_size == 0 {
            bail!("export.chunk_size must be at least 1");
        }
        if self.export.file_stem.trim().is_empty() {
            bail!("export.file_stem must not be empty");
        }
        let stem = &self.export.file_stem;
        if stem.contains(['/', '\\']) || stem.contains("..") {
            bail!("export.file_stem must be a plain file name, got {stem:?}");
        }
        Ok(())
    }

    pub fn export_options(&self, split: bool) -> ExportOptions {
        ExportOptions {
            split,
            chunk_size: self.export.chunk_size,
            file_stem: self.export.file_stem.clone(),
        }
    }
}
