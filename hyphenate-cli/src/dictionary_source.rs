//! Pattern dictionary source management for CLI

use crate::config::CliConfig;
use crate::error::CliError;
use anyhow::{Context, Result};
use hyphenate_core::{LoadedDictionary, PatternDictionary};
use std::path::{Path, PathBuf};

/// Where the pattern dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// `--patterns` flag or `HYPHENATE_PATTERNS`
    CommandLine(PathBuf),
    /// `[dictionary] path` in the configuration file
    ConfigFile {
        /// Path to the pattern file
        path: PathBuf,
    },
}

impl DictionarySource {
    /// Pick the source, preferring the command line over the config file
    pub fn resolve(cli: Option<&Path>, config: &CliConfig) -> Result<Self> {
        if let Some(path) = cli {
            return Ok(DictionarySource::CommandLine(path.to_path_buf()));
        }

        match &config.dictionary.path {
            Some(path) => Ok(DictionarySource::ConfigFile { path: path.clone() }),
            None => Err(CliError::MissingDictionary.into()),
        }
    }

    /// Path of the pattern file
    pub fn path(&self) -> &Path {
        match self {
            DictionarySource::CommandLine(path) => path,
            DictionarySource::ConfigFile { path } => path,
        }
    }

    /// Get the display name for the dictionary source
    pub fn display_name(&self) -> String {
        match self {
            DictionarySource::CommandLine(path) => format!("Command line: {}", path.display()),
            DictionarySource::ConfigFile { path } => format!("Config file: {}", path.display()),
        }
    }

    /// Load the dictionary, warning about every dropped entry
    pub fn load(&self) -> Result<LoadedDictionary> {
        let path = self.path();
        let loaded = PatternDictionary::from_file(path)
            .with_context(|| format!("Failed to read pattern file: {}", path.display()))?;

        for rejected in &loaded.rejected {
            log::warn!(
                "{}:{}: skipping pattern: {}",
                path.display(),
                rejected.line,
                rejected.error
            );
        }
        log::info!(
            "Loaded {} patterns from {}",
            loaded.dictionary.len(),
            self.display_name()
        );

        Ok(loaded)
    }
}
