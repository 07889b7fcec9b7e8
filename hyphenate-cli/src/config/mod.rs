//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use hyphenate_core::AlignmentPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Dictionary configuration
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Hyphenation configuration
    #[serde(default)]
    pub hyphenation: HyphenationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Dictionary-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct DictionaryConfig {
    /// Pattern file used when no `--patterns` flag is given
    pub path: Option<PathBuf>,
}

/// Hyphenation-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct HyphenationConfig {
    /// Fail on words that no pattern applies to
    pub strict: bool,

    /// Character rendered at gaps that do not permit a hyphen
    pub placeholder: Option<char>,

    /// Which alignments of each pattern are merged
    pub alignment: AlignmentPolicy,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Values given on the command line that take precedence over the file
#[derive(Debug, Default, Clone, Copy)]
pub struct EngineOverrides {
    /// `--strict`
    pub strict: bool,
    /// `--placeholder`
    pub placeholder: Option<char>,
    /// `--all-alignments`
    pub all_alignments: bool,
}

impl CliConfig {
    /// Read a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML from: {}", path.display()))
    }

    /// Read `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Engine configuration with command-line overrides applied
    pub fn engine_config(&self, overrides: EngineOverrides) -> Result<hyphenate_core::Config> {
        let alignment = if overrides.all_alignments {
            AlignmentPolicy::All
        } else {
            self.hyphenation.alignment
        };

        hyphenate_core::Config::builder()
            .require_patterns(overrides.strict || self.hyphenation.strict)
            .placeholder(overrides.placeholder.or(self.hyphenation.placeholder))
            .alignment(alignment)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
