//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No input file matched the given paths or globs
    FileNotFound(String),
    /// Invalid glob pattern for input files
    InvalidGlob(String),
    /// Configuration error
    ConfigError(String),
    /// No pattern dictionary was given by flag, environment or config file
    MissingDictionary,
    /// The pattern dictionary contains malformed entries or nothing usable
    InvalidDictionary {
        /// Dictionary path
        path: String,
        /// Number of rejected entries
        rejected: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidGlob(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::MissingDictionary => write!(
                f,
                "No pattern dictionary given (use --patterns, HYPHENATE_PATTERNS or [dictionary] path)"
            ),
            CliError::InvalidDictionary { path, rejected } => {
                write!(f, "Invalid dictionary {path}: {rejected} malformed pattern(s)")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
