//! Hyphenate CLI library
//!
//! This library provides the command-line interface for the pattern-based
//! hyphenation engine in `hyphenate-core`.

pub mod commands;
pub mod config;
pub mod dictionary_source;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
