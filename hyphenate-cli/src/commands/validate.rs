//! Validate command implementation

use crate::dictionary_source::DictionarySource;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use hyphenate_core::{Anchor, LoadedDictionary};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the pattern dictionary to validate
    #[arg(short, long, value_name = "FILE", env = "HYPHENATE_PATTERNS")]
    pub patterns: PathBuf,
}

/// Pattern counts per anchor kind
#[derive(Debug, Default, PartialEq, Eq)]
struct AnchorCounts {
    start: usize,
    end: usize,
    interior: usize,
}

impl AnchorCounts {
    fn of(loaded: &LoadedDictionary) -> Self {
        loaded
            .dictionary
            .iter()
            .fold(Self::default(), |mut counts, pattern| {
                match pattern.anchor() {
                    Anchor::Start => counts.start += 1,
                    Anchor::End => counts.end += 1,
                    Anchor::Interior => counts.interior += 1,
                }
                counts
            })
    }
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let source = DictionarySource::CommandLine(self.patterns.clone());
        println!("Validating pattern dictionary: {}", self.patterns.display());

        let loaded = source.load()?;
        let counts = AnchorCounts::of(&loaded);

        if loaded.rejected.is_empty() && !loaded.dictionary.is_empty() {
            println!("✓ Dictionary is valid!");
            println!("  Patterns: {}", loaded.dictionary.len());
            println!(
                "  Anchored at start: {}, at end: {}, interior: {}",
                counts.start, counts.end, counts.interior
            );
            return Ok(());
        }

        println!("✗ Dictionary is invalid!");
        if loaded.dictionary.is_empty() {
            println!("  No usable pattern found");
        }
        for rejected in &loaded.rejected {
            println!("  line {}: {}", rejected.line, rejected.error);
        }

        Err(CliError::InvalidDictionary {
            path: self.patterns.display().to_string(),
            rejected: loaded.rejected.len(),
        }
        .into())
    }
}
