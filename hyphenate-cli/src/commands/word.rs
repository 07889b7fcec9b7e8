//! Word command implementation

use super::{EngineArgs, LogArgs};
use crate::output::{create_formatter, open_output, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the word command
#[derive(Debug, Args)]
pub struct WordArgs {
    /// Words to hyphenate
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// List the patterns that fired for each word
    #[arg(short, long)]
    pub show_patterns: bool,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

impl WordArgs {
    /// Execute the word command
    pub fn execute(&self) -> Result<()> {
        self.log.init_logging();
        log::debug!("Arguments: {:?}", self);

        let (config, hyphenator) = self.engine.load()?;
        let format = self.format.unwrap_or(config.output.default_format);
        let writer = open_output(self.output.as_deref())?;
        let mut formatter =
            create_formatter(format, writer, self.show_patterns, config.output.pretty_json);

        for word in &self.words {
            let result = hyphenator
                .hyphenate(word)
                .with_context(|| format!("Cannot hyphenate {word:?}"))?;
            log::debug!("{} -> {:?}", word, result.weights.as_slice());
            formatter.format_word(&result)?;
        }

        formatter.finish()
    }
}
