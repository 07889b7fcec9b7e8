//! Process command implementation

use super::{EngineArgs, LogArgs};
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, open_output, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub log: LogArgs,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.log.init_logging();

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);
        let started = Instant::now();

        let (config, hyphenator) = self.engine.load()?;
        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to process", files.len());

        let format = self.format.unwrap_or(config.output.default_format);
        let writer = open_output(self.output.as_deref())?;
        let mut formatter = create_formatter(format, writer, false, config.output.pretty_json);

        let mut progress = ProgressReporter::new(self.log.quiet);
        progress.init_files(files.len() as u64);

        let mut total_words = 0;
        let mut total_hyphens = 0;
        for file in &files {
            let input = FileReader::read_document(file)?;
            let document = hyphenator
                .hyphenate_text(&input.text)
                .with_context(|| format!("Failed to hyphenate {}", input.source))?;

            formatter.format_document(&input.source, &document)?;

            total_words += document.words;
            total_hyphens += document.hyphens;
            progress.file_completed(&input.source, document.hyphens);
        }

        progress.finish();
        formatter.finish()?;

        log::info!(
            "Hyphenated {} words ({} hyphens) in {} file(s) in {:.2?}",
            total_words,
            total_hyphens,
            files.len(),
            started.elapsed()
        );
        Ok(())
    }
}
