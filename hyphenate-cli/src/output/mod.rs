//! Output formatting module

use anyhow::{Context, Result};
use hyphenate_core::{HyphenatedText, HyphenationResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single hyphenated word
    fn format_word(&mut self, result: &HyphenationResult) -> Result<()>;

    /// Format and output a hyphenated document
    fn format_document(&mut self, source: &str, document: &HyphenatedText) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain hyphenated text
    #[default]
    Text,
    /// JSON array of results with weights and fired patterns
    Json,
    /// Markdown formatted output
    Markdown,
}

/// Destination writer shared by all formatters
pub type OutputWriter = Box<dyn Write + Send + Sync>;

/// Open the output file, or stdout when no path is given
pub fn open_output(path: Option<&Path>) -> Result<OutputWriter> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Build the formatter for `format`
///
/// `show_patterns` lists fired patterns under each word in text and markdown
/// output; JSON always includes them.
pub fn create_formatter(
    format: OutputFormat,
    writer: OutputWriter,
    show_patterns: bool,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer).with_patterns(show_patterns)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
        OutputFormat::Markdown => {
            Box::new(MarkdownFormatter::new(writer).with_patterns(show_patterns))
        }
    }
}

/// One line describing a fired pattern and its weights
pub(crate) fn describe_match(pattern: &hyphenate_core::MatchedPattern) -> String {
    let weights: Vec<String> = hyphenate_core::describe_pattern_weights(&pattern.pattern)
        .into_iter()
        .map(|(slot, digit)| format!("{slot}:{digit}"))
        .collect();
    format!(
        "{} (offset {}, weights {})",
        pattern.pattern,
        pattern.offset,
        if weights.is_empty() {
            "none".to_string()
        } else {
            weights.join(" ")
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyphenate_core::{select_and_hyphenate, Pattern};
    use tempfile::TempDir;

    #[test]
    fn test_describe_match() {
        let patterns = [Pattern::parse("hy3ph").unwrap(), Pattern::parse("ph").unwrap()];
        let result = select_and_hyphenate(&patterns, "hyphen").unwrap();

        assert_eq!(
            describe_match(&result.fired_patterns[0]),
            "hy3ph (offset 1, weights 2:3)"
        );
        assert_eq!(
            describe_match(&result.fired_patterns[1]),
            "ph (offset 3, weights none)"
        );
    }

    #[test]
    fn test_open_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        let mut writer = open_output(Some(&path)).unwrap();
        writeln!(writer, "hy-phen").unwrap();
        writer.flush().unwrap();
        drop(writer);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hy-phen\n");
    }

    #[test]
    fn test_stdout_text_formatter() {
        let writer = open_output(None).unwrap();
        let mut formatter = create_formatter(OutputFormat::Text, writer, false, true);

        let patterns = [Pattern::parse("1na").unwrap()];
        let result = select_and_hyphenate(&patterns, "banana").unwrap();
        formatter.format_word(&result).unwrap();
        formatter.finish().unwrap();
    }

    #[test]
    fn test_open_output_in_missing_directory() {
        let err = open_output(Some(Path::new("/nonexistent/dir/out.txt"))).err().unwrap();
        assert!(err.to_string().contains("Failed to create output file"));
    }
}
