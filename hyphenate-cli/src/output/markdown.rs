//! Markdown output formatter

use super::{describe_match, OutputFormatter};
use anyhow::Result;
use hyphenate_core::{HyphenatedText, HyphenationResult};
use std::io::Write;

/// Markdown formatter - outputs words as a list and documents as sections
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    show_patterns: bool,
    word_count: usize,
    hyphen_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_patterns: false,
            word_count: 0,
            hyphen_count: 0,
        }
    }

    /// List fired patterns under each word
    pub fn with_patterns(mut self, show_patterns: bool) -> Self {
        self.show_patterns = show_patterns;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_word(&mut self, result: &HyphenationResult) -> Result<()> {
        self.word_count += 1;
        self.hyphen_count += result.hyphen_points.len();
        writeln!(self.writer, "{}. **{}**", self.word_count, result.hyphenated)?;
        if self.show_patterns {
            for matched in &result.fired_patterns {
                writeln!(self.writer, "   - `{}`", describe_match(matched))?;
            }
        }
        Ok(())
    }

    fn format_document(&mut self, source: &str, document: &HyphenatedText) -> Result<()> {
        self.word_count += document.words;
        self.hyphen_count += document.hyphens;
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", document.text.trim_end())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total words: {}, hyphens: {}*",
            self.word_count, self.hyphen_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
