//! Plain text output formatter

use super::{describe_match, OutputFormatter};
use anyhow::Result;
use hyphenate_core::{HyphenatedText, HyphenationResult};
use std::io::Write;

/// Plain text formatter - outputs one word per line, documents verbatim
pub struct TextFormatter<W: Write> {
    writer: W,
    show_patterns: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_patterns: false,
        }
    }

    /// List fired patterns under each word
    pub fn with_patterns(mut self, show_patterns: bool) -> Self {
        self.show_patterns = show_patterns;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_word(&mut self, result: &HyphenationResult) -> Result<()> {
        writeln!(self.writer, "{}", result.hyphenated)?;
        if self.show_patterns {
            for matched in &result.fired_patterns {
                writeln!(self.writer, "  {}", describe_match(matched))?;
            }
        }
        Ok(())
    }

    fn format_document(&mut self, _source: &str, document: &HyphenatedText) -> Result<()> {
        write!(self.writer, "{}", document.text)?;
        if !document.text.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
