//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use hyphenate_core::{HyphenatedText, HyphenationResult};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs all results as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<JsonRecord>,
    pretty: bool,
}

/// Data structure for one hyphenated document
#[derive(Debug, Serialize)]
pub struct DocumentData {
    /// Where the text came from
    pub source: String,
    /// The hyphenated text
    pub text: String,
    /// Number of words hyphenated
    pub words: usize,
    /// Number of hyphens inserted
    pub hyphens: usize,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum JsonRecord {
    Word(HyphenationResult),
    Document(DocumentData),
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
            pretty: true,
        }
    }

    /// Choose between pretty and compact JSON
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_word(&mut self, result: &HyphenationResult) -> Result<()> {
        self.records.push(JsonRecord::Word(result.clone()));
        Ok(())
    }

    fn format_document(&mut self, source: &str, document: &HyphenatedText) -> Result<()> {
        self.records.push(JsonRecord::Document(DocumentData {
            source: source.to_string(),
            text: document.text.clone(),
            words: document.words,
            hyphens: document.hyphens,
        }));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyphenate_core::{select_and_hyphenate, Pattern};
    use serde_json::Value;

    #[test]
    fn test_word_records() {
        let patterns = [Pattern::parse("1na").unwrap()];
        let result = select_and_hyphenate(&patterns, "banana").unwrap();

        let mut formatter = JsonFormatter::new(Vec::new()).pretty(false);
        formatter.format_word(&result).unwrap();
        formatter.finish().unwrap();

        let value: Value = serde_json::from_slice(&formatter.writer).unwrap();
        let record = &value[0];
        assert_eq!(record["hyphenated"], "ba-nana");
        assert_eq!(record["weights"], serde_json::json!([0, 0, 1, 0, 0, 0, 0]));
        assert_eq!(record["fired_patterns"][0]["pattern"], "1na");
        assert_eq!(record["fired_patterns"][0]["offset"], 3);
    }

    #[test]
    fn test_document_records() {
        let mut formatter = JsonFormatter::new(Vec::new());
        let document = HyphenatedText {
            text: "Hy-phen text.".to_string(),
            words: 2,
            hyphens: 1,
        };
        formatter.format_document("sample.txt", &document).unwrap();
        formatter.finish().unwrap();

        let value: Value = serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(value[0]["source"], "sample.txt");
        assert_eq!(value[0]["text"], "Hy-phen text.");
        assert_eq!(value[0]["hyphens"], 1);
    }

    #[test]
    fn test_empty_output_is_an_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "[]\n");
    }
}
