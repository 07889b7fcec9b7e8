//! Pattern dictionary loading
//!
//! A dictionary is UTF-8 text holding whitespace-separated patterns, usually
//! one per line. Text after `%` is a comment. Malformed entries are dropped
//! and reported; they never abort the load.

use crate::error::{HyphenationError, MalformedPatternError, Result};
use crate::pattern::Pattern;
use std::path::Path;

/// Comment marker, as in TeX pattern files
pub const COMMENT_MARKER: char = '%';

/// An ordered, read-only list of patterns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternDictionary {
    patterns: Vec<Pattern>,
}

/// A dictionary entry that was dropped during loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedPattern {
    /// 1-based line number of the entry
    pub line: usize,
    /// Why the entry was dropped
    pub error: MalformedPatternError,
}

impl From<RejectedPattern> for HyphenationError {
    fn from(rejected: RejectedPattern) -> Self {
        HyphenationError::MalformedPattern {
            line: rejected.line,
            source: rejected.error,
        }
    }
}

/// Result of loading a dictionary source
#[derive(Debug, Clone, Default)]
pub struct LoadedDictionary {
    /// Every entry that parsed
    pub dictionary: PatternDictionary,
    /// Every entry that did not
    pub rejected: Vec<RejectedPattern>,
}

impl PatternDictionary {
    /// Parse dictionary text
    pub fn parse(text: &str) -> LoadedDictionary {
        let mut patterns = Vec::new();
        let mut rejected = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let content = line.split(COMMENT_MARKER).next().unwrap_or_default();

            for entry in content.split_whitespace() {
                match Pattern::parse(entry) {
                    Ok(pattern) => patterns.push(pattern),
                    Err(error) => rejected.push(RejectedPattern {
                        line: index + 1,
                        error,
                    }),
                }
            }
        }

        LoadedDictionary {
            dictionary: Self { patterns },
            rejected,
        }
    }

    /// Read and parse a dictionary file
    pub fn from_file(path: &Path) -> Result<LoadedDictionary> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Build a dictionary from already parsed patterns
    pub fn from_patterns<I>(patterns: I) -> Self
    where
        I: IntoIterator<Item = Pattern>,
    {
        Self {
            patterns: patterns.into_iter().collect(),
        }
    }

    /// Patterns in load order
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Number of patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when no pattern was loaded
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate over the patterns
    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }
}

impl<'a> IntoIterator for &'a PatternDictionary {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

impl LoadedDictionary {
    /// The dictionary if nothing was rejected, otherwise the first rejection
    pub fn into_strict(self) -> Result<PatternDictionary> {
        match self.rejected.into_iter().next() {
            Some(rejected) => Err(rejected.into()),
            None => Ok(self.dictionary),
        }
    }
}
