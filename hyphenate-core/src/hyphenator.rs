//! The hyphenation pipeline: select, locate, merge, finalize

use crate::config::Config;
use crate::dictionary::PatternDictionary;
use crate::error::{HyphenationError, Result};
use crate::finalizer;
use crate::locator;
use crate::merger::{self, WeightArray};
use crate::paragraph::{self, HyphenatedText};
use crate::pattern::Pattern;
use crate::selector;
use crate::word::BoundedWord;

/// A pattern together with the bounded-word offset where it aligned
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchedPattern {
    /// The pattern that fired
    pub pattern: Pattern,
    /// Bounded-word position of its first symbol (0 is the leading boundary)
    pub offset: usize,
}

/// Outcome of hyphenating one word
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HyphenationResult {
    /// The word as supplied
    pub word: String,
    /// The word with hyphens (and placeholders, if configured)
    pub hyphenated: String,
    /// Letter indices that receive a hyphen before them
    pub hyphen_points: Vec<usize>,
    /// Patterns that aligned, in dictionary order
    pub fired_patterns: Vec<MatchedPattern>,
    /// Merged weight of every gap, edge gaps included
    pub weights: WeightArray,
}

/// Hyphenate `word` against `patterns` with the default configuration
pub fn select_and_hyphenate(patterns: &[Pattern], word: &str) -> Result<HyphenationResult> {
    hyphenate_with(patterns, word, &Config::default())
}

/// Hyphenate `word` against `patterns`
pub fn hyphenate_with(
    patterns: &[Pattern],
    word: &str,
    config: &Config,
) -> Result<HyphenationResult> {
    let bounded = BoundedWord::new(word)?;

    let eligible = selector::select(patterns, &bounded);
    if eligible.is_empty() && config.require_patterns() {
        return Err(HyphenationError::EmptyPatternSet {
            word: word.to_string(),
        });
    }

    let located: Vec<(&Pattern, Vec<locator::Alignment>)> = eligible
        .into_iter()
        .map(|pattern| {
            let alignments = locator::locate(&bounded, pattern, config.alignment());
            (pattern, alignments)
        })
        .collect();

    let weights = merger::merge(
        &bounded,
        located.iter().flat_map(|(_, alignments)| alignments),
    );
    let rendered = finalizer::finalize(&bounded, &weights, config.placeholder());

    let fired_patterns = located
        .iter()
        .flat_map(|(pattern, alignments)| {
            alignments.iter().map(move |alignment| MatchedPattern {
                pattern: (*pattern).clone(),
                offset: alignment.offset,
            })
        })
        .collect();

    Ok(HyphenationResult {
        word: word.to_string(),
        hyphenated: rendered.text,
        hyphen_points: rendered.hyphen_points,
        fired_patterns,
        weights,
    })
}

/// `(slot, digit)` pairs of a pattern, for diagnostic display
pub fn describe_pattern_weights(pattern: &Pattern) -> Vec<(usize, u8)> {
    pattern.weights()
}

/// A dictionary bound to a configuration
///
/// The hyphenator is read-only; one instance can serve any number of words,
/// from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Hyphenator {
    dictionary: PatternDictionary,
    config: Config,
}

impl Hyphenator {
    /// Create a hyphenator with the default configuration
    pub fn new(dictionary: PatternDictionary) -> Self {
        Self {
            dictionary,
            config: Config::default(),
        }
    }

    /// Create a hyphenator with a custom configuration
    pub fn with_config(dictionary: PatternDictionary, config: Config) -> Self {
        Self { dictionary, config }
    }

    /// Hyphenate a single word
    pub fn hyphenate(&self, word: &str) -> Result<HyphenationResult> {
        hyphenate_with(self.dictionary.patterns(), word, &self.config)
    }

    /// Hyphenate every word of a text, keeping everything else unchanged
    pub fn hyphenate_text(&self, text: &str) -> Result<HyphenatedText> {
        paragraph::hyphenate_text(self.dictionary.patterns(), text, &self.config)
    }

    /// The loaded dictionary
    pub fn dictionary(&self) -> &PatternDictionary {
        &self.dictionary
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
