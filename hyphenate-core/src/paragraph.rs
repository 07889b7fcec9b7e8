//! Hyphenation of running text
//!
//! Every maximal run of letters is treated as a word. Whitespace, digits and
//! punctuation are copied through unchanged, so `co-op` stays two words
//! joined by the original hyphen.

use crate::config::Config;
use crate::error::Result;
use crate::hyphenator::hyphenate_with;
use crate::pattern::Pattern;

/// Hyphenated text with simple counters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HyphenatedText {
    /// The text with hyphenation points inserted
    pub text: String,
    /// Number of words hyphenated
    pub words: usize,
    /// Number of hyphens inserted
    pub hyphens: usize,
}

/// Hyphenate every word of `text`
pub fn hyphenate_text(patterns: &[Pattern], text: &str, config: &Config) -> Result<HyphenatedText> {
    let mut output = HyphenatedText {
        text: String::with_capacity(text.len() + text.len() / 4),
        ..HyphenatedText::default()
    };
    let mut word_start: Option<usize> = None;

    for (index, ch) in text.char_indices() {
        match (ch.is_alphabetic(), word_start) {
            (true, None) => word_start = Some(index),
            (false, Some(start)) => {
                push_word(&mut output, patterns, &text[start..index], config)?;
                word_start = None;
                output.text.push(ch);
            }
            (false, None) => output.text.push(ch),
            (true, Some(_)) => {}
        }
    }

    if let Some(start) = word_start {
        push_word(&mut output, patterns, &text[start..], config)?;
    }

    Ok(output)
}

fn push_word(
    output: &mut HyphenatedText,
    patterns: &[Pattern],
    word: &str,
    config: &Config,
) -> Result<()> {
    let result = hyphenate_with(patterns, word, config)?;
    output.words += 1;
    output.hyphens += result.hyphen_points.len();
    output.text.push_str(&result.hyphenated);
    Ok(())
}
