//! Rendering of merged weights into a hyphenated string

use crate::merger::WeightArray;
use crate::word::BoundedWord;

/// Character inserted where a hyphen is permitted
pub const HYPHEN: char = '-';

/// Output of the finalizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Letters interleaved with hyphens and placeholders
    pub text: String,
    /// Letter indices that receive a hyphen before them
    pub hyphen_points: Vec<usize>,
}

/// Turn `weights` into hyphen decisions and render `word`
///
/// Only gaps between two letters are rendered; the edge gaps border the
/// virtual boundaries. Odd weights become [`HYPHEN`], even weights become
/// `placeholder` when one is given.
pub fn finalize(word: &BoundedWord, weights: &WeightArray, placeholder: Option<char>) -> Rendered {
    let mut text = String::with_capacity(word.len() * 2);
    let mut hyphen_points = Vec::new();

    for (index, &letter) in word.letters().iter().enumerate() {
        if index > 0 {
            // gap `index` sits between letters `index - 1` and `index`
            if weights.permits_hyphen(index) {
                text.push(HYPHEN);
                hyphen_points.push(index);
            } else if let Some(marker) = placeholder {
                text.push(marker);
            }
        }
        text.push(letter);
    }

    Rendered {
        text,
        hyphen_points,
    }
}
