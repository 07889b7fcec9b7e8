//! Liang hyphenation patterns
//!
//! A pattern such as `.hen5at` interleaves letters with digit weights. The
//! optional `.` marker at either end anchors the pattern to the start or the
//! end of a word.

use crate::error::MalformedPatternError;
use crate::word::{fold, Symbol};
use std::fmt;
use std::str::FromStr;

/// Boundary marker used in dictionary entries
pub const BOUNDARY_MARKER: char = '.';

/// Where a pattern is allowed to match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Anchor {
    /// Leading marker: the skeleton must be a prefix of the word
    Start,
    /// Trailing marker: the skeleton must be a suffix of the word
    End,
    /// No marker: the skeleton may occur anywhere
    Interior,
}

/// A parsed hyphenation pattern
///
/// Parsing happens once, when the dictionary is loaded; every per-word
/// operation works on the precomputed skeleton, digit slots and match
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Pattern {
    text: String,
    anchor: Anchor,
    leading_marker: bool,
    trailing_marker: bool,
    letters: Vec<char>,
    /// `letters.len() + 1` slots; slot `i` is the gap before letter `i`
    digits: Vec<Option<u8>>,
    symbols: Vec<Symbol>,
}

impl Pattern {
    /// Parse one dictionary entry
    ///
    /// Surrounding whitespace is ignored and letters are lower-cased.
    pub fn parse(source: &str) -> Result<Self, MalformedPatternError> {
        let text = source.trim();
        let chars: Vec<char> = text.chars().collect();
        let last = chars.len().saturating_sub(1);

        let mut leading_marker = false;
        let mut trailing_marker = false;
        let mut letters = Vec::new();
        let mut digits = vec![None];
        let mut previous_was_digit = false;

        for (position, &ch) in chars.iter().enumerate() {
            if ch == BOUNDARY_MARKER {
                if position == 0 {
                    leading_marker = true;
                } else if position == last {
                    trailing_marker = true;
                } else {
                    return Err(MalformedPatternError::MisplacedMarker {
                        pattern: text.to_string(),
                        position,
                    });
                }
                previous_was_digit = false;
            } else if let Some(digit) = ch.to_digit(10) {
                if previous_was_digit {
                    return Err(MalformedPatternError::AdjacentDigits {
                        pattern: text.to_string(),
                        position,
                    });
                }
                let slot = letters.len();
                digits[slot] = Some(digit as u8);
                previous_was_digit = true;
            } else if ch.is_alphabetic() {
                letters.push(fold(ch));
                digits.push(None);
                previous_was_digit = false;
            } else {
                return Err(MalformedPatternError::InvalidCharacter {
                    pattern: text.to_string(),
                    found: ch,
                });
            }
        }

        if letters.is_empty() {
            return Err(MalformedPatternError::EmptySkeleton(text.to_string()));
        }

        // Both markers select like a start-anchored pattern.
        let anchor = if leading_marker {
            Anchor::Start
        } else if trailing_marker {
            Anchor::End
        } else {
            Anchor::Interior
        };

        let mut symbols = Vec::with_capacity(letters.len() + 2);
        if leading_marker {
            symbols.push(Symbol::Boundary);
        }
        symbols.extend(letters.iter().copied().map(Symbol::Letter));
        if trailing_marker {
            symbols.push(Symbol::Boundary);
        }

        Ok(Self {
            text: text.to_string(),
            anchor,
            leading_marker,
            trailing_marker,
            letters,
            digits,
            symbols,
        })
    }

    /// The entry as written in the dictionary (trimmed)
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Anchoring assigned at parse time
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// True when the entry starts with a boundary marker
    pub fn has_leading_marker(&self) -> bool {
        self.leading_marker
    }

    /// True when the entry ends with a boundary marker
    pub fn has_trailing_marker(&self) -> bool {
        self.trailing_marker
    }

    /// Letters only, markers and digits removed
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// The letter skeleton as a string
    pub fn skeleton(&self) -> String {
        self.letters.iter().collect()
    }

    /// Number of letters in the skeleton
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a parsed pattern
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Digit slots, one per gap around the skeleton letters
    pub fn digit_slots(&self) -> &[Option<u8>] {
        &self.digits
    }

    /// Sequence matched against a bounded word: markers become boundaries
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// `(slot, digit)` pairs for every slot that carries a digit
    ///
    /// Slot `i` is the gap before skeleton letter `i`; slot `len()` is the gap
    /// after the last letter.
    pub fn weights(&self) -> Vec<(usize, u8)> {
        self.digits
            .iter()
            .enumerate()
            .filter_map(|(slot, digit)| digit.map(|d| (slot, d)))
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Pattern {
    type Err = MalformedPatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Pattern {
    type Error = MalformedPatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.text
    }
}
