//! Input words wrapped in virtual boundaries

use crate::error::{HyphenationError, Result};

/// One position of a bounded word or of a pattern's match sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// The virtual boundary before the first or after the last letter
    Boundary,
    /// A lower-cased letter
    Letter(char),
}

/// Lower-case a single letter, keeping it unchanged when its lower-case form
/// is not exactly one character.
pub(crate) fn fold(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}

/// A validated word with a boundary symbol on each side
///
/// Matching uses the folded letters; rendering uses the original ones, so the
/// caller's capitalisation survives hyphenation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedWord {
    original: Vec<char>,
    folded: Vec<char>,
    symbols: Vec<Symbol>,
}

impl BoundedWord {
    /// Validate `word` and wrap it in boundaries
    ///
    /// Fails with [`HyphenationError::InvalidWord`] when the word is empty or
    /// contains anything other than letters.
    pub fn new(word: &str) -> Result<Self> {
        if word.is_empty() {
            return Err(HyphenationError::InvalidWord {
                word: String::new(),
                reason: "word is empty".to_string(),
            });
        }

        if let Some(ch) = word.chars().find(|ch| !ch.is_alphabetic()) {
            return Err(HyphenationError::InvalidWord {
                word: word.to_string(),
                reason: format!("contains non-letter '{ch}'"),
            });
        }

        let original: Vec<char> = word.chars().collect();
        let folded: Vec<char> = original.iter().copied().map(fold).collect();

        let mut symbols = Vec::with_capacity(folded.len() + 2);
        symbols.push(Symbol::Boundary);
        symbols.extend(folded.iter().copied().map(Symbol::Letter));
        symbols.push(Symbol::Boundary);

        Ok(Self {
            original,
            folded,
            symbols,
        })
    }

    /// Letters as supplied by the caller
    pub fn letters(&self) -> &[char] {
        &self.original
    }

    /// Lower-cased letters used for matching
    pub fn folded(&self) -> &[char] {
        &self.folded
    }

    /// Boundary, letters, boundary
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of letters, boundaries excluded
    pub fn len(&self) -> usize {
        self.original.len()
    }

    /// Always false; a bounded word has at least one letter
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Number of gaps between consecutive symbols (letters + 1)
    pub fn gap_count(&self) -> usize {
        self.symbols.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_bounded() {
        let word = BoundedWord::new("mama").unwrap();
        assert_eq!(word.symbols().len(), 6);
        assert_eq!(word.symbols()[0], Symbol::Boundary);
        assert_eq!(word.symbols()[1], Symbol::Letter('m'));
        assert_eq!(word.symbols()[5], Symbol::Boundary);
        assert_eq!(word.gap_count(), 5);
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn test_case_is_folded_for_matching_only() {
        let word = BoundedWord::new("Hello").unwrap();
        assert_eq!(word.letters(), &['H', 'e', 'l', 'l', 'o']);
        assert_eq!(word.folded(), &['h', 'e', 'l', 'l', 'o']);
        assert_eq!(word.symbols()[1], Symbol::Letter('h'));
    }

    #[test]
    fn test_non_ascii_letters_are_accepted() {
        let word = BoundedWord::new("Übung").unwrap();
        assert_eq!(word.folded()[0], 'ü');
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn test_empty_word_is_rejected() {
        let err = BoundedWord::new("").unwrap_err();
        assert!(matches!(err, HyphenationError::InvalidWord { .. }));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_non_letters_are_rejected() {
        for input in ["abc1", "two words", "co-op", "end."] {
            let err = BoundedWord::new(input).unwrap_err();
            match err {
                HyphenationError::InvalidWord { word, .. } => assert_eq!(word, input),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_fold_keeps_multi_char_lowercase() {
        // 'İ' lower-cases to two characters
        assert_eq!(fold('İ'), 'İ');
        assert_eq!(fold('Q'), 'q');
    }
}
