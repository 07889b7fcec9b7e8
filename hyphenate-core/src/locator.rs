//! Alignment of a pattern against a bounded word
//!
//! The locator slides the pattern's symbol sequence across the bounded word
//! from offset 0. The default policy keeps only the first alignment; a
//! pattern that occurs twice in a word contributes its weights once.

use crate::pattern::Pattern;
use crate::word::BoundedWord;
use smallvec::SmallVec;

/// Which alignments of a pattern are merged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AlignmentPolicy {
    /// Stop at the lowest offset where the pattern matches
    #[default]
    FirstOnly,
    /// Merge every offset where the pattern matches, overlapping or not
    All,
}

/// Gap weights proposed by one pattern at one offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Bounded-word position of the pattern's first symbol
    pub offset: usize,
    /// `(gap, digit)` pairs, ordered by gap
    pub weights: SmallVec<[(usize, u8); 4]>,
}

/// Offsets where the pattern's symbols match the word contiguously
pub fn alignment_offsets<'a>(
    word: &'a BoundedWord,
    pattern: &'a Pattern,
) -> impl Iterator<Item = usize> + 'a {
    let haystack = word.symbols();
    let needle = pattern.symbols();
    let last_offset = haystack.len().checked_sub(needle.len());

    last_offset
        .into_iter()
        .flat_map(|last| 0..=last)
        .filter(move |&offset| {
            needle
                .iter()
                .zip(&haystack[offset..])
                .all(|(expected, found)| expected == found)
        })
}

/// First alignment only, or `None` when the pattern does not occur
pub fn locate_first(word: &BoundedWord, pattern: &Pattern) -> Option<Alignment> {
    alignment_offsets(word, pattern)
        .next()
        .map(|offset| align_at(pattern, offset))
}

/// Every alignment, lowest offset first
pub fn locate_all(word: &BoundedWord, pattern: &Pattern) -> Vec<Alignment> {
    alignment_offsets(word, pattern)
        .map(|offset| align_at(pattern, offset))
        .collect()
}

/// Alignments to merge under `policy`
pub fn locate(word: &BoundedWord, pattern: &Pattern, policy: AlignmentPolicy) -> Vec<Alignment> {
    match policy {
        AlignmentPolicy::FirstOnly => locate_first(word, pattern).into_iter().collect(),
        AlignmentPolicy::All => locate_all(word, pattern),
    }
}

fn align_at(pattern: &Pattern, offset: usize) -> Alignment {
    let lead = usize::from(pattern.has_leading_marker());
    // offset + lead >= 1: a pattern without a leading marker starts on a
    // letter, and letters sit at bounded positions 1..=len.
    let first_letter = offset + lead;

    let weights = pattern
        .digit_slots()
        .iter()
        .enumerate()
        .filter_map(|(slot, digit)| digit.map(|d| (first_letter + slot - 1, d)))
        .collect();

    Alignment { offset, weights }
}
