//! Pattern selection by anchoring

use crate::pattern::{Anchor, Pattern};
use crate::word::BoundedWord;

/// Patterns that can possibly apply to `word`, in dictionary order
pub fn select<'p>(patterns: &'p [Pattern], word: &BoundedWord) -> Vec<&'p Pattern> {
    patterns
        .iter()
        .filter(|pattern| is_eligible(pattern, word.folded()))
        .collect()
}

/// Anchoring test of one pattern's skeleton against the folded word letters
pub fn is_eligible(pattern: &Pattern, word: &[char]) -> bool {
    let skeleton = pattern.letters();
    match pattern.anchor() {
        Anchor::Start => word.starts_with(skeleton),
        Anchor::End => word.ends_with(skeleton),
        Anchor::Interior => contains(word, skeleton),
    }
}

fn contains(haystack: &[char], needle: &[char]) -> bool {
    if needle.is_empty() {
        return true;
    }
    needle.len() <= haystack.len() && haystack.windows(needle.len()).any(|window| window == needle)
}
