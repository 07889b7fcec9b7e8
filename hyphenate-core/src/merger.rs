//! Merging of pattern weights into one array of gap weights

use crate::locator::Alignment;
use crate::word::BoundedWord;

/// One weight per gap of a bounded word
///
/// Gap `g` lies between bounded positions `g` and `g + 1`: gap 0 precedes the
/// first letter and the last gap follows the last letter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WeightArray {
    weights: Vec<u8>,
}

impl WeightArray {
    /// All-zero weights for `gap_count` gaps
    pub fn zeroed(gap_count: usize) -> Self {
        Self {
            weights: vec![0; gap_count],
        }
    }

    /// Number of gaps
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True when there are no gaps
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weight of one gap
    pub fn get(&self, gap: usize) -> Option<u8> {
        self.weights.get(gap).copied()
    }

    /// All weights in gap order
    pub fn as_slice(&self) -> &[u8] {
        &self.weights
    }

    /// Odd weights permit a hyphen
    pub fn permits_hyphen(&self, gap: usize) -> bool {
        self.get(gap).is_some_and(|weight| weight % 2 == 1)
    }

    /// Keep the larger of the current and proposed weight
    fn raise(&mut self, gap: usize, weight: u8) {
        if let Some(slot) = self.weights.get_mut(gap) {
            *slot = (*slot).max(weight);
        }
    }
}

/// Build the weight array of `word` from every located alignment
///
/// A gap proposed by several patterns keeps the maximum digit, so a less
/// specific pattern never weakens a stronger rule.
pub fn merge<'a, I>(word: &BoundedWord, alignments: I) -> WeightArray
where
    I: IntoIterator<Item = &'a Alignment>,
{
    let mut merged = WeightArray::zeroed(word.gap_count());
    for alignment in alignments {
        for &(gap, digit) in &alignment.weights {
            merged.raise(gap, digit);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn alignment(weights: &[(usize, u8)]) -> Alignment {
        Alignment {
            offset: 0,
            weights: weights.iter().copied().collect(),
        }
    }

    #[test]
    fn test_no_alignments_yields_zeroes() {
        let word = BoundedWord::new("hello").unwrap();
        let merged = merge(&word, &Vec::<Alignment>::new());
        assert_eq!(merged.as_slice(), &[0, 0, 0, 0, 0, 0]);
        assert_eq!(merged.len(), 6);
    }

    #[test]
    fn test_overlapping_gaps_keep_maximum() {
        let word = BoundedWord::new("abcd").unwrap();
        let alignments = [
            alignment(&[(1, 2), (2, 5)]),
            alignment(&[(2, 4), (3, 1)]),
            alignment(&[(1, 3)]),
        ];
        let merged = merge(&word, &alignments);
        assert_eq!(merged.as_slice(), &[0, 3, 5, 1, 0]);
    }

    #[test]
    fn test_lower_weight_never_overrides() {
        let word = BoundedWord::new("ab").unwrap();
        let alignments = [alignment(&[(1, 9)]), alignment(&[(1, 0)])];
        assert_eq!(merge(&word, &alignments).get(1), Some(9));
    }

    #[test]
    fn test_permits_hyphen_on_odd_weights() {
        let word = BoundedWord::new("abc").unwrap();
        let alignments = [Alignment {
            offset: 1,
            weights: smallvec![(1, 1), (2, 2)],
        }];
        let merged = merge(&word, &alignments);
        assert!(merged.permits_hyphen(1));
        assert!(!merged.permits_hyphen(2));
        assert!(!merged.permits_hyphen(99));
    }
}
