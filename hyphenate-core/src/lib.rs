//! Liang-style pattern hyphenation
//!
//! This crate hyphenates words with the weighted sub-string patterns used by
//! typesetting systems. Each pattern interleaves letters with digit weights;
//! after all applicable patterns are merged, an odd weight between two
//! letters permits a hyphen and an even weight forbids it.
//!
//! # Pipeline
//!
//! Hyphenating one word is a pure, single-pass computation:
//! - **Selector** ([`selector`]): keeps the patterns whose anchoring allows
//!   them to apply (prefix, suffix or substring of the word)
//! - **Locator** ([`locator`]): aligns each selected pattern against the word
//!   wrapped in virtual boundaries
//! - **Merger** ([`merger`]): folds all proposed gap weights into one
//!   [`WeightArray`], keeping the maximum per gap
//! - **Finalizer** ([`finalizer`]): renders hyphens at odd-weight gaps
//!
//! # Example
//!
//! ```rust
//! use hyphenate_core::{select_and_hyphenate, Pattern};
//!
//! let patterns = ["hy3ph", "he2n", "hena4", "hen5at", "1na", "n2at", "1tio", "2io", "o2n"]
//!     .iter()
//!     .map(|source| Pattern::parse(source))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let result = select_and_hyphenate(&patterns, "hyphenation").unwrap();
//! assert_eq!(result.hyphenated, "hy-phen-ation");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dictionary;
pub mod error;
pub mod finalizer;
pub mod hyphenator;
pub mod locator;
pub mod merger;
pub mod paragraph;
pub mod pattern;
pub mod selector;
pub mod word;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dictionary::{LoadedDictionary, PatternDictionary, RejectedPattern};
pub use error::{HyphenationError, MalformedPatternError, Result};
pub use hyphenator::{
    describe_pattern_weights, hyphenate_with, select_and_hyphenate, HyphenationResult,
    Hyphenator, MatchedPattern,
};
pub use locator::{Alignment, AlignmentPolicy};
pub use merger::WeightArray;
pub use paragraph::{hyphenate_text, HyphenatedText};
pub use pattern::{Anchor, Pattern};
pub use word::{BoundedWord, Symbol};
