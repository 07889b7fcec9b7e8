//! Error types for the hyphenation engine

use thiserror::Error;

/// Reasons a single dictionary entry cannot be used as a pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedPatternError {
    /// The entry has no letters once markers and digits are removed
    #[error("pattern '{0}' has no letters")]
    EmptySkeleton(String),

    /// A boundary marker appears somewhere other than the first or last position
    #[error("pattern '{pattern}' has a boundary marker at position {position}")]
    MisplacedMarker {
        /// The offending pattern text
        pattern: String,
        /// Character position of the marker
        position: usize,
    },

    /// Two digits follow each other without a letter between them
    #[error("pattern '{pattern}' has adjacent digits at position {position}")]
    AdjacentDigits {
        /// The offending pattern text
        pattern: String,
        /// Character position of the second digit
        position: usize,
    },

    /// A character that is neither a letter, a digit nor a marker
    #[error("pattern '{pattern}' contains invalid character '{found}'")]
    InvalidCharacter {
        /// The offending pattern text
        pattern: String,
        /// The character that was rejected
        found: char,
    },
}

/// Errors returned by the hyphenation engine
#[derive(Debug, Error)]
pub enum HyphenationError {
    /// The word is empty or contains characters outside the letter alphabet
    #[error("invalid word '{word}': {reason}")]
    InvalidWord {
        /// The rejected input
        word: String,
        /// Why it was rejected
        reason: String,
    },

    /// Strict mode found no pattern that applies to the word
    #[error("no pattern applies to '{word}'")]
    EmptyPatternSet {
        /// The word that had no eligible patterns
        word: String,
    },

    /// A dictionary entry could not be parsed
    #[error("malformed pattern on line {line}: {source}")]
    MalformedPattern {
        /// 1-based line number in the dictionary source
        line: usize,
        /// What was wrong with the entry
        #[source]
        source: MalformedPatternError,
    },

    /// The dictionary source could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid engine configuration
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for hyphenation operations
pub type Result<T> = std::result::Result<T, HyphenationError>;
