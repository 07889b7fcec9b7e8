//! Hyphenation configuration

use crate::error::{HyphenationError, Result};
use crate::finalizer::HYPHEN;
use crate::locator::AlignmentPolicy;

/// Options that change how a word is hyphenated
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub(crate) require_patterns: bool,
    pub(crate) placeholder: Option<char>,
    pub(crate) alignment: AlignmentPolicy,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Fail with `EmptyPatternSet` when no pattern applies to a word
    pub fn require_patterns(&self) -> bool {
        self.require_patterns
    }

    /// Marker rendered at gaps that do not permit a hyphen
    pub fn placeholder(&self) -> Option<char> {
        self.placeholder
    }

    /// Which alignments of each pattern are merged
    pub fn alignment(&self) -> AlignmentPolicy {
        self.alignment
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(marker) = self.placeholder {
            if marker == HYPHEN || marker.is_alphabetic() {
                return Err(HyphenationError::Config(format!(
                    "placeholder '{marker}' would be indistinguishable from the output"
                )));
            }
        }
        Ok(())
    }
}

/// Fluent builder for [`Config`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    require_patterns: Option<bool>,
    placeholder: Option<Option<char>>,
    alignment: Option<AlignmentPolicy>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict mode: words without eligible patterns become errors
    pub fn require_patterns(mut self, strict: bool) -> Self {
        self.require_patterns = Some(strict);
        self
    }

    /// Marker for non-hyphenating gaps (`None` = render nothing)
    pub fn placeholder(mut self, marker: Option<char>) -> Self {
        self.placeholder = Some(marker);
        self
    }

    /// Alignment policy for the locator
    pub fn alignment(mut self, policy: AlignmentPolicy) -> Self {
        self.alignment = Some(policy);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(strict) = self.require_patterns {
            config.require_patterns = strict;
        }

        if let Some(marker) = self.placeholder {
            config.placeholder = marker;
        }

        if let Some(policy) = self.alignment {
            config.alignment = policy;
        }

        config.validate()?;
        Ok(config)
    }
}
