//! CLI command implementations

use crate::config::{CliConfig, EngineOverrides};
use crate::dictionary_source::DictionarySource;
use anyhow::Result;
use clap::{Args, Subcommand};
use hyphenate_core::Hyphenator;
use std::path::PathBuf;

pub mod generate_config;
pub mod process;
pub mod validate;
pub mod word;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Hyphenate words given on the command line
    Word(word::WordArgs),

    /// Hyphenate the running text of one or more files
    Process(process::ProcessArgs),

    /// Check a pattern dictionary for malformed entries
    Validate(validate::ValidateArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Word(args) => args.execute(),
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Dictionary and engine options shared by the hyphenating commands
#[derive(Debug, Clone, Default, Args)]
pub struct EngineArgs {
    /// Pattern dictionary file
    #[arg(short, long, value_name = "FILE", env = "HYPHENATE_PATTERNS")]
    pub patterns: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fail on words that no pattern applies to; `process` stops at the first one
    #[arg(long)]
    pub strict: bool,

    /// Character shown at gaps that do not permit a hyphen
    #[arg(long, value_name = "CHAR")]
    pub placeholder: Option<char>,

    /// Merge every alignment of each pattern instead of only the first
    #[arg(long)]
    pub all_alignments: bool,
}

impl EngineArgs {
    fn overrides(&self) -> EngineOverrides {
        EngineOverrides {
            strict: self.strict,
            placeholder: self.placeholder,
            all_alignments: self.all_alignments,
        }
    }

    /// Read the configuration and build a hyphenator from it
    pub fn load(&self) -> Result<(CliConfig, Hyphenator)> {
        let config = CliConfig::load(self.config.as_deref())?;
        let engine = config.engine_config(self.overrides())?;

        let source = DictionarySource::resolve(self.patterns.as_deref(), &config)?;
        let loaded = source.load()?;

        Ok((config, Hyphenator::with_config(loaded.dictionary, engine)))
    }
}

/// Verbosity options
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct LogArgs {
    /// Suppress progress output and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl LogArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        init_logging(self.verbose, self.quiet);
    }
}

/// Install the global logger; later calls are ignored
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match (quiet, verbose) {
        (true, _) => "off",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn pattern_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n").unwrap();
        file
    }

    #[test]
    fn test_engine_args_load() {
        let file = pattern_file();
        let args = EngineArgs {
            patterns: Some(file.path().to_path_buf()),
            ..EngineArgs::default()
        };

        let (_, hyphenator) = args.load().unwrap();
        assert_eq!(hyphenator.dictionary().len(), 9);
        assert_eq!(
            hyphenator.hyphenate("hyphenation").unwrap().hyphenated,
            "hy-phen-ation"
        );
    }

    #[test]
    fn test_engine_args_apply_overrides() {
        let file = pattern_file();
        let args = EngineArgs {
            patterns: Some(file.path().to_path_buf()),
            placeholder: Some(' '),
            all_alignments: true,
            ..EngineArgs::default()
        };

        let (_, hyphenator) = args.load().unwrap();
        assert_eq!(hyphenator.config().placeholder(), Some(' '));
        assert_eq!(
            hyphenator.config().alignment(),
            hyphenate_core::AlignmentPolicy::All
        );
    }

    #[test]
    fn test_engine_args_without_dictionary() {
        let err = EngineArgs::default().load().unwrap_err();
        assert!(err.to_string().contains("No pattern dictionary"));
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(0, false);
        init_logging(3, true);
    }

    #[test]
    fn test_commands_debug_format() {
        let cmd = Commands::Validate(validate::ValidateArgs {
            patterns: PathBuf::from("en.pat"),
        });
        let debug_str = format!("{:?}", cmd);
        assert!(debug_str.contains("Validate"));
        assert!(debug_str.contains("en.pat"));
    }
}
