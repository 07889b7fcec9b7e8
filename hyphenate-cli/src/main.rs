//! Command-line entry point for hyphenate

use clap::Parser;
use hyphenate_cli::commands::Commands;

/// Hyphenate words and text with Liang-style patterns
#[derive(Debug, Parser)]
#[command(name = "hyphenate", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_word_command() {
        let cli = Cli::try_parse_from([
            "hyphenate",
            "word",
            "hyphenation",
            "-p",
            "en.pat",
            "--placeholder",
            " ",
            "--all-alignments",
        ])
        .unwrap();

        match cli.command {
            Commands::Word(args) => {
                assert_eq!(args.words, vec!["hyphenation".to_string()]);
                assert_eq!(args.engine.placeholder, Some(' '));
                assert!(args.engine.all_alignments);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
