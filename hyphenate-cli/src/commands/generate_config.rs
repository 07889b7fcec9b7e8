//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Pattern dictionary to record in the template
    #[arg(short, long, value_name = "FILE")]
    pub patterns: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();
        std::fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Point [dictionary] path at your pattern file");
        println!("2. Validate the pattern file:");
        println!("   hyphenate validate --patterns <FILE>");
        println!("3. Use it for processing:");
        println!(
            "   hyphenate process -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let path = match &self.patterns {
            Some(path) => format!("path = {:?}", path.display().to_string()),
            None => "# path = \"patterns/en.pat\"".to_string(),
        };

        format!(
            r#"# hyphenate configuration

[dictionary]
# Pattern file used when neither --patterns nor HYPHENATE_PATTERNS is set
{path}

[hyphenation]
# Fail on words that no pattern applies to
strict = false

# Character shown at gaps that do not permit a hyphen (omit for none)
# placeholder = " "

# "first-only" merges the first alignment of each pattern, "all" merges every one
alignment = "first-only"

[output]
# text, json or markdown
default_format = "text"
pretty_json = true
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    fn parses_as_config(template: &str) -> Result<CliConfig> {
        Ok(toml::from_str(template)?)
    }

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("hyphenate.toml"),
            patterns: None,
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("hyphenate.toml"));
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("hyphenate.toml"),
            patterns: None,
        };

        let config = parses_as_config(&args.generate_template()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_template_records_patterns() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("hyphenate.toml"),
            patterns: Some(PathBuf::from("patterns/en.pat")),
        };

        let config = parses_as_config(&args.generate_template()).unwrap();
        assert_eq!(
            config.dictionary.path,
            Some(PathBuf::from("patterns/en.pat"))
        );
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("hyphenate.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            patterns: None,
        };

        assert!(args.execute().is_ok());
        let config = CliConfig::from_file(&output_path).unwrap();
        assert!(!config.hyphenation.strict);
    }
}
