use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Args;

/// Location the utilities read from when no `--data-file` is given.
pub const DEFAULT_DATA_FILE: &str = "./src/data/courses.json";

#[derive(Debug, Clone, Args)]
pub struct CliConfig {
    /// Course data file, relative to the working directory
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    pub data_file: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            verbose: false,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_file", &self.data_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: CliConfig,
    }

    #[test]
    fn test_defaults_to_fixed_path() {
        let cli = TestCli::parse_from(["find_ids"]);
        assert_eq!(cli.config.data_file, DEFAULT_DATA_FILE);
        assert!(!cli.config.verbose);
        assert!(cli.config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let cli = TestCli::parse_from(["find_ids", "--data-file", "other.json", "-v"]);
        assert_eq!(cli.config.data_file, "other.json");
        assert!(cli.config.verbose);
    }

    #[test]
    fn test_empty_path_rejected() {
        let config = CliConfig {
            data_file: String::new(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
