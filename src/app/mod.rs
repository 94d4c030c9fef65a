// Application layer: wires config and a report together for the binaries.

use crate::adapters::local_file::LocalFile;
use crate::config::CliConfig;
use crate::core::{Report, ReportRunner, RunOutcome};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::io::Write;

/// Runs `report` against the configured data file, printing to stdout/stderr.
///
/// Read and parse failures are printed as part of the report. An invalid
/// config is returned as `CourseError::InvalidConfigValue` before anything runs.
pub fn launch<R: Report>(report: R, config: &CliConfig) -> Result<RunOutcome> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run_with(report, config, &mut stdout.lock(), &mut stderr.lock())
}

pub fn run_with<R: Report>(
    report: R,
    config: &CliConfig,
    out: &mut dyn Write,
    err_out: &mut dyn Write,
) -> Result<RunOutcome> {
    tracing::debug!("CLI config: {:?}", config);
    config.validate()?;

    let source = LocalFile::new(config.data_file.clone());
    let outcome = ReportRunner::new(report).run(&source, out, err_out)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CourseLister;
    use crate::utils::error::CourseError;
    use tempfile::TempDir;

    #[test]
    fn test_invalid_config_is_returned() {
        let config = CliConfig {
            data_file: String::new(),
            ..CliConfig::default()
        };
        let mut out: Vec<u8> = Vec::new();

        let err = run_with(CourseLister, &config, &mut out, &mut std::io::sink()).unwrap_err();

        assert!(matches!(err, CourseError::InvalidConfigValue { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let config = CliConfig {
            data_file: temp_dir.path().join("courses.json").to_str().unwrap().to_string(),
            ..CliConfig::default()
        };
        let mut out: Vec<u8> = Vec::new();

        let outcome = run_with(CourseLister, &config, &mut out, &mut std::io::sink()).unwrap();

        assert_eq!(outcome, RunOutcome::Reported);
        assert!(String::from_utf8(out).unwrap().starts_with("Error: "));
    }
}
