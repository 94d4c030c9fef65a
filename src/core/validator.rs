use crate::core::{CourseSource, Report};
use crate::utils::error::{CourseError, Result};
use std::io::Write;

/// Checks that the source is valid JSON of any shape.
pub struct JsonValidator;

impl JsonValidator {
    pub fn check(content: &str) -> Result<()> {
        serde_json::from_str::<serde_json::Value>(content)?;
        Ok(())
    }
}

impl Report for JsonValidator {
    fn name(&self) -> &'static str {
        "validate_json"
    }

    fn render(&self, source: &dyn CourseSource, out: &mut dyn Write) -> Result<()> {
        let content = source.read_to_string()?;
        Self::check(&content)?;
        writeln!(out, "Valid JSON")?;
        Ok(())
    }

    fn on_error(
        &self,
        err: &CourseError,
        out: &mut dyn Write,
        _err_out: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(out, "Error: {}", err)?;
        if let Some((line, column)) = err.position() {
            writeln!(out, "Approximate Line: {}", line)?;
            writeln!(out, "Approximate Column: {}", column)?;
        }
        Ok(())
    }
}
