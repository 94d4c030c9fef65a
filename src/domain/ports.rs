use crate::utils::error::{CourseError, Result};
use std::io::{BufRead, Read, Write};

/// Where course data is read from.
pub trait CourseSource {
    /// Human-readable location, used in error messages and logs.
    fn location(&self) -> &str;

    /// Opens the data for line-by-line reading.
    fn open(&self) -> Result<Box<dyn BufRead + '_>>;

    /// Reads the whole content as UTF-8 text.
    fn read_to_string(&self) -> Result<String> {
        let mut content = String::new();
        self.open()?
            .read_to_string(&mut content)
            .map_err(|e| CourseError::read(self.location(), e))?;
        Ok(content)
    }
}

/// One of the course utilities.
pub trait Report {
    fn name(&self) -> &'static str;

    /// Writes the report for `source` to `out`. Read and parse failures are
    /// returned, not printed.
    fn render(&self, source: &dyn CourseSource, out: &mut dyn Write) -> Result<()>;

    /// Presents a read or parse failure to the user.
    fn on_error(
        &self,
        err: &CourseError,
        out: &mut dyn Write,
        _err_out: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(out, "Error: {}", err)
    }
}
