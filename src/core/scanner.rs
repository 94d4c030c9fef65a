use crate::core::{CourseSource, Report};
use crate::utils::error::{CourseError, Result};
use regex::Regex;
use std::io::{self, BufRead, Write};

/// Matches a field serialized as exactly four whitespace characters, then `"id":`.
pub const ID_LINE_PATTERN: &str = r#"^\s{4}"id":"#;

/// Prints every raw line that looks like a four-space-indented `"id":` field.
/// Works on text only; the file does not have to be valid JSON.
pub struct IdLineScanner {
    pattern: Regex,
}

impl IdLineScanner {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(ID_LINE_PATTERN).expect("ID_LINE_PATTERN is a valid regex"),
        }
    }

    pub fn is_id_line(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }

    /// Streams `reader` into `out`, one trimmed line per match.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`.
    pub fn scan(
        &self,
        mut reader: impl BufRead,
        location: &str,
        out: &mut dyn Write,
    ) -> Result<usize> {
        let mut matched = 0;
        let mut chunk = Vec::new();
        loop {
            chunk.clear();
            let read = reader
                .read_until(b'\n', &mut chunk)
                .map_err(|e| CourseError::read(location, e))?;
            if read == 0 {
                break;
            }

            let text = std::str::from_utf8(&chunk).map_err(|e| {
                CourseError::read(location, io::Error::new(io::ErrorKind::InvalidData, e))
            })?;
            let text = text.strip_suffix('\n').unwrap_or(text);

            for line in text.split_terminator('\r') {
                if self.is_id_line(line) {
                    writeln!(out, "{}", line.trim())?;
                    matched += 1;
                }
            }
        }
        Ok(matched)
    }
}

impl Default for IdLineScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Report for IdLineScanner {
    fn name(&self) -> &'static str {
        "find_ids"
    }

    fn render(&self, source: &dyn CourseSource, out: &mut dyn Write) -> Result<()> {
        let matched = self.scan(source.open()?, source.location(), out)?;
        tracing::debug!("Matched {} id lines", matched);
        Ok(())
    }
}
