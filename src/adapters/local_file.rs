use crate::domain::ports::CourseSource;
use crate::utils::error::{CourseError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalFile {
    path: String,
}

impl LocalFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        Path::new(&self.path)
    }
}

impl CourseSource for LocalFile {
    fn location(&self) -> &str {
        &self.path
    }

    fn open(&self) -> Result<Box<dyn BufRead + '_>> {
        tracing::debug!("Opening course data at {}", self.path);
        let file = File::open(self.path()).map_err(|e| CourseError::read(&self.path, e))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_reads_existing_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[]\n").unwrap();

        let source = LocalFile::new(temp_file.path().to_str().unwrap());
        assert_eq!(source.read_to_string().unwrap(), "[]\n");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("courses.json");
        let source = LocalFile::new(path.to_str().unwrap());

        let err = source.open().err().unwrap();
        assert!(matches!(err, CourseError::Read { .. }));
        assert!(err.to_string().contains("courses.json"));
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(&[b'[', 0xff, b']']).unwrap();

        let source = LocalFile::new(temp_file.path().to_str().unwrap());
        let err = source.read_to_string().unwrap_err();
        assert!(matches!(err, CourseError::Read { .. }));
    }
}
