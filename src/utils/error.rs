use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourseError {
    #[error("{source}: '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Output(#[source] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl CourseError {
    pub fn read(path: impl Into<String>, source: std::io::Error) -> Self {
        CourseError::Read {
            path: path.into(),
            source,
        }
    }

    /// 1-based line and column of a parse failure, when the parser knows it.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            CourseError::Parse(e) if e.line() > 0 => Some((e.line(), e.column())),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CourseError {
    fn from(e: std::io::Error) -> Self {
        CourseError::Output(e)
    }
}

pub type Result<T> = std::result::Result<T, CourseError>;
