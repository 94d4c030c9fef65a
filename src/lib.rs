pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::local_file::LocalFile;
pub use crate::config::CliConfig;
pub use crate::core::runner::{ReportRunner, RunOutcome};
pub use crate::utils::error::{CourseError, Result};
