pub mod export;
pub mod lister;
pub mod runner;
pub mod scanner;
pub mod validator;

pub use crate::domain::model::{CourseRecord, CourseSummary, FieldValue};
pub use crate::domain::ports::{CourseSource, Report};
pub use crate::utils::error::Result;
pub use export::SummaryExporter;
pub use lister::CourseLister;
pub use runner::{ReportRunner, RunOutcome};
pub use scanner::IdLineScanner;
pub use validator::JsonValidator;
