use crate::core::lister::load_courses;
use crate::core::{CourseSource, Report};
use crate::domain::model::{CourseRecord, CourseSummary};
use crate::utils::error::{CourseError, Result};
use std::io::Write;

/// Prints a pretty JSON array holding just the `id` and `title` of every course.
pub struct SummaryExporter;

impl SummaryExporter {
    pub fn summaries(courses: &[CourseRecord]) -> Vec<CourseSummary> {
        courses.iter().map(CourseRecord::summary).collect()
    }

    pub fn to_json(courses: &[CourseRecord]) -> Result<String> {
        Ok(serde_json::to_string_pretty(&Self::summaries(courses))?)
    }
}

impl Report for SummaryExporter {
    fn name(&self) -> &'static str {
        "list_courses"
    }

    fn render(&self, source: &dyn CourseSource, out: &mut dyn Write) -> Result<()> {
        let courses = load_courses(source)?;
        let json = Self::to_json(&courses)?;
        writeln!(out, "{}", json)?;
        Ok(())
    }

    fn on_error(
        &self,
        err: &CourseError,
        _out: &mut dyn Write,
        err_out: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(err_out, "Error parsing courses.json: {}", err)
    }
}
