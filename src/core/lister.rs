use crate::core::{CourseSource, Report};
use crate::domain::model::CourseRecord;
use crate::utils::error::Result;
use std::io::Write;

/// Parses the whole source as a list of course records.
pub fn load_courses(source: &dyn CourseSource) -> Result<Vec<CourseRecord>> {
    let content = source.read_to_string()?;
    let courses: Vec<CourseRecord> = serde_json::from_str(&content)?;
    tracing::debug!("Parsed {} courses from {}", courses.len(), source.location());
    Ok(courses)
}

/// Prints `ID: <id>, Title: <title>` for every course.
pub struct CourseLister;

impl CourseLister {
    pub fn write_courses(courses: &[CourseRecord], out: &mut dyn Write) -> Result<()> {
        for course in courses {
            writeln!(out, "ID: {}, Title: {}", course.id(), course.title())?;
        }
        Ok(())
    }
}

impl Report for CourseLister {
    fn name(&self) -> &'static str {
        "list_all_courses"
    }

    fn render(&self, source: &dyn CourseSource, out: &mut dyn Write) -> Result<()> {
        let courses = load_courses(source)?;
        Self::write_courses(&courses, out)
    }
}
