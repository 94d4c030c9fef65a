use crate::core::{CourseSource, Report};
use crate::utils::error::CourseError;
use std::io::Write;

/// Outcome of a run. Read and parse failures are already presented to the
/// user by the time this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Reported,
}

pub struct ReportRunner<R: Report> {
    report: R,
}

impl<R: Report> ReportRunner<R> {
    pub fn new(report: R) -> Self {
        Self { report }
    }

    /// Runs the report once. Only failures to write the output itself escape.
    pub fn run(
        &self,
        source: &dyn CourseSource,
        out: &mut dyn Write,
        err_out: &mut dyn Write,
    ) -> std::io::Result<RunOutcome> {
        let name = self.report.name();
        tracing::info!("Running {} against {}", name, source.location());

        match self.report.render(source, out) {
            Ok(()) => {
                tracing::info!("{} completed", name);
                Ok(RunOutcome::Completed)
            }
            Err(CourseError::Output(e)) => Err(e),
            Err(e) => {
                tracing::debug!("{} failed: {:?}", name, e);
                self.report.on_error(&e, out, err_out)?;
                Ok(RunOutcome::Reported)
            }
        }
    }
}
