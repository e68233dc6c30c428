//! Fan-out writer.

use super::ReportWriter;
use crate::error::{ReportError, Result};
use crate::result::LintResult;
use tracing::warn;

/// Sends every lifecycle call to a list of writers, in order.
///
/// `open` and `report` stop at the first failing writer. `close` closes
/// every writer regardless and returns the first error it saw.
#[derive(Default)]
pub struct MultiReportWriter<'a> {
    writers: Vec<Box<dyn ReportWriter + 'a>>,
}

impl<'a> MultiReportWriter<'a> {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self {
            writers: Vec::new(),
        }
    }

    /// Add a writer.
    pub fn with_writer(mut self, writer: impl ReportWriter + 'a) -> Self {
        self.push(writer);
        self
    }

    /// Add a writer.
    pub fn push(&mut self, writer: impl ReportWriter + 'a) {
        self.writers.push(Box::new(writer));
    }

    /// Number of writers.
    pub fn len(&self) -> usize {
        self.writers.len()
    }

    /// Whether there are no writers.
    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }
}

impl ReportWriter for MultiReportWriter<'_> {
    fn open(&mut self) -> Result<()> {
        self.writers.iter_mut().try_for_each(|w| w.open())
    }

    fn report(&mut self, result: &LintResult) -> Result<()> {
        self.writers.iter_mut().try_for_each(|w| w.report(result))
    }

    fn close(&mut self) -> Result<()> {
        let mut first: Option<ReportError> = None;
        for writer in &mut self.writers {
            if let Err(e) = writer.close() {
                warn!("Failed to close report: {}", e);
                first.get_or_insert(e);
            }
        }
        first.map_or(Ok(()), Err)
    }
}
