//! Report writers.
//!
//! A writer owns an output destination and drives a
//! [`ResultFormatter`](crate::formatter::ResultFormatter) over it. Every
//! writer follows the same lifecycle:
//!
//! 1. [`open`](ReportWriter::open) once
//! 2. [`report`](ReportWriter::report) for each result
//! 3. [`close`](ReportWriter::close) once
//!
//! If `close` is never called, footers are never written.
//!
//! # Example
//!
//! ```no_run
//! use lintreport::formatter::PlainFormatter;
//! use lintreport::writer::{FileReportWriter, ReportWriter};
//! use lintreport::{Issue, LintResult};
//!
//! let result = LintResult::new("app.js").with_issue(Issue::new("app.js", 1, 1, "Missing 'use strict'."));
//!
//! let mut writer = FileReportWriter::new("target/lint/report.txt", &PlainFormatter);
//! writer.open()?;
//! writer.report(&result)?;
//! writer.close()?;
//! # Ok::<(), lintreport::ReportError>(())
//! ```

pub mod file;
pub mod junit;
pub mod multi;

use crate::error::Result;
use crate::result::LintResult;

pub use file::FileReportWriter;
pub use junit::JunitReportWriter;
pub use multi::MultiReportWriter;

/// Trait for writing a stream of lint results to a report.
pub trait ReportWriter {
    /// Acquire the output and write any header.
    fn open(&mut self) -> Result<()>;

    /// Write one result.
    fn report(&mut self, result: &LintResult) -> Result<()>;

    /// Write any footer and release the output.
    fn close(&mut self) -> Result<()>;

    /// Run the whole lifecycle over `results`.
    ///
    /// `close` is always called, even when `open` or a `report` fails. The
    /// first error wins.
    fn write_results(&mut self, results: &[LintResult]) -> Result<()> {
        let written = self
            .open()
            .and_then(|()| results.iter().try_for_each(|r| self.report(r)));
        let closed = self.close();
        written.and(closed)
    }
}
