//! lintreport - Stream formatted lint results to report files.
//!
//! A report is produced by pairing a [`ResultFormatter`](formatter::ResultFormatter),
//! which turns lint results into text, with a [`ReportWriter`](writer::ReportWriter),
//! which owns the output file and drives the `open`, `report`, `close` lifecycle.
//!
//! # Modules
//!
//! - [`config`] - Report configuration loading and validation
//! - [`error`] - Error types and result aliases
//! - [`formatter`] - Plain text, XML, Checkstyle, JUnit, HTML and JSON formatters
//! - [`result`] - Lint results and issues
//! - [`writer`] - File, JUnit and fan-out report writers
//!
//! # Example
//!
//! ```
//! use lintreport::config::{OutputFormat, ReportConfig};
//! use lintreport::writer::ReportWriter;
//! use lintreport::{Issue, LintResult};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let config = ReportConfig {
//!     output_directory: temp.path().to_path_buf(),
//!     formats: vec![OutputFormat::Plain],
//! };
//!
//! let results = vec![LintResult::new("app.js")
//!     .with_issue(Issue::new("app.js", 2, 5, "Missing semicolon."))];
//!
//! config.build_writer().write_results(&results).unwrap();
//!
//! let text = std::fs::read_to_string(temp.path().join("report.txt")).unwrap();
//! assert_eq!(text, "app.js:2:5:Missing semicolon.\n");
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod result;
pub mod writer;

pub use error::{ReportError, Result};
pub use result::{Issue, LintResult};
