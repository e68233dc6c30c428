//! JUnit report writer.
//!
//! JUnit consumers read one `TEST-*.xml` file per suite, so unlike
//! [`FileReportWriter`] this writer creates a fresh file for every result.

use super::{FileReportWriter, ReportWriter};
use crate::error::{ReportError, Result};
use crate::formatter::JunitFormatter;
use crate::result::LintResult;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes each result to its own `TEST-<name>.xml` file in a directory.
///
/// Names that map to a file already written since `open` get a numeric
/// suffix (`TEST-<name>-1.xml`), so no result replaces another.
///
/// `open` does not clear the directory. `TEST-*.xml` files left by an
/// earlier run stay next to the new ones.
#[derive(Debug)]
pub struct JunitReportWriter {
    directory: PathBuf,
    open: bool,
    written: usize,
    issued: HashSet<String>,
}

impl JunitReportWriter {
    /// Create a writer that puts its files in `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            open: false,
            written: 0,
            issued: HashSet::new(),
        }
    }

    /// The directory reports are written to.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the file a result named `name` is written to, unless an
    /// earlier result since `open` already took that name.
    pub fn report_path(&self, name: &str) -> PathBuf {
        self.directory.join(file_name(name, 0))
    }

    /// Reserve a file name for `name` that has not been used since `open`.
    fn next_path(&mut self, name: &str) -> PathBuf {
        let mut attempt = 0;
        loop {
            let candidate = file_name(name, attempt);
            if self.issued.insert(candidate.clone()) {
                return self.directory.join(candidate);
            }
            attempt += 1;
        }
    }
}

/// `TEST-<name>.xml`, with anything outside `[A-Za-z0-9._-]` replaced by `_`.
/// A non-zero `suffix` gives `TEST-<name>-<suffix>.xml`.
fn file_name(name: &str, suffix: usize) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if suffix == 0 {
        format!("TEST-{}.xml", sanitized)
    } else {
        format!("TEST-{}-{}.xml", sanitized, suffix)
    }
}

impl ReportWriter for JunitReportWriter {
    fn open(&mut self) -> Result<()> {
        fs::create_dir_all(&self.directory).map_err(|source| ReportError::CreateDir {
            path: self.directory.clone(),
            source,
        })?;
        self.open = true;
        self.written = 0;
        self.issued.clear();
        Ok(())
    }

    fn report(&mut self, result: &LintResult) -> Result<()> {
        if !self.open {
            return Err(ReportError::NotOpen {
                path: self.directory.clone(),
            });
        }

        let path = self.next_path(&result.name);
        let mut writer = FileReportWriter::new(path, &JunitFormatter);
        writer.write_results(std::slice::from_ref(result))?;
        self.written += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.open {
            debug!(
                "Wrote {} JUnit reports to {}",
                self.written,
                self.directory.display()
            );
        }
        self.open = false;
        Ok(())
    }
}
