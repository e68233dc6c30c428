//! Single-file report writer.
//!
//! [`FileReportWriter`] writes the header, every formatted result and the
//! footer of one formatter to one UTF-8 file.

use super::ReportWriter;
use crate::error::{ReportError, Result};
use crate::formatter::ResultFormatter;
use crate::result::LintResult;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Writes a report produced by a borrowed formatter to a file.
///
/// The output stream only exists between a successful
/// [`open`](ReportWriter::open) and [`close`](ReportWriter::close).
/// Dropping the writer while open releases the file without a footer.
pub struct FileReportWriter<'f, F: ResultFormatter + ?Sized> {
    path: PathBuf,
    formatter: &'f F,
    writer: Option<BufWriter<File>>,
}

impl<'f, F: ResultFormatter + ?Sized> FileReportWriter<'f, F> {
    /// Create a writer for `path`. Nothing touches the filesystem until `open`.
    pub fn new(path: impl Into<PathBuf>, formatter: &'f F) -> Self {
        Self {
            path: path.into(),
            formatter,
            writer: None,
        }
    }

    /// The file the report is written to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the output stream is currently open.
    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    fn not_open(&self) -> ReportError {
        ReportError::NotOpen {
            path: self.path.clone(),
        }
    }
}

fn write_text(path: &Path, writer: &mut BufWriter<File>, text: &str) -> Result<()> {
    writer
        .write_all(text.as_bytes())
        .map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Flush and close the stream. Errors here are logged, never returned.
fn release(path: &Path, mut writer: BufWriter<File>) {
    if let Err(e) = writer.flush() {
        warn!("Failed to flush report {}: {}", path.display(), e);
    }
}

impl<F: ResultFormatter + ?Sized> ReportWriter for FileReportWriter<'_, F> {
    fn open(&mut self) -> Result<()> {
        if self.is_open() {
            return Err(ReportError::AlreadyOpen {
                path: self.path.clone(),
            });
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let file = File::create(&self.path).map_err(|source| ReportError::CreateFile {
            path: self.path.clone(),
            source,
        })?;
        let writer = self.writer.insert(BufWriter::new(file));
        debug!("Opened report {}", self.path.display());

        match self.formatter.header() {
            Some(header) => write_text(&self.path, writer, &header),
            None => Ok(()),
        }
    }

    fn report(&mut self, result: &LintResult) -> Result<()> {
        let text = self.formatter.format(result);
        match self.writer.as_mut() {
            Some(writer) => write_text(&self.path, writer, &text),
            None => Err(self.not_open()),
        }
    }

    fn close(&mut self) -> Result<()> {
        // Absent if open never ran or failed before the file was created.
        let Some(mut writer) = self.writer.take() else {
            debug!("Report {} was not open; nothing to close", self.path.display());
            return Ok(());
        };

        let footer = match self.formatter.footer() {
            Some(footer) => write_text(&self.path, &mut writer, &footer),
            None => Ok(()),
        };

        release(&self.path, writer);
        debug!("Closed report {}", self.path.display());
        footer
    }
}

impl<F: ResultFormatter + ?Sized> Drop for FileReportWriter<'_, F> {
    fn drop(&mut self) {
        if let Some(writer) = self.writer.take() {
            debug!(
                "Report {} dropped without close; footer not written",
                self.path.display()
            );
            release(&self.path, writer);
        }
    }
}
