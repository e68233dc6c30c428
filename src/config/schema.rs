//! Configuration schema for report generation.
//!
//! Maps the YAML configuration file format onto [`ReportConfig`].

use crate::error::{ReportError, Result};
use crate::formatter::OutputFormat;
use crate::writer::{FileReportWriter, JunitReportWriter, MultiReportWriter};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::warn;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Directory every report is written into.
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,

    /// Report formats to produce.
    #[serde(default = "default_formats")]
    pub formats: Vec<OutputFormat>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_directory: default_output_directory(),
            formats: default_formats(),
        }
    }
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("target").join("lint-reports")
}

fn default_formats() -> Vec<OutputFormat> {
    OutputFormat::DEFAULTS.to_vec()
}

impl ReportConfig {
    /// Check values serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if no formats are listed, a format is
    /// listed twice, or the output directory is empty.
    pub fn validate(&self) -> Result<()> {
        if self.output_directory.as_os_str().is_empty() {
            return Err(ReportError::ConfigValidationError {
                message: "output_directory must not be empty".to_string(),
            });
        }

        if self.formats.is_empty() {
            return Err(ReportError::ConfigValidationError {
                message: "at least one report format is required".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for format in &self.formats {
            if !seen.insert(format) {
                return Err(ReportError::ConfigValidationError {
                    message: format!("report format '{}' is listed more than once", format),
                });
            }
        }

        Ok(())
    }

    /// Where the report for `format` is written.
    pub fn report_path(&self, format: OutputFormat) -> PathBuf {
        self.output_directory.join(format.file_name())
    }

    /// One writer per configured format, combined into a single writer.
    ///
    /// A format listed more than once gets a single writer, since its
    /// writers would share one file.
    pub fn build_writer(&self) -> MultiReportWriter<'static> {
        let mut multi = MultiReportWriter::new();
        let mut seen = HashSet::new();
        for &format in &self.formats {
            if !seen.insert(format) {
                warn!("Report format '{}' listed more than once; ignoring repeat", format);
                continue;
            }
            let path = self.report_path(format);
            match format {
                OutputFormat::Junit => multi.push(JunitReportWriter::new(path)),
                _ => multi.push(FileReportWriter::new(path, format.formatter())),
            }
        }
        multi
    }
}
