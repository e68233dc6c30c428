//! Error types for report generation.
//!
//! This module defines [`ReportError`], the error type returned by every
//! writer and config operation, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - I/O failures carry the path they happened on
//! - Failures while opening or writing a report are returned to the caller
//! - Failures while releasing a report stream are logged and dropped

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for report operations.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Could not create the directory a report goes into.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Could not create the report file itself.
    #[error("Failed to create report {path}: {source}")]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing to an open report failed.
    #[error("Failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// `report` or `close` was called on a writer whose stream is not open.
    #[error("Report {path} is not open")]
    NotOpen { path: PathBuf },

    /// `open` was called twice without a `close` in between.
    #[error("Report {path} is already open")]
    AlreadyOpen { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
