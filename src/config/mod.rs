//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use lintreport::config::{load_config_file, OutputFormat};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("lintreport.yml");
//! fs::write(&path, "formats: [checkstyle, junit]").unwrap();
//!
//! let config = load_config_file(&path).unwrap();
//! assert_eq!(config.formats, vec![OutputFormat::Checkstyle, OutputFormat::Junit]);
//! ```
//!
//! # Configuration Format
//!
//! ```yaml
//! output_directory: target/lint-reports
//! formats: [plain, xml, checkstyle, junit, html]
//! ```

pub mod loader;
pub mod schema;

pub use crate::formatter::OutputFormat;
pub use loader::{load_config, load_config_file, parse_config};
pub use schema::ReportConfig;
