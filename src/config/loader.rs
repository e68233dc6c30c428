//! Configuration file loading.

use crate::config::schema::ReportConfig;
use crate::error::{ReportError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a single config file, parse it, and validate it.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
/// Returns `ConfigValidationError` if the values are inconsistent.
pub fn load_config_file(path: &Path) -> Result<ReportConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ReportError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ReportError::Io(e)
        }
    })?;

    debug!("Loaded report config from {}", path.display());
    parse_config(&content, path)
}

/// Parse and validate YAML content.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ReportConfig> {
    // An empty file is a config with every default.
    if content.trim().is_empty() {
        return Ok(ReportConfig::default());
    }

    let config: ReportConfig =
        serde_yaml::from_str(content).map_err(|e| ReportError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    config.validate()?;
    Ok(config)
}

/// Load `path` if given, otherwise use the defaults.
pub fn load_config(config_override: Option<&Path>) -> Result<ReportConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => Ok(ReportConfig::default()),
    }
}
