//! JSON Lines formatter.
//!
//! Writes one JSON object per result so the report can be streamed and
//! consumed line by line by other tooling.

use super::ResultFormatter;
use crate::result::{Issue, LintResult};
use serde::Serialize;

/// Formats lint results as JSON Lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonResult<'a> {
    name: &'a str,
    duration_ms: u64,
    issues: &'a [Issue],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    clean: bool,
}

impl ResultFormatter for JsonFormatter {
    fn format(&self, result: &LintResult) -> String {
        let output = JsonResult {
            name: &result.name,
            duration_ms: u64::try_from(result.duration.as_millis()).unwrap_or(u64::MAX),
            issues: &result.issues,
            summary: JsonSummary {
                total: result.issues.len(),
                clean: result.is_clean(),
            },
        };

        // Plain structs of strings and integers always serialize.
        let mut line = serde_json::to_string(&output).unwrap_or_default();
        line.push('\n');
        line
    }
}
