//! Checkstyle XML formatter.
//!
//! Checkstyle's report format is understood by most CI servers and code
//! review tools. Every issue is reported with `warning` severity.

use super::{escape, ResultFormatter, XML_DECLARATION};
use crate::result::LintResult;
use std::fmt::Write;

/// Value of the `source` attribute on every error.
const SOURCE: &str = "lintreport.JSLint";

/// Formats lint results as Checkstyle XML.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckstyleFormatter;

impl ResultFormatter for CheckstyleFormatter {
    fn header(&self) -> Option<String> {
        Some(format!("{}<checkstyle>\n", XML_DECLARATION))
    }

    fn footer(&self) -> Option<String> {
        Some("</checkstyle>\n".to_string())
    }

    fn format(&self, result: &LintResult) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "<file name=\"{}\">", escape(&result.name));

        for issue in &result.issues {
            let _ = writeln!(
                out,
                "<error line=\"{}\" column=\"{}\" severity=\"warning\" message=\"{}\" source=\"{}\"/>",
                issue.line,
                issue.character,
                escape(&issue.reason),
                SOURCE
            );
        }

        out.push_str("</file>\n");
        out
    }
}
