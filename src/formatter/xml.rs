//! JSLint XML formatter.
//!
//! Produces a single `<jslint>` document with one `<file>` element per
//! result and one `<issue>` element per problem.

use super::{escape, ResultFormatter, XML_DECLARATION};
use crate::result::LintResult;
use std::fmt::Write;

/// Formats lint results as JSLint XML.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlFormatter;

impl ResultFormatter for XmlFormatter {
    fn header(&self) -> Option<String> {
        Some(format!("{}<jslint>\n", XML_DECLARATION))
    }

    fn footer(&self) -> Option<String> {
        Some("</jslint>\n".to_string())
    }

    fn format(&self, result: &LintResult) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "<file name=\"{}\">", escape(&result.name));

        for issue in &result.issues {
            let _ = writeln!(
                out,
                "<issue line=\"{}\" char=\"{}\" reason=\"{}\" evidence=\"{}\"/>",
                issue.line,
                issue.character,
                escape(&issue.reason),
                escape(issue.evidence().unwrap_or_default())
            );
        }

        out.push_str("</file>\n");
        out
    }
}
