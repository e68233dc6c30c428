//! HTML report formatter.

use super::{escape, ResultFormatter};
use crate::result::LintResult;
use std::fmt::Write;

const STYLE: &str = "body { font-family: sans-serif; margin: 2em; }
h1 { font-size: 1.2em; border-bottom: 1px solid #ccc; }
.clean { color: #2a7d2a; }
.evidence { font-family: monospace; color: #555; }";

/// Formats lint results as a standalone HTML page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter;

impl ResultFormatter for HtmlFormatter {
    fn header(&self) -> Option<String> {
        Some(format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>JSLint report</title>\n<style>\n{}\n</style>\n</head>\n<body>\n",
            STYLE
        ))
    }

    fn footer(&self) -> Option<String> {
        Some("</body>\n</html>\n".to_string())
    }

    fn format(&self, result: &LintResult) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "<h1>{} ({})</h1>",
            escape(&result.name),
            result.issues.len()
        );

        if result.is_clean() {
            out.push_str("<p class=\"clean\">No problems found.</p>\n");
            return out;
        }

        out.push_str("<ol>\n");
        for issue in &result.issues {
            let _ = write!(
                out,
                "<li><p>Problem at line {} character {}: {}</p>",
                issue.line,
                issue.character,
                escape(&issue.reason)
            );
            if let Some(evidence) = issue.evidence() {
                let _ = write!(out, "<p class=\"evidence\">{}</p>", escape(evidence));
            }
            out.push_str("</li>\n");
        }
        out.push_str("</ol>\n");
        out
    }
}
