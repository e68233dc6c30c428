//! Plain text formatter.
//!
//! One line per issue in `file:line:column:reason` form, followed by the
//! offending source line and a caret under the column when evidence is known.

use super::ResultFormatter;
use crate::result::{Issue, LintResult};

/// Formats lint results as plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl PlainFormatter {
    fn format_issue(issue: &Issue, out: &mut String) {
        out.push_str(&format!(
            "{}:{}:{}:{}\n",
            issue.system_id, issue.line, issue.character, issue.reason
        ));

        if let Some(evidence) = issue.evidence() {
            out.push_str(evidence);
            out.push('\n');
            // Columns are one-based.
            out.push_str(&" ".repeat(issue.character.saturating_sub(1)));
            out.push_str("^\n");
        }
    }
}

impl ResultFormatter for PlainFormatter {
    fn format(&self, result: &LintResult) -> String {
        let mut out = String::new();
        for issue in &result.issues {
            Self::format_issue(issue, &mut out);
        }
        out
    }
}
