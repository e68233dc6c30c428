//! JUnit XML formatter.
//!
//! Each result becomes a `<testsuite>` holding a single `<testcase>`. A file
//! with issues fails its test case, and the failure body lists every issue.
//! JUnit consumers expect one suite per file, so this formatter is normally
//! driven by a [`JunitReportWriter`](crate::writer::JunitReportWriter).

use super::{escape, seconds, ResultFormatter, XML_DECLARATION};
use crate::result::LintResult;
use std::fmt::Write;

/// Value of the `classname` attribute on every test case.
const CLASS_NAME: &str = "lintreport";

/// Formats lint results as JUnit XML.
#[derive(Debug, Clone, Copy, Default)]
pub struct JunitFormatter;

impl ResultFormatter for JunitFormatter {
    fn header(&self) -> Option<String> {
        Some(XML_DECLARATION.to_string())
    }

    fn format(&self, result: &LintResult) -> String {
        let name = escape(&result.name);
        let time = seconds(result.duration);
        let failures = usize::from(!result.is_clean());

        let mut out = String::new();
        let _ = writeln!(
            out,
            "<testsuite failures=\"{failures}\" time=\"{time}\" skipped=\"0\" errors=\"{failures}\" tests=\"1\" name=\"{name}\">"
        );
        let _ = writeln!(
            out,
            "<testcase time=\"{time}\" classname=\"{CLASS_NAME}\" name=\"{name}\">"
        );

        if !result.is_clean() {
            let problems = if result.issues.len() == 1 {
                "problem"
            } else {
                "problems"
            };
            let _ = write!(
                out,
                "<failure message=\"Found {} {}\" type=\"LintFailure\">",
                result.issues.len(),
                problems
            );
            for issue in &result.issues {
                let _ = writeln!(
                    out,
                    "{}:{}:{}:{}",
                    escape(&issue.system_id),
                    issue.line,
                    issue.character,
                    escape(&issue.reason)
                );
            }
            out.push_str("</failure>\n");
        }

        out.push_str("</testcase>\n</testsuite>\n");
        out
    }
}
