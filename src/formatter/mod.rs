//! Report formatters.
//!
//! This module provides formatters that turn [`LintResult`]s into report
//! text (plain text, JSLint XML, Checkstyle XML, JUnit XML, HTML, JSON Lines).
//! A formatter only produces strings; writing them out is the job of a
//! [`ReportWriter`](crate::writer::ReportWriter).

pub mod checkstyle;
pub mod html;
pub mod json;
pub mod junit;
pub mod plain;
pub mod xml;

use crate::result::LintResult;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::time::Duration;

pub use checkstyle::CheckstyleFormatter;
pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use junit::JunitFormatter;
pub use plain::PlainFormatter;
pub use xml::XmlFormatter;

/// Declaration written at the top of every XML report.
pub(crate) const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Trait for turning lint results into report text.
///
/// A report is `header`, then `format` for each result, then `footer`.
pub trait ResultFormatter {
    /// Text written once when the report is opened.
    fn header(&self) -> Option<String> {
        None
    }

    /// Text written once when the report is closed.
    fn footer(&self) -> Option<String> {
        None
    }

    /// Text for a single result.
    fn format(&self, result: &LintResult) -> String;
}

/// Output format for lint reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Xml,
    Checkstyle,
    Junit,
    Html,
    Json,
}

impl OutputFormat {
    /// Formats written when the config does not list any.
    pub const DEFAULTS: [OutputFormat; 5] = [
        OutputFormat::Plain,
        OutputFormat::Xml,
        OutputFormat::Checkstyle,
        OutputFormat::Junit,
        OutputFormat::Html,
    ];

    /// File (or, for JUnit, directory) name the report is written to.
    pub fn file_name(self) -> &'static str {
        match self {
            OutputFormat::Plain => "report.txt",
            OutputFormat::Xml => "jslint.xml",
            OutputFormat::Checkstyle => "checkstyle-jslint.xml",
            OutputFormat::Junit => "junit",
            OutputFormat::Html => "report.html",
            OutputFormat::Json => "jslint.json",
        }
    }

    /// The formatter producing this format.
    pub fn formatter(self) -> &'static dyn ResultFormatter {
        match self {
            OutputFormat::Plain => &PlainFormatter,
            OutputFormat::Xml => &XmlFormatter,
            OutputFormat::Checkstyle => &CheckstyleFormatter,
            OutputFormat::Junit => &JunitFormatter,
            OutputFormat::Html => &HtmlFormatter,
            OutputFormat::Json => &JsonFormatter,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Xml => "xml",
            OutputFormat::Checkstyle => "checkstyle",
            OutputFormat::Junit => "junit",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", name)
    }
}

/// Whether XML 1.0 allows `c` in a document.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

/// Escape text for use in XML or HTML attribute values and element content.
///
/// Characters XML cannot carry at all become U+FFFD.
pub(crate) fn escape(s: &str) -> Cow<'_, str> {
    if !s
        .chars()
        .any(|c| matches!(c, '&' | '<' | '>' | '"' | '\'') || !is_xml_char(c))
    {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if !is_xml_char(c) => out.push(char::REPLACEMENT_CHARACTER),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Seconds with millisecond precision, e.g. `0.125`.
pub(crate) fn seconds(duration: Duration) -> String {
    format!("{:.3}", duration.as_secs_f64())
}
