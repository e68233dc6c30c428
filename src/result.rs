//! Lint results handed to report formatters.
//!
//! A [`LintResult`] describes one linted source file and the [`Issue`]s
//! found in it. Writers never look inside these; they only pass them on to
//! a [`ResultFormatter`](crate::formatter::ResultFormatter).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The outcome of linting a single source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintResult {
    /// Name of the linted file.
    pub name: String,
    /// Time spent linting the file.
    #[serde(default)]
    pub duration: Duration,
    /// Problems found, in source order.
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// A single problem reported by the linter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// File the issue was found in.
    pub system_id: String,
    /// One-based line number.
    pub line: usize,
    /// One-based column.
    pub character: usize,
    /// Human-readable message.
    pub reason: String,
    /// The offending source line, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    /// The message before placeholders were filled in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl LintResult {
    /// Create a result with no issues.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration: Duration::ZERO,
            issues: vec![],
        }
    }

    /// Set how long linting took.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Append an issue.
    pub fn with_issue(mut self, issue: Issue) -> Self {
        self.issues.push(issue);
        self
    }

    /// Whether the file linted cleanly.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl Issue {
    /// Create an issue at `line`:`character` of `system_id`.
    pub fn new(
        system_id: impl Into<String>,
        line: usize,
        character: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            system_id: system_id.into(),
            line,
            character,
            reason: reason.into(),
            evidence: None,
            raw: None,
        }
    }

    /// Attach the offending source line.
    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }

    /// Attach the raw message template.
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    /// Evidence, treating an empty string as absent.
    pub fn evidence(&self) -> Option<&str> {
        self.evidence.as_deref().filter(|e| !e.is_empty())
    }
}
