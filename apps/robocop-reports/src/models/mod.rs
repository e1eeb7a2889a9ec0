//! Diagnostic message model consumed by reports.

pub mod severity;

pub use severity::Severity;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as Json};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single rule violation reported by the scanner.
///
/// The serde shape matches `to_json`, so dumps written by the json report
/// can be fed back into the runner.
pub struct Message {
    pub rule_id: String,
    #[serde(rename = "rule_name")]
    pub name: String,
    #[serde(rename = "description", default)]
    pub desc: String,
    pub severity: Severity,
    pub source: String,
    #[serde(default)]
    pub line: usize,
    #[serde(rename = "column", default)]
    pub col: usize,
    #[serde(default)]
    pub end_line: usize,
    #[serde(rename = "end_column", default)]
    pub end_col: usize,
}

impl Message {
    pub fn new(
        rule_id: impl Into<String>,
        name: impl Into<String>,
        severity: Severity,
        source: impl Into<String>,
    ) -> Self {
        Message {
            rule_id: rule_id.into(),
            name: name.into(),
            desc: String::new(),
            severity,
            source: source.into(),
            line: 1,
            col: 1,
            end_line: 1,
            end_col: 1,
        }
    }

    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    pub fn with_position(mut self, line: usize, col: usize, end_line: usize, end_col: usize) -> Self {
        self.line = line;
        self.col = col;
        self.end_line = end_line;
        self.end_col = end_col;
        self
    }

    /// Severity-qualified id with the rule name, e.g.
    /// `W0502 (too-little-calls-in-keyword)`.
    pub fn fullname(&self) -> String {
        format!("{}{} ({})", self.severity.code(), self.rule_id, self.name)
    }

    /// Machine-readable record used by the json report.
    pub fn to_json(&self) -> Json {
        json!({
            "source": self.source,
            "line": self.line,
            "end_line": self.end_line,
            "column": self.col,
            "end_column": self.end_col,
            "severity": self.severity.code(),
            "rule_id": self.rule_id,
            "description": self.desc,
            "rule_name": self.name,
        })
    }
}
