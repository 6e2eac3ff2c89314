//! Core types for lint diagnostics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Severity level for lint diagnostics.
///
/// Ordered so that thresholds can be expressed with comparisons:
/// `Suggestion < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Stylistic nudge, safe to ignore.
    Suggestion,
    /// Likely problem that should be addressed.
    Warning,
    /// Violation that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Suggestion => write!(f, "suggestion"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single finding produced by one rule.
///
/// `severity` is the resolved severity after preset and project overrides
/// have been applied, not necessarily the rule's default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Id of the rule that produced this finding.
    pub rule: String,
    /// Severity after configuration resolution.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Optional subject of the finding (typically a class name).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Structured details for tooling (positions, sources, counts).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(rule: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            severity,
            message: message.into(),
            context: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Sets the subject of this finding.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Attaches a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Formats the diagnostic for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        match &self.context {
            Some(context) => format!("{}: [{}] `{}` {}", self.severity, self.rule, context, self.message),
            None => format!("{}: [{}] {}", self.severity, self.rule, self.message),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(Severity::Suggestion < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn severity_serde_is_lowercase() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let back: Severity = serde_json::from_str("\"suggestion\"").unwrap();
        assert_eq!(back, Severity::Suggestion);
    }

    #[test]
    fn diagnostic_format_includes_context() {
        let d = Diagnostic::new("combo-without-base", Severity::Error, "combo class has no base")
            .with_context("is-active");
        assert_eq!(
            d.format(),
            "error: [combo-without-base] `is-active` combo class has no base"
        );
    }

    #[test]
    fn diagnostic_format_omits_missing_context() {
        let d = Diagnostic::new("unstyled-element", Severity::Suggestion, "element has no classes");
        assert!(!d.format().contains('`'));
    }

    #[test]
    fn diagnostic_metadata_round_trips() {
        let d = Diagnostic::new("duplicate-class", Severity::Warning, "duplicate")
            .with_metadata("position", 3)
            .with_metadata("class", "c-card");
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["metadata"]["position"], 3);
        assert_eq!(json["metadata"]["class"], "c-card");
    }
}
