//! Rule to flag a class applied more than once on one element.

use classlint_core::{Diagnostic, LintContext, Rule};
use std::collections::BTreeMap;

/// Rule id for duplicate-class.
pub const NAME: &str = "duplicate-class";

/// Flags repeated class names in an element's class list.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateClass;

impl DuplicateClass {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for DuplicateClass {
    fn id(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "A class name should appear at most once per element"
    }

    fn context_tag(&self) -> Option<&'static str> {
        Some("structure")
    }

    fn run(&self, ctx: &LintContext) -> Vec<Diagnostic> {
        let mut first_seen: BTreeMap<&str, usize> = BTreeMap::new();
        let mut diagnostics = Vec::new();

        for class in ctx.classes {
            match first_seen.get(class.parsed.raw.as_str()) {
                Some(&first) => diagnostics.push(
                    Diagnostic::new(NAME, self.default_severity(), "class is applied more than once")
                        .with_context(class.parsed.raw.clone())
                        .with_metadata("first_position", first)
                        .with_metadata("position", class.position),
                ),
                None => {
                    first_seen.insert(class.parsed.raw.as_str(), class.position);
                }
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::run_rule;
    use classlint_core::Severity;

    #[test]
    fn accepts_distinct_classes() {
        assert!(run_rule(&DuplicateClass::new(), &["c-card", "u-mt-16"]).is_empty());
    }

    #[test]
    fn flags_each_repeat() {
        let diagnostics =
            run_rule(&DuplicateClass::new(), &["c-card", "u-mt-16", "c-card", "c-card"]);
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].metadata["first_position"], 0);
        assert_eq!(diagnostics[0].metadata["position"], 2);
        assert_eq!(diagnostics[1].metadata["position"], 3);
    }

    #[test]
    fn default_severity_is_warning() {
        assert_eq!(DuplicateClass::new().default_severity(), Severity::Warning);
    }
}
