//! Rule to flag elements with no classes at all.
//!
//! Strict-opinion only by default; set `always = true` to enable it in
//! every mode.

use classlint_core::{Diagnostic, LintContext, OpinionMode, Rule, Severity};

/// Rule id for unstyled-element.
pub const NAME: &str = "unstyled-element";

/// Flags elements carrying no classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnstyledElement;

impl UnstyledElement {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for UnstyledElement {
    fn id(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Elements should carry at least one class"
    }

    fn default_severity(&self) -> Severity {
        Severity::Suggestion
    }

    fn context_tag(&self) -> Option<&'static str> {
        Some("structure")
    }

    fn run(&self, ctx: &LintContext) -> Vec<Diagnostic> {
        if !ctx.classes.is_empty() {
            return Vec::new();
        }
        if ctx.opinion_mode != OpinionMode::Strict && !ctx.options.get_bool("always", false) {
            return Vec::new();
        }
        vec![Diagnostic::new(
            NAME,
            self.default_severity(),
            "element has no classes applied",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{run_rule, run_rule_in_mode, run_rule_with_options};
    use classlint_core::RuleConfig;

    #[test]
    fn silent_outside_strict_mode() {
        assert!(run_rule(&UnstyledElement::new(), &[]).is_empty());
    }

    #[test]
    fn strict_mode_flags_empty_elements() {
        let diagnostics = run_rule_in_mode(&UnstyledElement::new(), &[], OpinionMode::Strict);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, NAME);
    }

    #[test]
    fn always_option_enables_everywhere() {
        let options = RuleConfig::new().option("always", true).options;
        let diagnostics = run_rule_with_options(&UnstyledElement::new(), &[], options);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn styled_elements_are_clean() {
        assert!(run_rule_in_mode(&UnstyledElement::new(), &["c-card"], OpinionMode::Strict).is_empty());
    }
}
