//! Rule to flag classes the active grammar cannot place.
//!
//! # Configuration
//!
//! - `ignore`: exact class names to skip (default: empty)
//!
//! Skipped entirely in lenient opinion mode; classes already decided to be
//! combos are left to `combo-convention`.

use classlint_core::{ClassKind, Diagnostic, LintContext, OpinionMode, Rule, Severity};

/// Rule id for unknown-class.
pub const NAME: &str = "unknown-class";

/// Flags classes that do not match the active naming grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownClass;

impl UnknownClass {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for UnknownClass {
    fn id(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Classes should match the active naming grammar"
    }

    fn default_severity(&self) -> Severity {
        Severity::Suggestion
    }

    fn context_tag(&self) -> Option<&'static str> {
        Some("naming")
    }

    fn run(&self, ctx: &LintContext) -> Vec<Diagnostic> {
        if ctx.opinion_mode == OpinionMode::Lenient {
            tracing::debug!("{NAME} skipped in lenient mode");
            return Vec::new();
        }

        let ignore = ctx.options.get_str_array("ignore");

        ctx.of_kind(ClassKind::Unknown)
            .filter(|class| !class.combo.is_combo)
            .filter(|class| !ignore.iter().any(|name| name == &class.parsed.raw))
            .map(|class| {
                Diagnostic::new(
                    NAME,
                    self.default_severity(),
                    "class does not match the active naming grammar",
                )
                .with_context(class.parsed.raw.clone())
                .with_metadata("position", class.position)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{run_rule, run_rule_in_mode, run_rule_with_options};
    use classlint_core::RuleConfig;

    #[test]
    fn flags_unrecognized_classes() {
        let diagnostics = run_rule(&UnknownClass::new(), &["c-card", "legacy-widget"]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].context.as_deref(), Some("legacy-widget"));
    }

    #[test]
    fn grammar_matches_are_clean() {
        assert!(run_rule(&UnknownClass::new(), &["c-card", "u-mt-16", "is-active"]).is_empty());
    }

    #[test]
    fn lenient_mode_skips_entirely() {
        let diagnostics =
            run_rule_in_mode(&UnknownClass::new(), &["legacy-widget"], OpinionMode::Lenient);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn decided_combos_are_left_to_combo_convention() {
        // `is_visible` is kind-unknown but detected as a combo.
        assert!(run_rule(&UnknownClass::new(), &["c-card", "is_visible"]).is_empty());
    }

    #[test]
    fn ignore_list_is_exact() {
        let options = RuleConfig::new()
            .option("ignore", vec!["legacy-widget"])
            .options;
        let diagnostics = run_rule_with_options(
            &UnknownClass::new(),
            &["legacy-widget", "other-widget"],
            options,
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].context.as_deref(), Some("other-widget"));
    }
}
