//! Rule to normalize state classes onto the grammar's combo form.
//!
//! A class can be decided a combo (by the host's signal or the boolean-flag
//! heuristic) while not using the grammar's own combo spelling, e.g.
//! `is_visible` or `isActive` under a grammar whose combo prefix is `is-`.
//! Those work, but they fall outside the project vocabulary.

use classlint_core::{ClassKind, Diagnostic, LintContext, Rule, Severity};

/// Rule id for combo-convention.
pub const NAME: &str = "combo-convention";

/// Suggests the grammar's combo prefix form for state classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComboConvention;

impl ComboConvention {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ComboConvention {
    fn id(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "State classes should use the grammar's combo prefix form"
    }

    fn default_severity(&self) -> Severity {
        Severity::Suggestion
    }

    fn context_tag(&self) -> Option<&'static str> {
        Some("naming")
    }

    fn run(&self, ctx: &LintContext) -> Vec<Diagnostic> {
        let Some(prefix) = ctx.conventions.combo_prefix.as_deref() else {
            return Vec::new();
        };

        ctx.combos()
            .filter(|class| class.parsed.kind != ClassKind::Combo)
            .map(|class| {
                Diagnostic::new(
                    NAME,
                    self.default_severity(),
                    format!("state class does not use the grammar's `{prefix}` combo form"),
                )
                .with_context(class.parsed.raw.clone())
                .with_metadata("decided_by", class.combo.source.to_string())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::run_rule;

    #[test]
    fn accepts_grammar_combo_form() {
        assert!(run_rule(&ComboConvention::new(), &["c-card", "is-active"]).is_empty());
    }

    #[test]
    fn flags_underscore_and_camel_forms() {
        let diagnostics =
            run_rule(&ComboConvention::new(), &["c-card", "is_visible", "isActive"]);
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].context.as_deref(), Some("is_visible"));
        assert_eq!(diagnostics[1].context.as_deref(), Some("isActive"));
        assert!(diagnostics[0].message.contains("`is-`"));
    }

    #[test]
    fn non_combo_classes_are_ignored() {
        assert!(run_rule(&ComboConvention::new(), &["c-card", "u-mt-16", "island"]).is_empty());
    }
}
