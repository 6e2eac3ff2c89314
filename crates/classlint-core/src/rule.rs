//! Rule trait for defining class-name lint rules.

use std::sync::Arc;

use crate::context::LintContext;
use crate::types::{Diagnostic, Severity};

/// A named, independently configurable evaluator.
///
/// A rule is stateless between invocations and must be a pure function of
/// the context it receives. It may emit zero, one, or many diagnostics,
/// each carrying the rule's own id. The engine resolves severities and
/// skips disabled rules before `run` is ever called.
///
/// # Example
///
/// ```ignore
/// use classlint_core::{Diagnostic, LintContext, Rule, Severity};
///
/// pub struct NoEmptyNames;
///
/// impl Rule for NoEmptyNames {
///     fn id(&self) -> &'static str { "no-empty-names" }
///
///     fn run(&self, ctx: &LintContext) -> Vec<Diagnostic> {
///         ctx.classes
///             .iter()
///             .filter(|c| c.parsed.raw.is_empty())
///             .map(|_| Diagnostic::new(self.id(), self.default_severity(), "empty class name"))
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the stable kebab-case id of this rule (e.g. "combo-without-base").
    fn id(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for findings from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Optional tag grouping related rules (e.g. "structure", "naming").
    fn context_tag(&self) -> Option<&'static str> {
        None
    }

    /// Evaluates the rule against a classified element.
    fn run(&self, ctx: &LintContext) -> Vec<Diagnostic>;
}

/// Type alias for shared rule trait objects.
///
/// `Arc` rather than `Box` so presets can hand the same rule instances to
/// repeated resolutions without cloning rule state.
pub type RuleBox = Arc<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combo::{ComboDetection, ComboSource};
    use crate::config::{OpinionMode, RuleOptions};
    use crate::context::{ClassifiedClass, ElementContext};
    use crate::grammar::{ClassKind, GrammarConventions, ParsedClass};
    use crate::roles::ElementRole;

    struct TestRule;

    impl Rule for TestRule {
        fn id(&self) -> &'static str {
            "test-rule"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn run(&self, ctx: &LintContext) -> Vec<Diagnostic> {
            ctx.classes
                .iter()
                .map(|c| {
                    Diagnostic::new(self.id(), self.default_severity(), "seen")
                        .with_context(c.parsed.raw.clone())
                })
                .collect()
        }
    }

    #[test]
    fn rule_trait_defaults() {
        let rule = TestRule;
        assert_eq!(rule.id(), "test-rule");
        assert_eq!(rule.default_severity(), Severity::Warning);
        assert_eq!(rule.context_tag(), None);
    }

    #[test]
    fn rule_emits_per_class() {
        let classes = vec![ClassifiedClass {
            parsed: ParsedClass::new("c-card", ClassKind::Custom),
            role: ElementRole::ComponentRoot,
            combo: ComboDetection {
                is_combo: false,
                source: ComboSource::Heuristic,
            },
            position: 0,
        }];
        let element = ElementContext {
            base: Some(0),
            container_like: true,
        };
        let conventions = GrammarConventions::default();
        let options = RuleOptions::new();
        let ctx = LintContext {
            classes: &classes,
            element: &element,
            conventions: &conventions,
            opinion_mode: OpinionMode::Balanced,
            options: &options,
        };

        let diagnostics = TestRule.run(&ctx);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].context.as_deref(), Some("c-card"));
    }
}
