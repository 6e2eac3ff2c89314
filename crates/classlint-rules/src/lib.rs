//! # classlint-rules
//!
//! Built-in grammar, role resolver, rules, and presets for classlint.
//!
//! ## Available Rules
//!
//! | Name | Default severity | Description |
//! |------|------------------|-------------|
//! | `combo-convention` | suggestion | State classes should use the grammar's combo prefix form |
//! | `combo-without-base` | error | Combo classes must follow a base class |
//! | `custom-first` | warning | The custom base class should come first |
//! | `duplicate-class` | warning | A class should appear at most once per element |
//! | `unknown-class` | suggestion | Classes should match the active naming grammar |
//! | `unstyled-element` | suggestion | Elements should carry at least one class |
//! | `utility-overload` | suggestion | Elements should not stack long utility chains |
//!
//! ## Usage
//!
//! ```ignore
//! use classlint_core::{Linter, ProjectConfig};
//! use classlint_rules::default_registry;
//!
//! let registry = default_registry();
//! let linter = Linter::from_project(&registry, &ProjectConfig::default())?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod combo_convention;
mod combo_without_base;
mod composition_roles;
mod custom_first;
mod dash_grammar;
mod duplicate_class;
mod presets;
mod unknown_class;
mod unstyled_element;
mod utility_overload;

pub use combo_convention::ComboConvention;
pub use combo_without_base::ComboWithoutBase;
pub use composition_roles::CompositionRoles;
pub use custom_first::CustomFirst;
pub use dash_grammar::DashGrammar;
pub use duplicate_class::DuplicateClass;
pub use presets::{all_rules, default_registry, minimal, recommended, strict};
pub use unknown_class::UnknownClass;
pub use unstyled_element::UnstyledElement;
pub use utility_overload::UtilityOverload;

/// Re-export core types for convenience.
pub use classlint_core::{Diagnostic, Rule, Severity};

#[cfg(test)]
pub(crate) mod test_support {
    use classlint_core::{
        classify_element, detect_combo_class, ClassifiedClass, ComboPolicy, ContextConfig,
        Diagnostic, GrammarAdapter, LintContext, OpinionMode, RoleResolver, Rule, RuleOptions,
    };

    use crate::{CompositionRoles, DashGrammar};

    pub fn run_rule(rule: &dyn Rule, classes: &[&str]) -> Vec<Diagnostic> {
        run(rule, classes, OpinionMode::Balanced, &RuleOptions::new())
    }

    pub fn run_rule_in_mode(rule: &dyn Rule, classes: &[&str], mode: OpinionMode) -> Vec<Diagnostic> {
        run(rule, classes, mode, &RuleOptions::new())
    }

    pub fn run_rule_with_options(
        rule: &dyn Rule,
        classes: &[&str],
        options: RuleOptions,
    ) -> Vec<Diagnostic> {
        run(rule, classes, OpinionMode::Balanced, &options)
    }

    /// Classifies `classes` under the dash grammar (no host signal) and
    /// runs `rule` against the result.
    fn run(
        rule: &dyn Rule,
        classes: &[&str],
        opinion_mode: OpinionMode,
        options: &RuleOptions,
    ) -> Vec<Diagnostic> {
        let grammar = DashGrammar::new();
        let roles = CompositionRoles::new();
        let policy = ComboPolicy::ApiFirst;

        let classified: Vec<ClassifiedClass> = classes
            .iter()
            .enumerate()
            .map(|(position, raw)| {
                let parsed = grammar.parse(raw);
                let role = roles.map_to_role(&parsed);
                let combo = detect_combo_class(None, raw, &policy);
                ClassifiedClass {
                    parsed,
                    role,
                    combo,
                    position,
                }
            })
            .collect();

        let context_config = ContextConfig::default();
        let element = classify_element(&classified, &context_config);
        let conventions = grammar.conventions();

        let ctx = LintContext {
            classes: &classified,
            element: &element,
            conventions: &conventions,
            opinion_mode,
            options,
        };
        rule.run(&ctx)
    }
}
