//! Rule to flag combo classes applied without a base class.
//!
//! # Rationale
//!
//! A combo class modifies the base class it is stacked on. Applied alone,
//! or ahead of the base, it styles nothing predictable and usually marks a
//! copy-paste mistake in the composition.
//!
//! # Configuration
//!
//! - `allow_before_base`: accept combos positioned before the base class
//!   (default: false)

use classlint_core::{Diagnostic, LintContext, Rule, Severity};

/// Rule id for combo-without-base.
pub const NAME: &str = "combo-without-base";

/// Flags combo classes with no (or a later) base class.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComboWithoutBase;

impl ComboWithoutBase {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ComboWithoutBase {
    fn id(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Combo classes must follow a base class on the same element"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn context_tag(&self) -> Option<&'static str> {
        Some("structure")
    }

    fn run(&self, ctx: &LintContext) -> Vec<Diagnostic> {
        let allow_before_base = ctx.options.get_bool("allow_before_base", false);

        ctx.combos()
            .filter_map(|class| {
                let message = match ctx.element.base {
                    None => "combo class has no base class on this element",
                    Some(base) if !allow_before_base && class.position < base => {
                        "combo class appears before the base class"
                    }
                    Some(_) => return None,
                };
                Some(
                    Diagnostic::new(NAME, self.default_severity(), message)
                        .with_context(class.parsed.raw.clone())
                        .with_metadata("position", class.position)
                        .with_metadata("decided_by", class.combo.source.to_string()),
                )
            })
            .collect()
    }
}
