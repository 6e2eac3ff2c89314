//! Rule to keep the custom base class first on an element.
//!
//! # Rationale
//!
//! Grammars that read left-to-right (the dash grammar among them) expect
//! the element's identity to come first; utilities and combos refine it.
//!
//! # Configuration
//!
//! - `require_base`: also flag elements that have classes but no custom
//!   base at all (default: true in strict opinion mode, false otherwise)

use classlint_core::{Diagnostic, LintContext, OpinionMode, Rule};

/// Rule id for custom-first.
pub const NAME: &str = "custom-first";

/// Requires the custom base class to lead the class list.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomFirst;

impl CustomFirst {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for CustomFirst {
    fn id(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "The custom base class should be the first class on an element"
    }

    fn context_tag(&self) -> Option<&'static str> {
        Some("structure")
    }

    fn run(&self, ctx: &LintContext) -> Vec<Diagnostic> {
        if !ctx.conventions.custom_first_required || ctx.classes.is_empty() {
            return Vec::new();
        }

        match ctx.element.base {
            Some(0) => Vec::new(),
            Some(base) => vec![
                Diagnostic::new(NAME, self.default_severity(), "the custom base class should come first")
                    .with_context(ctx.classes[0].parsed.raw.clone())
                    .with_metadata("base_position", base),
            ],
            None => {
                let require_base = ctx
                    .options
                    .get_bool("require_base", ctx.opinion_mode == OpinionMode::Strict);
                if require_base {
                    vec![Diagnostic::new(
                        NAME,
                        self.default_severity(),
                        "element has no custom base class",
                    )]
                } else {
                    Vec::new()
                }
            }
        }
    }
}
