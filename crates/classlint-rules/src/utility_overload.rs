//! Rule to cap the number of utility classes stacked on one element.
//!
//! # Rationale
//!
//! A long utility chain usually means a component class is missing; the
//! styling belongs in the design system, not on the element.
//!
//! # Configuration
//!
//! - `max`: utility count threshold (default by opinion mode: strict 2,
//!   balanced 4, lenient 8)

use classlint_core::{ClassKind, Diagnostic, LintContext, OpinionMode, Rule, Severity};

/// Rule id for utility-overload.
pub const NAME: &str = "utility-overload";

/// Flags elements stacking more utility classes than the threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtilityOverload;

impl UtilityOverload {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn default_max(mode: OpinionMode) -> i64 {
    match mode {
        OpinionMode::Strict => 2,
        OpinionMode::Balanced => 4,
        OpinionMode::Lenient => 8,
    }
}

impl Rule for UtilityOverload {
    fn id(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Elements should not stack long utility class chains"
    }

    fn default_severity(&self) -> Severity {
        Severity::Suggestion
    }

    fn context_tag(&self) -> Option<&'static str> {
        Some("styling")
    }

    fn run(&self, ctx: &LintContext) -> Vec<Diagnostic> {
        let max = ctx.options.get_int("max", default_max(ctx.opinion_mode));
        let count = i64::try_from(ctx.of_kind(ClassKind::Utility).count()).unwrap_or(i64::MAX);

        if count <= max {
            return Vec::new();
        }

        vec![
            Diagnostic::new(
                NAME,
                self.default_severity(),
                format!("element stacks {count} utility classes (limit {max})"),
            )
            .with_metadata("count", count)
            .with_metadata("max", max),
        ]
    }
}
