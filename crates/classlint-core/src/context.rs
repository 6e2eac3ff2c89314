//! Lint contexts: the classified input handed to rules.

use serde::{Deserialize, Serialize};

use crate::combo::ComboDetection;
use crate::config::{OpinionMode, RuleOptions};
use crate::grammar::{ClassKind, GrammarConventions, ParsedClass};
use crate::roles::ElementRole;

/// Classification of one applied class, in element display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedClass {
    /// Grammar decomposition of the raw class string.
    pub parsed: ParsedClass,
    /// Resolved role, after project aliases.
    pub role: ElementRole,
    /// Combo decision for this class.
    pub combo: ComboDetection,
    /// Zero-based position in the element's class list.
    pub position: usize,
}

/// Tuning for the element-context classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Kinds eligible to anchor an element as its base class.
    #[serde(default = "default_base_kinds")]
    pub base_kinds: Vec<ClassKind>,

    /// Roles counting as container-like, overriding the built-in set.
    #[serde(default)]
    pub container_roles: Option<Vec<ElementRole>>,
}

fn default_base_kinds() -> Vec<ClassKind> {
    vec![ClassKind::Custom]
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            base_kinds: default_base_kinds(),
            container_roles: None,
        }
    }
}

/// Element-level classification derived from the per-class results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementContext {
    /// Position of the element's base class, if any.
    pub base: Option<usize>,
    /// Whether the element reads as a structural container.
    pub container_like: bool,
}

/// Derives the element context from classified classes.
///
/// The base class is the first class whose kind is base-eligible and that
/// was not decided to be a combo. Container-likeness follows the base
/// class's role.
#[must_use]
pub fn classify_element(classes: &[ClassifiedClass], config: &ContextConfig) -> ElementContext {
    let base = classes
        .iter()
        .position(|c| config.base_kinds.contains(&c.parsed.kind) && !c.combo.is_combo);

    let container_like = base.is_some_and(|i| {
        let role = classes[i].role;
        match &config.container_roles {
            Some(roles) => roles.contains(&role),
            None => role.is_container_like(),
        }
    });

    ElementContext { base, container_like }
}

/// Everything a rule sees: the classified element plus ambient project state.
///
/// Rules must be pure functions of this context; any per-run state lives
/// here, never in the rule itself.
#[derive(Debug, Clone)]
pub struct LintContext<'a> {
    /// Classified classes in display order.
    pub classes: &'a [ClassifiedClass],
    /// Element-level classification.
    pub element: &'a ElementContext,
    /// Active grammar's conventions, after project overrides.
    pub conventions: &'a GrammarConventions,
    /// Project opinion strictness.
    pub opinion_mode: OpinionMode,
    /// The running rule's resolved options.
    pub options: &'a RuleOptions,
}

impl LintContext<'_> {
    /// The element's base class, if one was identified.
    #[must_use]
    pub fn base_class(&self) -> Option<&ClassifiedClass> {
        self.element.base.map(|i| &self.classes[i])
    }

    /// Classes decided to be combos.
    pub fn combos(&self) -> impl Iterator<Item = &ClassifiedClass> {
        self.classes.iter().filter(|c| c.combo.is_combo)
    }

    /// Classes of the given grammatical kind.
    pub fn of_kind(&self, kind: ClassKind) -> impl Iterator<Item = &ClassifiedClass> + '_ {
        self.classes.iter().filter(move |c| c.parsed.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combo::ComboSource;

    fn classified(raw: &str, kind: ClassKind, role: ElementRole, is_combo: bool, position: usize) -> ClassifiedClass {
        ClassifiedClass {
            parsed: ParsedClass::new(raw, kind),
            role,
            combo: ComboDetection {
                is_combo,
                source: ComboSource::Heuristic,
            },
            position,
        }
    }

    #[test]
    fn base_is_first_non_combo_custom() {
        let classes = vec![
            classified("u-hidden", ClassKind::Utility, ElementRole::Unknown, false, 0),
            classified("c-card", ClassKind::Custom, ElementRole::ComponentRoot, false, 1),
            classified("is-active", ClassKind::Combo, ElementRole::Unknown, true, 2),
        ];
        let ctx = classify_element(&classes, &ContextConfig::default());
        assert_eq!(ctx.base, Some(1));
        assert!(ctx.container_like);
    }

    #[test]
    fn combo_decided_custom_cannot_anchor() {
        // API can flag a custom-shaped class as a combo; it then cannot be the base.
        let classes = vec![classified("c-accent", ClassKind::Custom, ElementRole::Unknown, true, 0)];
        let ctx = classify_element(&classes, &ContextConfig::default());
        assert_eq!(ctx.base, None);
        assert!(!ctx.container_like);
    }

    #[test]
    fn container_roles_override_builtin_set() {
        let classes = vec![classified("c-card_title", ClassKind::Custom, ElementRole::Title, false, 0)];
        let config = ContextConfig {
            container_roles: Some(vec![ElementRole::Title]),
            ..ContextConfig::default()
        };
        let ctx = classify_element(&classes, &config);
        assert!(ctx.container_like);
    }

    #[test]
    fn empty_element_has_no_base() {
        let ctx = classify_element(&[], &ContextConfig::default());
        assert_eq!(ctx.base, None);
        assert!(!ctx.container_like);
    }
}
