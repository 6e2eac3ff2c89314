//! Shipped presets for common configurations.

use std::sync::Arc;

use classlint_core::{ComboPolicy, Preset, RuleBox, RuleConfig, Severity, StaticRegistry};

use crate::{
    ComboConvention, ComboWithoutBase, CompositionRoles, CustomFirst, DashGrammar, DuplicateClass,
    UnknownClass, UnstyledElement, UtilityOverload,
};

/// Returns all built-in rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Arc::new(ComboConvention::new()),
        Arc::new(ComboWithoutBase::new()),
        Arc::new(CustomFirst::new()),
        Arc::new(DuplicateClass::new()),
        Arc::new(UnknownClass::new()),
        Arc::new(UnstyledElement::new()),
        Arc::new(UtilityOverload::new()),
    ]
}

fn dash_preset(id: &str, rules: Vec<RuleBox>) -> Preset {
    let mut builder = Preset::builder(id)
        .grammar(DashGrammar::new())
        .roles(CompositionRoles::new());
    for rule in rules {
        builder = builder.rule_box(rule);
    }
    builder.build()
}

/// The recommended preset: every rule at its default, api-first detection.
#[must_use]
pub fn recommended() -> Preset {
    dash_preset("recommended", all_rules())
}

/// The strict preset: every rule, tightened severities.
#[must_use]
pub fn strict() -> Preset {
    let mut preset = dash_preset("strict", all_rules());
    preset.combo_policy = Some(ComboPolicy::ApiFirst);
    preset
        .rule_config
        .insert("custom-first".into(), RuleConfig::new().severity(Severity::Error));
    preset
        .rule_config
        .insert("unknown-class".into(), RuleConfig::new().severity(Severity::Warning));
    preset
}

/// The minimal preset for gradual adoption: only the structural
/// must-haves, with no dependency on the host's combo signal.
#[must_use]
pub fn minimal() -> Preset {
    let mut preset = dash_preset(
        "minimal",
        vec![Arc::new(ComboWithoutBase::new()), Arc::new(DuplicateClass::new())],
    );
    preset.combo_policy = Some(ComboPolicy::HeuristicOnly);
    preset
}

/// Returns a registry with all shipped presets, `recommended` current.
#[must_use]
pub fn default_registry() -> StaticRegistry {
    StaticRegistry::new()
        .with_preset(recommended())
        .with_preset(strict())
        .with_preset(minimal())
        .with_current("recommended")
}

#[cfg(test)]
mod tests {
    use super::*;
    use classlint_core::PresetRegistry;

    #[test]
    fn presets_are_registered() {
        let registry = default_registry();
        assert!(registry.preset_by_id("recommended").is_some());
        assert!(registry.preset_by_id("strict").is_some());
        assert!(registry.preset_by_id("minimal").is_some());
        assert_eq!(registry.current_preset_id(), Some("recommended"));
    }

    #[test]
    fn strict_configures_only_its_own_rules() {
        let preset = strict();
        for id in preset.rule_config.keys() {
            assert!(preset.rule_by_id(id).is_some(), "unknown rule `{id}`");
        }
    }

    #[test]
    fn minimal_avoids_the_host_signal() {
        let preset = minimal();
        assert!(matches!(preset.combo_policy, Some(ComboPolicy::HeuristicOnly)));
        assert_eq!(preset.rules.len(), 2);
    }

    #[test]
    fn rule_ids_are_unique() {
        let rules = all_rules();
        let mut ids: Vec<&str> = rules.iter().map(|r| r.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), rules.len());
    }
}
