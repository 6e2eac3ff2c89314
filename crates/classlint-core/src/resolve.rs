//! Preset / project-configuration resolution.
//!
//! Resolution is deterministic and side-effect-free: the same registry and
//! project config always produce a structurally identical effective
//! configuration. Precedence per rule field, lowest to highest: the rule's
//! own default, the preset's `rule_config` entry, the project's
//! `overrides.rules` entry. Each field is resolved by an explicit three-tier
//! step rather than map spreading, so the precedence stays auditable.

use std::sync::Arc;

use crate::combo::ComboPolicy;
use crate::config::{OpinionMode, ProjectConfig, RuleConfig, RuleOptions};
use crate::context::ContextConfig;
use crate::grammar::{FallbackGrammar, GrammarBox, OverlayGrammar};
use crate::preset::{Preset, PresetRegistry};
use crate::roles::{NullRoles, RoleAliases, RoleBox};
use crate::rule::{Rule, RuleBox};
use crate::types::Severity;

/// Errors from configuration resolution.
///
/// These indicate a broken configuration, not bad input data; everything
/// data-shaped degrades to defaults instead.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ResolveError {
    /// A preset's `rule_config` names a rule absent from its own rule list.
    #[error("preset `{preset}` configures unknown rule `{rule}`")]
    #[diagnostic(help("rule ids in `rule_config` must appear in the preset's own rule list"))]
    UnknownRule {
        /// Offending preset id.
        preset: String,
        /// The rule id that does not exist.
        rule: String,
    },
}

/// Effective per-rule settings after the three-tier merge.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSettings {
    /// Whether the rule runs at all.
    pub enabled: bool,
    /// Resolved severity for every diagnostic the rule emits.
    pub severity: Severity,
    /// Resolved rule options (preset options overlaid with project options).
    pub options: RuleOptions,
}

/// A rule paired with its resolved settings.
#[derive(Clone)]
pub struct EffectiveRule {
    /// The rule instance.
    pub rule: RuleBox,
    /// Its resolved settings.
    pub settings: RuleSettings,
}

impl std::fmt::Debug for EffectiveRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectiveRule")
            .field("rule", &self.rule.id())
            .field("settings", &self.settings)
            .finish()
    }
}

/// The resolved configuration a scan runs under.
#[derive(Clone)]
pub struct EffectiveConfig {
    /// Id of the preset that was resolved, `None` for engine defaults.
    pub preset_id: Option<String>,
    /// Active grammar, with project convention overrides applied.
    pub grammar: GrammarBox,
    /// Active role resolver.
    pub roles: RoleBox,
    /// Rules with resolved settings, sorted by id.
    pub rules: Vec<EffectiveRule>,
    /// Post-resolution role remaps.
    pub role_aliases: RoleAliases,
    /// Combo detection policy.
    pub combo_policy: ComboPolicy,
    /// Element-context classifier tuning.
    pub context: ContextConfig,
    /// Project opinion strictness.
    pub opinion_mode: OpinionMode,
}

impl std::fmt::Debug for EffectiveConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectiveConfig")
            .field("preset_id", &self.preset_id)
            .field("grammar", &self.grammar.name())
            .field("roles", &self.roles.name())
            .field("rules", &self.rules)
            .field("role_aliases", &self.role_aliases)
            .field("combo_policy", &self.combo_policy)
            .field("context", &self.context)
            .field("opinion_mode", &self.opinion_mode)
            .finish()
    }
}

/// Resolves the effective configuration for a project.
///
/// Preset lookup order: the project's `preset` id, then the registry's
/// current preset id. A missing preset degrades to engine defaults
/// (fallback grammar, null roles, no rules) and is logged, never fatal.
///
/// # Errors
///
/// Returns [`ResolveError::UnknownRule`] when the selected preset's
/// `rule_config` names a rule id absent from the preset's own rule list.
pub fn resolve(
    registry: &dyn PresetRegistry,
    project: &ProjectConfig,
) -> Result<EffectiveConfig, ResolveError> {
    let preset = lookup_preset(registry, project);

    if let Some(preset) = preset {
        for id in preset.rule_config.keys() {
            if preset.rule_by_id(id).is_none() {
                return Err(ResolveError::UnknownRule {
                    preset: preset.id.clone(),
                    rule: id.clone(),
                });
            }
        }
    }

    for id in project.overrides.rules.keys() {
        let known = preset.is_some_and(|p| p.rule_by_id(id).is_some());
        if !known {
            tracing::warn!("ignoring project override for unknown rule `{id}`");
        }
    }

    let base_grammar: GrammarBox = preset
        .and_then(|p| p.grammar.clone())
        .unwrap_or_else(|| Arc::new(FallbackGrammar));
    let grammar: GrammarBox = if project.overrides.grammar.is_empty() {
        base_grammar
    } else {
        Arc::new(OverlayGrammar::new(base_grammar, &project.overrides.grammar))
    };

    let roles: RoleBox = preset
        .and_then(|p| p.roles.clone())
        .unwrap_or_else(|| Arc::new(NullRoles));

    let mut rules: Vec<EffectiveRule> = preset
        .map_or(&[][..], |p| &p.rules[..])
        .iter()
        .map(|rule| {
            let settings = resolve_rule_settings(
                rule.as_ref(),
                preset.and_then(|p| p.rule_config.get(rule.id())),
                project.overrides.rules.get(rule.id()),
            );
            EffectiveRule {
                rule: Arc::clone(rule),
                settings,
            }
        })
        .collect();
    rules.sort_by(|a, b| a.rule.id().cmp(b.rule.id()));

    Ok(EffectiveConfig {
        preset_id: preset.map(|p| p.id.clone()),
        grammar,
        roles,
        rules,
        role_aliases: project.overrides.role_aliases.clone(),
        combo_policy: preset.and_then(|p| p.combo_policy.clone()).unwrap_or_default(),
        context: preset.and_then(|p| p.context.clone()).unwrap_or_default(),
        opinion_mode: project.opinion_mode,
    })
}

fn lookup_preset<'a>(
    registry: &'a dyn PresetRegistry,
    project: &ProjectConfig,
) -> Option<&'a Preset> {
    let id = project
        .preset
        .as_deref()
        .or_else(|| registry.current_preset_id())?;
    let found = registry.preset_by_id(id);
    if found.is_none() {
        tracing::debug!("preset `{id}` not found, using engine defaults");
    }
    found
}

/// Resolves one rule's effective settings.
///
/// Each field independently takes the most specific layer that sets it:
/// project override, else preset config, else the rule's own default.
/// Options are overlaid per key, project winning.
#[must_use]
pub fn resolve_rule_settings(
    rule: &dyn Rule,
    preset_config: Option<&RuleConfig>,
    project_config: Option<&RuleConfig>,
) -> RuleSettings {
    let enabled = project_config
        .and_then(|c| c.enabled)
        .or_else(|| preset_config.and_then(|c| c.enabled))
        .unwrap_or(true);

    let severity = project_config
        .and_then(|c| c.severity)
        .or_else(|| preset_config.and_then(|c| c.severity))
        .unwrap_or_else(|| rule.default_severity());

    let preset_options = preset_config.map(|c| c.options.clone()).unwrap_or_default();
    let project_options = project_config.map(|c| c.options.clone()).unwrap_or_default();
    let options = preset_options.overlaid_with(&project_options);

    RuleSettings {
        enabled,
        severity,
        options,
    }
}
