//! Presets: named bundles of grammar, roles, rules, and policy.

use std::collections::BTreeMap;

use crate::combo::ComboPolicy;
use crate::config::RuleConfig;
use crate::context::ContextConfig;
use crate::grammar::{GrammarAdapter, GrammarBox};
use crate::roles::{RoleBox, RoleResolver};
use crate::rule::{Rule, RuleBox};

/// A named, reusable bundle of linting configuration.
///
/// `rules` is the full candidate rule list this preset knows about;
/// `rule_config` is a sparse per-rule override of defaults. Grammar and
/// roles are optional; a preset may rely on engine-wide defaults.
/// Immutable for the duration of a scan.
#[derive(Clone)]
pub struct Preset {
    /// Stable preset id.
    pub id: String,
    /// Grammar adapter, or `None` for the engine default.
    pub grammar: Option<GrammarBox>,
    /// Role resolver, or `None` for the engine default.
    pub roles: Option<RoleBox>,
    /// Candidate rules, in registration order.
    pub rules: Vec<RuleBox>,
    /// Element-context classifier tuning.
    pub context: Option<ContextConfig>,
    /// Sparse per-rule overrides, keyed by rule id.
    pub rule_config: BTreeMap<String, RuleConfig>,
    /// Combo detection policy, or `None` for the default (`ApiFirst`).
    pub combo_policy: Option<ComboPolicy>,
}

impl std::fmt::Debug for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preset")
            .field("id", &self.id)
            .field("grammar", &self.grammar.as_ref().map(|g| g.name()))
            .field("roles", &self.roles.as_ref().map(|r| r.name()))
            .field("rules", &self.rules.iter().map(|r| r.id()).collect::<Vec<_>>())
            .field("rule_config", &self.rule_config)
            .field("combo_policy", &self.combo_policy)
            .finish_non_exhaustive()
    }
}

impl Preset {
    /// Creates a builder for a preset with the given id.
    #[must_use]
    pub fn builder(id: impl Into<String>) -> PresetBuilder {
        PresetBuilder {
            preset: Self {
                id: id.into(),
                grammar: None,
                roles: None,
                rules: Vec::new(),
                context: None,
                rule_config: BTreeMap::new(),
                combo_policy: None,
            },
        }
    }

    /// Looks up a candidate rule by id.
    #[must_use]
    pub fn rule_by_id(&self, id: &str) -> Option<&RuleBox> {
        self.rules.iter().find(|r| r.id() == id)
    }
}

/// Builder for [`Preset`].
pub struct PresetBuilder {
    preset: Preset,
}

impl PresetBuilder {
    /// Sets the grammar adapter.
    #[must_use]
    pub fn grammar<G: GrammarAdapter + 'static>(self, grammar: G) -> Self {
        self.grammar_box(std::sync::Arc::new(grammar))
    }

    /// Sets a shared grammar adapter.
    #[must_use]
    pub fn grammar_box(mut self, grammar: GrammarBox) -> Self {
        self.preset.grammar = Some(grammar);
        self
    }

    /// Sets the role resolver.
    #[must_use]
    pub fn roles<R: RoleResolver + 'static>(self, roles: R) -> Self {
        self.roles_box(std::sync::Arc::new(roles))
    }

    /// Sets a shared role resolver.
    #[must_use]
    pub fn roles_box(mut self, roles: RoleBox) -> Self {
        self.preset.roles = Some(roles);
        self
    }

    /// Adds a candidate rule.
    #[must_use]
    pub fn rule<R: Rule + 'static>(self, rule: R) -> Self {
        self.rule_box(std::sync::Arc::new(rule))
    }

    /// Adds a shared candidate rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.preset.rules.push(rule);
        self
    }

    /// Sets the element-context classifier tuning.
    #[must_use]
    pub fn context(mut self, context: ContextConfig) -> Self {
        self.preset.context = Some(context);
        self
    }

    /// Adds a sparse per-rule override.
    #[must_use]
    pub fn rule_config(mut self, id: impl Into<String>, config: RuleConfig) -> Self {
        self.preset.rule_config.insert(id.into(), config);
        self
    }

    /// Sets the combo detection policy.
    #[must_use]
    pub fn combo_policy(mut self, policy: ComboPolicy) -> Self {
        self.preset.combo_policy = Some(policy);
        self
    }

    /// Finishes the preset.
    #[must_use]
    pub fn build(self) -> Preset {
        self.preset
    }
}

/// Boundary to the host's preset store.
///
/// The engine treats a missing lookup as "use engine defaults", never as
/// fatal.
pub trait PresetRegistry: Send + Sync {
    /// Looks up a preset by id.
    fn preset_by_id(&self, id: &str) -> Option<&Preset>;

    /// Id of the active preset in the current session, if any.
    fn current_preset_id(&self) -> Option<&str> {
        None
    }
}

/// In-memory preset registry.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    presets: Vec<Preset>,
    current: Option<String>,
}

impl StaticRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a preset.
    #[must_use]
    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.presets.push(preset);
        self
    }

    /// Marks a preset id as the session's current preset.
    #[must_use]
    pub fn with_current(mut self, id: impl Into<String>) -> Self {
        self.current = Some(id.into());
        self
    }
}

impl PresetRegistry for StaticRegistry {
    fn preset_by_id(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    fn current_preset_id(&self) -> Option<&str> {
        self.current.as_deref()
    }
}
