//! Grammar adapters: parsing raw class names into structured tokens.
//!
//! A grammar adapter is a total, pure function from a raw class string to a
//! [`ParsedClass`]. Malformed or unrecognized input is never an error; it
//! degrades to [`ClassKind::Unknown`]. Adapters must not panic.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::combo::heuristic_is_combo;

/// Grammatical family of a class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    /// Project-defined component/base class.
    Custom,
    /// Single-purpose utility class.
    Utility,
    /// State/modifier class applied alongside a base class.
    Combo,
    /// Did not match the grammar.
    Unknown,
}

/// Structured decomposition of one raw class string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedClass {
    /// The original string, unmodified.
    pub raw: String,
    /// Grammatical family.
    pub kind: ClassKind,
    /// Primary semantic segment (component name, utility property group).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Style-variant segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation: Option<String>,
    /// Part-of-component marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_token: Option<String>,
    /// Ordered raw sub-tokens, for rules that need positional access.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<String>,
}

impl ParsedClass {
    /// Creates a parsed class of the given kind with no semantic segments.
    #[must_use]
    pub fn new(raw: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            raw: raw.into(),
            kind,
            type_name: None,
            variation: None,
            element_token: None,
            tokens: Vec::new(),
        }
    }

    /// Creates an unknown classification, preserving separator sub-tokens.
    #[must_use]
    pub fn unknown(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let tokens = split_tokens(&raw);
        Self {
            tokens,
            ..Self::new(raw, ClassKind::Unknown)
        }
    }

    /// Sets the primary semantic segment.
    #[must_use]
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Sets the style-variant segment.
    #[must_use]
    pub fn with_variation(mut self, variation: impl Into<String>) -> Self {
        self.variation = Some(variation.into());
        self
    }

    /// Sets the part-of-component marker.
    #[must_use]
    pub fn with_element_token(mut self, element_token: impl Into<String>) -> Self {
        self.element_token = Some(element_token.into());
        self
    }

    /// Sets the ordered raw sub-tokens.
    #[must_use]
    pub fn with_tokens(mut self, tokens: Vec<String>) -> Self {
        self.tokens = tokens;
        self
    }
}

/// Splits a raw class string on `-` and `_`, dropping empty fragments.
#[must_use]
pub fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(['-', '_'])
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Naming conventions a grammar exposes for introspection.
///
/// Lets role resolvers and rules reason about the grammar's shape without
/// re-parsing class strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarConventions {
    /// Whether the first class on an element is expected to be custom.
    #[serde(default)]
    pub custom_first_required: bool,
    /// Prefix marking utility classes (e.g. `u-`).
    #[serde(default)]
    pub utility_prefix: Option<String>,
    /// Prefix marking component classes (e.g. `c-`).
    #[serde(default)]
    pub component_prefix: Option<String>,
    /// Prefix marking combo classes (e.g. `is-`).
    #[serde(default)]
    pub combo_prefix: Option<String>,
}

/// Sparse per-field overrides for [`GrammarConventions`].
///
/// Convention fields are overlaid individually; `parse` itself is never
/// merged, only delegated wholesale (see [`OverlayGrammar`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarOverrides {
    /// Overrides `custom_first_required` when set.
    #[serde(default)]
    pub custom_first_required: Option<bool>,
    /// Overrides `utility_prefix` when set.
    #[serde(default)]
    pub utility_prefix: Option<String>,
    /// Overrides `component_prefix` when set.
    #[serde(default)]
    pub component_prefix: Option<String>,
    /// Overrides `combo_prefix` when set.
    #[serde(default)]
    pub combo_prefix: Option<String>,
}

impl GrammarOverrides {
    /// Returns `true` if no field is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Overlays these overrides on a base convention set.
    #[must_use]
    pub fn apply(&self, base: &GrammarConventions) -> GrammarConventions {
        GrammarConventions {
            custom_first_required: self
                .custom_first_required
                .unwrap_or(base.custom_first_required),
            utility_prefix: self
                .utility_prefix
                .clone()
                .or_else(|| base.utility_prefix.clone()),
            component_prefix: self
                .component_prefix
                .clone()
                .or_else(|| base.component_prefix.clone()),
            combo_prefix: self
                .combo_prefix
                .clone()
                .or_else(|| base.combo_prefix.clone()),
        }
    }
}

/// A pluggable class-name grammar.
///
/// Implementations must be total: every input string yields exactly one
/// [`ParsedClass`], never a panic, and `kind` is always set.
pub trait GrammarAdapter: Send + Sync {
    /// Returns the grammar's name (e.g. "dash").
    fn name(&self) -> &'static str;

    /// Parses one raw class string.
    fn parse(&self, raw: &str) -> ParsedClass;

    /// Returns the grammar's naming conventions.
    fn conventions(&self) -> GrammarConventions {
        GrammarConventions::default()
    }
}

/// Type alias for shared grammar trait objects.
pub type GrammarBox = Arc<dyn GrammarAdapter>;

/// Wraps a grammar, replacing convention fields while delegating `parse`.
pub struct OverlayGrammar {
    inner: GrammarBox,
    conventions: GrammarConventions,
}

impl OverlayGrammar {
    /// Overlays the given overrides on `inner`'s conventions.
    #[must_use]
    pub fn new(inner: GrammarBox, overrides: &GrammarOverrides) -> Self {
        let conventions = overrides.apply(&inner.conventions());
        Self { inner, conventions }
    }
}

impl GrammarAdapter for OverlayGrammar {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn parse(&self, raw: &str) -> ParsedClass {
        self.inner.parse(raw)
    }

    fn conventions(&self) -> GrammarConventions {
        self.conventions.clone()
    }
}

/// Engine-wide default grammar used when a preset supplies none.
///
/// Knows nothing about any project convention: combo-shaped names (per the
/// shared heuristic) classify as combos, everything else as unknown, with
/// separator sub-tokens preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackGrammar;

impl GrammarAdapter for FallbackGrammar {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn parse(&self, raw: &str) -> ParsedClass {
        let kind = if heuristic_is_combo(raw) {
            ClassKind::Combo
        } else {
            ClassKind::Unknown
        };
        ParsedClass::new(raw, kind).with_tokens(split_tokens(raw))
    }
}
