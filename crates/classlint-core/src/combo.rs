//! Combo-class detection: external signal, heuristic, and policy layering.
//!
//! The host's style API may report whether a class is a combo (modifier)
//! class. That signal is unreliable: it can be absent, unavailable, or the
//! call can fail. Detection folds the signal and a local heuristic into one
//! deterministic decision, governed by a per-preset policy, and records
//! which code path produced the answer for auditability.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Which code path produced a combo decision.
///
/// Diagnostic metadata only; later logic never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComboSource {
    /// The host's signal was obtained and used.
    Api,
    /// The local naming heuristic decided.
    Heuristic,
    /// The policy itself decided (custom function, or a mandated default).
    Policy,
}

impl fmt::Display for ComboSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api => write!(f, "api"),
            Self::Heuristic => write!(f, "heuristic"),
            Self::Policy => write!(f, "policy"),
        }
    }
}

/// Outcome of combo detection for one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboDetection {
    /// Whether the class is a combo (modifier) class.
    pub is_combo: bool,
    /// Which code path produced the decision.
    pub source: ComboSource,
}

/// Signature of a custom combo decision function.
///
/// Receives the external signal (`None` = unavailable), the heuristic
/// result, and the raw class name; its return value is authoritative.
pub type ComboPredicate = Arc<dyn Fn(Option<bool>, bool, &str) -> bool + Send + Sync>;

/// Per-preset policy for merging the external signal with the heuristic.
#[derive(Clone, Default)]
pub enum ComboPolicy {
    /// Use the signal when obtainable, otherwise the heuristic.
    #[default]
    ApiFirst,
    /// Trust only the signal; unavailable counts as "not a combo".
    ApiOnly,
    /// Ignore the signal entirely.
    HeuristicOnly,
    /// Delegate the decision to a custom function.
    Custom(ComboPredicate),
}

impl fmt::Debug for ComboPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiFirst => write!(f, "ApiFirst"),
            Self::ApiOnly => write!(f, "ApiOnly"),
            Self::HeuristicOnly => write!(f, "HeuristicOnly"),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl ComboPolicy {
    /// Parses a policy name.
    ///
    /// Unrecognized names degrade to the documented default, `ApiFirst`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "api-only" => Self::ApiOnly,
            "heuristic-only" => Self::HeuristicOnly,
            "api-first" => Self::ApiFirst,
            other => {
                tracing::debug!("unrecognized combo policy `{other}`, using api-first");
                Self::ApiFirst
            }
        }
    }
}

/// Heuristic combo test on the raw class name.
///
/// A class is heuristically a combo when it starts with `is-` or `is_`
/// followed by at least one ASCII alphanumeric character, or with `is`
/// followed immediately by an ASCII uppercase letter (camelCase boolean-flag
/// convention). `is-` alone and `is1234` are not combos.
#[must_use]
pub fn heuristic_is_combo(raw: &str) -> bool {
    if let Some(rest) = raw.strip_prefix("is-").or_else(|| raw.strip_prefix("is_")) {
        return rest.chars().next().is_some_and(|c| c.is_ascii_alphanumeric());
    }
    if let Some(rest) = raw.strip_prefix("is") {
        return rest.chars().next().is_some_and(|c| c.is_ascii_uppercase());
    }
    false
}

/// Folds the external signal and the heuristic into one decision.
///
/// `signal` is the host's already-resolved combo report; `None` means the
/// signal was absent, unavailable, or the host call failed. Total over all
/// policy/signal combinations.
#[must_use]
pub fn detect_combo_class(signal: Option<bool>, raw: &str, policy: &ComboPolicy) -> ComboDetection {
    match policy {
        ComboPolicy::Custom(decide) => ComboDetection {
            is_combo: decide(signal, heuristic_is_combo(raw), raw),
            source: ComboSource::Policy,
        },
        ComboPolicy::ApiOnly => match signal {
            Some(value) => ComboDetection {
                is_combo: value,
                source: ComboSource::Api,
            },
            None => ComboDetection {
                is_combo: false,
                source: ComboSource::Policy,
            },
        },
        ComboPolicy::HeuristicOnly => ComboDetection {
            is_combo: heuristic_is_combo(raw),
            source: ComboSource::Heuristic,
        },
        ComboPolicy::ApiFirst => match signal {
            Some(value) => ComboDetection {
                is_combo: value,
                source: ComboSource::Api,
            },
            None => ComboDetection {
                is_combo: heuristic_is_combo(raw),
                source: ComboSource::Heuristic,
            },
        },
    }
}
