//! The linter engine: classification, role resolution, rule evaluation.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::combo::detect_combo_class;
use crate::config::ProjectConfig;
use crate::context::{classify_element, ClassifiedClass, LintContext};
use crate::preset::PresetRegistry;
use crate::resolve::{resolve, EffectiveConfig, ResolveError};
use crate::roles::ElementRole;
use crate::types::{Diagnostic, Severity};

/// Failure obtaining the host's combo signal.
///
/// Carries an opaque message; the engine folds it to "signal unavailable"
/// and never propagates it.
#[derive(Debug, thiserror::Error)]
#[error("combo signal unavailable: {message}")]
pub struct SignalError {
    message: String,
}

impl SignalError {
    /// Creates a signal error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// An element-like handle from the hosting application.
///
/// Supplies the element's applied class names in display order and,
/// per class, the host's combo report. The signal retrieval is the one
/// operation in the system allowed to fail; the engine treats failure
/// exactly as "signal unavailable".
pub trait ElementSource {
    /// Applied class names, in display order.
    fn class_names(&self) -> Vec<String>;

    /// Host combo report for one class. `Ok(None)` means the host has no
    /// answer; `Err` means the host call itself failed.
    fn combo_signal(&self, class_name: &str) -> Result<Option<bool>, SignalError> {
        let _ = class_name;
        Ok(None)
    }
}

/// An owned, pre-fetched element for hosts that resolve signals up front.
#[derive(Debug, Clone, Default)]
pub struct ElementSnapshot {
    class_names: Vec<String>,
    signals: BTreeMap<String, bool>,
    failing: BTreeSet<String>,
}

impl ElementSnapshot {
    /// Creates a snapshot from applied class names in display order.
    #[must_use]
    pub fn new<I, S>(class_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            class_names: class_names.into_iter().map(Into::into).collect(),
            signals: BTreeMap::new(),
            failing: BTreeSet::new(),
        }
    }

    /// Records the host's combo report for one class.
    #[must_use]
    pub fn with_signal(mut self, class_name: impl Into<String>, is_combo: bool) -> Self {
        self.signals.insert(class_name.into(), is_combo);
        self
    }

    /// Marks one class's signal fetch as failing.
    #[must_use]
    pub fn with_failing_signal(mut self, class_name: impl Into<String>) -> Self {
        self.failing.insert(class_name.into());
        self
    }
}

impl ElementSource for ElementSnapshot {
    fn class_names(&self) -> Vec<String> {
        self.class_names.clone()
    }

    fn combo_signal(&self, class_name: &str) -> Result<Option<bool>, SignalError> {
        if self.failing.contains(class_name) {
            return Err(SignalError::new("style api call failed"));
        }
        Ok(self.signals.get(class_name).copied())
    }
}

/// One rule's evaluation failure, reported as scan metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFailure {
    /// Id of the failing rule.
    pub rule: String,
    /// Captured failure message.
    pub message: String,
}

/// Product of scanning one element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanResult {
    /// Diagnostics from all enabled rules, in rule-id order.
    pub results: Vec<Diagnostic>,
    /// The element's class names as scanned, in display order.
    pub class_names: Vec<String>,
    /// Per-class classification contexts.
    pub classes: Vec<ClassifiedClass>,
    /// Resolved roles, positionally matching `class_names`.
    pub roles: Vec<ElementRole>,
    /// Rules that failed during evaluation and contributed no diagnostics.
    pub failed_rules: Vec<RuleFailure>,
}

impl ScanResult {
    /// Returns `true` if any diagnostic is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_at_least(Severity::Error)
    }

    /// Returns `true` if any diagnostic meets the severity threshold.
    #[must_use]
    pub fn has_at_least(&self, severity: Severity) -> bool {
        self.results.iter().any(|d| d.severity >= severity)
    }

    /// Counts diagnostics as (errors, warnings, suggestions).
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |s: Severity| self.results.iter().filter(|d| d.severity == s).count();
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Suggestion),
        )
    }

    /// Formats all diagnostics for terminal output.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        let mut report = String::new();
        for diagnostic in &self.results {
            let _ = writeln!(report, "{}", diagnostic.format());
        }
        let (errors, warnings, suggestions) = self.count_by_severity();
        let _ = writeln!(
            report,
            "Found {errors} error(s), {warnings} warning(s), {suggestions} suggestion(s) in {} class(es)",
            self.class_names.len()
        );
        report
    }
}

/// The linter engine.
///
/// Holds a resolved, immutable configuration; every scan's state is local
/// to the call, so one engine may serve overlapping scans.
pub struct Linter {
    config: EffectiveConfig,
}

impl Linter {
    /// Creates an engine from an already-resolved configuration.
    #[must_use]
    pub fn new(config: EffectiveConfig) -> Self {
        Self { config }
    }

    /// Resolves a project configuration and creates an engine for it.
    ///
    /// # Errors
    ///
    /// Returns an error when the selected preset is misconfigured
    /// (see [`ResolveError`]).
    pub fn from_project(
        registry: &dyn PresetRegistry,
        project: &ProjectConfig,
    ) -> Result<Self, ResolveError> {
        Ok(Self::new(resolve(registry, project)?))
    }

    /// The resolved configuration this engine runs under.
    #[must_use]
    pub fn config(&self) -> &EffectiveConfig {
        &self.config
    }

    /// Classifies an element's classes and evaluates all enabled rules.
    #[must_use]
    pub fn scan(&self, element: &dyn ElementSource) -> ScanResult {
        let class_names = element.class_names();
        let conventions = self.config.grammar.conventions();

        let mut classes = Vec::with_capacity(class_names.len());
        for (position, name) in class_names.iter().enumerate() {
            let parsed = self.config.grammar.parse(name);
            let role = self
                .config
                .role_aliases
                .remap(self.config.roles.map_to_role(&parsed));
            let signal = match element.combo_signal(name) {
                Ok(signal) => signal,
                Err(e) => {
                    tracing::debug!("folding failed combo signal for `{name}`: {e}");
                    None
                }
            };
            let combo = detect_combo_class(signal, name, &self.config.combo_policy);
            classes.push(ClassifiedClass {
                parsed,
                role,
                combo,
                position,
            });
        }

        let element_context = classify_element(&classes, &self.config.context);
        let roles = classes.iter().map(|c| c.role).collect();

        let mut results = Vec::new();
        let mut failed_rules = Vec::new();
        for effective in &self.config.rules {
            if !effective.settings.enabled {
                tracing::debug!("skipping disabled rule: {}", effective.rule.id());
                continue;
            }

            let ctx = LintContext {
                classes: &classes,
                element: &element_context,
                conventions: &conventions,
                opinion_mode: self.config.opinion_mode,
                options: &effective.settings.options,
            };

            match catch_unwind(AssertUnwindSafe(|| effective.rule.run(&ctx))) {
                Ok(mut diagnostics) => {
                    for diagnostic in &mut diagnostics {
                        diagnostic.severity = effective.settings.severity;
                    }
                    results.extend(diagnostics);
                }
                Err(payload) => {
                    let message = panic_message(&payload);
                    tracing::warn!(
                        "rule `{}` failed during evaluation: {message}",
                        effective.rule.id()
                    );
                    failed_rules.push(RuleFailure {
                        rule: effective.rule.id().to_string(),
                        message,
                    });
                }
            }
        }

        ScanResult {
            results,
            class_names,
            classes,
            roles,
            failed_rules,
        }
    }

    /// Scans a batch of elements.
    ///
    /// Elements are independent; no cross-element ordering is guaranteed
    /// beyond the returned vector matching the input order.
    #[must_use]
    pub fn scan_all(&self, elements: &[&dyn ElementSource]) -> Vec<ScanResult> {
        elements.iter().map(|e| self.scan(*e)).collect()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    eprintln!("DEBUG is Box<dyn Display+Send>={}", payload.is::<Box<dyn std::fmt::Display + Send>>());
    eprintln!("DEBUG is Box<dyn Debug+Send>={}", payload.is::<Box<dyn std::fmt::Debug + Send>>());
    eprintln!("DEBUG is Box<dyn Any+Send>={}", payload.is::<Box<dyn std::any::Any + Send>>());
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "rule panicked".to_string()
    }
}
