//! # classlint-core
//!
//! Core framework for class-name linting in visual design compositions.
//!
//! This crate provides the foundational traits and types for building
//! class-name linters:
//!
//! - [`GrammarAdapter`] for parsing raw class strings into structured tokens
//! - [`RoleResolver`] for mapping parsed classes onto element roles
//! - [`detect_combo_class`] for policy-governed combo detection
//! - [`Rule`] for defining configurable lint rules
//! - [`Preset`] / [`ProjectConfig`] / [`resolve`] for layered configuration
//! - [`Linter`] for orchestrating a scan into a [`ScanResult`]
//!
//! ## Example
//!
//! ```ignore
//! use classlint_core::{Linter, ProjectConfig, ElementSnapshot};
//!
//! let linter = Linter::from_project(&registry, &ProjectConfig::default())?;
//! let scan = linter.scan(&ElementSnapshot::new(["c-card", "is-active"]));
//! println!("{}", scan.format_report());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod combo;
mod config;
mod context;
mod engine;
mod grammar;
mod preset;
mod resolve;
mod roles;
mod rule;
mod types;

pub use combo::{
    detect_combo_class, heuristic_is_combo, ComboDetection, ComboPolicy, ComboPredicate,
    ComboSource,
};
pub use config::{ConfigError, OpinionMode, ProjectConfig, ProjectOverrides, RuleConfig, RuleOptions};
pub use context::{classify_element, ClassifiedClass, ContextConfig, ElementContext, LintContext};
pub use engine::{ElementSnapshot, ElementSource, Linter, RuleFailure, ScanResult, SignalError};
pub use grammar::{
    split_tokens, ClassKind, FallbackGrammar, GrammarAdapter, GrammarBox, GrammarConventions,
    GrammarOverrides, OverlayGrammar, ParsedClass,
};
pub use preset::{Preset, PresetBuilder, PresetRegistry, StaticRegistry};
pub use resolve::{resolve, resolve_rule_settings, EffectiveConfig, EffectiveRule, ResolveError, RuleSettings};
pub use roles::{ElementRole, NullRoles, RoleAliases, RoleBox, RoleResolver};
pub use rule::{Rule, RuleBox};
pub use types::{Diagnostic, Severity};
