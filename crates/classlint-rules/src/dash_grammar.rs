//! The dash grammar: a prefix-based class naming convention.
//!
//! # Conventions
//!
//! - `c-card`, `c-card_header`, `c-btn--primary` - component classes: a `c-`
//!   prefix, an optional `_element` part marker, an optional `--variation`
//!   suffix
//! - `u-mt-16`, `u-text-center` - utility classes: a `u-` prefix, a property
//!   group, an optional value segment
//! - `is-active` - combo (state) classes: an `is-` prefix
//!
//! Anything else classifies as unknown. Parsing is total: it never fails
//! and never panics, whatever the input.

use classlint_core::{
    split_tokens, ClassKind, GrammarAdapter, GrammarConventions, ParsedClass,
};

const COMPONENT_PREFIX: &str = "c-";
const UTILITY_PREFIX: &str = "u-";
const COMBO_PREFIX: &str = "is-";

/// Reference grammar adapter for the dash naming convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashGrammar;

impl DashGrammar {
    /// Creates the grammar.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl GrammarAdapter for DashGrammar {
    fn name(&self) -> &'static str {
        "dash"
    }

    fn parse(&self, raw: &str) -> ParsedClass {
        let tokens = split_tokens(raw);

        if let Some(rest) = raw.strip_prefix(COMBO_PREFIX) {
            if rest.is_empty() {
                return ParsedClass::unknown(raw);
            }
            return ParsedClass::new(raw, ClassKind::Combo)
                .with_type(rest)
                .with_tokens(tokens);
        }

        if let Some(rest) = raw.strip_prefix(UTILITY_PREFIX) {
            if rest.is_empty() {
                return ParsedClass::unknown(raw);
            }
            let mut parsed = ParsedClass::new(raw, ClassKind::Utility).with_tokens(tokens);
            match rest.split_once('-') {
                Some((group, value)) if !group.is_empty() && !value.is_empty() => {
                    parsed = parsed.with_type(group).with_variation(value);
                }
                _ => {
                    let group = rest.trim_matches('-');
                    if group.is_empty() {
                        return ParsedClass::unknown(raw);
                    }
                    parsed = parsed.with_type(group);
                }
            }
            return parsed;
        }

        if let Some(rest) = raw.strip_prefix(COMPONENT_PREFIX) {
            let (stem, variation) = match rest.split_once("--") {
                Some((stem, variation)) if !variation.is_empty() => (stem, Some(variation)),
                Some((stem, _)) => (stem, None),
                None => (rest, None),
            };
            if stem.is_empty() {
                return ParsedClass::unknown(raw);
            }
            let mut parsed = ParsedClass::new(raw, ClassKind::Custom).with_tokens(tokens);
            match stem.split_once('_') {
                Some((component, element)) if !component.is_empty() && !element.is_empty() => {
                    parsed = parsed.with_type(component).with_element_token(element);
                }
                _ => {
                    let component = stem.trim_matches('_');
                    if component.is_empty() {
                        return ParsedClass::unknown(raw);
                    }
                    parsed = parsed.with_type(component);
                }
            }
            if let Some(variation) = variation {
                parsed = parsed.with_variation(variation);
            }
            return parsed;
        }

        ParsedClass::unknown(raw)
    }

    fn conventions(&self) -> GrammarConventions {
        GrammarConventions {
            custom_first_required: true,
            utility_prefix: Some(UTILITY_PREFIX.to_string()),
            component_prefix: Some(COMPONENT_PREFIX.to_string()),
            combo_prefix: Some(COMBO_PREFIX.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> ParsedClass {
        DashGrammar::new().parse(raw)
    }

    #[test]
    fn parses_component_root() {
        let p = parse("c-card");
        assert_eq!(p.kind, ClassKind::Custom);
        assert_eq!(p.type_name.as_deref(), Some("card"));
        assert_eq!(p.element_token, None);
        assert_eq!(p.variation, None);
    }

    #[test]
    fn parses_component_element() {
        let p = parse("c-card_header");
        assert_eq!(p.kind, ClassKind::Custom);
        assert_eq!(p.type_name.as_deref(), Some("card"));
        assert_eq!(p.element_token.as_deref(), Some("header"));
    }

    #[test]
    fn parses_component_variation() {
        let p = parse("c-btn--primary");
        assert_eq!(p.kind, ClassKind::Custom);
        assert_eq!(p.type_name.as_deref(), Some("btn"));
        assert_eq!(p.variation.as_deref(), Some("primary"));
    }

    #[test]
    fn parses_element_with_variation() {
        let p = parse("c-card_header--dark");
        assert_eq!(p.type_name.as_deref(), Some("card"));
        assert_eq!(p.element_token.as_deref(), Some("header"));
        assert_eq!(p.variation.as_deref(), Some("dark"));
    }

    #[test]
    fn deep_element_tokens_stay_joined() {
        let p = parse("c-card_header_title");
        assert_eq!(p.type_name.as_deref(), Some("card"));
        assert_eq!(p.element_token.as_deref(), Some("header_title"));
    }

    #[test]
    fn parses_utility_with_value() {
        let p = parse("u-mt-16");
        assert_eq!(p.kind, ClassKind::Utility);
        assert_eq!(p.type_name.as_deref(), Some("mt"));
        assert_eq!(p.variation.as_deref(), Some("16"));
    }

    #[test]
    fn parses_bare_utility() {
        let p = parse("u-hidden");
        assert_eq!(p.kind, ClassKind::Utility);
        assert_eq!(p.type_name.as_deref(), Some("hidden"));
        assert_eq!(p.variation, None);
    }

    #[test]
    fn parses_combo() {
        let p = parse("is-active");
        assert_eq!(p.kind, ClassKind::Combo);
        assert_eq!(p.type_name.as_deref(), Some("active"));
    }

    #[test]
    fn bare_prefixes_are_unknown() {
        assert_eq!(parse("c-").kind, ClassKind::Unknown);
        assert_eq!(parse("u-").kind, ClassKind::Unknown);
        assert_eq!(parse("is-").kind, ClassKind::Unknown);
    }

    #[test]
    fn unprefixed_is_unknown() {
        assert_eq!(parse("card").kind, ClassKind::Unknown);
        assert_eq!(parse("is_visible").kind, ClassKind::Unknown);
        assert_eq!(parse("isActive").kind, ClassKind::Unknown);
    }

    #[test]
    fn parse_is_total() {
        let long = "x".repeat(100_000);
        for raw in ["", " ", "c--", "c-_", "u--", "---", "🦀", long.as_str()] {
            let p = parse(raw);
            assert_eq!(p.raw, raw);
        }
    }

    #[test]
    fn raw_is_never_normalized() {
        assert_eq!(parse("C-Card").raw, "C-Card");
        assert_eq!(parse("C-Card").kind, ClassKind::Unknown);
    }

    #[test]
    fn tokens_preserve_positional_fragments() {
        assert_eq!(parse("c-card_header").tokens, vec!["c", "card", "header"]);
        assert_eq!(parse("u-mt-16").tokens, vec!["u", "mt", "16"]);
    }
}
