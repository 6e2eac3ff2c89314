//! Role resolution for the dash grammar's component vocabulary.

use classlint_core::{ClassKind, ElementRole, ParsedClass, RoleResolver};

/// Maps dash-grammar component classes onto structural roles.
///
/// A token-less custom class is a component root; otherwise the final
/// fragment of the element token names the part (`c-card_header_title`
/// resolves by `title`). Everything the vocabulary does not know, and
/// every non-custom class, is `Unknown`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositionRoles;

impl CompositionRoles {
    /// Creates the resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RoleResolver for CompositionRoles {
    fn name(&self) -> &'static str {
        "composition"
    }

    fn map_to_role(&self, parsed: &ParsedClass) -> ElementRole {
        if parsed.kind != ClassKind::Custom {
            return ElementRole::Unknown;
        }
        match parsed.element_token.as_deref() {
            None => ElementRole::ComponentRoot,
            Some(token) => {
                let fragment = token.rsplit(['_', '-']).next().unwrap_or(token);
                role_for_fragment(fragment)
            }
        }
    }
}

fn role_for_fragment(fragment: &str) -> ElementRole {
    match fragment {
        "group" => ElementRole::ChildGroup,
        "wrapper" | "wrap" | "container" | "inner" => ElementRole::Container,
        "layout" | "grid" | "row" | "column" => ElementRole::Layout,
        "content" | "body" | "main" => ElementRole::Content,
        "title" | "heading" => ElementRole::Title,
        "text" | "label" | "caption" | "description" => ElementRole::Text,
        "actions" | "toolbar" | "controls" => ElementRole::Actions,
        "button" | "btn" | "cta" => ElementRole::Button,
        "link" => ElementRole::Link,
        "icon" => ElementRole::Icon,
        "list" | "menu" | "nav" => ElementRole::List,
        "item" | "cell" | "entry" => ElementRole::Item,
        _ => ElementRole::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DashGrammar;
    use classlint_core::GrammarAdapter;

    fn role_of(raw: &str) -> ElementRole {
        CompositionRoles::new().map_to_role(&DashGrammar::new().parse(raw))
    }

    #[test]
    fn component_root_from_tokenless_custom() {
        assert_eq!(role_of("c-card"), ElementRole::ComponentRoot);
        assert_eq!(role_of("c-btn--primary"), ElementRole::ComponentRoot);
    }

    #[test]
    fn parts_resolve_by_final_fragment() {
        assert_eq!(role_of("c-card_title"), ElementRole::Title);
        assert_eq!(role_of("c-card_header_title"), ElementRole::Title);
        assert_eq!(role_of("c-nav_list"), ElementRole::List);
        assert_eq!(role_of("c-hero_wrapper"), ElementRole::Container);
        assert_eq!(role_of("c-form_actions"), ElementRole::Actions);
    }

    #[test]
    fn non_custom_classes_are_unknown() {
        assert_eq!(role_of("u-mt-16"), ElementRole::Unknown);
        assert_eq!(role_of("is-active"), ElementRole::Unknown);
        assert_eq!(role_of("random"), ElementRole::Unknown);
    }

    #[test]
    fn unknown_vocabulary_is_unknown() {
        assert_eq!(role_of("c-card_thing"), ElementRole::Unknown);
    }

    #[test]
    fn resolution_is_pure() {
        let grammar = DashGrammar::new();
        let resolver = CompositionRoles::new();
        let a = grammar.parse("c-card_title");
        let b = grammar.parse("c-card_title");
        assert_eq!(a, b);
        assert_eq!(resolver.map_to_role(&a), resolver.map_to_role(&b));
    }

    #[test]
    fn container_like_follows_role() {
        let grammar = DashGrammar::new();
        let resolver = CompositionRoles::new();
        assert!(resolver.is_container_like(&grammar.parse("c-card")));
        assert!(resolver.is_container_like(&grammar.parse("c-hero_wrapper")));
        assert!(!resolver.is_container_like(&grammar.parse("c-card_title")));
    }
}
