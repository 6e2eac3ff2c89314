//! Role resolution: mapping parsed classes onto structural element roles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::grammar::ParsedClass;

/// Structural/semantic part an element plays in a composition.
///
/// Closed enumeration; `Unknown` is the default for anything a resolver
/// cannot place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementRole {
    /// Root class of a component instance.
    ComponentRoot,
    /// Named child grouping inside a component.
    ChildGroup,
    /// Generic wrapping container.
    Container,
    /// Layout scaffolding (grids, rows, columns).
    Layout,
    /// Main content region.
    Content,
    /// Heading element.
    Title,
    /// Body text element.
    Text,
    /// Action cluster (toolbars, button rows).
    Actions,
    /// Clickable button.
    Button,
    /// Hyperlink.
    Link,
    /// Icon.
    Icon,
    /// List or menu.
    List,
    /// Entry within a list.
    Item,
    /// Could not be placed.
    #[default]
    Unknown,
}

impl std::fmt::Display for ElementRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ComponentRoot => "componentRoot",
            Self::ChildGroup => "childGroup",
            Self::Container => "container",
            Self::Layout => "layout",
            Self::Content => "content",
            Self::Title => "title",
            Self::Text => "text",
            Self::Actions => "actions",
            Self::Button => "button",
            Self::Link => "link",
            Self::Icon => "icon",
            Self::List => "list",
            Self::Item => "item",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

impl ElementRole {
    /// Roles that wrap other elements rather than carrying content.
    #[must_use]
    pub fn is_container_like(self) -> bool {
        matches!(
            self,
            Self::ComponentRoot | Self::ChildGroup | Self::Container | Self::Layout | Self::List
        )
    }
}

/// A pluggable role taxonomy.
///
/// Resolution must be a pure function of the [`ParsedClass`] alone: two
/// structurally equal parsed classes always receive the same role.
pub trait RoleResolver: Send + Sync {
    /// Returns the resolver's name.
    fn name(&self) -> &'static str;

    /// Maps a parsed class to its role; defaults to [`ElementRole::Unknown`].
    fn map_to_role(&self, parsed: &ParsedClass) -> ElementRole;

    /// Coarser structural test than the full role enumeration.
    fn is_container_like(&self, parsed: &ParsedClass) -> bool {
        self.map_to_role(parsed).is_container_like()
    }
}

/// Type alias for shared role resolver trait objects.
pub type RoleBox = Arc<dyn RoleResolver>;

/// Engine-wide default resolver: places nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRoles;

impl RoleResolver for NullRoles {
    fn name(&self) -> &'static str {
        "null"
    }

    fn map_to_role(&self, _parsed: &ParsedClass) -> ElementRole {
        ElementRole::Unknown
    }
}

/// Project-level remap applied after role resolution.
///
/// Keyed by the resolved role, not by re-parsing; a single remap step, not
/// transitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleAliases(BTreeMap<ElementRole, ElementRole>);

impl RoleAliases {
    /// Creates an empty alias map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no alias is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds an alias.
    pub fn insert(&mut self, from: ElementRole, to: ElementRole) {
        self.0.insert(from, to);
    }

    /// Remaps a resolved role, returning it unchanged when no alias matches.
    #[must_use]
    pub fn remap(&self, role: ElementRole) -> ElementRole {
        self.0.get(&role).copied().unwrap_or(role)
    }
}

impl FromIterator<(ElementRole, ElementRole)> for RoleAliases {
    fn from_iter<I: IntoIterator<Item = (ElementRole, ElementRole)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::ClassKind;

    #[test]
    fn unknown_is_default() {
        assert_eq!(ElementRole::default(), ElementRole::Unknown);
    }

    #[test]
    fn null_roles_places_nothing() {
        let parsed = ParsedClass::new("c-card", ClassKind::Custom);
        assert_eq!(NullRoles.map_to_role(&parsed), ElementRole::Unknown);
        assert!(!NullRoles.is_container_like(&parsed));
    }

    #[test]
    fn container_like_set() {
        assert!(ElementRole::ComponentRoot.is_container_like());
        assert!(ElementRole::Layout.is_container_like());
        assert!(!ElementRole::Title.is_container_like());
        assert!(!ElementRole::Unknown.is_container_like());
    }

    #[test]
    fn aliases_remap_once() {
        let aliases: RoleAliases =
            [(ElementRole::Container, ElementRole::Layout), (ElementRole::Layout, ElementRole::Content)]
                .into_iter()
                .collect();
        // Single-step remap, not transitive.
        assert_eq!(aliases.remap(ElementRole::Container), ElementRole::Layout);
        assert_eq!(aliases.remap(ElementRole::Layout), ElementRole::Content);
        assert_eq!(aliases.remap(ElementRole::Title), ElementRole::Title);
    }

    #[test]
    fn role_serde_is_camel_case() {
        let json = serde_json::to_string(&ElementRole::ComponentRoot).unwrap();
        assert_eq!(json, "\"componentRoot\"");
        let back: ElementRole = serde_json::from_str("\"childGroup\"").unwrap();
        assert_eq!(back, ElementRole::ChildGroup);
    }
}
