//! The closed set of descriptor kinds, one per compiler feature.

use crate::error::DescriptorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Identifies which compiler feature produced a descriptor.
///
/// Every kind shares the same descriptor shape; the kind only selects how
/// downstream passes interpret it. Feature tags outside the built-in set are
/// carried as [`Custom`](DescriptorKind::Custom).
///
/// Identity is the feature tag string: `Custom("ITagHelper")` is the same
/// kind as [`TagHelper`](DescriptorKind::TagHelper).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DescriptorKind {
    /// A classic tag helper class (`ITagHelper`).
    TagHelper,
    /// A markup component.
    Component,
    /// A child content parameter of a component.
    ChildContent,
    /// An `@on...` event handler attribute.
    EventHandler,
    /// An `@bind` data-binding attribute.
    Bind,
    /// The `@key` directive attribute.
    Key,
    /// The `@ref` directive attribute.
    Ref,
    /// The `@attributes` splatting directive attribute.
    Splat,
    /// Any other feature tag. Never empty once validated.
    Custom(String),
}

impl DescriptorKind {
    /// Returns the feature tag string for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            DescriptorKind::TagHelper => "ITagHelper",
            DescriptorKind::Component => "Components.Component",
            DescriptorKind::ChildContent => "Components.ChildContent",
            DescriptorKind::EventHandler => "Components.EventHandler",
            DescriptorKind::Bind => "Components.Bind",
            DescriptorKind::Key => "Components.Key",
            DescriptorKind::Ref => "Components.Ref",
            DescriptorKind::Splat => "Components.Splat",
            DescriptorKind::Custom(tag) => tag,
        }
    }
}

impl PartialEq for DescriptorKind {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for DescriptorKind {}

impl Hash for DescriptorKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl FromStr for DescriptorKind {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "" => return Err(DescriptorError::EmptyKind),
            "ITagHelper" => DescriptorKind::TagHelper,
            "Components.Component" => DescriptorKind::Component,
            "Components.ChildContent" => DescriptorKind::ChildContent,
            "Components.EventHandler" => DescriptorKind::EventHandler,
            "Components.Bind" => DescriptorKind::Bind,
            "Components.Key" => DescriptorKind::Key,
            "Components.Ref" => DescriptorKind::Ref,
            "Components.Splat" => DescriptorKind::Splat,
            other => DescriptorKind::Custom(other.to_string()),
        };
        Ok(kind)
    }
}

impl TryFrom<String> for DescriptorKind {
    type Error = DescriptorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DescriptorKind> for String {
    fn from(kind: DescriptorKind) -> Self {
        match kind {
            DescriptorKind::Custom(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_roundtrip() {
        for kind in [
            DescriptorKind::TagHelper,
            DescriptorKind::Component,
            DescriptorKind::ChildContent,
            DescriptorKind::EventHandler,
            DescriptorKind::Bind,
            DescriptorKind::Key,
            DescriptorKind::Ref,
            DescriptorKind::Splat,
        ] {
            assert_eq!(kind.as_str().parse::<DescriptorKind>(), Ok(kind.clone()));
        }
    }

    #[test]
    fn unknown_tag_is_custom() {
        let kind: DescriptorKind = "Mvc.ViewComponent".parse().unwrap();
        assert_eq!(kind, DescriptorKind::Custom("Mvc.ViewComponent".to_string()));
        assert_eq!(kind.as_str(), "Mvc.ViewComponent");
    }

    #[test]
    fn empty_tag_rejected() {
        assert_eq!("".parse::<DescriptorKind>(), Err(DescriptorError::EmptyKind));
    }

    #[test]
    fn custom_holding_builtin_tag_is_the_builtin_kind() {
        use tagsmith_common::StableHasher;

        let custom = DescriptorKind::Custom("ITagHelper".to_string());
        assert_eq!(custom, DescriptorKind::TagHelper);
        assert_eq!(
            StableHasher::hash_one(&custom),
            StableHasher::hash_one(&DescriptorKind::TagHelper)
        );
        assert_ne!(custom, DescriptorKind::Component);
        assert_eq!(
            DescriptorKind::Custom("Components.Component".to_string()),
            DescriptorKind::Component
        );
    }

    #[test]
    fn serde_as_plain_string() {
        let json = serde_json::to_string(&DescriptorKind::ChildContent).unwrap();
        assert_eq!(json, "\"Components.ChildContent\"");
        let back: DescriptorKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DescriptorKind::ChildContent);
        assert!(serde_json::from_str::<DescriptorKind>("\"\"").is_err());
    }
}
