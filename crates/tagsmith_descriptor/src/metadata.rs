//! Descriptor metadata and the well-known keys the component model writes.

use std::collections::BTreeMap;

/// String-to-string metadata owned by a descriptor.
///
/// Keys are unique and iterate in sorted order, so structural hashing of
/// metadata does not depend on insertion order.
pub type Metadata = BTreeMap<String, String>;

/// Full type name of the class that implements the tag helper.
pub const TYPE_NAME: &str = "Common.TypeName";

/// Marks a component-model descriptor as one of the special kinds.
pub const SPECIAL_KIND: &str = "Components.IsSpecialKind";

/// Records how a component's tag name is matched.
pub const NAME_MATCH: &str = "Components.NameMatch";

/// [`NAME_MATCH`] value requiring the fully qualified type name as tag.
pub const FULLY_QUALIFIED_NAME_MATCH: &str = "Components.FullyQualifiedNameMatch";

/// [`SPECIAL_KIND`] value for child content descriptors.
pub const CHILD_CONTENT_KIND: &str = "Components.ChildContent";

/// Set to [`TRUE`] on components with generic type parameters.
pub const GENERIC_TYPED: &str = "Components.GenericTyped";

/// Canonical boolean metadata value.
pub const TRUE: &str = "True";

/// Returns `true` if `metadata[key]` equals `expected`.
pub fn has_value(metadata: &Metadata, key: &str, expected: &str) -> bool {
    metadata.get(key).is_some_and(|value| value == expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_value_requires_exact_match() {
        let mut metadata = Metadata::new();
        metadata.insert(GENERIC_TYPED.to_string(), TRUE.to_string());
        assert!(has_value(&metadata, GENERIC_TYPED, TRUE));
        assert!(!has_value(&metadata, GENERIC_TYPED, "true"));
        assert!(!has_value(&metadata, NAME_MATCH, TRUE));
    }

    #[test]
    fn iteration_is_sorted() {
        let mut metadata = Metadata::new();
        metadata.insert(TYPE_NAME.to_string(), "A.B".to_string());
        metadata.insert(GENERIC_TYPED.to_string(), TRUE.to_string());
        let keys: Vec<_> = metadata.keys().map(String::as_str).collect();
        assert_eq!(keys, vec![TYPE_NAME, GENERIC_TYPED]);
    }
}
