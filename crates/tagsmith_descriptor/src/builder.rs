//! Assembling descriptors and validating them before they are frozen.

use crate::allowed_child::AllowedChildTagDescriptor;
use crate::bound_attribute::BoundAttributeDescriptor;
use crate::descriptor::TagHelperDescriptor;
use crate::error::DescriptorError;
use crate::kind::DescriptorKind;
use crate::metadata::{self, Metadata};
use crate::rule::TagMatchingRuleDescriptor;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use tagsmith_common::Memo;
use tagsmith_diagnostics::Diagnostic;

/// Collects the parts of a [`TagHelperDescriptor`].
///
/// The builder takes ownership of everything handed to it, and
/// [`build`](Self::build) moves those parts into the descriptor, so nothing
/// outside the descriptor can reach its collections afterwards.
#[derive(Debug, Clone)]
pub struct TagHelperDescriptorBuilder {
    kind: DescriptorKind,
    name: String,
    assembly_name: Option<String>,
    documentation: Option<String>,
    display_name: Option<String>,
    tag_output_hint: Option<String>,
    case_sensitive: bool,
    tag_matching_rules: Vec<TagMatchingRuleDescriptor>,
    bound_attributes: Vec<BoundAttributeDescriptor>,
    allowed_child_tags: Vec<AllowedChildTagDescriptor>,
    diagnostics: Vec<Diagnostic>,
    metadata: Metadata,
    duplicate_key: Option<String>,
}

impl TagHelperDescriptorBuilder {
    /// Creates a builder for a descriptor of the given kind and name.
    pub fn new(kind: DescriptorKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            assembly_name: None,
            documentation: None,
            display_name: None,
            tag_output_hint: None,
            case_sensitive: false,
            tag_matching_rules: Vec::new(),
            bound_attributes: Vec::new(),
            allowed_child_tags: Vec::new(),
            diagnostics: Vec::new(),
            metadata: Metadata::new(),
            duplicate_key: None,
        }
    }

    /// Sets the assembly the tag helper comes from.
    pub fn with_assembly_name(mut self, assembly_name: impl Into<String>) -> Self {
        self.assembly_name = Some(assembly_name.into());
        self
    }

    /// Sets the documentation.
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Sets the display name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Sets the tag output hint.
    pub fn with_tag_output_hint(mut self, hint: impl Into<String>) -> Self {
        self.tag_output_hint = Some(hint.into());
        self
    }

    /// Sets whether names compare case-sensitively.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Appends a matching rule.
    pub fn add_rule(mut self, rule: TagMatchingRuleDescriptor) -> Self {
        self.tag_matching_rules.push(rule);
        self
    }

    /// Appends a bound attribute.
    pub fn add_bound_attribute(mut self, attribute: BoundAttributeDescriptor) -> Self {
        self.bound_attributes.push(attribute);
        self
    }

    /// Appends an allowed child tag.
    pub fn add_allowed_child_tag(mut self, child: AllowedChildTagDescriptor) -> Self {
        self.allowed_child_tags.push(child);
        self
    }

    /// Appends a diagnostic owned by the descriptor itself.
    pub fn add_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self
    }

    /// Adds a metadata entry. Adding the same key twice fails the build.
    pub fn add_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        if self.metadata.contains_key(&key) {
            self.duplicate_key.get_or_insert(key);
        } else {
            self.metadata.insert(key, value.into());
        }
        self
    }

    /// Records the implementing type under `Common.TypeName`.
    pub fn with_type_name(self, type_name: impl Into<String>) -> Self {
        self.add_metadata(metadata::TYPE_NAME, type_name)
    }

    /// Validates the collected parts and freezes them into a descriptor.
    pub fn build(self) -> Result<TagHelperDescriptor, DescriptorError> {
        self.validate().map_err(|err| {
            tracing::debug!(%err, "rejected tag helper descriptor");
            err
        })?;

        Ok(TagHelperDescriptor {
            kind: self.kind,
            name: self.name,
            assembly_name: self.assembly_name,
            documentation: self.documentation,
            display_name: self.display_name,
            tag_output_hint: self.tag_output_hint,
            case_sensitive: self.case_sensitive,
            tag_matching_rules: self.tag_matching_rules,
            bound_attributes: self.bound_attributes,
            allowed_child_tags: self.allowed_child_tags,
            diagnostics: self.diagnostics,
            metadata: self.metadata,
            all_diagnostics: Memo::new(),
            hash_code: Memo::new(),
            fully_qualified_name_match: Memo::new(),
            child_content: Memo::new(),
            parsed_type_info: Memo::new(),
        })
    }

    fn validate(&self) -> Result<(), DescriptorError> {
        if self.kind.as_str().is_empty() {
            return Err(DescriptorError::EmptyKind);
        }
        if self.name.is_empty() {
            return Err(DescriptorError::MissingName {
                kind: self.kind.to_string(),
            });
        }
        if let Some(key) = &self.duplicate_key {
            return Err(DescriptorError::DuplicateMetadataKey(key.clone()));
        }
        Ok(())
    }
}

/// The serialized form of a descriptor, validated through the builder.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DescriptorRecord {
    kind: String,
    name: String,
    #[serde(default)]
    assembly_name: Option<String>,
    #[serde(default)]
    documentation: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    tag_output_hint: Option<String>,
    #[serde(default)]
    case_sensitive: bool,
    #[serde(default)]
    tag_matching_rules: Vec<TagMatchingRuleDescriptor>,
    #[serde(default)]
    bound_attributes: Vec<BoundAttributeDescriptor>,
    #[serde(default)]
    allowed_child_tags: Vec<AllowedChildTagDescriptor>,
    #[serde(default)]
    diagnostics: Vec<Diagnostic>,
    #[serde(default, deserialize_with = "metadata_entries")]
    metadata: Vec<(String, String)>,
}

/// Reads a metadata object as its raw entries, repeated keys included, so
/// the builder's duplicate check sees every one of them.
fn metadata_entries<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of metadata strings")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, String>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

impl TryFrom<DescriptorRecord> for TagHelperDescriptor {
    type Error = DescriptorError;

    fn try_from(record: DescriptorRecord) -> Result<Self, Self::Error> {
        let mut builder = TagHelperDescriptorBuilder::new(record.kind.parse()?, record.name)
            .case_sensitive(record.case_sensitive);
        builder.assembly_name = record.assembly_name;
        builder.documentation = record.documentation;
        builder.display_name = record.display_name;
        builder.tag_output_hint = record.tag_output_hint;
        builder.tag_matching_rules = record.tag_matching_rules;
        builder.bound_attributes = record.bound_attributes;
        builder.allowed_child_tags = record.allowed_child_tags;
        builder.diagnostics = record.diagnostics;
        for (key, value) in record.metadata {
            builder = builder.add_metadata(key, value);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_build() {
        let descriptor = TagHelperDescriptorBuilder::new(DescriptorKind::TagHelper, "FormTagHelper")
            .build()
            .unwrap();
        assert_eq!(descriptor.name(), "FormTagHelper");
        assert!(descriptor.tag_matching_rules().is_empty());
        assert!(descriptor.metadata().is_empty());
        assert!(!descriptor.case_sensitive());
    }

    #[test]
    fn every_field_is_carried() {
        let descriptor = TagHelperDescriptorBuilder::new(DescriptorKind::Component, "App.Alert")
            .with_assembly_name("App")
            .with_documentation("Shows an alert")
            .with_display_name("App.Alert")
            .with_tag_output_hint("div")
            .case_sensitive(true)
            .add_rule(TagMatchingRuleDescriptor::new("Alert"))
            .add_bound_attribute(BoundAttributeDescriptor::new(
                DescriptorKind::Component,
                "Level",
                "System.String",
            ))
            .add_allowed_child_tag(AllowedChildTagDescriptor::new("p"))
            .with_type_name("App.Alert")
            .build()
            .unwrap();
        assert_eq!(descriptor.kind(), &DescriptorKind::Component);
        assert_eq!(descriptor.assembly_name(), Some("App"));
        assert_eq!(descriptor.documentation(), Some("Shows an alert"));
        assert_eq!(descriptor.display_name(), Some("App.Alert"));
        assert_eq!(descriptor.tag_output_hint(), Some("div"));
        assert!(descriptor.case_sensitive());
        assert_eq!(descriptor.tag_matching_rules().len(), 1);
        assert_eq!(descriptor.bound_attributes().len(), 1);
        assert_eq!(descriptor.allowed_child_tags().len(), 1);
        assert_eq!(descriptor.type_name(), "App.Alert");
    }

    #[test]
    fn empty_custom_kind_rejected() {
        let err = TagHelperDescriptorBuilder::new(DescriptorKind::Custom(String::new()), "X")
            .build()
            .unwrap_err();
        assert_eq!(err, DescriptorError::EmptyKind);
    }

    #[test]
    fn empty_name_rejected() {
        let err = TagHelperDescriptorBuilder::new(DescriptorKind::Bind, "")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            DescriptorError::MissingName {
                kind: "Components.Bind".to_string()
            }
        );
    }

    #[test]
    fn duplicate_metadata_rejected() {
        let err = TagHelperDescriptorBuilder::new(DescriptorKind::TagHelper, "X")
            .add_metadata("k", "1")
            .add_metadata("k", "2")
            .build()
            .unwrap_err();
        assert_eq!(err, DescriptorError::DuplicateMetadataKey("k".to_string()));
    }

    #[test]
    fn record_with_empty_kind_rejected() {
        let json = r#"{ "kind": "", "name": "X" }"#;
        let err = serde_json::from_str::<TagHelperDescriptor>(json).unwrap_err();
        assert!(err.to_string().contains("descriptor kind must not be empty"));
    }

    #[test]
    fn record_with_duplicate_metadata_rejected() {
        let json = r#"{ "kind": "ITagHelper", "name": "X", "metadata": { "k": "1", "k": "2" } }"#;
        let err = serde_json::from_str::<TagHelperDescriptor>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate metadata key 'k'"));
    }

    #[test]
    fn record_with_empty_name_rejected() {
        let json = r#"{ "kind": "Components.Component", "name": "" }"#;
        let err = serde_json::from_str::<TagHelperDescriptor>(json).unwrap_err();
        assert!(err
            .to_string()
            .contains("descriptor of kind 'Components.Component' is missing a name"));
    }

    #[test]
    fn record_metadata_is_carried() {
        let json = r#"{ "kind": "ITagHelper", "name": "X", "metadata": { "b": "2", "a": "1" } }"#;
        let descriptor: TagHelperDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.metadata().len(), 2);
        assert_eq!(descriptor.metadata().get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn record_defaults() {
        let json = r#"{ "kind": "ITagHelper", "name": "X" }"#;
        let descriptor: TagHelperDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.kind(), &DescriptorKind::TagHelper);
        assert_eq!(descriptor.assembly_name(), None);
        assert!(descriptor.all_diagnostics().is_empty());
    }
}
