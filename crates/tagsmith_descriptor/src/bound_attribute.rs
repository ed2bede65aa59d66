//! Attributes a tag helper accepts and binds to its properties.

use crate::kind::DescriptorKind;
use crate::metadata::Metadata;
use serde::{Deserialize, Serialize};
use tagsmith_diagnostics::Diagnostic;

/// One attribute a tag helper binds.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundAttributeDescriptor {
    /// Kind of the owning descriptor.
    pub kind: DescriptorKind,
    /// Attribute name as written in markup.
    pub name: String,
    /// Full name of the bound property's type.
    pub type_name: String,
    /// Name prefix for dictionary-style attributes (`asp-route-`).
    #[serde(default)]
    pub indexer_name_prefix: Option<String>,
    /// Value type of dictionary-style attributes.
    #[serde(default)]
    pub indexer_type_name: Option<String>,
    /// Whether the bound property is an enum.
    #[serde(default)]
    pub is_enum: bool,
    /// Documentation shown by tooling.
    #[serde(default)]
    pub documentation: Option<String>,
    /// Human-readable rendering, e.g. `string InputTagHelper.Format`.
    pub display_name: String,
    /// Whether the attribute name compares case-sensitively.
    #[serde(default)]
    pub case_sensitive: bool,
    /// Problems found while building this attribute.
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
    /// Additional facts recorded by the producing feature.
    #[serde(default)]
    pub metadata: Metadata,
}

impl BoundAttributeDescriptor {
    /// Creates an attribute with the given kind, name, and property type.
    pub fn new(kind: DescriptorKind, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let name = name.into();
        let type_name = type_name.into();
        Self {
            display_name: format!("{type_name} {name}"),
            kind,
            name,
            type_name,
            indexer_name_prefix: None,
            indexer_type_name: None,
            is_enum: false,
            documentation: None,
            case_sensitive: false,
            diagnostics: Vec::new(),
            metadata: Metadata::new(),
        }
    }

    /// Makes this a dictionary attribute accepting `prefix*` names.
    pub fn with_indexer(mut self, prefix: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.indexer_name_prefix = Some(prefix.into());
        self.indexer_type_name = Some(type_name.into());
        self
    }

    /// Overrides the display name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Sets the documentation.
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Attaches a diagnostic to this attribute.
    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self
    }

    /// Adds a metadata entry, replacing any previous value for the key.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Returns `true` if the bound property is a `string`.
    pub fn is_string_property(&self) -> bool {
        matches!(self.type_name.as_str(), "string" | "System.String")
    }

    /// Returns `true` if the bound property is a `bool`.
    pub fn is_boolean_property(&self) -> bool {
        matches!(self.type_name.as_str(), "bool" | "System.Boolean")
    }

    /// Returns `true` if the attribute accepts prefixed dictionary entries.
    pub fn has_indexer(&self) -> bool {
        self.indexer_name_prefix.is_some()
    }
}
