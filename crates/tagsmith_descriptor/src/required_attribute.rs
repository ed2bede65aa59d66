//! Attributes a tag must carry for a matching rule to apply.

use serde::{Deserialize, Serialize};
use tagsmith_diagnostics::Diagnostic;

/// How a required attribute's name is compared against markup.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum NameComparison {
    /// The attribute name must match exactly.
    #[default]
    FullMatch,
    /// The attribute name must start with the required name.
    PrefixMatch,
}

/// How a required attribute's value is compared against markup.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum ValueComparison {
    /// Any value (or none) is accepted.
    #[default]
    None,
    /// The value must match exactly.
    FullMatch,
    /// The value must start with the required value.
    PrefixMatch,
    /// The value must end with the required value.
    SuffixMatch,
}

/// One attribute requirement of a [`TagMatchingRuleDescriptor`](crate::TagMatchingRuleDescriptor).
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredAttributeDescriptor {
    /// Attribute name (or prefix, see [`name_comparison`](Self::name_comparison)).
    pub name: String,
    /// How [`name`](Self::name) is compared.
    #[serde(default)]
    pub name_comparison: NameComparison,
    /// Required value, if any.
    #[serde(default)]
    pub value: Option<String>,
    /// How [`value`](Self::value) is compared.
    #[serde(default)]
    pub value_comparison: ValueComparison,
    /// Human-readable rendering, e.g. `asp-for` or `asp-route-...`.
    pub display_name: String,
    /// Problems found while building this requirement.
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl RequiredAttributeDescriptor {
    /// Creates a full-match requirement with no value constraint.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            name_comparison: NameComparison::FullMatch,
            value: None,
            value_comparison: ValueComparison::None,
            diagnostics: Vec::new(),
        }
    }

    /// Creates a prefix requirement; the display name gets a `...` suffix.
    pub fn prefix(prefix: impl Into<String>) -> Self {
        let name = prefix.into();
        Self {
            display_name: format!("{name}..."),
            name,
            name_comparison: NameComparison::PrefixMatch,
            value: None,
            value_comparison: ValueComparison::None,
            diagnostics: Vec::new(),
        }
    }

    /// Constrains the attribute value.
    pub fn with_value(mut self, value: impl Into<String>, comparison: ValueComparison) -> Self {
        self.value = Some(value.into());
        self.value_comparison = comparison;
        self
    }

    /// Attaches a diagnostic to this requirement.
    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self
    }
}
