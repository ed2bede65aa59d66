//! Tag matching rules: which elements a tag helper binds to.

use crate::required_attribute::RequiredAttributeDescriptor;
use serde::{Deserialize, Serialize};
use tagsmith_diagnostics::Diagnostic;

/// Tag name that matches every element.
pub const ANY_TAG: &str = "*";

/// The element shape a rule accepts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum TagStructure {
    /// No constraint on the element shape.
    #[default]
    Unspecified,
    /// `<tag></tag>` or `<tag />`.
    NormalOrSelfClosing,
    /// `<tag>` with no end tag.
    WithoutEndTag,
}

/// One rule describing which elements a tag helper applies to.
///
/// A descriptor applies when any of its rules matches.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagMatchingRuleDescriptor {
    /// Element name, or [`ANY_TAG`].
    pub tag_name: String,
    /// Required parent element, if any.
    #[serde(default)]
    pub parent_tag: Option<String>,
    /// Required element shape.
    #[serde(default)]
    pub tag_structure: TagStructure,
    /// Whether tag and attribute names compare case-sensitively.
    #[serde(default)]
    pub case_sensitive: bool,
    /// Attributes the element must carry.
    #[serde(default)]
    pub attributes: Vec<RequiredAttributeDescriptor>,
    /// Problems found while building the rule itself.
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl TagMatchingRuleDescriptor {
    /// Creates a rule for the given element name with no other constraints.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            parent_tag: None,
            tag_structure: TagStructure::Unspecified,
            case_sensitive: false,
            attributes: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Requires a parent element.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_tag = Some(parent.into());
        self
    }

    /// Requires an element shape.
    pub fn with_structure(mut self, structure: TagStructure) -> Self {
        self.tag_structure = structure;
        self
    }

    /// Adds a required attribute.
    pub fn with_attribute(mut self, attribute: RequiredAttributeDescriptor) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Attaches a diagnostic to the rule itself.
    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self
    }

    /// Returns `true` if the rule matches every element name.
    pub fn matches_any_tag(&self) -> bool {
        self.tag_name == ANY_TAG
    }

    /// Every diagnostic under this rule: required attributes in order, then
    /// the rule's own.
    pub fn all_diagnostics(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.attributes
            .iter()
            .flat_map(|attribute| attribute.diagnostics.iter())
            .chain(self.diagnostics.iter())
    }

    /// Returns `true` if any diagnostic under this rule is an error.
    pub fn has_errors(&self) -> bool {
        self.all_diagnostics().any(Diagnostic::is_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagsmith_diagnostics::{Category, DiagnosticCode, SourceSpan};

    fn diag(number: u16, message: &str) -> Diagnostic {
        Diagnostic::error(
            DiagnosticCode::new(Category::TagHelper, number),
            message,
            SourceSpan::UNDEFINED,
        )
    }

    #[test]
    fn any_tag() {
        assert!(TagMatchingRuleDescriptor::new("*").matches_any_tag());
        assert!(!TagMatchingRuleDescriptor::new("input").matches_any_tag());
    }

    #[test]
    fn all_diagnostics_attributes_first() {
        let rule = TagMatchingRuleDescriptor::new("input")
            .with_diagnostic(diag(1, "rule"))
            .with_attribute(RequiredAttributeDescriptor::new("a").with_diagnostic(diag(2, "a")))
            .with_attribute(RequiredAttributeDescriptor::new("b").with_diagnostic(diag(3, "b")));
        let messages: Vec<_> = rule.all_diagnostics().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["a", "b", "rule"]);
        assert!(rule.has_errors());
    }

    #[test]
    fn empty_rule_has_no_errors() {
        let rule = TagMatchingRuleDescriptor::new("form").with_structure(TagStructure::WithoutEndTag);
        assert_eq!(rule.all_diagnostics().count(), 0);
        assert!(!rule.has_errors());
    }
}
