//! The tag helper descriptor and its memoized views.

use crate::allowed_child::AllowedChildTagDescriptor;
use crate::bound_attribute::BoundAttributeDescriptor;
use crate::builder::{DescriptorRecord, TagHelperDescriptorBuilder};
use crate::comparer::{DescriptorComparer, StructuralComparer};
use crate::kind::DescriptorKind;
use crate::metadata::{self, Metadata};
use crate::rule::TagMatchingRuleDescriptor;
use crate::type_info::{parse_type_name, ParsedTypeInformation};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use tagsmith_common::Memo;
use tagsmith_diagnostics::Diagnostic;

/// Immutable description of one tag helper.
///
/// A descriptor is assembled once by [`TagHelperDescriptorBuilder`] and never
/// changes afterwards. It owns its matching rules, bound attributes, allowed
/// child tags, diagnostics, and metadata; accessors only hand out shared
/// references.
///
/// Several derived views are expensive and computed on first use, then kept
/// for the descriptor's lifetime: the aggregated diagnostics, the structural
/// hash, and the component-model facts. These caches never take part in
/// equality, hashing, or serialization. Descriptors are `Send + Sync`, and a
/// cache read racing another thread's first access observes the same value.
///
/// `PartialEq` and `Hash` delegate to [`StructuralComparer::DEFAULT`]; use
/// [`equals_with`](Self::equals_with) and [`hash_with`](Self::hash_with) to
/// apply another policy.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "DescriptorRecord")]
pub struct TagHelperDescriptor {
    pub(crate) kind: DescriptorKind,
    pub(crate) name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) assembly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) documentation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tag_output_hint: Option<String>,
    pub(crate) case_sensitive: bool,
    pub(crate) tag_matching_rules: Vec<TagMatchingRuleDescriptor>,
    pub(crate) bound_attributes: Vec<BoundAttributeDescriptor>,
    pub(crate) allowed_child_tags: Vec<AllowedChildTagDescriptor>,
    pub(crate) diagnostics: Vec<Diagnostic>,
    pub(crate) metadata: Metadata,

    #[serde(skip)]
    pub(crate) all_diagnostics: Memo<Vec<Diagnostic>>,
    #[serde(skip)]
    pub(crate) hash_code: Memo<u64>,
    #[serde(skip)]
    pub(crate) fully_qualified_name_match: Memo<bool>,
    #[serde(skip)]
    pub(crate) child_content: Memo<bool>,
    #[serde(skip)]
    pub(crate) parsed_type_info: Memo<ParsedTypeInformation>,
}

impl TagHelperDescriptor {
    /// Starts a builder for a descriptor of the given kind and name.
    pub fn builder(kind: DescriptorKind, name: impl Into<String>) -> TagHelperDescriptorBuilder {
        TagHelperDescriptorBuilder::new(kind, name)
    }

    /// The compiler feature that produced this descriptor.
    pub fn kind(&self) -> &DescriptorKind {
        &self.kind
    }

    /// The tag helper's name, usually its full type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The assembly the tag helper was discovered in.
    pub fn assembly_name(&self) -> Option<&str> {
        self.assembly_name.as_deref()
    }

    /// Documentation shown by tooling.
    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    /// Human-readable name used by [`Display`](fmt::Display).
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Element name the tag helper renders in place of its own tag, if any.
    pub fn tag_output_hint(&self) -> Option<&str> {
        self.tag_output_hint.as_deref()
    }

    /// Whether tag and attribute names compare case-sensitively.
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Rules selecting the elements this tag helper applies to.
    pub fn tag_matching_rules(&self) -> &[TagMatchingRuleDescriptor] {
        &self.tag_matching_rules
    }

    /// Attributes the tag helper binds.
    pub fn bound_attributes(&self) -> &[BoundAttributeDescriptor] {
        &self.bound_attributes
    }

    /// Child elements permitted in the tag helper's body.
    pub fn allowed_child_tags(&self) -> &[AllowedChildTagDescriptor] {
        &self.allowed_child_tags
    }

    /// Diagnostics attached to the descriptor itself, excluding its parts.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Additional facts recorded by the producing feature.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Every diagnostic in the descriptor graph.
    ///
    /// The order is fixed: allowed child tags, bound attributes, matching
    /// rules (each rule's required attributes, then the rule), and finally the
    /// descriptor's own diagnostics. Duplicates are kept. Computed on first
    /// call; later calls return the same slice.
    pub fn all_diagnostics(&self) -> &[Diagnostic] {
        self.all_diagnostics.get_or_compute(|| {
            let combined: Vec<Diagnostic> = self
                .allowed_child_tags
                .iter()
                .flat_map(|child| child.diagnostics.iter())
                .chain(
                    self.bound_attributes
                        .iter()
                        .flat_map(|attribute| attribute.diagnostics.iter()),
                )
                .chain(
                    self.tag_matching_rules
                        .iter()
                        .flat_map(|rule| rule.all_diagnostics()),
                )
                .chain(self.diagnostics.iter())
                .cloned()
                .collect();
            tracing::trace!(
                kind = %self.kind,
                name = %self.name,
                count = combined.len(),
                "aggregated tag helper diagnostics"
            );
            combined
        })
    }

    /// Returns `true` if any diagnostic in the descriptor graph is an error.
    pub fn has_errors(&self) -> bool {
        self.all_diagnostics().iter().any(Diagnostic::is_error)
    }

    /// The structural hash under [`StructuralComparer::DEFAULT`], computed once.
    pub fn structural_hash(&self) -> u64 {
        self.hash_code.get_copied_or_compute(|| {
            let hash = StructuralComparer::DEFAULT.hash(self);
            tracing::trace!(name = %self.name, hash, "computed tag helper hash");
            hash
        })
    }

    /// Compares against `other` under an explicit policy.
    ///
    /// Returns `false` when `other` is `None`. The result is not cached.
    pub fn equals_with(
        &self,
        other: Option<&TagHelperDescriptor>,
        comparer: &dyn DescriptorComparer,
    ) -> bool {
        other.is_some_and(|other| comparer.equals(self, other))
    }

    /// Hashes under an explicit policy. The result is not cached.
    pub fn hash_with(&self, comparer: &dyn DescriptorComparer) -> u64 {
        comparer.hash(self)
    }

    /// Compares against an arbitrary value, which is never equal unless it
    /// is a descriptor.
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        self.equals_with(
            other.downcast_ref::<TagHelperDescriptor>(),
            &StructuralComparer::DEFAULT,
        )
    }

    /// Whether this component's tag must be written as its fully qualified
    /// type name.
    pub fn is_component_fully_qualified_name_match(&self) -> bool {
        self.fully_qualified_name_match.get_copied_or_compute(|| {
            self.kind == DescriptorKind::Component
                && metadata::has_value(
                    &self.metadata,
                    metadata::NAME_MATCH,
                    metadata::FULLY_QUALIFIED_NAME_MATCH,
                )
        })
    }

    /// Whether this descriptor represents a component's child content.
    pub fn is_child_content_tag_helper(&self) -> bool {
        self.child_content.get_copied_or_compute(|| {
            metadata::has_value(
                &self.metadata,
                metadata::SPECIAL_KIND,
                metadata::CHILD_CONTENT_KIND,
            )
        })
    }

    /// Whether this descriptor was produced for a markup component.
    pub fn is_component_kind(&self) -> bool {
        self.kind == DescriptorKind::Component
    }

    /// Whether this is a component with generic type parameters.
    pub fn is_generic_typed_component(&self) -> bool {
        self.is_component_kind()
            && metadata::has_value(&self.metadata, metadata::GENERIC_TYPED, metadata::TRUE)
    }

    /// The full implementing type name: `Common.TypeName` metadata, or the
    /// descriptor name when the metadata is absent.
    pub fn type_name(&self) -> &str {
        self.metadata
            .get(metadata::TYPE_NAME)
            .map_or(self.name.as_str(), String::as_str)
    }

    /// [`type_name`](Self::type_name) split into namespace and type segments,
    /// computed once.
    pub fn parsed_type_info(&self) -> ParsedTypeInformation {
        self.parsed_type_info.get_copied_or_compute(|| {
            let info = parse_type_name(self.type_name());
            tracing::trace!(
                type_name = self.type_name(),
                success = info.success,
                "parsed tag helper type name"
            );
            info
        })
    }

    /// The namespace part of [`type_name`](Self::type_name), if it parses.
    pub fn type_namespace(&self) -> Option<&str> {
        let info = self.parsed_type_info();
        info.success
            .then(|| info.namespace.resolve(self.type_name()))
    }

    /// The unqualified part of [`type_name`](Self::type_name), if it parses.
    pub fn type_name_identifier(&self) -> Option<&str> {
        let info = self.parsed_type_info();
        info.success
            .then(|| info.type_name.resolve(self.type_name()))
    }
}

impl PartialEq for TagHelperDescriptor {
    fn eq(&self, other: &Self) -> bool {
        StructuralComparer::DEFAULT.equals(self, other)
    }
}

impl Eq for TagHelperDescriptor {}

impl Hash for TagHelperDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

impl fmt::Display for TagHelperDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display_name {
            Some(display_name) => f.write_str(display_name),
            None => f.write_str(std::any::type_name::<Self>()),
        }
    }
}

impl fmt::Debug for TagHelperDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagHelperDescriptor")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("assembly_name", &self.assembly_name)
            .field("display_name", &self.display_name)
            .field("case_sensitive", &self.case_sensitive)
            .field("tag_matching_rules", &self.tag_matching_rules)
            .field("bound_attributes", &self.bound_attributes)
            .field("allowed_child_tags", &self.allowed_child_tags)
            .field("diagnostics", &self.diagnostics)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}
