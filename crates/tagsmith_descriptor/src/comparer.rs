//! Structural equality and hashing policies for descriptors.

use crate::descriptor::TagHelperDescriptor;
use std::hash::{Hash, Hasher};
use tagsmith_common::StableHasher;

/// A policy deciding when two descriptors are the same and how they hash.
///
/// Implementations must be consistent: descriptors that compare equal must
/// produce the same hash. Caches on the descriptor are never visible to a
/// policy; only declared fields are reachable through the accessors.
pub trait DescriptorComparer: Send + Sync {
    /// Returns `true` if `a` and `b` describe the same tag helper.
    fn equals(&self, a: &TagHelperDescriptor, b: &TagHelperDescriptor) -> bool;

    /// Hashes `descriptor` consistently with [`equals`](Self::equals).
    fn hash(&self, descriptor: &TagHelperDescriptor) -> u64;
}

/// The default policy, comparing every declared field by value.
///
/// Equality covers kind, name, assembly, case sensitivity, matching rules,
/// bound attributes, allowed child tags, documentation, display name, tag
/// output hint, diagnostics, and metadata. Sequences compare in order;
/// metadata compares as a key/value set.
///
/// The hash covers the identity fields and the nested sequences but leaves
/// out documentation, display name, output hint, and diagnostics. Every
/// hashed field also takes part in equality, so equal descriptors hash alike.
#[derive(Clone, Copy, Debug, Default)]
pub struct StructuralComparer;

impl StructuralComparer {
    /// The shared instance used by `PartialEq` and `Hash` on descriptors.
    pub const DEFAULT: StructuralComparer = StructuralComparer;
}

impl DescriptorComparer for StructuralComparer {
    fn equals(&self, a: &TagHelperDescriptor, b: &TagHelperDescriptor) -> bool {
        if std::ptr::eq(a, b) {
            return true;
        }

        a.kind() == b.kind()
            && a.name() == b.name()
            && a.assembly_name() == b.assembly_name()
            && a.case_sensitive() == b.case_sensitive()
            && a.tag_matching_rules() == b.tag_matching_rules()
            && a.allowed_child_tags() == b.allowed_child_tags()
            && a.bound_attributes() == b.bound_attributes()
            && a.documentation() == b.documentation()
            && a.display_name() == b.display_name()
            && a.tag_output_hint() == b.tag_output_hint()
            && a.diagnostics() == b.diagnostics()
            && a.metadata() == b.metadata()
    }

    fn hash(&self, descriptor: &TagHelperDescriptor) -> u64 {
        let mut hasher = StableHasher::new();
        descriptor.kind().hash(&mut hasher);
        descriptor.name().hash(&mut hasher);
        descriptor.assembly_name().hash(&mut hasher);
        descriptor.case_sensitive().hash(&mut hasher);
        descriptor.tag_matching_rules().hash(&mut hasher);
        descriptor.allowed_child_tags().hash(&mut hasher);
        descriptor.bound_attributes().hash(&mut hasher);
        descriptor.metadata().hash(&mut hasher);
        hasher.finish()
    }
}
