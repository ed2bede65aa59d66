//! Immutable tag helper descriptors for the template compiler.
//!
//! A [`TagHelperDescriptor`] describes one markup extension: the elements it
//! binds to ([`TagMatchingRuleDescriptor`]), the attributes it accepts
//! ([`BoundAttributeDescriptor`]), the children it allows
//! ([`AllowedChildTagDescriptor`]), and the diagnostics found while it was
//! built. Descriptors are frozen by [`TagHelperDescriptorBuilder::build`] and
//! shared read-only between compiler passes.
//!
//! Equality and hashing are structural and delegated to a
//! [`DescriptorComparer`] policy, [`StructuralComparer::DEFAULT`] unless one is
//! passed explicitly. Aggregated diagnostics, the default hash, and the
//! component-model facts derived from metadata are memoized per descriptor.

#![warn(missing_docs)]

pub mod allowed_child;
pub mod bound_attribute;
pub mod builder;
pub mod comparer;
pub mod descriptor;
pub mod error;
pub mod kind;
pub mod metadata;
pub mod required_attribute;
pub mod rule;
pub mod type_info;

pub use allowed_child::AllowedChildTagDescriptor;
pub use bound_attribute::BoundAttributeDescriptor;
pub use builder::TagHelperDescriptorBuilder;
pub use comparer::{DescriptorComparer, StructuralComparer};
pub use descriptor::TagHelperDescriptor;
pub use error::DescriptorError;
pub use kind::DescriptorKind;
pub use metadata::Metadata;
pub use required_attribute::{NameComparison, RequiredAttributeDescriptor, ValueComparison};
pub use rule::{TagMatchingRuleDescriptor, TagStructure};
pub use type_info::{ParsedTypeInformation, StringSegment};
