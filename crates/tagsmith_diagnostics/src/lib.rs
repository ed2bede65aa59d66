//! Diagnostic records attached to tag helper descriptors.
//!
//! Diagnostics are plain values produced while a descriptor or one of its
//! sub-descriptors is being built. Each [`Diagnostic`] carries a [`Severity`],
//! a [`DiagnosticCode`], a message, and the [`SourceSpan`] it refers to.
//! Descriptor consumers only ever aggregate and inspect them.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod severity;
pub mod span;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use severity::Severity;
pub use span::SourceSpan;
