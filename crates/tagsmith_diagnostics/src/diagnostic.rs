//! Structured diagnostic records with severity, code, message, and location.

use crate::code::DiagnosticCode;
use crate::severity::Severity;
use crate::span::SourceSpan;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A diagnostic produced while building a descriptor or one of its parts.
///
/// Diagnostics are values: two records with the same fields are equal and
/// hash alike, which lets descriptors compare their diagnostic lists
/// structurally.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The code identifying the kind of diagnostic.
    pub code: DiagnosticCode,
    /// The main diagnostic message.
    pub message: String,
    /// Where the problem was detected.
    pub span: SourceSpan,
    /// Explanatory footnotes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Creates a diagnostic with an explicit severity.
    pub fn new(
        severity: Severity,
        code: DiagnosticCode,
        message: impl Into<String>,
        span: SourceSpan,
    ) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            span,
            notes: Vec::new(),
        }
    }

    /// Creates a new error diagnostic with the given code, message, and span.
    pub fn error(code: DiagnosticCode, message: impl Into<String>, span: SourceSpan) -> Self {
        Self::new(Severity::Error, code, message, span)
    }

    /// Creates a new warning diagnostic with the given code, message, and span.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>, span: SourceSpan) -> Self {
        Self::new(Severity::Warning, code, message, span)
    }

    /// Adds a note to this diagnostic.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Returns `true` if this diagnostic has error severity.
    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.span.is_undefined() {
            write!(f, "{} {}: {}", self.severity, self.code, self.message)
        } else {
            write!(
                f,
                "{}: {} {}: {}",
                self.span, self.severity, self.code, self.message
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Category;

    #[test]
    fn create_error() {
        let code = DiagnosticCode::new(Category::TagHelper, 1);
        let diag = Diagnostic::error(code, "invalid tag name", SourceSpan::UNDEFINED);
        assert_eq!(diag.severity, Severity::Error);
        assert!(diag.is_error());
        assert_eq!(diag.message, "invalid tag name");
        assert_eq!(format!("{}", diag.code), "RZ3001");
    }

    #[test]
    fn create_warning() {
        let code = DiagnosticCode::new(Category::Component, 2);
        let diag = Diagnostic::warning(code, "unused parameter", SourceSpan::UNDEFINED);
        assert_eq!(diag.severity, Severity::Warning);
        assert!(!diag.is_error());
    }

    #[test]
    fn notes_accumulate() {
        let code = DiagnosticCode::new(Category::TagHelper, 3);
        let diag = Diagnostic::error(code, "bad attribute", SourceSpan::UNDEFINED)
            .with_note("attribute names cannot contain '@'")
            .with_note("rename the attribute");
        assert_eq!(diag.notes.len(), 2);
    }

    #[test]
    fn structural_equality() {
        let code = DiagnosticCode::new(Category::TagHelper, 4);
        let a = Diagnostic::error(code, "duplicate", SourceSpan::UNDEFINED);
        let b = Diagnostic::error(code, "duplicate", SourceSpan::UNDEFINED);
        let c = Diagnostic::warning(code, "duplicate", SourceSpan::UNDEFINED);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_with_and_without_span() {
        let code = DiagnosticCode::new(Category::TagHelper, 8);
        let diag = Diagnostic::error(code, "missing tag name", SourceSpan::UNDEFINED);
        assert_eq!(format!("{diag}"), "error RZ3008: missing tag name");

        let diag = Diagnostic::warning(code, "odd name", SourceSpan::new("x.razor", 5, 1, 4, 2));
        assert_eq!(format!("{diag}"), "x.razor(2,5): warning RZ3008: odd name");
    }

    #[test]
    fn serde_skips_empty_notes() {
        let code = DiagnosticCode::new(Category::Semantic, 1);
        let diag = Diagnostic::error(code, "x", SourceSpan::UNDEFINED);
        let json = serde_json::to_string(&diag).unwrap();
        assert!(!json.contains("notes"));
        let back: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(diag, back);
    }
}
