//! Source locations referenced by diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location in a source document.
///
/// Descriptors are often discovered from compiled metadata rather than
/// source text, so diagnostics frequently carry [`SourceSpan::UNDEFINED`].
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SourceSpan {
    /// Path of the document, if known.
    pub file_path: Option<String>,
    /// Zero-based offset of the first character.
    pub absolute_index: u32,
    /// Zero-based line of the first character.
    pub line_index: u32,
    /// Zero-based column of the first character.
    pub character_index: u32,
    /// Number of characters covered.
    pub length: u32,
}

impl SourceSpan {
    /// The span used when no source location is available.
    pub const UNDEFINED: SourceSpan = SourceSpan {
        file_path: None,
        absolute_index: 0,
        line_index: 0,
        character_index: 0,
        length: 0,
    };

    /// Creates a span in the given file.
    pub fn new(
        file_path: impl Into<String>,
        absolute_index: u32,
        line_index: u32,
        character_index: u32,
        length: u32,
    ) -> Self {
        Self {
            file_path: Some(file_path.into()),
            absolute_index,
            line_index,
            character_index,
            length,
        }
    }

    /// Returns `true` if this is the undefined span.
    pub fn is_undefined(&self) -> bool {
        *self == Self::UNDEFINED
    }
}

impl Default for SourceSpan {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // one-based line/column, the way editors report them
        write!(
            f,
            "{}({},{})",
            self.file_path.as_deref().unwrap_or("<unknown>"),
            self.line_index + 1,
            self.character_index + 1
        )
    }
}
