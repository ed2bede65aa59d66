//! Child elements a tag helper permits inside its body.

use serde::{Deserialize, Serialize};
use tagsmith_diagnostics::Diagnostic;

/// One element name allowed as a direct child.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowedChildTagDescriptor {
    /// Allowed element name.
    pub name: String,
    /// Human-readable rendering.
    pub display_name: String,
    /// Problems found while building this entry.
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl AllowedChildTagDescriptor {
    /// Creates an entry whose display name is the element name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            diagnostics: Vec::new(),
        }
    }

    /// Attaches a diagnostic to this entry.
    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self
    }
}
