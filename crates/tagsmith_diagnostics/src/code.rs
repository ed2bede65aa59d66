//! Diagnostic codes grouped by the compiler stage that reports them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The compiler stage a diagnostic code belongs to.
///
/// Each category owns a block of one thousand codes; the block base is added
/// to the per-category number when the code is displayed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Markup parsing, codes `RZ1000`-`RZ1999`.
    Parser,
    /// Semantic analysis of the parsed document, codes `RZ2000`-`RZ2999`.
    Semantic,
    /// Tag helper discovery and descriptor validation, codes `RZ3000`-`RZ3999`.
    TagHelper,
    /// Component model validation, codes `RZ9000`-`RZ9999`.
    Component,
}

impl Category {
    /// Returns the first code number of this category's block.
    pub fn base(self) -> u16 {
        match self {
            Category::Parser => 1000,
            Category::Semantic => 2000,
            Category::TagHelper => 3000,
            Category::Component => 9000,
        }
    }
}

/// A structured diagnostic code combining a category and a number within it.
///
/// Displayed as `RZ` followed by the category base plus the number, e.g.
/// `RZ3008` for tag helper diagnostic 8.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category (0-999).
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a new diagnostic code.
    pub fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RZ{:04}", self.category.base() + self.number)
    }
}
