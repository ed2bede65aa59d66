//! How serious a descriptor diagnostic is.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity carried by a descriptor diagnostic.
///
/// Descriptors only record problems, so there are two levels. `Warning`
/// orders before `Error`. A descriptor reports `has_errors` exactly when one of
/// its diagnostics is an `Error`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suspicious but usable, such as an obsolete attribute.
    Warning,
    /// The descriptor cannot be applied as written.
    Error,
}

impl Severity {
    /// Returns `true` for [`Error`](Severity::Error).
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }

    /// The lowercase name used in rendered and serialized diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_orders_before_error() {
        assert!(Severity::Warning < Severity::Error);
        assert_eq!(
            [Severity::Error, Severity::Warning].iter().max(),
            Some(&Severity::Error)
        );
    }

    #[test]
    fn only_error_is_error() {
        assert!(Severity::Error.is_error());
        assert!(!Severity::Warning.is_error());
    }

    #[test]
    fn display_matches_serialized_name() {
        for severity in [Severity::Warning, Severity::Error] {
            let json = serde_json::to_string(&severity).unwrap();
            assert_eq!(json, format!("\"{severity}\""));
        }
        assert_eq!(Severity::Error.to_string(), "error");
    }

    #[test]
    fn deserializes_lowercase_names() {
        let severity: Severity = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(severity, Severity::Warning);
        assert!(serde_json::from_str::<Severity>("\"note\"").is_err());
        assert!(serde_json::from_str::<Severity>("\"Error\"").is_err());
    }
}
