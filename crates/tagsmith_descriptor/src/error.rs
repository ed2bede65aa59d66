//! Error types for descriptor construction.

/// Errors that reject a descriptor before it is built.
///
/// A descriptor that was built successfully never produces an error again;
/// problems discovered in its contents are carried as diagnostics instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// The descriptor kind was the empty string.
    #[error("descriptor kind must not be empty")]
    EmptyKind,

    /// The descriptor has no name.
    #[error("descriptor of kind '{kind}' is missing a name")]
    MissingName {
        /// Kind of the rejected descriptor.
        kind: String,
    },

    /// The same metadata key was added twice.
    #[error("duplicate metadata key '{0}'")]
    DuplicateMetadataKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_kind() {
        assert_eq!(
            format!("{}", DescriptorError::EmptyKind),
            "descriptor kind must not be empty"
        );
    }

    #[test]
    fn display_missing_name() {
        let err = DescriptorError::MissingName {
            kind: "ITagHelper".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "descriptor of kind 'ITagHelper' is missing a name"
        );
    }

    #[test]
    fn display_duplicate_key() {
        let err = DescriptorError::DuplicateMetadataKey("Common.TypeName".to_string());
        assert_eq!(format!("{err}"), "duplicate metadata key 'Common.TypeName'");
    }
}
