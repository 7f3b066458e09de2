//! Style name errors.

/// Error returned when a variant or size name is parsed strictly.
///
/// Lenient lookups such as [`Variant::from_name`](crate::Variant::from_name)
/// never produce this error; they fall back to the default instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The name matches none of the registered variants.
    UnknownVariant { name: String },
    /// The name matches none of the registered sizes.
    UnknownSize { name: String },
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::UnknownVariant { name } => {
                write!(f, "unknown badge variant '{}'", name)
            }
            StyleError::UnknownSize { name } => write!(f, "unknown badge size '{}'", name),
        }
    }
}

impl std::error::Error for StyleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_error_display() {
        let err = StyleError::UnknownVariant {
            name: "ghost".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("variant"));
        assert!(msg.contains("ghost"));
    }

    #[test]
    fn test_unknown_size_error_display() {
        let err = StyleError::UnknownSize {
            name: "huge".to_string(),
        };
        assert_eq!(err.to_string(), "unknown badge size 'huge'");
    }
}
