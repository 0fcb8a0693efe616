//! Error types for URL construction.

use thiserror::Error;

/// Errors that can occur when constructing or transforming a [`Url`](crate::Url).
///
/// Construction is atomic: when any of these is returned no value was
/// produced, and the value an operation was called on is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// The resolved path is non-empty but is not a `/segment` sequence.
    #[error(
        "'{path}' is not a valid path; expected '/' followed by segments without whitespace"
    )]
    InvalidPath {
        /// The normalized path that failed validation
        path: String,
    },
    /// The components do not serialize to a usable URL string.
    #[error("{components} cannot formulate url; a hostname or scheme is required")]
    Formulation {
        /// Description of the components that were resolved
        components: String,
    },
    /// A path segment index is past the end of the path.
    #[error("path index {index} is out of range for a path with {len} segments")]
    IndexOutOfRange {
        /// The requested segment index
        index: usize,
        /// Number of segments in the current path
        len: usize,
    },
    /// A port is not a decimal number in `0..=65535`.
    #[error("invalid port '{value}': port must be a number from 0 to 65535")]
    InvalidPort {
        /// The port text that was rejected
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_path_display_names_path() {
        let err = UrlError::InvalidPath {
            path: "/a b".to_string(),
        };
        assert!(err.to_string().contains("'/a b'"));
    }

    #[test]
    fn index_display_names_bounds() {
        let err = UrlError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "path index 5 is out of range for a path with 3 segments"
        );
    }

    #[test]
    fn errors_compare_by_value() {
        let a = UrlError::InvalidPort {
            value: "99999".to_string(),
        };
        assert_eq!(a.clone(), a);
    }
}
