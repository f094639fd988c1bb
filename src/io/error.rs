//! Error types for analysis, curation and persistence operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all engine operations
#[derive(Debug)]
pub enum StyleError {
    /// Failed to decode a source image from the filesystem
    ImageDecode {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Input doesn't meet analyzer or curation requirements
    InvalidSourceData {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A persisted preference entry could not be serialized or parsed
    Store {
        /// Store key involved in the operation
        key: String,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageDecode { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Store { key, source } => {
                write!(f, "Preference store error for key '{key}': {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for StyleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageDecode { source, .. } => Some(source),
            Self::Store { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, StyleError>;

impl From<image::ImageError> for StyleError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageDecode {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for StyleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> StyleError {
    StyleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a store error for the given key
pub fn store_error(key: impl Into<String>, source: serde_json::Error) -> StyleError {
    StyleError::Store {
        key: key.into(),
        source,
    }
}

/// Create a generic I/O error for target validation
pub fn io_error(msg: &str) -> StyleError {
    StyleError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_source_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = StyleError::FileSystem {
            path: "/tmp/look.png".into(),
            operation: "read",
            source: io_err,
        };

        assert!(error.source().is_some());
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = invalid_parameter("seed", &"abc", &"must be an unsigned integer");
        let message = error.to_string();
        assert!(message.contains("seed"));
        assert!(message.contains("abc"));
    }

    #[test]
    fn test_store_error_keeps_key() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = store_error("elanvir_style_profile", json_err);
        assert!(error.to_string().contains("elanvir_style_profile"));
        assert!(error.source().is_some());
    }
}
