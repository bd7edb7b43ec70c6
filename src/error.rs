use thiserror::Error;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the research-summary library.
///
/// Summary generation itself never fails; these errors come from
/// configuration and export.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// Configuration validation error.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Detailed error message
        message: String,
    },

    /// JSON serialization error.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message
        message: String,
    },

    /// A serialized summary carried a title that matches no template.
    #[error("Unknown summary title '{title}'")]
    UnknownTitle {
        /// The unrecognised title
        title: String,
    },
}

impl Error {
    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an unknown title error.
    #[must_use]
    pub fn unknown_title(title: impl Into<String>) -> Self {
        Self::UnknownTitle {
            title: title.into(),
        }
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Returns true if this is a serialization error.
    #[must_use]
    pub const fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::config("test message");
        assert!(err.is_config());
        assert!(!err.is_serialization());
        assert!(err.to_string().contains("test message"));
    }

    #[test]
    fn test_unknown_title() {
        let err = Error::unknown_title("Weekly Digest");
        assert!(!err.is_config());
        assert_eq!(err.to_string(), "Unknown summary title 'Weekly Digest'");
    }

    #[test]
    fn test_error_clone() {
        let err = Error::config("test");
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }

    #[test]
    fn test_serialization_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: Error = json_err.into();
        assert!(err.is_serialization());
        assert!(err.to_string().contains("Serialization error"));
    }
}
