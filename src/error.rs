//! Error types for utility operations

use thiserror::Error;

/// Main error type for utility operations
#[derive(Error, Debug)]
pub enum BasicError {
    /// Construction-time or argument violations
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// Input text does not match the required token layout
    #[error("failed to parse '{text}': {message}")]
    ParseError {
        /// Error message
        message: String,
        /// Text that failed to parse
        text: String,
        /// Template the text was parsed against, if known
        template: Option<String>,
    },

    /// Structurally matching text with a semantically invalid field value
    #[error("invalid field value in '{text}': {message}")]
    InvalidFieldValue {
        /// Error message
        message: String,
        /// Text carrying the invalid value
        text: String,
        /// Template the text was parsed against, if known
        template: Option<String>,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for utility operations
pub type Result<T> = std::result::Result<T, BasicError>;

impl BasicError {
    /// Create a new invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a new parse error
    #[must_use]
    pub fn parse(message: impl Into<String>, text: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            text: text.into(),
            template: None,
        }
    }

    /// Create a new parse error recording the template that was tried
    #[must_use]
    pub fn parse_with_template(
        message: impl Into<String>,
        text: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self::ParseError {
            message: message.into(),
            text: text.into(),
            template: Some(template.into()),
        }
    }

    /// Create a new invalid field value error
    #[must_use]
    pub fn invalid_field_value(
        message: impl Into<String>,
        text: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self::InvalidFieldValue {
            message: message.into(),
            text: text.into(),
            template: Some(template.into()),
        }
    }

    /// Create a serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// True for the two failure kinds a parse attempt is allowed to produce
    #[must_use]
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            Self::ParseError { .. } | Self::InvalidFieldValue { .. }
        )
    }
}

// Implement conversions for common error types
impl From<serde_json::Error> for BasicError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for BasicError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = BasicError::invalid_argument("at least 2 patterns required");
        assert!(matches!(err, BasicError::InvalidArgument { .. }));

        let err = BasicError::parse_with_template("separator mismatch", "3/8/2016", "MM-dd-yyyy");
        match err {
            BasicError::ParseError { template, .. } => {
                assert_eq!(template.as_deref(), Some("MM-dd-yyyy"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = BasicError::invalid_field_value("month out of range", "99/08/2013", "MM/dd/yyyy");
        let display = err.to_string();
        assert!(display.contains("99/08/2013"));
        assert!(display.contains("month out of range"));
    }

    #[test]
    fn test_is_parse_failure() {
        assert!(BasicError::parse("bad layout", "x").is_parse_failure());
        assert!(
            BasicError::invalid_field_value("day 99", "99/08/2013", "dd/MM/yyyy")
                .is_parse_failure()
        );
        assert!(!BasicError::invalid_argument("too few patterns").is_parse_failure());
    }

    #[test]
    fn test_error_conversions() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let basic_err: BasicError = json_err.into();
        assert!(matches!(basic_err, BasicError::Serialization(_)));
    }
}
