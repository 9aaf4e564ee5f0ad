//! Error types for the scope authorization engine

use thiserror::Error;

/// Authorization errors
///
/// Every variant is terminal for a single check and always results in a deny.
#[derive(Debug, Error)]
pub enum AuthzError {
    /// The scope accessor produced no usable value for the request
    #[error("Insufficient scope: no scope available on the request")]
    MissingScope,

    /// The declared policy exists but is not a list of scope strings
    #[error("Unknown scopes: {0}")]
    UnknownPolicy(String),

    /// The granted scopes do not satisfy the declared policy
    #[error("Insufficient scope")]
    InsufficientScope,

    /// A regex segment of a declared pattern failed to compile
    #[error("Invalid regex segment in pattern '{pattern}': {source}")]
    MatchError {
        /// The declared pattern the segment belongs to
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Engine settings failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AuthzError {
    /// Returns `true` if the error was caused by a defect in the declared
    /// policy or engine settings rather than by the principal's scopes.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownPolicy(_) | Self::MatchError { .. } | Self::InvalidConfig(_)
        )
    }
}

/// Result type for authorization operations
pub type Result<T> = std::result::Result<T, AuthzError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(AuthzError::InsufficientScope.to_string(), "Insufficient scope");
        assert_eq!(
            AuthzError::UnknownPolicy("expected a list".to_string()).to_string(),
            "Unknown scopes: expected a list"
        );
    }

    #[test]
    fn test_configuration_errors() {
        let bad_regex = regex::Regex::new("(").unwrap_err();
        let err = AuthzError::MatchError {
            pattern: "scope:/(/".to_string(),
            source: bad_regex,
        };
        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("scope:/(/"));

        assert!(!AuthzError::MissingScope.is_configuration_error());
        assert!(!AuthzError::InsufficientScope.is_configuration_error());
    }
}
