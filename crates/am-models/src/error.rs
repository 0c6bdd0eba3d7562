//! Error types for the am-models crate.

use thiserror::Error;

/// Errors produced while parsing or evaluating label matchers.
#[derive(Debug, Error)]
pub enum MatcherError {
    /// The matcher text has no recognised operator.
    #[error("invalid matcher {input:?}: expected one of =, !=, =~, !~")]
    MissingOperator {
        /// The text that failed to parse.
        input: String,
    },

    /// The label name is empty or contains invalid characters.
    #[error("invalid label name {name:?}")]
    InvalidLabelName {
        /// The offending label name.
        name: String,
    },

    /// A quoted value was not terminated or contains a bad escape.
    #[error("invalid matcher value {value:?}: {reason}")]
    InvalidValue {
        /// The raw value text.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A regex matcher carries a pattern that does not compile.
    #[error("invalid regular expression {pattern:?}: {source}")]
    InvalidRegex {
        /// The pattern that failed to compile.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}

/// Result type for matcher operations.
pub type Result<T> = std::result::Result<T, MatcherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_missing_operator() {
        let err = MatcherError::MissingOperator {
            input: "severity".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid matcher \"severity\": expected one of =, !=, =~, !~"
        );
    }

    #[test]
    fn error_display_invalid_label_name() {
        let err = MatcherError::InvalidLabelName {
            name: "1abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid label name \"1abc\"");
    }

    #[test]
    fn error_display_invalid_value() {
        let err = MatcherError::InvalidValue {
            value: "\"open".to_string(),
            reason: "unterminated quote".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid matcher value \"\\\"open\": unterminated quote"
        );
    }
}
