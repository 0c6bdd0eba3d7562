//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The requested output format is not registered.
    #[error("unknown output format {name:?} (available: {})", .available.join(", "))]
    UnknownFormat {
        /// The requested name.
        name: String,
        /// Registered names.
        available: Vec<String>,
    },

    /// A formatter name was registered twice.
    #[error("output format {0:?} is already registered")]
    DuplicateFormatter(String),

    /// Output formatting error.
    #[error("format error: {0}")]
    Format(String),

    /// Template compilation or rendering error.
    #[error("template error: {0}")]
    Template(String),

    /// Input payload could not be decoded.
    #[error("failed to decode {what}: {source}")]
    Decode {
        /// What was being decoded.
        what: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Input file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    ReadInput {
        /// The input path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A label matcher argument is invalid.
    #[error("invalid matcher: {0}")]
    Matcher(#[from] am_models::MatcherError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Format(format!("JSON serialization failed: {err}"))
    }
}
