//! Alertmanager API v2 models and label matchers.
//!
//! `am-models` holds the data that `amfmt` renders:
//!
//! - **Wire models** ([`models`]): silences, alerts, status and cluster
//!   status exactly as the Alertmanager HTTP API serves them
//! - **Matchers** ([`matcher`]): the canonical label matcher, converted from
//!   the wire form or parsed from text
//!
//! # Example
//!
//! ```rust
//! use am_models::{models, MatchType, Matcher};
//!
//! // An older server that predates `isEqual`.
//! let wire = models::Matcher::new("severity", "critical", false, None);
//!
//! let matcher = Matcher::from(&wire);
//! assert_eq!(matcher.match_type, MatchType::Equal);
//! assert_eq!(matcher.to_string(), r#"severity="critical""#);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod matcher;
pub mod models;

// Re-export main types at crate root
pub use error::{MatcherError, Result};
pub use matcher::{MatchType, Matcher, matches_all};
pub use models::{
    AlertState, AlertStatus, AlertmanagerConfig, AlertmanagerStatus, ClusterState, ClusterStatus,
    GettableAlert, GettableSilence, PeerStatus, Receiver, SilenceState, SilenceStatus, Timestamp,
    VersionInfo,
};
