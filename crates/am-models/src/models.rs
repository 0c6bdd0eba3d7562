//! Alertmanager API v2 wire models.
//!
//! These mirror the JSON documents served by the Alertmanager HTTP API:
//! - [`GettableSilence`]: a silence with its current state
//! - [`GettableAlert`]: an alert as seen by Alertmanager
//! - [`AlertmanagerStatus`]: configuration, version and cluster information
//! - [`ClusterStatus`]: gossip cluster membership
//! - [`Matcher`]: a label matcher in its wire form
//!
//! Keys are camelCase and timestamps are RFC 3339, as on the wire. A
//! timestamp keeps the offset it was sent with.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A wire timestamp with its original UTC offset.
pub type Timestamp = DateTime<FixedOffset>;

/// Writes timestamps as RFC 3339, using `Z` for a zero offset.
mod rfc3339 {
    use chrono::SecondsFormat;
    use serde::Serializer;

    use super::Timestamp;

    pub fn serialize<S: Serializer>(t: &Timestamp, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

/// A label matcher as received from the API.
///
/// `name`, `value` and `is_regex` are required; a payload missing any of them
/// fails to deserialize. `is_equal` is absent in payloads from Alertmanager
/// releases that only supported positive matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matcher {
    /// Label name.
    pub name: String,
    /// Label value or regular expression.
    pub value: String,
    /// Whether `value` is a regular expression.
    pub is_regex: bool,
    /// Whether the matcher is positive; `None` from older servers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_equal: Option<bool>,
}

impl Matcher {
    /// Creates a wire matcher.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        is_regex: bool,
        is_equal: Option<bool>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            is_regex,
            is_equal,
        }
    }
}

/// The lifecycle state of a silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SilenceState {
    /// The silence is in effect.
    Active,
    /// The silence starts in the future.
    Pending,
    /// The silence has ended.
    Expired,
}

impl SilenceState {
    /// Returns the state as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Expired => "expired",
        }
    }
}

impl std::fmt::Display for SilenceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status block of a silence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SilenceStatus {
    /// Current state.
    pub state: SilenceState,
}

/// A silence as returned by `GET /api/v2/silences`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GettableSilence {
    /// Silence ID.
    pub id: String,
    /// Current status.
    pub status: SilenceStatus,
    /// Last modification time.
    #[serde(serialize_with = "rfc3339::serialize")]
    pub updated_at: Timestamp,
    /// Label matchers; an alert must match all of them to be silenced.
    pub matchers: Vec<Matcher>,
    /// Start of the silence.
    #[serde(serialize_with = "rfc3339::serialize")]
    pub starts_at: Timestamp,
    /// End of the silence.
    #[serde(serialize_with = "rfc3339::serialize")]
    pub ends_at: Timestamp,
    /// Author.
    pub created_by: String,
    /// Free-form comment.
    pub comment: String,
}

/// The processing state of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertState {
    /// Received but not yet processed.
    Unprocessed,
    /// Active and not suppressed.
    Active,
    /// Silenced or inhibited.
    Suppressed,
}

impl AlertState {
    /// Returns the state as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unprocessed => "unprocessed",
            Self::Active => "active",
            Self::Suppressed => "suppressed",
        }
    }
}

impl std::fmt::Display for AlertState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status block of an alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertStatus {
    /// Current state.
    pub state: AlertState,
    /// IDs of silences muting the alert.
    #[serde(default)]
    pub silenced_by: Vec<String>,
    /// Fingerprints of alerts inhibiting this one.
    #[serde(default)]
    pub inhibited_by: Vec<String>,
}

/// A notification receiver reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receiver {
    /// Receiver name.
    pub name: String,
}

/// An alert as returned by `GET /api/v2/alerts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GettableAlert {
    /// Identifying labels.
    pub labels: BTreeMap<String, String>,
    /// Informational annotations.
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
    /// When the alert started firing.
    #[serde(serialize_with = "rfc3339::serialize")]
    pub starts_at: Timestamp,
    /// When the alert resolves or resolved.
    #[serde(serialize_with = "rfc3339::serialize")]
    pub ends_at: Timestamp,
    /// Last update time.
    #[serde(serialize_with = "rfc3339::serialize")]
    pub updated_at: Timestamp,
    /// Label-set fingerprint.
    pub fingerprint: String,
    /// Receivers the alert is routed to.
    #[serde(default)]
    pub receivers: Vec<Receiver>,
    /// Current status.
    pub status: AlertStatus,
    /// Link back to the alert source.
    #[serde(
        rename = "generatorURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub generator_url: Option<String>,
}

impl GettableAlert {
    /// Returns the `alertname` label, or an empty string.
    #[must_use]
    pub fn alert_name(&self) -> &str {
        self.labels.get("alertname").map_or("", String::as_str)
    }

    /// Returns the `summary` annotation, or an empty string.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.annotations.get("summary").map_or("", String::as_str)
    }
}

/// Gossip cluster readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterState {
    /// Cluster is settled and serving.
    Ready,
    /// Cluster is still converging.
    Settling,
    /// Clustering is turned off.
    Disabled,
}

impl ClusterState {
    /// Returns the state as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Settling => "settling",
            Self::Disabled => "disabled",
        }
    }
}

impl std::fmt::Display for ClusterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A cluster peer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerStatus {
    /// Peer node name.
    pub name: String,
    /// Peer gossip address.
    pub address: String,
}

/// Cluster membership as reported by one Alertmanager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterStatus {
    /// Name of the reporting node; absent when clustering is disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Cluster readiness.
    pub status: ClusterState,
    /// Known peers.
    #[serde(default)]
    pub peers: Vec<PeerStatus>,
}

/// Loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertmanagerConfig {
    /// The configuration file as originally loaded.
    pub original: String,
}

/// Build information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    /// Source branch.
    pub branch: String,
    /// Build timestamp as reported by the server.
    pub build_date: String,
    /// Build user.
    pub build_user: String,
    /// Toolchain version.
    pub go_version: String,
    /// Source revision.
    pub revision: String,
    /// Release version.
    pub version: String,
}

/// Response of `GET /api/v2/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertmanagerStatus {
    /// Cluster membership.
    pub cluster: ClusterStatus,
    /// Loaded configuration.
    pub config: AlertmanagerConfig,
    /// Process start time.
    #[serde(serialize_with = "rfc3339::serialize")]
    pub uptime: Timestamp,
    /// Build information.
    pub version_info: VersionInfo,
}
