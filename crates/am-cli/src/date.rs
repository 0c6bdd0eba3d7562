//! Date rendering.

use am_models::Timestamp;
use chrono::Utc;
use chrono::format::{Item, StrftimeItems};
use tracing::warn;

/// Default `--date.format`, e.g. `2024-01-15 10:30:00 UTC`.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Rendered in place of an unrecognised strftime specifier.
const INVALID_SPECIFIER: &str = "%?";

/// A strftime-style pattern applied to every rendered timestamp.
///
/// Invalid specifiers never fail formatting; they render as `%?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
}

impl DateFormat {
    /// Creates a date format, warning if the pattern has invalid specifiers.
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            warn!(%pattern, "date format has invalid specifiers, rendering them as {INVALID_SPECIFIER}");
        }
        Self { pattern }
    }

    /// The configured pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Renders a timestamp in the offset it carries.
    ///
    /// A zero offset is rendered as UTC, so `%Z` prints `UTC` for `Z`
    /// timestamps and the numeric offset otherwise.
    #[must_use]
    pub fn format_date(&self, t: &Timestamp) -> String {
        let items = StrftimeItems::new(&self.pattern).map(|item| match item {
            Item::Error => Item::Literal(INVALID_SPECIFIER),
            other => other,
        });
        if t.offset().local_minus_utc() == 0 {
            t.with_timezone(&Utc).format_with_items(items).to_string()
        } else {
            t.format_with_items(items).to_string()
        }
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}
