//! Alert listing.
//!
//! Alerts can be narrowed with label matchers in their textual form, e.g.
//! `amfmt alert severity=critical 'instance=~"db-.*"'`. An alert is kept
//! when every matcher matches.

use am_models::{GettableAlert, Matcher, matches_all};
use tracing::debug;

use super::{decode, read_input};
use crate::cli::AlertArgs;
use crate::error::CliError;
use crate::format::Formatter;

/// Handler for `amfmt alert`.
pub struct AlertCommand<'a> {
    args: &'a AlertArgs,
}

impl<'a> AlertCommand<'a> {
    /// Creates a new alert command handler.
    #[must_use]
    pub const fn new(args: &'a AlertArgs) -> Self {
        Self { args }
    }

    /// Reads, filters and renders the alerts.
    ///
    /// # Errors
    ///
    /// Returns an error if a matcher is invalid, the input cannot be read
    /// or decoded, or formatting fails.
    pub fn execute(&self, formatter: &mut dyn Formatter) -> Result<(), CliError> {
        let matchers = self.matchers()?;
        let raw = read_input(&self.args.input.file)?;
        let alerts = filter(decode(&raw, "alerts")?, &matchers)?;
        formatter.format_alerts(&alerts)
    }

    fn matchers(&self) -> Result<Vec<Matcher>, CliError> {
        self.args
            .matchers
            .iter()
            .map(|m| Matcher::parse(m).map_err(CliError::from))
            .collect()
    }
}

fn filter(alerts: Vec<GettableAlert>, matchers: &[Matcher]) -> Result<Vec<GettableAlert>, CliError> {
    if matchers.is_empty() {
        return Ok(alerts);
    }

    let total = alerts.len();
    let mut kept = Vec::with_capacity(total);
    for alert in alerts {
        if matches_all(matchers, &alert.labels)? {
            kept.push(alert);
        }
    }
    debug!(total, kept = kept.len(), matchers = matchers.len(), "filtered alerts");
    Ok(kept)
}
