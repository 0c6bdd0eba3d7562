//! Silence listing.

use am_models::{GettableSilence, SilenceState};
use tracing::debug;

use super::{decode, read_input};
use crate::cli::SilenceArgs;
use crate::error::CliError;
use crate::format::Formatter;

/// Handler for `amfmt silence`.
pub struct SilenceCommand<'a> {
    args: &'a SilenceArgs,
}

impl<'a> SilenceCommand<'a> {
    /// Creates a new silence command handler.
    #[must_use]
    pub const fn new(args: &'a SilenceArgs) -> Self {
        Self { args }
    }

    /// Reads, filters and renders the silences.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or decoded, or if
    /// formatting fails.
    pub fn execute(&self, formatter: &mut dyn Formatter) -> Result<(), CliError> {
        let raw = read_input(&self.args.input.file)?;
        let silences = self.filter(decode(&raw, "silences")?);
        formatter.format_silences(&silences)
    }

    fn filter(&self, silences: Vec<GettableSilence>) -> Vec<GettableSilence> {
        let total = silences.len();
        let kept: Vec<_> = silences
            .into_iter()
            .filter(|s| self.args.expired || s.status.state != SilenceState::Expired)
            .collect();
        debug!(total, kept = kept.len(), "filtered silences");
        kept
    }
}
