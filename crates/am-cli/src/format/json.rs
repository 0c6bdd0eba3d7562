//! JSON output for scripting.

use std::io::Write;

use am_models::{AlertmanagerStatus, ClusterStatus, GettableAlert, GettableSilence};
use serde::Serialize;

use super::{Formatter, stdout};
use crate::error::CliError;

/// Writes each payload as one pretty-printed JSON document.
///
/// Payloads are emitted in API shape, so timestamps stay RFC 3339 and the
/// date format does not apply.
pub struct JsonFormatter {
    out: Box<dyn Write>,
}

impl JsonFormatter {
    /// Creates a formatter writing to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self { out: stdout() }
    }

    fn write<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), CliError> {
        let mut doc = serde_json::to_vec_pretty(value)?;
        doc.push(b'\n');
        self.out.write_all(&doc)?;
        self.out.flush()?;
        Ok(())
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn set_output(&mut self, writer: Box<dyn Write>) {
        self.out = writer;
    }

    fn format_silences(&mut self, silences: &[GettableSilence]) -> Result<(), CliError> {
        self.write(silences)
    }

    fn format_alerts(&mut self, alerts: &[GettableAlert]) -> Result<(), CliError> {
        self.write(alerts)
    }

    fn format_config(&mut self, status: &AlertmanagerStatus) -> Result<(), CliError> {
        self.write(status)
    }

    fn format_cluster_status(&mut self, status: &ClusterStatus) -> Result<(), CliError> {
        self.write(status)
    }
}
