//! Compact column output.

use std::io::Write;

use am_models::{AlertmanagerStatus, ClusterStatus, GettableAlert, GettableSilence};

use super::{Formatter, column_table, format_matchers, stdout};
use crate::date::DateFormat;
use crate::error::CliError;

/// One row per silence or alert, with only the most useful columns.
pub struct SimpleFormatter {
    out: Box<dyn Write>,
    dates: DateFormat,
}

impl SimpleFormatter {
    /// Creates a formatter writing to stdout.
    #[must_use]
    pub fn new(dates: DateFormat) -> Self {
        Self {
            out: stdout(),
            dates,
        }
    }
}

impl Formatter for SimpleFormatter {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn set_output(&mut self, writer: Box<dyn Write>) {
        self.out = writer;
    }

    fn format_silences(&mut self, silences: &[GettableSilence]) -> Result<(), CliError> {
        let mut sorted: Vec<&GettableSilence> = silences.iter().collect();
        sorted.sort_by_key(|s| s.ends_at);

        let mut table = column_table(&["ID", "Matchers", "Ends At", "Created By", "Comment"]);
        for silence in sorted {
            table.add_row(vec![
                silence.id.clone(),
                format_matchers(&silence.matchers),
                self.dates.format_date(&silence.ends_at),
                silence.created_by.clone(),
                silence.comment.clone(),
            ]);
        }
        writeln!(self.out, "{table}")?;
        self.out.flush()?;
        Ok(())
    }

    fn format_alerts(&mut self, alerts: &[GettableAlert]) -> Result<(), CliError> {
        let mut sorted: Vec<&GettableAlert> = alerts.iter().collect();
        sorted.sort_by_key(|a| a.starts_at);

        let mut table = column_table(&["Alertname", "Starts At", "Summary", "State"]);
        for alert in sorted {
            table.add_row(vec![
                alert.alert_name().to_string(),
                self.dates.format_date(&alert.starts_at),
                alert.summary().to_string(),
                alert.status.state.to_string(),
            ]);
        }
        writeln!(self.out, "{table}")?;
        self.out.flush()?;
        Ok(())
    }

    fn format_config(&mut self, status: &AlertmanagerStatus) -> Result<(), CliError> {
        writeln!(self.out, "{}", status.config.original)?;
        self.out.flush()?;
        Ok(())
    }

    fn format_cluster_status(&mut self, status: &ClusterStatus) -> Result<(), CliError> {
        writeln!(self.out, "Cluster Status:  {}", status.status)?;
        writeln!(self.out, "Node Name:       {}", status.name.as_deref().unwrap_or(""))?;
        self.out.flush()?;
        Ok(())
    }
}
