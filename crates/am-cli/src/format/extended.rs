//! Wide column output.
//!
//! Same rows as [`super::simple`], plus every timestamp, the full label and
//! annotation sets, version information and the cluster peer list.

use std::io::Write;

use am_models::{AlertmanagerStatus, ClusterStatus, GettableAlert, GettableSilence};

use super::{Formatter, column_table, format_label_set, format_matchers, stdout};
use crate::date::DateFormat;
use crate::error::CliError;

/// Formatter that prints everything the API returns.
pub struct ExtendedFormatter {
    out: Box<dyn Write>,
    dates: DateFormat,
}

impl ExtendedFormatter {
    /// Creates a formatter writing to stdout.
    #[must_use]
    pub fn new(dates: DateFormat) -> Self {
        Self {
            out: stdout(),
            dates,
        }
    }

    fn write_cluster(&mut self, status: &ClusterStatus) -> Result<(), CliError> {
        writeln!(self.out, "Cluster Status:  {}", status.status)?;
        writeln!(self.out, "Node Name:       {}", status.name.as_deref().unwrap_or(""))?;
        writeln!(self.out)?;

        if status.peers.is_empty() {
            writeln!(self.out, "Peers: None")?;
            return Ok(());
        }

        let mut table = column_table(&["Address", "Name"]);
        for peer in &status.peers {
            table.add_row(vec![peer.address.as_str(), peer.name.as_str()]);
        }
        writeln!(self.out, "{table}")?;
        Ok(())
    }
}

impl Formatter for ExtendedFormatter {
    fn name(&self) -> &'static str {
        "extended"
    }

    fn set_output(&mut self, writer: Box<dyn Write>) {
        self.out = writer;
    }

    fn format_silences(&mut self, silences: &[GettableSilence]) -> Result<(), CliError> {
        let mut sorted: Vec<&GettableSilence> = silences.iter().collect();
        sorted.sort_by_key(|s| s.ends_at);

        let mut table = column_table(&[
            "ID",
            "Matchers",
            "Starts At",
            "Ends At",
            "Updated At",
            "Created By",
            "Comment",
        ]);
        for silence in sorted {
            table.add_row(vec![
                silence.id.clone(),
                format_matchers(&silence.matchers),
                self.dates.format_date(&silence.starts_at),
                self.dates.format_date(&silence.ends_at),
                self.dates.format_date(&silence.updated_at),
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

        let mut table = column_table(&[
            "Labels",
            "Annotations",
            "Starts At",
            "Ends At",
            "Generator URL",
            "State",
        ]);
        for alert in sorted {
            table.add_row(vec![
                format_label_set(&alert.labels),
                format_label_set(&alert.annotations),
                self.dates.format_date(&alert.starts_at),
                self.dates.format_date(&alert.ends_at),
                alert.generator_url.clone().unwrap_or_default(),
                alert.status.state.to_string(),
            ]);
        }
        writeln!(self.out, "{table}")?;
        self.out.flush()?;
        Ok(())
    }

    fn format_config(&mut self, status: &AlertmanagerStatus) -> Result<(), CliError> {
        let version = &status.version_info;
        writeln!(self.out, "{}", status.config.original)?;
        writeln!(self.out, "Version Information")?;
        writeln!(self.out, "══════════════════════════════════")?;
        writeln!(self.out, "Version:         {}", version.version)?;
        writeln!(self.out, "Branch:          {}", version.branch)?;
        writeln!(self.out, "Revision:        {}", version.revision)?;
        writeln!(self.out, "Build User:      {}", version.build_user)?;
        writeln!(self.out, "Build Date:      {}", version.build_date)?;
        writeln!(self.out, "Go Version:      {}", version.go_version)?;
        writeln!(self.out, "Uptime:          {}", self.dates.format_date(&status.uptime))?;
        writeln!(self.out)?;
        self.write_cluster(&status.cluster)?;
        self.out.flush()?;
        Ok(())
    }

    fn format_cluster_status(&mut self, status: &ClusterStatus) -> Result<(), CliError> {
        self.write_cluster(status)?;
        self.out.flush()?;
        Ok(())
    }
}
