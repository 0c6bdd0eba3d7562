//! Configuration and cluster status.
//!
//! Both commands read a `GET /api/v2/status` document; `cluster` renders
//! only its cluster section.

use am_models::AlertmanagerStatus;

use super::{decode, read_input};
use crate::cli::InputArgs;
use crate::error::CliError;
use crate::format::Formatter;

/// Handler for `amfmt config`.
pub struct ConfigCommand<'a> {
    args: &'a InputArgs,
}

impl<'a> ConfigCommand<'a> {
    /// Creates a new config command handler.
    #[must_use]
    pub const fn new(args: &'a InputArgs) -> Self {
        Self { args }
    }

    /// Reads and renders the status document.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or decoded, or if
    /// formatting fails.
    pub fn execute(&self, formatter: &mut dyn Formatter) -> Result<(), CliError> {
        let status: AlertmanagerStatus = decode(&read_input(&self.args.file)?, "status")?;
        formatter.format_config(&status)
    }
}

/// Handler for `amfmt cluster`.
pub struct ClusterCommand<'a> {
    args: &'a InputArgs,
}

impl<'a> ClusterCommand<'a> {
    /// Creates a new cluster command handler.
    #[must_use]
    pub const fn new(args: &'a InputArgs) -> Self {
        Self { args }
    }

    /// Reads the status document and renders its cluster section.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or decoded, or if
    /// formatting fails.
    pub fn execute(&self, formatter: &mut dyn Formatter) -> Result<(), CliError> {
        let status: AlertmanagerStatus = decode(&read_input(&self.args.file)?, "status")?;
        formatter.format_cluster_status(&status.cluster)
    }
}
