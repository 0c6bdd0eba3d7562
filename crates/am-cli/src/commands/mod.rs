//! CLI command implementations.
//!
//! Each submodule decodes one Alertmanager API payload and hands it to the
//! selected formatter:
//! - [`silence`] - Silence listing
//! - [`alert`] - Alert listing with matcher filters
//! - [`status`] - Configuration and cluster status

pub mod alert;
pub mod silence;
pub mod status;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cli::Commands;
use crate::error::CliError;
use crate::format::Formatter;

pub use alert::AlertCommand;
pub use silence::SilenceCommand;
pub use status::{ClusterCommand, ConfigCommand};

/// Runs a parsed subcommand against an already selected formatter.
///
/// # Errors
///
/// Returns an error if the input cannot be read or decoded, or if
/// formatting fails.
pub fn dispatch(command: &Commands, formatter: &mut dyn Formatter) -> Result<(), CliError> {
    debug!(formatter = formatter.name(), "dispatching command");
    match command {
        Commands::Silence(args) => SilenceCommand::new(args).execute(formatter),
        Commands::Alert(args) => AlertCommand::new(args).execute(formatter),
        Commands::Config(args) => ConfigCommand::new(args).execute(formatter),
        Commands::Cluster(args) => ClusterCommand::new(args).execute(formatter),
    }
}

/// Reads a payload from `path`, or from stdin when `path` is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String, CliError> {
    let read_err = |source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    };
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        Ok(buf)
    } else {
        fs::read_to_string(path).map_err(read_err)
    }
}

/// Decodes a JSON payload.
pub(crate) fn decode<T: DeserializeOwned>(raw: &str, what: &'static str) -> Result<T, CliError> {
    serde_json::from_str(raw).map_err(|source| CliError::Decode { what, source })
}
