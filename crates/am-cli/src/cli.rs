//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::date::DEFAULT_DATE_FORMAT;

/// amfmt - render Alertmanager API payloads.
#[derive(Parser, Debug, Clone)]
#[command(name = "amfmt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format: simple, extended, json or template.
    #[arg(short, long, env = "AMFMT_OUTPUT", default_value = "simple")]
    pub output: String,

    /// Format of date output (strftime syntax).
    #[arg(long = "date.format", env = "AMFMT_DATE_FORMAT", default_value = DEFAULT_DATE_FORMAT)]
    pub date_format: String,

    /// Handlebars template for the template output.
    #[arg(long, env = "AMFMT_TEMPLATE", conflicts_with = "template_file")]
    pub template: Option<String>,

    /// File holding the handlebars template for the template output.
    #[arg(long, value_name = "PATH")]
    pub template_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render silences from `GET /api/v2/silences`.
    Silence(SilenceArgs),

    /// Render alerts from `GET /api/v2/alerts`.
    Alert(AlertArgs),

    /// Render configuration and version from `GET /api/v2/status`.
    Config(InputArgs),

    /// Render cluster membership from `GET /api/v2/status`.
    Cluster(InputArgs),
}

/// Where to read the payload from.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON payload to read; `-` reads stdin.
    #[arg(short, long, value_name = "PATH", default_value = "-")]
    pub file: PathBuf,
}

/// Arguments for the silence command.
#[derive(Args, Debug, Clone)]
pub struct SilenceArgs {
    /// Payload source.
    #[command(flatten)]
    pub input: InputArgs,

    /// Include expired silences.
    #[arg(short, long)]
    pub expired: bool,
}

/// Arguments for the alert command.
#[derive(Args, Debug, Clone)]
pub struct AlertArgs {
    /// Payload source.
    #[command(flatten)]
    pub input: InputArgs,

    /// Label matchers, e.g. `severity=critical` or `env!~"dev.*"`.
    #[arg(value_name = "MATCHER")]
    pub matchers: Vec<String>,
}
