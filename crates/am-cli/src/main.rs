//! amfmt binary entrypoint.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use am_cli::cli::Cli;
use am_cli::commands;
use am_cli::config::FormatConfig;
use am_cli::format::FormatterRegistry;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG overrides -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(cli.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), am_cli::CliError> {
    let config = FormatConfig::from_cli(cli)?;
    let mut registry = FormatterRegistry::builtin(&config)?;

    // Unknown names fail here, before any input is read
    let formatter = registry.require(&config.output)?;
    formatter.set_output(Box::new(io::stdout()));

    commands::dispatch(&cli.command, formatter.as_mut())
}

const fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
