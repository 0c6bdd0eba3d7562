//! # am-cli
//!
//! Output formatting for Alertmanager API payloads.
//!
//! Provides:
//! - A [`format::Formatter`] capability set with simple, extended, JSON and
//!   template implementations
//! - An explicit [`format::FormatterRegistry`] keyed by `--output` name
//! - Date rendering driven by `--date.format`
//! - The `amfmt` commands that decode silences, alerts and status documents
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐   FormatConfig   ┌───────────────────┐   &mut dyn Formatter   ┌──────────┐
//! │   Cli    │─────────────────►│ FormatterRegistry │───────────────────────►│ commands │
//! └──────────┘                  └───────────────────┘                        └──────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod date;
pub mod error;
pub mod format;

pub use cli::{Cli, Commands};
pub use config::FormatConfig;
pub use date::{DEFAULT_DATE_FORMAT, DateFormat};
pub use error::CliError;
pub use format::{Formatter, FormatterKind, FormatterRegistry};
