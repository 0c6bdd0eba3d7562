//! Format configuration.
//!
//! Built once from the parsed command line and passed by reference to the
//! formatter registry and formatter constructors.

use std::fs;

use tracing::debug;

use crate::cli::Cli;
use crate::date::DateFormat;
use crate::error::CliError;
use crate::format::FormatterKind;

/// Settings shared by every formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Pattern used for every rendered timestamp.
    pub date_format: DateFormat,
    /// Name of the selected output format.
    pub output: String,
    /// Handlebars template for the template output format.
    pub template: Option<String>,
}

impl FormatConfig {
    /// Builds the configuration from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the template file cannot be read, the output is
    /// unknown, or the template output is selected without a template.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let template = match (&cli.template, &cli.template_file) {
            (Some(inline), _) => Some(inline.clone()),
            (None, Some(path)) => {
                Some(fs::read_to_string(path).map_err(|source| CliError::ReadInput {
                    path: path.clone(),
                    source,
                })?)
            }
            (None, None) => None,
        };

        let config = Self {
            date_format: DateFormat::new(cli.date_format.as_str()),
            output: cli.output.clone(),
            template,
        };
        config.validate()?;
        debug!(output = %config.output, date_format = config.date_format.pattern(), "format config loaded");
        Ok(config)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::UnknownFormat`] for an output that is not a
    /// built-in, or [`CliError::Config`] if the template output is selected
    /// without a template.
    pub fn validate(&self) -> Result<(), CliError> {
        let kind: FormatterKind = self.output.parse()?;
        if kind == FormatterKind::Template && self.template.is_none() {
            return Err(CliError::Config(
                "the template output requires --template or --template-file".into(),
            ));
        }
        Ok(())
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            date_format: DateFormat::default(),
            output: FormatterKind::Simple.as_str().to_string(),
            template: None,
        }
    }
}
