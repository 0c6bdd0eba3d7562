//! Output formatters.
//!
//! A [`Formatter`] renders silences, alerts, status and cluster status to a
//! writer. The built-in set is closed ([`FormatterKind`]); the
//! [`FormatterRegistry`] maps `--output` names to constructed formatters and
//! is built explicitly at startup.
//!
//! - [`simple`] - Compact column tables
//! - [`extended`] - Wide tables with every timestamp, labels and annotations
//! - [`json`] - Pretty-printed JSON documents
//! - [`template`] - User-supplied handlebars templates

pub mod extended;
pub mod json;
pub mod simple;
pub mod template;

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use am_models::{AlertmanagerStatus, ClusterStatus, GettableAlert, GettableSilence, Matcher, models};
use comfy_table::{ContentArrangement, Table, presets};
use tracing::debug;

use crate::config::FormatConfig;
use crate::error::CliError;

pub use extended::ExtendedFormatter;
pub use json::JsonFormatter;
pub use simple::SimpleFormatter;
pub use template::TemplateFormatter;

/// Capability set every output formatter implements.
///
/// [`Formatter::set_output`] must be called before any `format_*` call;
/// until then formatters write to stdout.
pub trait Formatter {
    /// Name of the formatter, as accepted by `--output`.
    fn name(&self) -> &'static str;

    /// Redirects subsequent output.
    fn set_output(&mut self, writer: Box<dyn Write>);

    /// Renders a list of silences.
    fn format_silences(&mut self, silences: &[GettableSilence]) -> Result<(), CliError>;

    /// Renders a list of alerts.
    fn format_alerts(&mut self, alerts: &[GettableAlert]) -> Result<(), CliError>;

    /// Renders the Alertmanager status and configuration.
    fn format_config(&mut self, status: &AlertmanagerStatus) -> Result<(), CliError>;

    /// Renders cluster membership.
    fn format_cluster_status(&mut self, status: &ClusterStatus) -> Result<(), CliError>;
}

/// The built-in formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatterKind {
    /// Compact column tables.
    Simple,
    /// Wide column tables.
    Extended,
    /// Pretty-printed JSON.
    Json,
    /// Handlebars templates.
    Template,
}

impl FormatterKind {
    /// Every built-in formatter.
    pub const ALL: [Self; 4] = [Self::Simple, Self::Extended, Self::Json, Self::Template];

    /// Returns the `--output` name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Extended => "extended",
            Self::Json => "json",
            Self::Template => "template",
        }
    }

    /// Constructs the formatter, writing to stdout.
    #[must_use]
    pub fn build(self, config: &FormatConfig) -> Box<dyn Formatter> {
        let dates = config.date_format.clone();
        match self {
            Self::Simple => Box::new(SimpleFormatter::new(dates)),
            Self::Extended => Box::new(ExtendedFormatter::new(dates)),
            Self::Json => Box::new(JsonFormatter::new()),
            Self::Template => Box::new(TemplateFormatter::new(config.template.clone(), dates)),
        }
    }
}

impl fmt::Display for FormatterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FormatterKind {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                let mut available: Vec<String> =
                    Self::ALL.iter().map(|k| k.as_str().to_string()).collect();
                available.sort();
                CliError::UnknownFormat {
                    name: s.to_string(),
                    available,
                }
            })
    }
}

/// Output formats by name.
#[derive(Default)]
pub struct FormatterRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatterRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every [`FormatterKind`].
    ///
    /// # Errors
    ///
    /// Returns an error if two built-ins share a name.
    pub fn builtin(config: &FormatConfig) -> Result<Self, CliError> {
        let mut registry = Self::new();
        for kind in FormatterKind::ALL {
            registry.register(kind.as_str(), kind.build(config))?;
        }
        Ok(registry)
    }

    /// Registers a formatter under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::DuplicateFormatter`] if `name` is taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        formatter: Box<dyn Formatter>,
    ) -> Result<(), CliError> {
        let name = name.into();
        if self.formatters.contains_key(&name) {
            return Err(CliError::DuplicateFormatter(name));
        }
        debug!(%name, "registered formatter");
        self.formatters.insert(name, formatter);
        Ok(())
    }

    /// Looks up a formatter by name.
    pub fn lookup(&mut self, name: &str) -> Option<&mut Box<dyn Formatter>> {
        self.formatters.get_mut(name)
    }

    /// Looks up a formatter, reporting unknown names as a user error.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::UnknownFormat`] listing the registered names.
    pub fn require(&mut self, name: &str) -> Result<&mut Box<dyn Formatter>, CliError> {
        let available = if self.formatters.contains_key(name) {
            Vec::new()
        } else {
            self.names().into_iter().map(String::from).collect()
        };
        self.formatters.get_mut(name).ok_or(CliError::UnknownFormat {
            name: name.to_string(),
            available,
        })
    }

    /// Registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.formatters.keys().map(String::as_str).collect()
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("formatters", &self.names())
            .finish()
    }
}

/// Default formatter output.
pub(crate) fn stdout() -> Box<dyn Write> {
    Box::new(io::stdout())
}

/// Borderless column table.
pub(crate) fn column_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(headers.to_vec());
    table
}

/// Renders wire matchers in their canonical textual form, space separated.
pub(crate) fn format_matchers(matchers: &[models::Matcher]) -> String {
    matchers
        .iter()
        .map(|m| Matcher::from(m).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a label or annotation set as sorted `name="value"` pairs.
pub(crate) fn format_label_set(set: &BTreeMap<String, String>) -> String {
    set.iter()
        .map(|(k, v)| format!("{k}={v:?}"))
        .collect::<Vec<_>>()
        .join(" ")
}


#[cfg(test)]
mod tests {
    use super::testing::{SharedBuffer, alert};
    use super::*;
    use test_case::test_case;

    /// Formatter that records which method was called.
    struct Recording {
        out: Box<dyn Write>,
    }

    impl Formatter for Recording {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn set_output(&mut self, writer: Box<dyn Write>) {
            self.out = writer;
        }

        fn format_silences(&mut self, silences: &[GettableSilence]) -> Result<(), CliError> {
            writeln!(self.out, "silences {}", silences.len())?;
            Ok(())
        }

        fn format_alerts(&mut self, alerts: &[GettableAlert]) -> Result<(), CliError> {
            writeln!(self.out, "alerts {}", alerts.len())?;
            Ok(())
        }

        fn format_config(&mut self, _: &AlertmanagerStatus) -> Result<(), CliError> {
            writeln!(self.out, "config")?;
            Ok(())
        }

        fn format_cluster_status(&mut self, _: &ClusterStatus) -> Result<(), CliError> {
            writeln!(self.out, "cluster")?;
            Ok(())
        }
    }

    fn recording() -> Box<dyn Formatter> {
        Box::new(Recording { out: stdout() })
    }

    #[test]
    fn register_then_lookup() {
        let mut registry = FormatterRegistry::new();
        registry.register("json", recording()).expect("first registration");

        let buf = SharedBuffer::default();
        let formatter = registry.lookup("json").expect("registered");
        assert_eq!(formatter.name(), "recording");

        formatter.set_output(Box::new(buf.clone()));
        formatter.format_alerts(&[alert("A", 10)]).expect("should format");
        assert_eq!(buf.contents(), "alerts 1\n");
    }

    #[test]
    fn lookup_missing_is_none() {
        let mut registry = FormatterRegistry::new();
        assert!(registry.lookup("missing").is_none());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = FormatterRegistry::new();
        registry.register("simple", recording()).expect("first registration");
        let err = registry.register("simple", recording()).unwrap_err();
        assert!(matches!(err, CliError::DuplicateFormatter(name) if name == "simple"));
    }

    #[test]
    fn require_unknown_lists_available_names() {
        let mut registry = FormatterRegistry::builtin(&FormatConfig::default()).expect("builtins");
        match registry.require("yaml") {
            Err(CliError::UnknownFormat { name, available }) => {
                assert_eq!(name, "yaml");
                assert_eq!(available, vec!["extended", "json", "simple", "template"]);
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("yaml should not be registered"),
        }
    }

    #[test]
    fn builtin_registers_every_kind() {
        let mut registry = FormatterRegistry::builtin(&FormatConfig::default()).expect("builtins");
        for kind in FormatterKind::ALL {
            let formatter = registry.require(kind.as_str()).expect("registered");
            assert_eq!(formatter.name(), kind.as_str());
        }
    }

    #[test]
    fn builtin_ignores_broken_template_when_not_selected() {
        let config = FormatConfig {
            output: "json".into(),
            template: Some("{{#each alerts}}".into()),
            ..FormatConfig::default()
        };
        let mut registry = FormatterRegistry::builtin(&config).expect("builtins");

        let buf = SharedBuffer::default();
        let formatter = registry.require("json").expect("registered");
        formatter.set_output(Box::new(buf.clone()));
        formatter.format_alerts(&[]).expect("should format");
        assert_eq!(buf.contents(), "[]\n");

        let template = registry.require("template").expect("registered");
        template.set_output(Box::new(SharedBuffer::default()));
        let err = template.format_alerts(&[]).unwrap_err();
        assert!(matches!(err, CliError::Template(_)));
    }

    #[test_case("simple", FormatterKind::Simple ; "simple")]
    #[test_case("extended", FormatterKind::Extended ; "extended")]
    #[test_case("json", FormatterKind::Json ; "json")]
    #[test_case("template", FormatterKind::Template ; "template")]
    fn kind_from_str(name: &str, kind: FormatterKind) {
        assert_eq!(name.parse::<FormatterKind>().expect("known kind"), kind);
        assert_eq!(kind.to_string(), name);
    }

    #[test]
    fn kind_from_str_unknown_lists_kinds_sorted() {
        match "table".parse::<FormatterKind>() {
            Err(CliError::UnknownFormat { name, available }) => {
                assert_eq!(name, "table");
                assert_eq!(available, vec!["extended", "json", "simple", "template"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn label_set_rendering_is_sorted_and_quoted() {
        let set = BTreeMap::from([
            ("severity".to_string(), "critical".to_string()),
            ("alertname".to_string(), "Down".to_string()),
        ]);
        assert_eq!(format_label_set(&set), r#"alertname="Down" severity="critical""#);
    }

    #[test]
    fn matcher_rendering_uses_canonical_form() {
        let matchers = vec![
            models::Matcher::new("alertname", "Down", false, None),
            models::Matcher::new("env", "^prod.*", true, Some(false)),
        ];
        assert_eq!(format_matchers(&matchers), r#"alertname="Down" env!~"^prod.*""#);
    }
}
