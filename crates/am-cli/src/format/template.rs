//! Handlebars template output.
//!
//! The template sees one top-level key per payload kind: `silences`,
//! `alerts`, `status` or `cluster`, each in API shape. The `date` helper
//! renders an RFC 3339 timestamp with the configured date format:
//!
//! ```text
//! {{#each alerts}}{{labels.alertname}} since {{date startsAt}}
//! {{/each}}
//! ```

use std::io::Write;

use am_models::{AlertmanagerStatus, ClusterStatus, GettableAlert, GettableSilence};
use chrono::DateTime;
use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, no_escape,
};
use serde_json::json;
use tracing::debug;

use super::{Formatter, stdout};
use crate::date::DateFormat;
use crate::error::CliError;

const TEMPLATE_NAME: &str = "output";

/// `{{date ts}}`: formats an RFC 3339 string, passing anything else through.
struct DateHelper {
    dates: DateFormat,
}

impl HelperDef for DateHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        let raw = h
            .param(0)
            .and_then(|p| p.value().as_str())
            .unwrap_or_default();
        let rendered = match DateTime::parse_from_rfc3339(raw) {
            Ok(t) => self.dates.format_date(&t),
            Err(_) => raw.to_string(),
        };
        out.write(&rendered)?;
        Ok(())
    }
}

/// Renders payloads through a user-supplied template.
pub struct TemplateFormatter {
    out: Box<dyn Write>,
    source: Option<String>,
    dates: DateFormat,
    registry: Option<Handlebars<'static>>,
}

impl TemplateFormatter {
    /// Creates a formatter for `template`, compiled on first use. Without a
    /// template, every `format_*` call fails with a configuration error.
    #[must_use]
    pub fn new(template: Option<String>, dates: DateFormat) -> Self {
        Self {
            out: stdout(),
            source: template,
            dates,
            registry: None,
        }
    }

    fn compile(&self) -> Result<Handlebars<'static>, CliError> {
        let source = self.source.as_deref().ok_or_else(|| {
            CliError::Config("the template output requires --template or --template-file".into())
        })?;

        let mut registry = Handlebars::new();
        registry.register_escape_fn(no_escape);
        registry.register_helper(
            "date",
            Box::new(DateHelper {
                dates: self.dates.clone(),
            }),
        );
        registry
            .register_template_string(TEMPLATE_NAME, source)
            .map_err(|e| CliError::Template(e.to_string()))?;
        debug!("compiled output template");
        Ok(registry)
    }

    fn compiled(&mut self) -> Result<&Handlebars<'static>, CliError> {
        let registry = match self.registry.take() {
            Some(registry) => registry,
            None => self.compile()?,
        };
        Ok(self.registry.insert(registry))
    }

    fn render(&mut self, data: &serde_json::Value) -> Result<(), CliError> {
        let rendered = self
            .compiled()?
            .render(TEMPLATE_NAME, data)
            .map_err(|e| CliError::Template(e.to_string()))?;
        self.out.write_all(rendered.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

impl Formatter for TemplateFormatter {
    fn name(&self) -> &'static str {
        "template"
    }

    fn set_output(&mut self, writer: Box<dyn Write>) {
        self.out = writer;
    }

    fn format_silences(&mut self, silences: &[GettableSilence]) -> Result<(), CliError> {
        self.render(&json!({ "silences": silences }))
    }

    fn format_alerts(&mut self, alerts: &[GettableAlert]) -> Result<(), CliError> {
        self.render(&json!({ "alerts": alerts }))
    }

    fn format_config(&mut self, status: &AlertmanagerStatus) -> Result<(), CliError> {
        self.render(&json!({ "status": status }))
    }

    fn format_cluster_status(&mut self, status: &ClusterStatus) -> Result<(), CliError> {
        self.render(&json!({ "cluster": status }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::testing::{SharedBuffer, alert, cluster, silence, status};

    fn formatter(template: &str) -> (TemplateFormatter, SharedBuffer) {
        let buf = SharedBuffer::default();
        let mut fmt = TemplateFormatter::new(Some(template.to_string()), DateFormat::default());
        fmt.set_output(Box::new(buf.clone()));
        (fmt, buf)
    }

    #[test]
    fn renders_alerts_with_date_helper() {
        let (mut fmt, buf) = formatter(
            "{{#each alerts}}{{labels.alertname}} since {{date startsAt}}\n{{/each}}",
        );
        fmt.format_alerts(&[alert("Down", 10)]).expect("should render");
        assert_eq!(buf.contents(), "Down since 2024-01-15 10:30:00 UTC\n");
    }

    #[test]
    fn date_helper_uses_configured_pattern() {
        let buf = SharedBuffer::default();
        let mut fmt = TemplateFormatter::new(
            Some("{{#each silences}}{{id}} until {{date endsAt}}{{/each}}".into()),
            DateFormat::new("%H:%M"),
        );
        fmt.set_output(Box::new(buf.clone()));
        fmt.format_silences(&[silence("sil-1", 12)]).expect("should render");
        assert_eq!(buf.contents(), "sil-1 until 12:00");
    }

    #[test]
    fn date_helper_passes_through_non_dates() {
        let (mut fmt, buf) = formatter("{{date status.versionInfo.version}}");
        fmt.format_config(&status()).expect("should render");
        assert_eq!(buf.contents(), "0.27.0");
    }

    #[test]
    fn output_is_not_html_escaped() {
        let (mut fmt, buf) = formatter("{{#each alerts}}{{generatorURL}}{{/each}}");
        let mut a = alert("Down", 10);
        a.generator_url = Some("http://prom/graph?g0.expr=up&g0.tab=1".into());
        fmt.format_alerts(&[a]).expect("should render");
        assert_eq!(buf.contents(), "http://prom/graph?g0.expr=up&g0.tab=1");
    }

    #[test]
    fn renders_cluster() {
        let (mut fmt, buf) = formatter("{{cluster.status}} {{#each cluster.peers}}[{{name}}]{{/each}}");
        fmt.format_cluster_status(&cluster()).expect("should render");
        assert_eq!(buf.contents(), "ready [01HNODEA][01HNODEB]");
    }

    #[test]
    fn date_helper_keeps_payload_offset() {
        let (mut fmt, buf) = formatter("{{#each alerts}}{{date startsAt}}{{/each}}");
        let mut a = alert("Down", 10);
        a.starts_at = chrono::DateTime::parse_from_rfc3339("2024-01-15T10:30:00+02:00")
            .expect("valid date");
        fmt.format_alerts(&[a]).expect("should render");
        assert_eq!(buf.contents(), "2024-01-15 10:30:00 +02:00");
    }

    #[test]
    fn invalid_template_is_rejected_on_first_use() {
        let (mut fmt, buf) = formatter("{{#each alerts}}");
        let err = fmt.format_alerts(&[alert("Down", 10)]).unwrap_err();
        assert!(matches!(err, CliError::Template(_)));
        assert_eq!(buf.contents(), "");
    }

    #[test]
    fn template_is_compiled_once() {
        let (mut fmt, buf) = formatter("{{#each alerts}}{{labels.alertname}};{{/each}}");
        fmt.format_alerts(&[alert("A", 10)]).expect("should render");
        fmt.format_alerts(&[alert("B", 11)]).expect("should render");
        assert_eq!(buf.contents(), "A;B;");
        assert!(fmt.registry.is_some());
    }

    #[test]
    fn missing_template_fails_at_format_time() {
        let mut fmt = TemplateFormatter::new(None, DateFormat::default());
        fmt.set_output(Box::new(SharedBuffer::default()));
        let err = fmt.format_alerts(&[]).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
