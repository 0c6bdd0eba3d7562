//! Label matchers.
//!
//! [`Matcher`] is the canonical form used for display and evaluation. Wire
//! matchers from the API carry two independent flags (`isRegex`, `isEqual`);
//! converting one collapses them into a single [`MatchType`].

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{MatcherError, Result};
use crate::models;

/// How a matcher compares a label value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchType {
    /// Value equals (`=`).
    #[serde(rename = "=")]
    Equal,
    /// Value differs (`!=`).
    #[serde(rename = "!=")]
    NotEqual,
    /// Value matches the regex (`=~`).
    #[serde(rename = "=~")]
    Regexp,
    /// Value does not match the regex (`!~`).
    #[serde(rename = "!~")]
    NotRegexp,
}

impl MatchType {
    /// Derives the match type from the two wire flags.
    #[must_use]
    pub const fn from_flags(is_regex: bool, is_equal: bool) -> Self {
        match (is_regex, is_equal) {
            (false, true) => Self::Equal,
            (false, false) => Self::NotEqual,
            (true, true) => Self::Regexp,
            (true, false) => Self::NotRegexp,
        }
    }

    /// Returns the operator symbol.
    #[must_use]
    pub const fn as_symbol(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Regexp => "=~",
            Self::NotRegexp => "!~",
        }
    }

    /// Returns true for the regex variants.
    #[must_use]
    pub const fn is_regex(&self) -> bool {
        matches!(self, Self::Regexp | Self::NotRegexp)
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_symbol())
    }
}

/// A label matcher.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matcher {
    /// Comparison mode.
    pub match_type: MatchType,
    /// Label name.
    pub name: String,
    /// Value or regular expression.
    pub value: String,
}

impl Matcher {
    /// Creates a matcher.
    #[must_use]
    pub fn new(match_type: MatchType, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            match_type,
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parses the textual form `name<op>value`.
    ///
    /// The value may be bare or a double-quoted string with `\"`, `\\`,
    /// `\n` and `\t` escapes. Regex values are compiled to validate them.
    ///
    /// # Errors
    ///
    /// Returns a [`MatcherError`] if the operator is missing, the label name
    /// is invalid, a quoted value is malformed, or a regex does not compile.
    pub fn parse(input: &str) -> Result<Self> {
        let op_start = input
            .find(&['=', '!'][..])
            .ok_or_else(|| MatcherError::MissingOperator {
                input: input.to_string(),
            })?;

        let name = input[..op_start].trim();
        validate_label_name(name)?;

        let rest = &input[op_start..];
        let match_type = if rest.starts_with("=~") {
            MatchType::Regexp
        } else if rest.starts_with("!~") {
            MatchType::NotRegexp
        } else if rest.starts_with("!=") {
            MatchType::NotEqual
        } else if rest.starts_with('=') {
            MatchType::Equal
        } else {
            return Err(MatcherError::MissingOperator {
                input: input.to_string(),
            });
        };

        let raw_value = rest[match_type.as_symbol().len()..].trim();
        let value = unquote(raw_value)?;

        let matcher = Self::new(match_type, name, value);
        if matcher.match_type.is_regex() {
            matcher.compile()?;
        }
        Ok(matcher)
    }

    /// Evaluates the matcher against a label value.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidRegex`] if a regex matcher's pattern
    /// does not compile.
    pub fn matches(&self, value: &str) -> Result<bool> {
        Ok(match self.match_type {
            MatchType::Equal => value == self.value,
            MatchType::NotEqual => value != self.value,
            MatchType::Regexp => self.compile()?.is_match(value),
            MatchType::NotRegexp => !self.compile()?.is_match(value),
        })
    }

    /// Evaluates the matcher against a label set. Missing labels match as
    /// the empty string.
    pub fn matches_labels(&self, labels: &BTreeMap<String, String>) -> Result<bool> {
        let value = labels.get(&self.name).map_or("", String::as_str);
        self.matches(value)
    }

    fn compile(&self) -> Result<Regex> {
        Regex::new(&format!("^(?:{})$", self.value)).map_err(|source| {
            MatcherError::InvalidRegex {
                pattern: self.value.clone(),
                source,
            }
        })
    }
}

/// Returns true if every matcher matches the label set.
///
/// # Errors
///
/// Propagates regex compilation failures.
pub fn matches_all(matchers: &[Matcher], labels: &BTreeMap<String, String>) -> Result<bool> {
    for matcher in matchers {
        if !matcher.matches_labels(labels)? {
            return Ok(false);
        }
    }
    Ok(true)
}

impl From<&models::Matcher> for Matcher {
    /// Older Alertmanager releases omit `isEqual`; they only ever expressed
    /// positive matches, so absence means `true`.
    fn from(m: &models::Matcher) -> Self {
        let is_equal = m.is_equal.unwrap_or(true);
        Self::new(
            MatchType::from_flags(m.is_regex, is_equal),
            m.name.clone(),
            m.value.clone(),
        )
    }
}

impl From<models::Matcher> for Matcher {
    fn from(m: models::Matcher) -> Self {
        let is_equal = m.is_equal.unwrap_or(true);
        Self::new(MatchType::from_flags(m.is_regex, is_equal), m.name, m.value)
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}\"", self.name, self.match_type)?;
        for c in self.value.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\t' => f.write_str("\\t")?,
                _ => fmt::Write::write_char(f, c)?,
            }
        }
        f.write_str("\"")
    }
}

fn validate_label_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(MatcherError::InvalidLabelName {
            name: name.to_string(),
        })
    }
}

fn unquote(raw: &str) -> Result<String> {
    let Some(inner) = raw.strip_prefix('"') else {
        return Ok(raw.to_string());
    };
    let invalid = |reason: &str| MatcherError::InvalidValue {
        value: raw.to_string(),
        reason: reason.to_string(),
    };
    let inner = inner
        .strip_suffix('"')
        .ok_or_else(|| invalid("unterminated quote"))?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some(other) => return Err(invalid(&format!("unknown escape \\{other}"))),
                None => return Err(invalid("trailing backslash")),
            },
            '"' => return Err(invalid("unescaped quote")),
            _ => out.push(c),
        }
    }
    Ok(out)
}
