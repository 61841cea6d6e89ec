//! # Hostname Templates
//!
//! Parses composite-format hostname templates such as `host{0}.example.com`.
//!
//! Supported syntax:
//! * `{0}`: the index in decimal.
//! * `{0:D3}` / `{0:d3}`: the index zero-padded to at least three digits.
//! * `{{` and `}}`: literal braces.
//!
//! A template must contain exactly one placeholder.

use std::fmt;
use std::str::FromStr;

use crate::error::TemplateError;
use crate::network::range::IndexRange;
use crate::network::target::HostTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostnameTemplate {
    source: String,
    prefix: String,
    suffix: String,
    min_digits: usize,
}

impl HostnameTemplate {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut placeholder: Option<String> = None;
        let mut chars = source.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal_sink(&placeholder, &mut prefix, &mut suffix).push('{');
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal_sink(&placeholder, &mut prefix, &mut suffix).push('}');
                }
                '{' => {
                    let mut body = String::new();
                    let mut closed = false;
                    for (_, inner) in chars.by_ref() {
                        match inner {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => return Err(TemplateError::UnbalancedBrace(offset)),
                            _ => body.push(inner),
                        }
                    }
                    if !closed {
                        return Err(TemplateError::UnbalancedBrace(offset));
                    }
                    if placeholder.is_some() {
                        return Err(TemplateError::MultiplePlaceholders(source.to_string()));
                    }
                    placeholder = Some(body);
                }
                '}' => return Err(TemplateError::UnbalancedBrace(offset)),
                _ => literal_sink(&placeholder, &mut prefix, &mut suffix).push(c),
            }
        }

        let body =
            placeholder.ok_or_else(|| TemplateError::MissingPlaceholder(source.to_string()))?;
        let min_digits = parse_placeholder(&body)?;

        Ok(Self {
            source: source.to_string(),
            prefix,
            suffix,
            min_digits,
        })
    }

    /// Substitutes `index` into the template.
    pub fn render(&self, index: u32) -> String {
        format!(
            "{}{:0width$}{}",
            self.prefix,
            index,
            self.suffix,
            width = self.min_digits
        )
    }

    /// One [`HostTarget`] per index in `range`, in ascending index order.
    pub fn targets(&self, range: IndexRange) -> impl Iterator<Item = HostTarget> + '_ {
        range
            .to_iter()
            .map(move |index| HostTarget::new(index, self.render(index)))
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for HostnameTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HostnameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn literal_sink<'a>(
    placeholder: &Option<String>,
    prefix: &'a mut String,
    suffix: &'a mut String,
) -> &'a mut String {
    if placeholder.is_some() { suffix } else { prefix }
}

/// Validates a placeholder body and returns its minimum digit count.
fn parse_placeholder(body: &str) -> Result<usize, TemplateError> {
    let (index, specifier) = match body.split_once(':') {
        Some((index, specifier)) => (index.trim(), Some(specifier)),
        None => (body.trim(), None),
    };

    if index != "0" {
        return Err(TemplateError::InvalidArgumentIndex(body.to_string()));
    }

    let Some(specifier) = specifier else {
        return Ok(0);
    };

    let digits = specifier
        .strip_prefix('D')
        .or_else(|| specifier.strip_prefix('d'))
        .ok_or_else(|| TemplateError::UnsupportedSpecifier(specifier.to_string()))?;

    if digits.is_empty() {
        return Ok(0);
    }

    digits
        .parse::<usize>()
        .map_err(|_| TemplateError::UnsupportedSpecifier(specifier.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
