//! `+++` delimited TOML front matter.

use anyhow::{Context, Result, bail};
use serde::Deserialize;

const DELIMITER: &str = "+++";

/// Article metadata declared at the top of an article file.
#[derive(Debug, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    #[serde(default)]
    date: Option<toml::Value>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub draft: bool,
}

impl FrontMatter {
    /// Parses front matter TOML.
    ///
    /// # Errors
    ///
    /// Returns error if TOML is malformed, `title` is missing, or `date` is
    /// neither a string nor a TOML date.
    pub fn parse(toml_src: &str) -> Result<Self> {
        let front: FrontMatter =
            toml::from_str(toml_src).context("Failed to parse front matter TOML")?;
        front.date()?;
        Ok(front)
    }

    /// Returns publication date as written, accepting `date = 2024-03-01`
    /// and `date = "2024-03-01"` alike.
    ///
    /// # Errors
    ///
    /// Returns error if `date` has another TOML type.
    pub fn date(&self) -> Result<Option<String>> {
        match &self.date {
            None => Ok(None),
            Some(toml::Value::String(text)) => Ok(Some(text.clone())),
            Some(toml::Value::Datetime(datetime)) => Ok(Some(datetime.to_string())),
            Some(other) => bail!("Front matter date must be a date, found {}", other.type_str()),
        }
    }
}

/// Splits article source into front matter TOML and body.
///
/// Front matter starts with a `+++` first line and ends at the next line
/// consisting of `+++`. Without an opening delimiter, or when it is never
/// closed, the whole source is body.
///
/// # Returns
///
/// Optional TOML text and the remaining body
pub fn split(source: &str) -> (Option<&str>, &str) {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let Some(after_open) = strip_delimiter_line(source) else {
        return (None, source);
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let toml_src = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            return (Some(toml_src), body.trim_start_matches(['\r', '\n']));
        }
        offset += line.len();
    }

    (None, source)
}

fn strip_delimiter_line(source: &str) -> Option<&str> {
    let (first, rest) = match source.find('\n') {
        Some(pos) => (&source[..pos], &source[pos + 1..]),
        None => (source, ""),
    };
    (first.trim_end() == DELIMITER).then_some(rest)
}
