//! Parser module for rack layout sources

pub mod rackml;
pub mod text_markup;

use std::fmt;
use std::str::FromStr;

use log::warn;

use crate::error::FormatError;
use crate::types::RackSet;

pub use rackml::parse_rackml;
pub use text_markup::{parse_text_markup, TextMarkupParser};

/// Input dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// XML markup (`<racks><rack>...</rack></racks>`)
    RackMl,
    /// Line-oriented markup (`caption:` / `height:` / `items:`)
    RackText,
}

impl Dialect {
    /// Guess the dialect from the first non-blank character
    pub fn detect(source: &str) -> Self {
        if source.trim_start().starts_with('<') {
            Dialect::RackMl
        } else {
            Dialect::RackText
        }
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rackml" | "rack-xml" | "xml" => Ok(Dialect::RackMl),
            "rack-text" | "rack" | "text" => Ok(Dialect::RackText),
            other => Err(format!("unknown dialect: {}", other)),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::RackMl => f.write_str("rackml"),
            Dialect::RackText => f.write_str("rack-text"),
        }
    }
}

/// Parse source text in the given dialect
pub fn parse_source(source: &str, dialect: Dialect) -> Result<RackSet, FormatError> {
    match dialect {
        Dialect::RackMl => parse_rackml(source),
        Dialect::RackText => parse_text_markup(source),
    }
}

/// Lenient integer parsing for attribute values.
///
/// Reads the leading digits (after optional whitespace and `+`), so `"12U"` is 12.
/// No digits, overflow, or zero gives `None`.
pub(crate) fn parse_leading_int(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    trimmed[..end].parse::<u32>().ok().filter(|n| *n >= 1)
}

/// [`parse_leading_int`] with a fallback for missing or unusable values
pub(crate) fn parse_int_or(value: Option<&str>, default: u32, what: &str) -> u32 {
    let Some(raw) = value else {
        return default;
    };
    parse_leading_int(raw).unwrap_or_else(|| {
        warn!(value = raw, default = default; "Invalid {} attribute, using default", what);
        default
    })
}
