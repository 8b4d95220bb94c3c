//! Validated strftime-style date/time patterns.

use chrono::format::{self, Item, ParseErrorKind, ParseResult, Parsed, StrftimeItems};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;

use crate::{ConfigError, TimestampError};

/// A strftime-style pattern checked up front against a naive timestamp.
///
/// Specifiers that need a time zone (`%z`, `%Z`, `%+`, ...) are rejected,
/// since timestamps carry no offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateFormat(String);

impl DateFormat {
    /// Default input pattern.
    pub const DEFAULT_INPUT: &'static str = "%Y/%m/%d %H:%M:%S";

    /// Creates a pattern after validating its specifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDateFormat`] if chrono rejects any
    /// specifier in the pattern, or if the pattern cannot be written for a
    /// timestamp without an offset.
    pub fn new(pattern: impl Into<String>) -> Result<Self, ConfigError> {
        let format = Self(pattern.into());
        let unknown = StrftimeItems::new(&format.0).any(|item| matches!(item, Item::Error));
        if unknown || format.format(&NaiveDateTime::default()).is_err() {
            return Err(ConfigError::InvalidDateFormat(format.0));
        }
        Ok(format)
    }

    /// Returns the pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses a timestamp cell.
    ///
    /// Fields the pattern leaves out default to the start of their period: a
    /// missing month or day is 1 and a missing time of day is midnight.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell does not match the pattern exactly, or if
    /// the pattern has no year.
    pub fn parse(&self, input: &str) -> Result<NaiveDateTime, TimestampError> {
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, input, StrftimeItems::new(&self.0))
            .and_then(|()| resolve_with_defaults(&mut parsed))
            .map_err(|source| TimestampError {
                input: input.to_string(),
                format: self.0.clone(),
                source,
            })
    }

    /// Formats a timestamp with this pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern needs fields a naive timestamp lacks.
    /// Patterns built with [`DateFormat::new`] never do.
    pub fn format(&self, timestamp: &NaiveDateTime) -> Result<String, fmt::Error> {
        let mut out = String::new();
        write!(out, "{}", timestamp.format(&self.0))?;
        Ok(out)
    }
}

/// Builds the timestamp, filling in date and time fields the input lacked.
fn resolve_with_defaults(parsed: &mut Parsed) -> ParseResult<NaiveDateTime> {
    // Setters leave fields that were already parsed untouched.
    if is_not_enough(parsed.to_naive_date()) {
        let _ = parsed.set_month(1);
        let _ = parsed.set_day(1);
    }
    if is_not_enough(parsed.to_naive_time()) {
        let _ = parsed.set_hour(0);
        let _ = parsed.set_minute(0);
    }
    parsed.to_naive_datetime_with_offset(0)
}

fn is_not_enough<T>(result: ParseResult<T>) -> bool {
    matches!(result, Err(e) if e.kind() == ParseErrorKind::NotEnough)
}

impl Default for DateFormat {
    fn default() -> Self {
        Self(Self::DEFAULT_INPUT.to_string())
    }
}

impl std::fmt::Display for DateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DateFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DateFormat {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DateFormat> for String {
    fn from(value: DateFormat) -> Self {
        value.0
    }
}
