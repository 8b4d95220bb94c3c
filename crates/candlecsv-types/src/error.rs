//! Error types for candlecsv.

use thiserror::Error;

/// Errors detected while validating configuration, before any row is read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Span selector is not `month`, `week`, `day` or `<N>h`/`<N>m`/`<N>s`.
    #[error("invalid span '{0}', expected one of: month, week, day, <N>h, <N>m, <N>s")]
    InvalidSpan(String),

    /// Sub-day span length is zero or negative.
    #[error("span must be positive: '{0}'")]
    NonPositiveSpan(String),

    /// Sub-day span does not evenly divide a day.
    #[error("span of {0} seconds does not evenly divide a day")]
    SpanNotDayDivisor(u64),

    /// Unknown week start day name.
    #[error("invalid week start '{0}', expected one of: sun, mon, tue, wed, thu, fri, sat")]
    InvalidWeekStart(String),

    /// Column index is not a positive integer.
    #[error("invalid column '{0}', columns are numbered from 1")]
    InvalidColumn(String),

    /// Date pattern contains an unsupported specifier.
    #[error("invalid date format '{0}'")]
    InvalidDateFormat(String),

    /// Column operation could not be parsed.
    #[error("invalid column operation '{input}': {reason}")]
    InvalidColumnOp {
        /// The operation text as given.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// A timestamp cell did not match the configured input pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot parse '{input}' with date format '{format}': {source}")]
pub struct TimestampError {
    /// The cell text.
    pub input: String,
    /// The pattern it was parsed with.
    pub format: String,
    /// The underlying chrono error.
    pub source: chrono::ParseError,
}
