//! Candle aggregation spans.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::ConfigError;

/// Number of seconds in a day; sub-day spans must divide it evenly.
const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Candle aggregation span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Span {
    /// Calendar month.
    Month,
    /// Calendar week starting on the given day.
    Week(Weekday),
    /// Calendar day.
    #[default]
    Day,
    /// Fixed interval of the given number of seconds, aligned to midnight.
    Seconds(NonZeroU32),
}

impl Span {
    /// Creates a fixed sub-day span.
    ///
    /// # Errors
    ///
    /// Returns an error if `seconds` is zero or does not evenly divide a day.
    pub fn seconds(seconds: u64) -> Result<Self, ConfigError> {
        let n = u32::try_from(seconds)
            .ok()
            .and_then(NonZeroU32::new)
            .filter(|n| SECONDS_PER_DAY % n.get() == 0)
            .ok_or(ConfigError::SpanNotDayDivisor(seconds))?;
        Ok(Self::Seconds(n))
    }

    /// Parses a span selector, using `week_start` for `week`.
    ///
    /// Accepts `month`, `week`, `day`, and `<N>h`, `<N>m` or `<N>s` for
    /// N hours, minutes or seconds.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown selectors, non-positive lengths and
    /// lengths that do not evenly divide a day.
    pub fn parse_with_week_start(s: &str, week_start: Weekday) -> Result<Self, ConfigError> {
        match s {
            "month" => return Ok(Self::Month),
            "week" => return Ok(Self::Week(week_start)),
            "day" => return Ok(Self::Day),
            _ => {}
        }

        let Some(unit) = s.chars().last() else {
            return Err(ConfigError::InvalidSpan(s.to_string()));
        };
        let multiplier: i64 = match unit {
            'h' => 60 * 60,
            'm' => 60,
            's' => 1,
            _ => return Err(ConfigError::InvalidSpan(s.to_string())),
        };
        let count: i64 = s[..s.len() - unit.len_utf8()]
            .parse()
            .map_err(|_| ConfigError::InvalidSpan(s.to_string()))?;
        if count <= 0 {
            return Err(ConfigError::NonPositiveSpan(s.to_string()));
        }

        let seconds = count.saturating_mul(multiplier).unsigned_abs();
        Self::seconds(seconds)
    }

    /// Returns the interval length in seconds for fixed spans.
    #[must_use]
    pub const fn fixed_seconds(&self) -> Option<u32> {
        match self {
            Self::Seconds(n) => Some(n.get()),
            _ => None,
        }
    }

    /// Returns true for calendar spans (month, week, day).
    #[must_use]
    pub const fn is_calendar(&self) -> bool {
        !matches!(self, Self::Seconds(_))
    }

    /// Returns the default output date pattern for this span.
    ///
    /// Calendar spans print the date only; sub-day spans include the time.
    #[must_use]
    pub const fn default_output_format(&self) -> &'static str {
        if self.is_calendar() {
            "%Y/%m/%d"
        } else {
            "%Y/%m/%d %H:%M:%S"
        }
    }
}

/// Parses a week start day name.
///
/// Accepts English day names and their three-letter abbreviations in any
/// case (`sun`, `Monday`, `TUE`).
///
/// # Errors
///
/// Returns [`ConfigError::InvalidWeekStart`] for anything else.
pub fn parse_week_start(s: &str) -> Result<Weekday, ConfigError> {
    s.parse::<Weekday>()
        .map_err(|_| ConfigError::InvalidWeekStart(s.to_string()))
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Month => write!(f, "month"),
            Self::Week(start) => write!(f, "week ({start})"),
            Self::Day => write!(f, "day"),
            Self::Seconds(n) => write!(f, "{n}s"),
        }
    }
}

impl FromStr for Span {
    type Err = ConfigError;

    /// Parses a span selector with weeks starting on Sunday.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_week_start(s, Weekday::Sun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_spans() {
        assert_eq!("month".parse::<Span>().unwrap(), Span::Month);
        assert_eq!("day".parse::<Span>().unwrap(), Span::Day);
        assert_eq!("week".parse::<Span>().unwrap(), Span::Week(Weekday::Sun));
        assert_eq!(
            Span::parse_with_week_start("week", Weekday::Mon).unwrap(),
            Span::Week(Weekday::Mon)
        );
    }

    #[test]
    fn test_sub_day_spans() {
        assert_eq!("4h".parse::<Span>().unwrap().fixed_seconds(), Some(14_400));
        assert_eq!("30s".parse::<Span>().unwrap().fixed_seconds(), Some(30));
        assert_eq!("24h".parse::<Span>().unwrap().fixed_seconds(), Some(86_400));
    }

    #[test]
    fn test_minutes_scale_to_seconds() {
        assert_eq!("15m".parse::<Span>().unwrap().fixed_seconds(), Some(900));
        assert_eq!("1m".parse::<Span>().unwrap().fixed_seconds(), Some(60));
    }

    #[test]
    fn test_non_positive_span() {
        assert_eq!(
            "0h".parse::<Span>(),
            Err(ConfigError::NonPositiveSpan("0h".to_string()))
        );
        assert_eq!(
            "-5m".parse::<Span>(),
            Err(ConfigError::NonPositiveSpan("-5m".to_string()))
        );
    }

    #[test]
    fn test_span_must_divide_day() {
        assert_eq!("7h".parse::<Span>(), Err(ConfigError::SpanNotDayDivisor(25_200)));
        assert_eq!("25h".parse::<Span>(), Err(ConfigError::SpanNotDayDivisor(90_000)));
        assert!("7s".parse::<Span>().is_err());
    }

    #[test]
    fn test_invalid_span() {
        for s in ["", "year", "h", "xh", "1.5h", "10"] {
            assert!(
                matches!(s.parse::<Span>(), Err(ConfigError::InvalidSpan(_))),
                "{s:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_week_start() {
        assert_eq!(parse_week_start("sun").unwrap(), Weekday::Sun);
        assert_eq!(parse_week_start("Mon").unwrap(), Weekday::Mon);
        assert_eq!(parse_week_start("saturday").unwrap(), Weekday::Sat);
        assert_eq!(
            parse_week_start("funday"),
            Err(ConfigError::InvalidWeekStart("funday".to_string()))
        );
    }

    #[test]
    fn test_default_output_format() {
        assert_eq!(Span::Month.default_output_format(), "%Y/%m/%d");
        assert_eq!(Span::Week(Weekday::Sun).default_output_format(), "%Y/%m/%d");
        assert_eq!(
            Span::seconds(3600).unwrap().default_output_format(),
            "%Y/%m/%d %H:%M:%S"
        );
    }
}
