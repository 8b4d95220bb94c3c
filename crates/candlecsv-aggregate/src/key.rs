//! Bucket keys: the canonical start timestamp of each candle.

use candlecsv_types::Span;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Weekday};

/// Returns the start of the bucket containing `timestamp`.
///
/// Two timestamps belong to the same candle exactly when their keys are
/// equal, and keys order the same way as the buckets they start.
#[must_use]
pub fn bucket_key(span: Span, timestamp: NaiveDateTime) -> NaiveDateTime {
    match span {
        Span::Month => truncate_to_month(timestamp),
        Span::Week(start) => truncate_to_week(timestamp, start),
        Span::Day => truncate_to_day(timestamp),
        Span::Seconds(n) => truncate_to_seconds(timestamp, n.get()),
    }
}

/// Truncates a timestamp to the first day of its month.
fn truncate_to_month(dt: NaiveDateTime) -> NaiveDateTime {
    let date = dt.date();
    midnight(date - Days::new(u64::from(date.day0())))
}

/// Truncates a timestamp to the most recent `start` day on or before it.
fn truncate_to_week(dt: NaiveDateTime, start: Weekday) -> NaiveDateTime {
    let date = dt.date();
    let weekday = date.weekday().num_days_from_monday();
    let delta = (weekday + 7 - start.num_days_from_monday()) % 7;
    midnight(date - Days::new(u64::from(delta)))
}

/// Truncates a timestamp to the start of the day.
fn truncate_to_day(dt: NaiveDateTime) -> NaiveDateTime {
    midnight(dt.date())
}

/// Truncates a timestamp to a multiple of `interval` seconds past midnight.
fn truncate_to_seconds(dt: NaiveDateTime, interval: u32) -> NaiveDateTime {
    let seconds = dt.time().num_seconds_from_midnight() / interval * interval;
    midnight(dt.date()) + TimeDelta::seconds(i64::from(seconds))
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}
