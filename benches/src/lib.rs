//! Benchmark utilities for candlecsv.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::fmt::Write;

/// Shape of a synthetic tick series.
#[derive(Debug, Clone, Copy)]
pub struct SeriesConfig {
    /// Number of rows to generate.
    pub rows: usize,
    /// Seconds between consecutive rows.
    pub step_secs: i64,
    /// Every n-th value is written as `n/a` (0 disables).
    pub gap_every: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            rows: 100_000,
            step_secs: 7,
            gap_every: 0,
        }
    }
}

/// First timestamp of every generated series.
pub fn series_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 2)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Generates `time,price` rows in the default input date format.
///
/// Prices follow a deterministic saw-tooth so runs are comparable.
pub fn synthetic_csv(config: &SeriesConfig) -> String {
    let mut out = String::with_capacity(config.rows * 32);
    let start = series_start();
    for i in 0..config.rows {
        let ts = start + TimeDelta::seconds(i as i64 * config.step_secs);
        let _ = write!(out, "{},", ts.format("%Y/%m/%d %H:%M:%S"));
        if config.gap_every != 0 && i % config.gap_every == 0 {
            out.push_str("n/a\n");
        } else {
            let cents = 10_000 + (i * 37 % 500) as i64 - 250;
            let _ = writeln!(out, "{}.{:02}", cents / 100, cents % 100);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_csv_shape() {
        let csv = synthetic_csv(&SeriesConfig {
            rows: 3,
            step_secs: 60,
            gap_every: 2,
        });
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "2024/01/02 00:00:00,n/a");
        assert_eq!(lines[1], "2024/01/02 00:01:00,97.87");
        assert!(lines[2].starts_with("2024/01/02 00:02:00,n/a"));
    }
}
