//! OHLC candle output.

use candlecsv_aggregate::Candle;
use candlecsv_types::{DateFormat, Value};
use std::io::Write;

use crate::{CsvOptions, FormatError, RowWriter};

/// Header row written before any candle.
pub const CANDLE_HEADER: [&str; 5] = ["date", "open", "high", "low", "close"];

/// Streaming candle writer.
///
/// Writes [`CANDLE_HEADER`] on creation, then one row per candle: the bucket
/// key formatted with the output date pattern followed by open, high, low
/// and close. Missing values are written as empty cells.
#[derive(Debug)]
pub struct CandleWriter<W: Write> {
    rows: RowWriter<W>,
    date_format: DateFormat,
    candles_written: usize,
}

impl<W: Write> CandleWriter<W> {
    /// Creates a candle writer and writes the header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be written.
    pub fn new(output: W, options: CsvOptions, date_format: DateFormat) -> Result<Self, FormatError> {
        let mut rows = RowWriter::new(output, options);
        rows.write_row(CANDLE_HEADER)?;
        Ok(Self {
            rows,
            date_format,
            candles_written: 0,
        })
    }

    /// Writes one candle.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_candle(&mut self, candle: &Candle) -> Result<(), FormatError> {
        let date = self
            .date_format
            .format(&candle.key)
            .map_err(|_| FormatError::DateFormat(self.date_format.to_string()))?;
        self.rows.write_row([
            date,
            cell(candle.open),
            cell(candle.high),
            cell(candle.low),
            cell(candle.close),
        ])?;
        self.candles_written += 1;
        Ok(())
    }

    /// Returns the number of candles written so far.
    #[must_use]
    pub const fn candles_written(&self) -> usize {
        self.candles_written
    }

    /// Flushes buffered rows to the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    pub fn flush(&mut self) -> Result<(), FormatError> {
        self.rows.flush()
    }

    /// Flushes and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    pub fn into_inner(self) -> Result<W, FormatError> {
        self.rows.into_inner()
    }
}

fn cell(value: Option<Value>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 1, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn output(candles: &[Candle], format: &str) -> String {
        let mut writer =
            CandleWriter::new(Vec::new(), CsvOptions::new(), DateFormat::new(format).unwrap())
                .unwrap();
        for candle in candles {
            writer.write_candle(candle).unwrap();
        }
        assert_eq!(writer.candles_written(), candles.len());
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_header_only() {
        assert_eq!(output(&[], "%Y/%m/%d"), "date,open,high,low,close\n");
    }

    #[test]
    fn test_candle_rows() {
        let candles = [
            Candle::new(
                day(1),
                Some(Value::Int(10)),
                Some(Value::Int(12)),
                Some(Value::Int(10)),
                Some(Value::Int(12)),
                2,
            ),
            Candle::new(
                day(2),
                Some(Value::Float(5.0)),
                Some(Value::Float(5.5)),
                Some(Value::Float(5.0)),
                Some(Value::Float(5.5)),
                2,
            ),
        ];

        assert_eq!(
            output(&candles, "%Y/%m/%d"),
            "date,open,high,low,close\n2021/01/01,10,12,10,12\n2021/01/02,5.0,5.5,5.0,5.5\n"
        );
    }

    #[test]
    fn test_missing_values_are_empty() {
        let candles = [Candle::new(day(3), None, Some(Value::Int(4)), Some(Value::Int(2)), None, 3)];
        assert_eq!(
            output(&candles, "%Y-%m-%d %H:%M"),
            "date,open,high,low,close\n2021-01-03 00:00,,4,2,\n"
        );
    }
}
