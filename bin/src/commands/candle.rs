//! Candle command implementation.
//!
//! This module reads timestamped values from a CSV stream, aggregates them
//! into OHLC candles and writes one row per candle.

use crate::stream::{IoArgs, open_input, open_output};
use anyhow::{Context, Result};
use candlecsv_lib::prelude::*;
use chrono::Weekday;
use clap::Args;
use std::io::{Read, Write};
use tracing::{debug, info};

/// Arguments of the `candle` command.
#[derive(Args, Debug)]
pub(crate) struct CandleArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Column holding the timestamp (leftmost column is 1)
    #[arg(short, long, value_name = "COL", default_value = "1")]
    time: Column,

    /// Column holding the value (leftmost column is 1)
    #[arg(long, value_name = "COL", default_value = "2")]
    value: Column,

    /// Candle span: month, week, day, <N>h, <N>m or <N>s
    #[arg(short, long, default_value = "day")]
    span: String,

    /// First day of the week for weekly candles
    #[arg(long, value_name = "DAY", default_value = "sun", value_parser = parse_week_start)]
    week_start: Weekday,

    /// Date/time format of the timestamp column
    #[arg(long, value_name = "FORMAT", default_value = DateFormat::DEFAULT_INPUT)]
    input_date: DateFormat,

    /// Date/time format of the output date column
    /// [default: %Y/%m/%d for month, week and day, %Y/%m/%d %H:%M:%S otherwise]
    #[arg(long, value_name = "FORMAT")]
    output_date: Option<DateFormat>,
}

/// Validated settings for one aggregation run.
#[derive(Debug, Clone)]
pub(crate) struct CandleConfig {
    pub(crate) csv: CsvOptions,
    pub(crate) time_column: Column,
    pub(crate) value_column: Column,
    pub(crate) span: Span,
    pub(crate) input_format: DateFormat,
    pub(crate) output_format: DateFormat,
}

impl CandleConfig {
    /// Extracts the sample from a data row.
    fn sample(&self, row: &Row) -> Result<Sample> {
        let timestamp = self
            .input_format
            .parse(row.cell(self.time_column)?)
            .with_context(|| format!("line {}", row.line()))?;
        Ok(Sample::from_cell(timestamp, row.cell(self.value_column)?))
    }
}

impl TryFrom<&CandleArgs> for CandleConfig {
    type Error = ConfigError;

    fn try_from(args: &CandleArgs) -> Result<Self, Self::Error> {
        let span = Span::parse_with_week_start(&args.span, args.week_start)?;
        let output_format = match &args.output_date {
            Some(format) => format.clone(),
            None => DateFormat::new(span.default_output_format())?,
        };
        Ok(Self {
            csv: args.io.csv_options(),
            time_column: args.time,
            value_column: args.value,
            span,
            input_format: args.input_date.clone(),
            output_format,
        })
    }
}

/// Counters reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CandleSummary {
    pub(crate) rows: usize,
    pub(crate) absent_values: usize,
    pub(crate) candles: usize,
    pub(crate) incomplete_candles: usize,
}

/// Aggregate the input into candles.
pub(crate) fn candle(args: &CandleArgs) -> Result<()> {
    // Validate everything before touching the output
    let config = CandleConfig::try_from(args)?;
    info!(
        span = %config.span,
        input_date = %config.input_format,
        output_date = %config.output_format,
        "aggregating candles"
    );

    let input = open_input(args.io.input.as_deref())?;
    let output = open_output(args.io.output.as_deref())?;
    let summary = aggregate(&config, input, output)?;

    info!(
        rows = summary.rows,
        absent_values = summary.absent_values,
        candles = summary.candles,
        incomplete_candles = summary.incomplete_candles,
        "aggregation complete"
    );
    Ok(())
}

/// Stream `input` through the aggregator into `output`.
///
/// Candles written before an error stay written.
pub(crate) fn aggregate<R: Read, W: Write>(
    config: &CandleConfig,
    input: R,
    output: W,
) -> Result<CandleSummary> {
    let mut writer = CandleWriter::new(output, config.csv, config.output_format.clone())?;
    let mut aggregator = CandleAggregator::new(config.span);
    let mut summary = CandleSummary::default();

    for row in RowReader::new(input, config.csv) {
        let row = row?;
        if row.is_header() {
            continue;
        }

        let sample = config.sample(&row)?;
        summary.rows += 1;
        if sample.is_absent() {
            summary.absent_values += 1;
            debug!(line = row.line(), "value is not numeric, leaving it empty");
        }

        let completed = aggregator
            .process(sample)
            .with_context(|| format!("line {}", row.line()))?;
        if let Some(candle) = completed {
            emit(&mut writer, &mut summary, &candle)?;
        }
    }

    if let Some(candle) = aggregator.finish() {
        emit(&mut writer, &mut summary, &candle)?;
    }
    summary.candles = writer.candles_written();
    writer.flush()?;

    Ok(summary)
}

/// Writes one candle, counting those with empty fields.
fn emit<W: Write>(
    writer: &mut CandleWriter<W>,
    summary: &mut CandleSummary,
    candle: &Candle,
) -> Result<()> {
    if !candle.is_complete() {
        summary.incomplete_candles += 1;
        debug!(key = %candle.key, samples = candle.sample_count, "candle has empty fields");
    }
    writer.write_candle(candle)?;
    Ok(())
}
