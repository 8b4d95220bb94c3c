//! Library for aggregating CSV time series into OHLC candles.
//!
//! This is a facade crate that re-exports functionality from the candlecsv
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use candlecsv_lib::prelude::*;
//!
//! let input = "2021/01/01 09:00:00,10\n2021/01/01 15:00:00,12\n2021/01/02 09:00:00,5\n";
//! let format = DateFormat::default();
//! let mut aggregator = CandleAggregator::new(Span::Day);
//! let mut writer =
//!     CandleWriter::new(Vec::new(), CsvOptions::new(), DateFormat::new("%Y/%m/%d")?)?;
//!
//! for row in RowReader::new(input.as_bytes(), CsvOptions::new()) {
//!     let row = row?;
//!     let timestamp = format.parse(row.cell(Column::new(1).unwrap())?)?;
//!     let sample = Sample::from_cell(timestamp, row.cell(Column::new(2).unwrap())?);
//!     if let Some(candle) = aggregator.process(sample)? {
//!         writer.write_candle(&candle)?;
//!     }
//! }
//! if let Some(candle) = aggregator.finish() {
//!     writer.write_candle(&candle)?;
//! }
//!
//! let output = String::from_utf8(writer.into_inner()?)?;
//! assert_eq!(
//!     output,
//!     "date,open,high,low,close\n2021/01/01,10,12,10,12\n2021/01/02,5,5,5,5\n"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use candlecsv_types::*;

// Re-export aggregation
#[cfg(feature = "aggregate")]
pub use candlecsv_aggregate::{AggregateError, Candle, CandleAggregator, bucket_key};

// Re-export row I/O
#[cfg(feature = "format")]
pub use candlecsv_format::{
    CANDLE_HEADER, CandleWriter, CsvOptions, FormatError, Row, RowReader, RowWriter,
};

// Re-export the column pipeline
#[cfg(feature = "columns")]
pub use candlecsv_columns::{ColumnOp, ColumnPipeline, PipelineError};

/// Prelude module for convenient imports.
///
/// ```
/// use candlecsv_lib::prelude::*;
/// ```
pub mod prelude {
    pub use candlecsv_types::{
        Column, ConfigError, DateFormat, Sample, Span, TimestampError, Value, parse_week_start,
    };

    #[cfg(feature = "aggregate")]
    pub use candlecsv_aggregate::{AggregateError, Candle, CandleAggregator};

    #[cfg(feature = "format")]
    pub use candlecsv_format::{CandleWriter, CsvOptions, FormatError, Row, RowReader, RowWriter};

    #[cfg(feature = "columns")]
    pub use candlecsv_columns::{ColumnOp, ColumnPipeline, PipelineError};
}
