//! CSV row input and output for the candlecsv CSV time-series tools.
//!
//! This crate provides the row stream used by every candlecsv tool:
//!
//! - [`CsvOptions`] - Delimiter and header row settings
//! - [`RowReader`] - Numbered input rows with header rows marked
//! - [`RowWriter`] - Plain CSV output rows
//! - [`CandleWriter`] - OHLC candle output

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod candle;
mod options;
mod reader;
mod writer;

pub use candle::{CANDLE_HEADER, CandleWriter};
pub use options::{CsvOptions, FormatError};
pub use reader::{Row, RowReader};
pub use writer::RowWriter;
