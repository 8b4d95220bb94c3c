//! Core types for the candlecsv CSV time-series tools.
//!
//! This crate provides the fundamental data structures used throughout candlecsv:
//!
//! - [`Value`] - A numeric cell value (integer or floating-point)
//! - [`Span`] - Candle aggregation interval
//! - [`Column`] - 1-based CSV column index
//! - [`DateFormat`] - Validated strftime-style date/time pattern
//! - [`Sample`] - A timestamped value extracted from a row

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod column;
mod date_format;
mod error;
mod sample;
mod span;
mod value;

pub use column::Column;
pub use date_format::DateFormat;
pub use error::{ConfigError, TimestampError};
pub use sample::Sample;
pub use span::{Span, parse_week_start};
pub use value::{Value, format_float};
