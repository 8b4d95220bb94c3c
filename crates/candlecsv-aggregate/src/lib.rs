//! OHLC candle aggregation for the candlecsv CSV time-series tools.
//!
//! This crate provides streaming sample-to-candle aggregation:
//!
//! - [`bucket_key`] - Maps a timestamp to the start of its bucket
//! - [`Candle`] - OHLC candle data structure
//! - [`CandleAggregator`] - Streaming candle aggregator

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod candle;
mod key;

pub use aggregator::{AggregateError, CandleAggregator};
pub use candle::Candle;
pub use key::bucket_key;
