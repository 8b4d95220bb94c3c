//! Column pipeline for the candlecsv CSV time-series tools.
//!
//! - [`ColumnOp`] - One output column definition
//! - [`ColumnPipeline`] - Stateful row-by-row evaluation of a list of operations

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod op;
mod pipeline;

pub use op::ColumnOp;
pub use pipeline::{ColumnPipeline, PipelineError};
