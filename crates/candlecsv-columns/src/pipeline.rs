//! Stateful row-by-row column evaluation.

use candlecsv_types::{Column, Value, format_float};
use std::collections::VecDeque;
use thiserror::Error;

use crate::ColumnOp;

/// Errors that can occur while evaluating a row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Row is too short to contain a source column.
    #[error("column {column} not found (row has {len} columns)")]
    MissingColumn {
        /// The requested column.
        column: Column,
        /// Number of cells in the row.
        len: usize,
    },
}

/// One operation together with its running state.
#[derive(Debug, Clone)]
enum Stage {
    LineNo,
    Fix(String),
    Copy(Column),
    Sum {
        column: Column,
        total: Value,
    },
    MovingAverage {
        column: Column,
        width: usize,
        window: VecDeque<Value>,
    },
    Smooth {
        column: Column,
        alpha: f64,
        last: Option<Value>,
    },
}

impl Stage {
    fn new(op: &ColumnOp) -> Self {
        match op {
            ColumnOp::LineNo => Self::LineNo,
            ColumnOp::Fix(text) => Self::Fix(text.clone()),
            ColumnOp::Copy(column) => Self::Copy(*column),
            ColumnOp::Sum(column) => Self::Sum {
                column: *column,
                total: Value::Int(0),
            },
            ColumnOp::MovingAverage { column, width } => Self::MovingAverage {
                column: *column,
                width: width.get(),
                window: VecDeque::with_capacity(width.get()),
            },
            ColumnOp::Smooth { column, alpha } => Self::Smooth {
                column: *column,
                alpha: *alpha,
                last: None,
            },
        }
    }

    /// Produces this stage's cell for a data row.
    fn evaluate(&mut self, line_no: usize, cells: &[&str]) -> Result<String, PipelineError> {
        Ok(match self {
            Self::LineNo => line_no.to_string(),
            Self::Fix(text) => text.clone(),
            Self::Copy(column) => cell(cells, *column)?.to_string(),
            Self::Sum { column, total } => match Value::parse(cell(cells, *column)?) {
                Some(v) => {
                    *total = *total + v;
                    total.to_string()
                }
                None => String::new(),
            },
            Self::MovingAverage {
                column,
                width,
                window,
            } => match Value::parse(cell(cells, *column)?) {
                Some(v) => moving_average(window, v, *width),
                None => String::new(),
            },
            Self::Smooth {
                column,
                alpha,
                last,
            } => match Value::parse(cell(cells, *column)?) {
                Some(v) => {
                    let next = match *last {
                        None => v,
                        Some(prev) => {
                            Value::Float(prev.as_f64() * (1.0 - *alpha) + v.as_f64() * *alpha)
                        }
                    };
                    *last = Some(next);
                    next.to_string()
                }
                None => String::new(),
            },
        })
    }
}

/// Evaluates a list of [`ColumnOp`]s over a row stream.
///
/// Each input row yields one output row with one cell per operation, in
/// operation order. Running sums, moving-average windows and smoothed values
/// carry over from row to row; non-numeric source cells produce an empty
/// output cell and are skipped by the running state.
#[derive(Debug, Clone)]
pub struct ColumnPipeline {
    ops: Vec<ColumnOp>,
    stages: Vec<Stage>,
}

impl ColumnPipeline {
    /// Creates a pipeline for the given operations.
    #[must_use]
    pub fn new(ops: Vec<ColumnOp>) -> Self {
        let stages = ops.iter().map(Stage::new).collect();
        Self { ops, stages }
    }

    /// Evaluates a header row.
    ///
    /// `index` is the 1-based position among the header rows. The first
    /// header row gets descriptive labels (`sum of price`); later header rows
    /// copy the source cell. Line numbers and fixed text are the same on
    /// every header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the row lacks a source column.
    pub fn header_row(
        &self,
        index: usize,
        cells: &[&str],
    ) -> Result<Vec<String>, PipelineError> {
        self.ops
            .iter()
            .map(|op| {
                let header = match op.source() {
                    Some(column) => cell(cells, column)?,
                    None => "",
                };
                Ok(match op {
                    ColumnOp::LineNo | ColumnOp::Fix(_) => op.label(header),
                    _ if index == 1 => op.label(header),
                    _ => header.to_string(),
                })
            })
            .collect()
    }

    /// Evaluates a data row, updating running state.
    ///
    /// `line_no` is the 1-based data-row number (header rows excluded).
    ///
    /// # Errors
    ///
    /// Returns an error if the row lacks a source column. State is not
    /// updated in that case.
    pub fn data_row(
        &mut self,
        line_no: usize,
        cells: &[&str],
    ) -> Result<Vec<String>, PipelineError> {
        for op in &self.ops {
            if let Some(column) = op.source() {
                cell(cells, column)?;
            }
        }
        self.stages
            .iter_mut()
            .map(|stage| stage.evaluate(line_no, cells))
            .collect()
    }
}

/// Pushes `value` into the window and returns the mean once it is full.
#[allow(clippy::cast_precision_loss)]
fn moving_average(window: &mut VecDeque<Value>, value: Value, width: usize) -> String {
    window.push_back(value);
    while window.len() > width {
        window.pop_front();
    }
    if window.len() < width {
        return String::new();
    }
    let sum = window.iter().fold(Value::Int(0), |acc, v| acc + *v);
    format_float(sum.as_f64() / width as f64)
}

fn cell<'a>(cells: &[&'a str], column: Column) -> Result<&'a str, PipelineError> {
    cells
        .get(column.index())
        .copied()
        .ok_or(PipelineError::MissingColumn {
            column,
            len: cells.len(),
        })
}
