//! Timestamped values.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::Value;

/// A single timestamped value read from one input row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Timestamp of the row.
    pub timestamp: NaiveDateTime,
    /// Parsed value, `None` if the cell was not numeric.
    pub value: Option<Value>,
}

impl Sample {
    /// Creates a new sample.
    #[must_use]
    pub const fn new(timestamp: NaiveDateTime, value: Option<Value>) -> Self {
        Self { timestamp, value }
    }

    /// Creates a sample by parsing the value cell.
    #[must_use]
    pub fn from_cell(timestamp: NaiveDateTime, cell: &str) -> Self {
        Self::new(timestamp, Value::parse(cell))
    }

    /// Returns true if the value cell was not numeric.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.value.is_none()
    }
}
