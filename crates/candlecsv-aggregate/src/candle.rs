//! OHLC candle data structure.

use candlecsv_types::Value;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// OHLC candle for one bucket.
///
/// `open` and `close` are the first and last values of the bucket as read,
/// so they are `None` when that row's value cell was not numeric. `high` and
/// `low` only consider numeric values and are `None` when the bucket had
/// none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Bucket key (start of the period).
    pub key: NaiveDateTime,
    /// First value in the bucket.
    pub open: Option<Value>,
    /// Highest value in the bucket.
    pub high: Option<Value>,
    /// Lowest value in the bucket.
    pub low: Option<Value>,
    /// Last value in the bucket.
    pub close: Option<Value>,
    /// Number of rows in the bucket.
    pub sample_count: u64,
}

impl Candle {
    /// Creates a new candle.
    #[must_use]
    pub const fn new(
        key: NaiveDateTime,
        open: Option<Value>,
        high: Option<Value>,
        low: Option<Value>,
        close: Option<Value>,
        sample_count: u64,
    ) -> Self {
        Self {
            key,
            open,
            high,
            low,
            close,
            sample_count,
        }
    }

    /// Returns true if all four prices are present.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.open.is_some() && self.high.is_some() && self.low.is_some() && self.close.is_some()
    }
}
