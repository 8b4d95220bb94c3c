//! Streaming sample-to-candle aggregation.

use candlecsv_types::{Sample, Span, Value};
use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::trace;

use crate::{Candle, bucket_key};

/// Errors that can occur during aggregation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    /// A sample's bucket starts before the bucket currently being built.
    #[error("date must be in ascending order: bucket {key} is before bucket {current}")]
    OutOfOrder {
        /// Bucket key of the offending sample.
        key: NaiveDateTime,
        /// Bucket key of the open candle.
        current: NaiveDateTime,
    },
}

/// Streaming candle aggregator.
///
/// Aggregates samples into OHLC candles based on the configured span. At
/// most one candle is open at a time; it is emitted as soon as a sample for
/// a later bucket arrives. Samples must arrive in non-decreasing bucket
/// order.
#[derive(Debug)]
pub struct CandleAggregator {
    span: Span,
    current: Option<CandleBuilder>,
}

impl CandleAggregator {
    /// Creates a new aggregator for the given span.
    #[must_use]
    pub const fn new(span: Span) -> Self {
        Self {
            span,
            current: None,
        }
    }

    /// Processes a sample, potentially emitting a completed candle.
    ///
    /// Returns `Ok(Some(candle))` when a candle is completed by this sample,
    /// `Ok(None)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AggregateError::OutOfOrder`] if the sample belongs to an
    /// earlier bucket than the open candle. The open candle is discarded,
    /// so a later [`finish`](Self::finish) emits nothing.
    pub fn process(&mut self, sample: Sample) -> Result<Option<Candle>, AggregateError> {
        let key = bucket_key(self.span, sample.timestamp);

        match self.current.take() {
            Some(mut builder) if builder.key == key => {
                builder.update(sample.value);
                self.current = Some(builder);
                Ok(None)
            }
            Some(builder) if builder.key < key => {
                let completed = builder.finish();
                trace!(key = %completed.key, samples = completed.sample_count, "candle complete");
                self.current = Some(CandleBuilder::new(key, sample.value));
                Ok(Some(completed))
            }
            Some(builder) => Err(AggregateError::OutOfOrder {
                key,
                current: builder.key,
            }),
            None => {
                self.current = Some(CandleBuilder::new(key, sample.value));
                Ok(None)
            }
        }
    }

    /// Finishes aggregation, returning any remaining partial candle.
    #[must_use]
    pub fn finish(self) -> Option<Candle> {
        self.current.map(CandleBuilder::finish)
    }
}

/// Builder for the open candle.
#[derive(Debug)]
struct CandleBuilder {
    key: NaiveDateTime,
    open: Option<Value>,
    high: Option<Value>,
    low: Option<Value>,
    close: Option<Value>,
    sample_count: u64,
}

impl CandleBuilder {
    /// Creates a new builder from the first value of a bucket.
    const fn new(key: NaiveDateTime, value: Option<Value>) -> Self {
        Self {
            key,
            open: value,
            high: value,
            low: value,
            close: value,
            sample_count: 1,
        }
    }

    /// Updates the builder with the next value of the same bucket.
    ///
    /// Non-numeric values still become the pending close but leave the
    /// extremes untouched.
    fn update(&mut self, value: Option<Value>) {
        if let Some(v) = value {
            self.high = Some(self.high.map_or(v, |high| high.max(v)));
            self.low = Some(self.low.map_or(v, |low| low.min(v)));
        }
        self.close = value;
        self.sample_count += 1;
    }

    /// Finishes building and returns the candle.
    const fn finish(self) -> Candle {
        Candle::new(
            self.key,
            self.open,
            self.high,
            self.low,
            self.close,
            self.sample_count,
        )
    }
}
