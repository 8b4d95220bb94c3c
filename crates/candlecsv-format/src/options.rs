//! CSV dialect settings and errors.

use candlecsv_types::Column;
use thiserror::Error;

/// Errors that can occur while reading or writing rows.
#[derive(Error, Debug)]
pub enum FormatError {
    /// CSV syntax or encoding error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Date pattern cannot be written for a naive timestamp.
    #[error("date format '{0}' cannot be written")]
    DateFormat(String),

    /// Row is too short to contain a required column.
    #[error("line {line}: column {column} not found (row has {len} columns)")]
    MissingColumn {
        /// Line number of the row in the input.
        line: u64,
        /// The requested column.
        column: Column,
        /// Number of cells in the row.
        len: usize,
    },
}

/// CSV dialect and header settings shared by the reader and writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter (default: comma).
    delimiter: u8,
    /// Number of leading header rows.
    header_rows: usize,
}

impl CsvOptions {
    /// Creates options with a comma delimiter and no header rows.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: b',',
            header_rows: 0,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the number of leading header rows.
    #[must_use]
    pub const fn with_header_rows(mut self, header_rows: usize) -> Self {
        self.header_rows = header_rows;
        self
    }

    /// Creates tab-separated values (TSV) options.
    #[must_use]
    pub const fn tsv() -> Self {
        Self::new().with_delimiter(b'\t')
    }

    /// Returns the field delimiter.
    #[must_use]
    pub const fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Returns the number of leading header rows.
    #[must_use]
    pub const fn header_rows(&self) -> usize {
        self.header_rows
    }
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self::new()
    }
}
