//! CSV row input.

use candlecsv_types::Column;
use csv::StringRecord;
use std::io::Read;

use crate::{CsvOptions, FormatError};

/// One input row.
#[derive(Debug, Clone)]
pub struct Row {
    number: usize,
    line: u64,
    header: bool,
    record: StringRecord,
}

impl Row {
    /// Returns the 1-based record number, header rows included.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Returns the line the record starts on.
    #[must_use]
    pub const fn line(&self) -> u64 {
        self.line
    }

    /// Returns true if this is one of the leading header rows.
    #[must_use]
    pub const fn is_header(&self) -> bool {
        self.header
    }

    /// Returns the row's cells.
    #[must_use]
    pub const fn record(&self) -> &StringRecord {
        &self.record
    }

    /// Consumes the row, returning its cells.
    #[must_use]
    pub fn into_record(self) -> StringRecord {
        self.record
    }

    /// Returns the cell in `column`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::MissingColumn`] if the row is too short.
    pub fn cell(&self, column: Column) -> Result<&str, FormatError> {
        self.record
            .get(column.index())
            .ok_or_else(|| FormatError::MissingColumn {
                line: self.line,
                column,
                len: self.record.len(),
            })
    }
}

/// Streaming CSV row reader.
///
/// Yields every record in input order, with the first
/// [`header_rows`](CsvOptions::header_rows) records marked as headers.
/// Rows may have differing lengths.
#[derive(Debug)]
pub struct RowReader<R> {
    reader: csv::Reader<R>,
    header_rows: usize,
    count: usize,
}

impl<R: Read> RowReader<R> {
    /// Creates a reader over `input`.
    pub fn new(input: R, options: CsvOptions) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(options.delimiter())
            .from_reader(input);
        Self {
            reader,
            header_rows: options.header_rows(),
            count: 0,
        }
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<Row, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = StringRecord::new();
        match self.reader.read_record(&mut record) {
            Ok(true) => {
                self.count += 1;
                let line = record.position().map_or(0, csv::Position::line);
                Some(Ok(Row {
                    number: self.count,
                    line,
                    header: self.count <= self.header_rows,
                    record,
                }))
            }
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}
