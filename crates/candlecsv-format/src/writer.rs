//! CSV row output.

use std::io::Write;

use crate::{CsvOptions, FormatError};

/// CSV row writer.
///
/// Records end with `\n`; cells are quoted only when they contain the
/// delimiter, a quote or a line break.
#[derive(Debug)]
pub struct RowWriter<W: Write> {
    writer: csv::Writer<W>,
    rows_written: usize,
}

impl<W: Write> RowWriter<W> {
    /// Creates a writer over `output`.
    pub fn new(output: W, options: CsvOptions) -> Self {
        let writer = csv::WriterBuilder::new()
            .flexible(true)
            .delimiter(options.delimiter())
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(output);
        Self {
            writer,
            rows_written: 0,
        }
    }

    /// Writes one row.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_row<I, T>(&mut self, row: I) -> Result<(), FormatError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer.write_record(row)?;
        self.rows_written += 1;
        Ok(())
    }

    /// Returns the number of rows written so far.
    #[must_use]
    pub const fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flushes buffered rows to the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    pub fn flush(&mut self) -> Result<(), FormatError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    pub fn into_inner(self) -> Result<W, FormatError> {
        self.writer
            .into_inner()
            .map_err(|e| FormatError::Io(e.into_error()))
    }
}
