//! Reverse command implementation.

use crate::stream::{IoArgs, open_input, open_output};
use anyhow::Result;
use candlecsv_lib::prelude::*;
use clap::Args;
use std::io::{Read, Write};
use tracing::info;

/// Arguments of the `reverse` command.
#[derive(Args, Debug)]
pub(crate) struct ReverseArgs {
    #[command(flatten)]
    io: IoArgs,
}

/// Reverse the data rows of the input.
pub(crate) fn reverse(args: &ReverseArgs) -> Result<()> {
    let input = open_input(args.io.input.as_deref())?;
    let output = open_output(args.io.output.as_deref())?;
    let rows = reverse_rows(args.io.csv_options(), input, output)?;

    info!(rows, "reverse complete");
    Ok(())
}

/// Copy header rows through, then the data rows last to first.
///
/// The data rows are held in memory until the input ends.
pub(crate) fn reverse_rows<R: Read, W: Write>(
    options: CsvOptions,
    input: R,
    output: W,
) -> Result<usize> {
    let mut writer = RowWriter::new(output, options);
    let mut data = Vec::new();

    for row in RowReader::new(input, options) {
        let row = row?;
        if row.is_header() {
            writer.write_row(row.record())?;
        } else {
            data.push(row.into_record());
        }
    }

    for record in data.iter().rev() {
        writer.write_row(record)?;
    }
    writer.flush()?;
    Ok(writer.rows_written())
}
