//! Columns command implementation.

use crate::stream::{IoArgs, open_input, open_output};
use anyhow::{Context, Result};
use candlecsv_lib::prelude::*;
use clap::Args;
use std::io::{Read, Write};
use tracing::info;

/// Arguments of the `columns` command.
#[derive(Args, Debug)]
pub(crate) struct ColumnsArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Output column, repeatable: lineno, fix:<text>, copy:<col>, sum:<col>,
    /// ma:<col>:<width> or smooth:<col>:<alpha>
    #[arg(short = 'c', long = "column", value_name = "OP", required = true)]
    column: Vec<ColumnOp>,
}

impl ColumnsArgs {
    /// Returns the output column operations in command-line order.
    pub(crate) fn ops(&self) -> &[ColumnOp] {
        &self.column
    }
}

/// Build the requested output columns.
pub(crate) fn columns(args: &ColumnsArgs) -> Result<()> {
    info!(columns = args.column.len(), "building columns");

    let input = open_input(args.io.input.as_deref())?;
    let output = open_output(args.io.output.as_deref())?;
    let rows = transform(args.io.csv_options(), args.ops().to_vec(), input, output)?;

    info!(rows, "columns complete");
    Ok(())
}

/// Evaluate `ops` over every row of `input`, returning the number of rows
/// written.
pub(crate) fn transform<R: Read, W: Write>(
    options: CsvOptions,
    ops: Vec<ColumnOp>,
    input: R,
    output: W,
) -> Result<usize> {
    let mut pipeline = ColumnPipeline::new(ops);
    let mut writer = RowWriter::new(output, options);

    for row in RowReader::new(input, options) {
        let row = row?;
        let cells: Vec<&str> = row.record().iter().collect();
        let out = if row.is_header() {
            pipeline.header_row(row.number(), &cells)
        } else {
            pipeline.data_row(row.number() - options.header_rows(), &cells)
        }
        .with_context(|| format!("line {}", row.line()))?;
        writer.write_row(&out)?;
    }

    writer.flush()?;
    Ok(writer.rows_written())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(header_rows: usize, ops: &[&str], input: &str) -> Result<String> {
        let ops = ops.iter().map(|s| s.parse().unwrap()).collect();
        let mut output = Vec::new();
        transform(
            CsvOptions::new().with_header_rows(header_rows),
            ops,
            input.as_bytes(),
            &mut output,
        )?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_moving_average_with_header() {
        let input = "date,price\n\
                     2021/01/01,1\n\
                     2021/01/02,2\n\
                     2021/01/03,3\n\
                     2021/01/04,7\n";
        assert_eq!(
            run(1, &["lineno", "copy:1", "copy:2", "ma:2:3"], input).unwrap(),
            "lineno,date,price,3-MA of price\n\
             1,2021/01/01,1,\n\
             2,2021/01/02,2,\n\
             3,2021/01/03,3,2.0\n\
             4,2021/01/04,7,4.0\n"
        );
    }

    #[test]
    fn test_sum_and_fixed_text_without_header() {
        assert_eq!(
            run(0, &["fix:acct", "sum:1"], "1\n2.5\nx\n4\n").unwrap(),
            "acct,1\nacct,3.5\nacct,\nacct,7.5\n"
        );
    }

    #[test]
    fn test_second_header_row_copies_cells() {
        let input = "date,price\nday,yen\n2021/01/01,3\n";
        assert_eq!(
            run(2, &["lineno", "sum:2"], input).unwrap(),
            "lineno,sum of price\nlineno,yen\n1,3\n"
        );
    }

    #[test]
    fn test_missing_column_reports_line() {
        let err = run(0, &["copy:3"], "a,b,c\nd,e\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
        assert!(err.downcast_ref::<PipelineError>().is_some());
    }

    #[test]
    fn test_tab_delimited() {
        let mut output = Vec::new();
        let ops = vec!["copy:2".parse().unwrap(), "lineno".parse().unwrap()];
        let rows = transform(CsvOptions::tsv(), ops, "a\tb\nc\td\n".as_bytes(), &mut output)
            .unwrap();
        assert_eq!(rows, 2);
        assert_eq!(String::from_utf8(output).unwrap(), "b\t1\nd\t2\n");
    }
}
