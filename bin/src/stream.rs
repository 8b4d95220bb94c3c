//! Input/output plumbing shared by all commands.

use anyhow::{Context, Result};
use candlecsv_lib::prelude::*;
use clap::Args;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Input, output and CSV dialect options common to every command.
#[derive(Args, Debug, Clone)]
pub(crate) struct IoArgs {
    /// Input file (defaults to stdin)
    #[arg(short, long = "input-file", value_name = "FILE")]
    pub(crate) input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long = "output-file", value_name = "FILE")]
    pub(crate) output: Option<PathBuf>,

    /// Number of leading header rows
    #[arg(long, value_name = "NUM", default_value_t = 0)]
    pub(crate) header: usize,

    /// Field delimiter (a single ASCII character)
    #[arg(short, long, value_name = "CHAR", default_value = ",", value_parser = parse_delimiter)]
    pub(crate) delimiter: u8,
}

impl IoArgs {
    /// Returns the CSV dialect described by these options.
    pub(crate) const fn csv_options(&self) -> CsvOptions {
        CsvOptions::new()
            .with_delimiter(self.delimiter)
            .with_header_rows(self.header)
    }
}

/// Parses a delimiter argument; `\t` is accepted for tab.
fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "\t" => Ok(b'\t'),
        _ => match s.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(format!("delimiter must be a single ASCII character, got '{s}'")),
        },
    }
}

/// Opens the input file, or stdin when no path is given.
pub(crate) fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Creates the output file, or uses stdout when no path is given.
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
