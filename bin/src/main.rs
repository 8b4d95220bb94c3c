//! candlecsv CLI - CSV time-series preparation tools.

use clap::{CommandFactory, Parser, Subcommand};
use std::process::ExitCode;

mod commands;
mod logging;
mod stream;

use commands::candle::CandleArgs;
use commands::columns::ColumnsArgs;
use commands::reverse::ReverseArgs;

#[derive(Parser)]
#[command(name = "candlecsv")]
#[command(about = "CSV time-series tools: OHLC candles, column pipelines, row reversal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (log errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate timestamped values into open/high/low/close candles
    Candle(CandleArgs),

    /// Build output columns: line numbers, copies, sums, moving averages
    Columns(ColumnsArgs),

    /// Reverse the order of data rows, keeping header rows on top
    Reverse(ReverseArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        return match Cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    };

    let result = match command {
        Commands::Candle(args) => commands::candle::candle(&args),
        Commands::Columns(args) => commands::columns::columns(&args),
        Commands::Reverse(args) => commands::reverse::reverse(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
