use std::io;

use clap::{Parser, Subcommand};
use log::debug;
use runlength::run_length::{self, Unit};
use runlength::{Scanner, Writer};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "runlength")]
#[command(about = "Longest run of identical characters in a line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Compare raw UTF-8 bytes instead of characters
    #[arg(long)]
    bytes: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the solver against the fixtures under data/
    Check,
}

fn main() -> io::Result<()> {
    let args = Cli::parse();

    let level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    // stdout carries the answer only.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let unit = if args.bytes { Unit::Byte } else { Unit::Char };
    match args.command {
        Some(Commands::Check) => {
            if !runlength::testing::run_all_tests("run_length", run_length::solver(unit)) {
                std::process::exit(1);
            }
        }
        None => {
            let mut scanner = Scanner::new(io::stdin().lock());
            let mut writer = Writer::new();
            run_length::solve_with(unit, &mut scanner, &mut writer)?;
            writer.flush_to(io::stdout().lock())?;
            debug!("result written to stdout");
        }
    }
    Ok(())
}
