use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use bankstmt_extract::{ParseOptions, ParseOutcome, parse_document};
use bankstmt_ingest::{CsvTableSource, JsonDumpSource};
use chrono::{Datelike, Local};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bankstmt", version, about = "Extract transactions from bank statement table dumps")]
struct Cli {
    /// Statement grids: a .json document dump or a single-table .csv grid
    input: PathBuf,

    /// Verify extracted totals against recorded balances
    #[arg(long)]
    verify: bool,

    /// Enable debug output
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if !cli.input.exists() {
        bail!("input not found: {}", cli.input.display());
    }

    let options = ParseOptions::new(Local::now().year()).with_verify(cli.verify);
    let extension = cli
        .input
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let outcome: ParseOutcome = match extension.as_deref() {
        Some("json") => parse_document(&JsonDumpSource, &cli.input, &options)?,
        Some("csv") => parse_document(&CsvTableSource, &cli.input, &options)?,
        _ => bail!(
            "unsupported input format: {} (expected .json or .csv)",
            cli.input.display()
        ),
    };

    if outcome.no_transactions_found() {
        eprintln!("No transactions found");
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&outcome).context("serializing result")?
    );
    Ok(())
}
