//! # tally-cli
//!
//! Command-line front-end for the tally worklog ingestion pipeline.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tally_ingest::{parse_workbook, Column, InvoiceRecord};
use tracing_subscriber::EnvFilter;

/// tally - validate and review worklog spreadsheet exports
#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about = "Validate and review worklog spreadsheet exports", long_about = None)]
struct Cli {
    /// Worklog export to ingest (.xls or .xlsx)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output format (table, json)
    #[arg(short = 'f', long = "format", default_value = "table")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output format for results.
#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// JSON output
    Json,
    /// Aligned table output (default)
    #[default]
    Table,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    // The whole file is buffered before decoding; exports top out at a few
    // thousand rows, so streaming is not worth the complexity.
    let bytes = std::fs::read(&cli.file)
        .with_context(|| format!("Failed to read file: {}", cli.file.display()))?;

    match parse_workbook(&bytes) {
        Ok(records) => {
            print_records(&records, cli.format)?;
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            std::process::exit(1);
        }
    }
}

/// Print the record set in the requested format.
fn print_records(records: &[InvoiceRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(records)?);
        }
        OutputFormat::Table => {
            print_table(records);
            println!();
            println!("{} record(s)", records.len().to_string().bold());
        }
    }
    Ok(())
}

/// Print records as an aligned text table with canonical column titles.
fn print_table(records: &[InvoiceRecord]) {
    let widths: Vec<usize> = Column::ALL
        .iter()
        .map(|&column| {
            records
                .iter()
                .map(|r| r.field(column).chars().count())
                .chain(std::iter::once(column.title().chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = Column::ALL
        .iter()
        .zip(&widths)
        .map(|(column, &width)| format!("{:<width$}", column.title()))
        .collect();
    println!("{}", header.join("  ").bold());

    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    println!("{}", rule.join("  "));

    for record in records {
        let cells: Vec<String> = Column::ALL
            .iter()
            .zip(&widths)
            .map(|(&column, &width)| format!("{:<width$}", record.field(column)))
            .collect();
        println!("{}", cells.join("  "));
    }
}
