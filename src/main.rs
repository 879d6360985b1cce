//! Command-line interface for csv-bulkgen
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # Five columns, grow to 2 GiB
//! csv-bulkgen generate --output output.csv
//!
//! # Fifty columns, grow to 20 GiB
//! csv-bulkgen generate --variant extended
//!
//! # Reproducible 1 MiB file with CRLF line endings
//! csv-bulkgen generate --target-size 1m --seed 42 --line-ending crlf
//! ```
//!
//! ## Verify
//! ```bash
//! csv-bulkgen verify --input output.csv --variant extended
//! ```
//!
//! Log verbosity is controlled with `RUST_LOG` (default `info`).

use clap::{Parser, Subcommand};
use csv_bulkgen::bulkgen_populate_csv::CSVPopulateArgs;
use csv_bulkgen::bulkgen_verify::VerifyArgs;
use csv_bulkgen::commands::{run_generate, run_verify};

#[derive(Parser)]
#[command(name = "csv-bulkgen")]
#[command(about = "Generate synthetic CSV files of random data up to a target size")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write random rows to a CSV file until it reaches the target size
    Generate {
        #[command(flatten)]
        args: CSVPopulateArgs,
    },

    /// Check a generated CSV file against its column layout
    Verify {
        #[command(flatten)]
        args: VerifyArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so stdout stays clean for reports
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            run_generate(args).await?;
        }
        Commands::Verify { args } => {
            let report = run_verify(args).await?;
            if !report.is_success() {
                anyhow::bail!(report.summary());
            }
        }
    }

    Ok(())
}
