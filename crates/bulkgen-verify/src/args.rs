//! CLI argument definitions for the verifier.

use bulkgen_core::{LineEnding, Variant};
use clap::Args;
use std::path::PathBuf;

/// Arguments for verifying a generated CSV file.
#[derive(Args, Clone, Debug)]
pub struct VerifyArgs {
    /// CSV file to check
    #[arg(long, short = 'i', default_value = "output.csv")]
    pub input: PathBuf,

    /// Column layout the file was generated with
    #[arg(long, value_enum, default_value_t = Variant::Simple)]
    pub variant: Variant,

    /// Record terminator every line must end with
    #[arg(long, value_enum, default_value_t = LineEnding::Lf)]
    pub line_ending: LineEnding,

    /// The file has no header row
    #[arg(long)]
    pub no_header: bool,

    /// Maximum number of issues to keep in the report (all are counted)
    #[arg(long, default_value = "100")]
    pub max_issues: usize,

    /// Print the report as one JSON line on stdout
    #[arg(long)]
    pub report_json: bool,
}
