//! CLI argument definitions for the CSV populator.

use crate::populator::SizeCheck;
use bulkgen_core::{LineEnding, Variant};
use clap::Args;
use std::path::PathBuf;

/// Arguments for generating a CSV file up to a target size.
#[derive(Args, Clone, Debug)]
pub struct CSVPopulateArgs {
    /// Output CSV file (created or overwritten)
    #[arg(long, short = 'o', default_value = "output.csv")]
    pub output: PathBuf,

    /// Stop once the file reaches this size, e.g. 1000, 512k, 2GiB
    /// (default: 2GiB for simple, 20GiB for extended)
    #[arg(long, value_parser = parse_byte_size)]
    pub target_size: Option<u64>,

    /// Column layout to generate
    #[arg(long, value_enum, default_value_t = Variant::Simple)]
    pub variant: Variant,

    /// Random seed for deterministic generation (omit for a fresh random file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Record terminator
    #[arg(long, value_enum, default_value_t = LineEnding::Lf)]
    pub line_ending: LineEnding,

    /// How the file size is measured after each row
    #[arg(long, value_enum, default_value_t = SizeCheck::Counted)]
    pub size_check: SizeCheck,

    /// Do not write a header row
    #[arg(long)]
    pub no_header: bool,

    /// Log the resolved configuration without creating the file
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run metrics as one JSON line on stdout
    #[arg(long)]
    pub report_json: bool,
}

impl CSVPopulateArgs {
    /// Configured target size, or the variant's default.
    pub fn resolved_target_size(&self) -> u64 {
        self.target_size
            .unwrap_or_else(|| self.variant.default_target_size())
    }
}

/// Parse a byte size such as `1000`, `512k`, `1.5 GiB` or `2_000_000`.
///
/// Units are binary multiples: `k`/`kb`/`kib` = 1024, `m` = 1024², `g` = 1024³,
/// `t` = 1024⁴.
pub fn parse_byte_size(s: &str) -> Result<u64, String> {
    let s = s.trim().to_lowercase();

    let split = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '_'))
        .unwrap_or(s.len());
    let (numeric_part, unit_part) = s.split_at(split);

    let numeric_value: f64 = numeric_part
        .replace('_', "")
        .parse()
        .map_err(|_| format!("Invalid number in size: {s}"))?;

    let multiplier: u64 = match unit_part.trim() {
        "" | "b" => 1,
        "k" | "kb" | "kib" => 1024,
        "m" | "mb" | "mib" => 1024 * 1024,
        "g" | "gb" | "gib" => 1024 * 1024 * 1024,
        "t" | "tb" | "tib" => 1024 * 1024 * 1024 * 1024,
        other => return Err(format!("Unknown size unit '{other}' in: {s}")),
    };

    let bytes = numeric_value * multiplier as f64;
    if !bytes.is_finite() || bytes > u64::MAX as f64 {
        return Err(format!("Size out of range: {s}"));
    }
    Ok(bytes.round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: CSVPopulateArgs,
    }

    #[test]
    fn test_parse_byte_size() {
        assert_eq!(parse_byte_size("1000"), Ok(1000));
        assert_eq!(parse_byte_size("1_000"), Ok(1000));
        assert_eq!(parse_byte_size("512k"), Ok(512 * 1024));
        assert_eq!(parse_byte_size("2GiB"), Ok(2 * 1024 * 1024 * 1024));
        assert_eq!(parse_byte_size("20 gb"), Ok(20 * 1024 * 1024 * 1024));
        assert_eq!(parse_byte_size("1.5m"), Ok(1024 * 1024 * 3 / 2));
        assert_eq!(parse_byte_size("7b"), Ok(7));
    }

    #[test]
    fn test_parse_byte_size_rejects_garbage() {
        assert!(parse_byte_size("").is_err());
        assert!(parse_byte_size("abc").is_err());
        assert!(parse_byte_size("10x").is_err());
        assert!(parse_byte_size("1.2.3k").is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::parse_from(["test"]);
        assert_eq!(cli.args.output, PathBuf::from("output.csv"));
        assert_eq!(cli.args.variant, Variant::Simple);
        assert_eq!(cli.args.seed, None);
        assert_eq!(cli.args.line_ending, LineEnding::Lf);
        assert_eq!(cli.args.size_check, SizeCheck::Counted);
        assert!(!cli.args.no_header);
        assert_eq!(cli.args.resolved_target_size(), 2 * 1024 * 1024 * 1024);
    }

    #[test]
    fn test_extended_default_target() {
        let cli = TestCli::parse_from(["test", "--variant", "extended"]);
        assert_eq!(cli.args.resolved_target_size(), 20 * 1024 * 1024 * 1024);

        let cli = TestCli::parse_from(["test", "--variant", "extended", "--target-size", "1k"]);
        assert_eq!(cli.args.resolved_target_size(), 1024);
    }
}
