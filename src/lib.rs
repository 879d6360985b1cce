//! csv-bulkgen Library
//!
//! Generates synthetic CSV files of random data, appending whole rows until
//! the file reaches a target size, and verifies files produced that way.
//!
//! # Crates
//!
//! - `bulkgen_core` - column layouts, value types, CSV dialect
//! - `bulkgen_generator` - random row generation
//! - `bulkgen_populate_csv` - size-bounded CSV writer
//! - `bulkgen_verify` - re-reads and checks a generated file
//!
//! # CLI Usage
//!
//! ```bash
//! # 2 GiB file with the five column layout
//! csv-bulkgen generate --output output.csv
//!
//! # Small reproducible file with the fifty column layout
//! csv-bulkgen generate --variant extended --target-size 10m --seed 42
//!
//! # Check a generated file
//! csv-bulkgen verify --input output.csv --variant extended
//! ```

pub mod commands;

// Re-export crates for convenience
pub use bulkgen_core;
pub use bulkgen_generator;
pub use bulkgen_populate_csv;
pub use bulkgen_verify;
