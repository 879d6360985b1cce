//! Size-bounded CSV file populator.
//!
//! This crate writes a header row followed by random rows from
//! bulkgen-generator, appending one whole row at a time until the file
//! reaches a target size.
//!
//! # Example
//!
//! ```ignore
//! use bulkgen_core::TableLayout;
//! use bulkgen_populate_csv::CSVPopulator;
//!
//! let mut populator = CSVPopulator::new(TableLayout::simple(), Some(42));
//!
//! // Grow the file to at least 1 MiB
//! let metrics = populator.populate("/path/to/output.csv", 1024 * 1024)?;
//! ```

pub mod args;
mod counting;
mod error;
mod populator;

pub use args::{parse_byte_size, CSVPopulateArgs};
pub use error::CSVPopulatorError;
pub use populator::{
    csv_writer_builder, CSVPopulator, PopulateMetrics, SizeCheck, DEFAULT_BUFFER_SIZE,
};
