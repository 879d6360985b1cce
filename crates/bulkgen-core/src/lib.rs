//! Core types for csv-bulkgen.
//!
//! This crate provides the foundational types shared by the generator,
//! the size-bounded CSV writer and the verifier:
//!
//! - [`ColumnType`] - The five value kinds a generated column can hold
//! - [`TableLayout`] - Ordered column definitions for the simple (5 column)
//!   and extended (50 column) variants
//! - [`GeneratedValue`] - Raw generated values and their CSV text form
//! - [`GeneratedRow`] - One generated row, in column order
//!
//! # Architecture
//!
//! ```text
//! bulkgen-core (this crate)
//!    │
//!    ├─── bulkgen-generator     (random values per column type)
//!    ├─── bulkgen-populate-csv  (size-bounded CSV writer)
//!    └─── bulkgen-verify        (re-reads and checks generated files)
//! ```
//!
//! # Example
//!
//! ```rust
//! use bulkgen_core::{ColumnType, TableLayout};
//!
//! let layout = TableLayout::extended();
//! assert_eq!(layout.len(), 50);
//! assert_eq!(layout.columns()[7].name, "int_8");
//! assert_eq!(layout.columns()[7].column_type, ColumnType::Integer);
//! ```

pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{ColumnDefinition, TableLayout, Variant};
pub use types::{CalendarRange, ColumnType, CsvDialect, LineEnding};
pub use values::{CsvValue, GeneratedRow, GeneratedValue};
