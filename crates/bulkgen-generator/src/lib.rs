//! Random row generator for csv-bulkgen.
//!
//! This crate provides the [`RowGenerator`], which produces one row of random
//! values per call, each value matching the type of its column in a
//! [`TableLayout`](bulkgen_core::TableLayout). Given a seed the output is
//! reproducible; without one the RNG is seeded from the operating system.
//!
//! # Architecture
//!
//! ```text
//! TableLayout (simple | extended)
//!        │
//!        ▼
//! ┌─────────────────┐
//! │  RowGenerator   │
//! │                 │
//! │  - rng (StdRng) │
//! │  - calendar     │
//! └────────┬────────┘
//!          │
//!          ▼
//!    GeneratedRow { values }
//! ```
//!
//! # Example
//!
//! ```rust
//! use bulkgen_core::TableLayout;
//! use bulkgen_generator::RowGenerator;
//!
//! let mut generator = RowGenerator::new(TableLayout::simple(), Some(42));
//! let row = generator.next_row();
//! assert_eq!(row.values.len(), 5);
//! ```
//!
//! # Generators
//!
//! - `text` - fixed-length strings of ASCII letters
//! - `timestamp` - a random day in a calendar range, at midnight
//! - `numeric` - integers, floats and fixed-scale decimals in a range

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::RowGenerator;
