//! Verifier for generated CSV files.
//!
//! Re-reads a file written by bulkgen-populate-csv and checks that it still
//! has the shape of its layout: the header names, the field count of every
//! record, the line terminators, and that every value is valid for its
//! column type and range.
//!
//! # Example
//!
//! ```ignore
//! use bulkgen_core::TableLayout;
//! use bulkgen_verify::FileVerifier;
//!
//! let verifier = FileVerifier::new(TableLayout::simple());
//! let report = verifier.verify("output.csv")?;
//! assert!(report.is_success());
//! ```

pub mod args;
pub mod check;
pub mod error;
pub mod report;
pub mod terminators;
pub mod verifier;

pub use args::VerifyArgs;
pub use check::check_field;
pub use error::VerifyError;
pub use report::{ValidationIssue, VerificationReport};
pub use terminators::{TerminatorMismatch, TerminatorScan};
pub use verifier::FileVerifier;
