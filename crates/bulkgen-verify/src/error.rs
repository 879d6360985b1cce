//! Error types for the verifier.

use thiserror::Error;

/// Errors that stop verification before a report can be produced.
///
/// Content problems are not errors; they are collected in the report.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
