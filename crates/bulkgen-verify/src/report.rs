//! Verification report types.

use serde::Serialize;
use std::time::Duration;

/// A single problem found in the file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    /// 1-based line number in the file.
    pub line: u64,
    /// Column the issue was found in, if it concerns a single field.
    pub column: Option<String>,
    /// Human readable description.
    pub message: String,
}

impl ValidationIssue {
    pub fn row(line: u64, message: impl Into<String>) -> Self {
        Self {
            line,
            column: None,
            message: message.into(),
        }
    }

    pub fn field(line: u64, column: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            line,
            column: Some(column.into()),
            message: message.into(),
        }
    }
}

/// Verification report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerificationReport {
    /// Number of data rows read (header excluded).
    pub rows_checked: u64,
    /// Whether a header row was checked.
    pub header_checked: bool,
    /// Total number of issues found.
    pub issue_count: u64,
    /// The first issues found, up to the configured maximum.
    pub issues: Vec<ValidationIssue>,
    /// File size in bytes.
    pub file_size_bytes: u64,
    /// Total verification time.
    pub total_duration: Duration,
}

impl VerificationReport {
    /// Check if verification passed.
    pub fn is_success(&self) -> bool {
        self.issue_count == 0
    }

    /// Record an issue, keeping at most `max_issues` of them.
    pub fn push_issue(&mut self, issue: ValidationIssue, max_issues: usize) {
        self.issue_count += 1;
        if self.issues.len() < max_issues {
            self.issues.push(issue);
        }
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_success() {
            format!(
                "Verification PASSED: {} rows checked ({} bytes) in {:?}",
                self.rows_checked, self.file_size_bytes, self.total_duration
            )
        } else {
            format!(
                "Verification FAILED: {} issues in {} rows checked",
                self.issue_count, self.rows_checked
            )
        }
    }
}
