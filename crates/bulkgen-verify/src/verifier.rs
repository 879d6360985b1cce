//! File verifier implementation.

use crate::check::check_field;
use crate::error::VerifyError;
use crate::report::{ValidationIssue, VerificationReport};
use crate::terminators::TerminatorScan;
use bulkgen_core::{CalendarRange, CsvDialect, LineEnding, TableLayout};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Default number of issues kept in a report.
pub const DEFAULT_MAX_ISSUES: usize = 100;

/// Checks a generated CSV file against its layout.
pub struct FileVerifier {
    layout: TableLayout,
    dialect: CsvDialect,
    calendar: CalendarRange,
    has_header: bool,
    max_issues: usize,
}

impl FileVerifier {
    /// Create a verifier expecting a header row and the default dialect.
    pub fn new(layout: TableLayout) -> Self {
        Self {
            layout,
            dialect: CsvDialect::default(),
            calendar: CalendarRange::default(),
            has_header: true,
            max_issues: DEFAULT_MAX_ISSUES,
        }
    }

    /// Set whether the first record is a header.
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Record terminator every line is expected to end with.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.dialect.line_ending = line_ending;
        self
    }

    /// Keep at most `max_issues` issues in the report.
    pub fn with_max_issues(mut self, max_issues: usize) -> Self {
        self.max_issues = max_issues;
        self
    }

    /// Verify the file at `path`.
    ///
    /// Content problems are collected in the report; only failures to read
    /// the file are returned as errors.
    pub fn verify<P: AsRef<Path>>(&self, path: P) -> Result<VerificationReport, VerifyError> {
        let start_time = Instant::now();
        let path = path.as_ref();
        let mut report = VerificationReport {
            header_checked: self.has_header,
            ..Default::default()
        };

        info!(
            "Verifying '{}' against the {} layout ({} columns)",
            path.display(),
            self.layout.variant(),
            self.layout.len()
        );

        let file = File::open(path)?;
        report.file_size_bytes = file.metadata()?.len();

        // Terminator is left at its default so both \n and \r\n parse;
        // TerminatorScan checks which one each line uses.
        let mut reader = ReaderBuilder::new()
            .delimiter(self.dialect.delimiter)
            .quote(self.dialect.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(TerminatorScan::new(BufReader::new(file)));

        let mut record = StringRecord::new();
        let mut first = true;
        while reader.read_record(&mut record)? {
            let line = record.position().map_or(0, |p| p.line());

            if first && self.has_header {
                first = false;
                self.check_header(&record, line, &mut report);
                continue;
            }
            first = false;

            report.rows_checked += 1;
            self.check_record(&record, line, &mut report);

            if report.rows_checked % 1_000_000 == 0 {
                debug!("Checked {} rows", report.rows_checked);
            }
        }

        if self.has_header && first {
            report.push_issue(ValidationIssue::row(1, "missing header row"), self.max_issues);
        }

        let scan = reader.get_ref();
        if let Some(mismatch) = scan.mismatch(self.dialect.line_ending) {
            report.push_issue(
                ValidationIssue::row(
                    mismatch.first_line,
                    format!(
                        "{} lines end with {:?}, expected {:?}",
                        mismatch.count,
                        mismatch.found.as_str(),
                        self.dialect.line_ending.as_str()
                    ),
                ),
                self.max_issues,
            );
        }
        if !scan.ends_with_newline() {
            report.push_issue(
                ValidationIssue::row(
                    scan.lines() + 1,
                    "file does not end with a record terminator",
                ),
                self.max_issues,
            );
        }

        report.total_duration = start_time.elapsed();

        if report.is_success() {
            info!("{}", report.summary());
        } else {
            for issue in &report.issues {
                warn!(
                    "line {}{}: {}",
                    issue.line,
                    issue
                        .column
                        .as_deref()
                        .map(|c| format!(" column '{c}'"))
                        .unwrap_or_default(),
                    issue.message
                );
            }
            warn!("{}", report.summary());
        }

        Ok(report)
    }

    fn check_header(&self, record: &StringRecord, line: u64, report: &mut VerificationReport) {
        let expected = self.layout.column_names();
        let actual: Vec<&str> = record.iter().collect();
        if actual != expected {
            report.push_issue(
                ValidationIssue::row(
                    line,
                    format!("header {actual:?} does not match expected {expected:?}"),
                ),
                self.max_issues,
            );
        }
    }

    fn check_record(&self, record: &StringRecord, line: u64, report: &mut VerificationReport) {
        if record.len() != self.layout.len() {
            report.push_issue(
                ValidationIssue::row(
                    line,
                    format!(
                        "expected {} fields, found {}",
                        self.layout.len(),
                        record.len()
                    ),
                ),
                self.max_issues,
            );
            return;
        }

        let float_scale = self.layout.float_scale();
        for (column, value) in self.layout.columns().iter().zip(record.iter()) {
            if let Err(message) =
                check_field(column.column_type, value, &self.calendar, float_scale)
            {
                report.push_issue(
                    ValidationIssue::field(line, column.name.clone(), message),
                    self.max_issues,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulkgen_populate_csv::CSVPopulator;
    use tempfile::TempDir;

    #[test]
    fn test_generated_simple_file_passes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("simple.csv");
        let metrics = CSVPopulator::new(TableLayout::simple(), Some(42))
            .populate(&path, 20_000)
            .unwrap();

        let report = FileVerifier::new(TableLayout::simple()).verify(&path).unwrap();

        assert!(report.is_success(), "{:?}", report.issues);
        assert_eq!(report.rows_checked, metrics.rows_written);
        assert_eq!(report.file_size_bytes, metrics.file_size_bytes);
    }

    #[test]
    fn test_generated_extended_crlf_file_passes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("extended.csv");
        CSVPopulator::new(TableLayout::extended(), Some(42))
            .with_line_ending(LineEnding::Crlf)
            .populate(&path, 50_000)
            .unwrap();

        let report = FileVerifier::new(TableLayout::extended())
            .with_line_ending(LineEnding::Crlf)
            .verify(&path)
            .unwrap();

        assert!(report.is_success(), "{:?}", report.issues);
        assert!(report.rows_checked > 0);
    }

    #[test]
    fn test_lf_file_fails_crlf_check() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lf.csv");
        let metrics = CSVPopulator::new(TableLayout::simple(), Some(42))
            .populate(&path, 2000)
            .unwrap();

        let report = FileVerifier::new(TableLayout::simple())
            .with_line_ending(LineEnding::Crlf)
            .verify(&path)
            .unwrap();

        assert!(!report.is_success());
        assert_eq!(report.issue_count, 1);
        assert_eq!(report.issues[0].line, 1);
        assert_eq!(
            report.issues[0].message,
            format!(
                "{} lines end with \"\\n\", expected \"\\r\\n\"",
                metrics.rows_written + 1
            )
        );
    }

    #[test]
    fn test_crlf_file_fails_lf_check() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("crlf.csv");
        CSVPopulator::new(TableLayout::simple(), Some(42))
            .with_line_ending(LineEnding::Crlf)
            .populate(&path, 2000)
            .unwrap();

        let report = FileVerifier::new(TableLayout::simple())
            .verify(&path)
            .unwrap();

        assert_eq!(report.issue_count, 1);
        assert!(report.issues[0].message.contains("expected \"\\n\""));
    }

    #[test]
    fn test_mixed_terminators_reported_at_first_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mixed.csv");
        let row = format!("abcdeFGHIJ;2005-06-07 00:00:00;42;1.5;{}", "x".repeat(50));
        std::fs::write(
            &path,
            format!("string;datetime;int;float;longtext\n{row}\n{row}\r\n{row}\n"),
        )
        .unwrap();

        let report = FileVerifier::new(TableLayout::simple()).verify(&path).unwrap();

        assert_eq!(report.rows_checked, 3);
        assert_eq!(report.issue_count, 1);
        assert_eq!(report.issues[0].line, 3);
        assert!(report.issues[0].message.starts_with("1 lines end with"));
    }

    #[test]
    fn test_wrong_layout_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("simple.csv");
        CSVPopulator::new(TableLayout::simple(), Some(42))
            .populate(&path, 2000)
            .unwrap();

        let report = FileVerifier::new(TableLayout::extended())
            .with_max_issues(5)
            .verify(&path)
            .unwrap();

        assert!(!report.is_success());
        assert_eq!(report.issues.len(), 5);
        assert!(report.issues[0].message.starts_with("header"));
        assert_eq!(report.issues[1].message, "expected 50 fields, found 5");
    }

    #[test]
    fn test_corrupted_values_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.csv");
        std::fs::write(
            &path,
            "string;datetime;int;float;longtext\n\
             abcdeFGHIJ;2005-06-07 00:00:00;42;1.5;{long}\n\
             abcdeFGHIJ;2025-06-07 00:00:00;2000000;1.5;{long}\n\
             abc;2005-06-07 00:00:00;42\n"
                .replace("{long}", &"x".repeat(50)),
        )
        .unwrap();

        let report = FileVerifier::new(TableLayout::simple()).verify(&path).unwrap();

        assert_eq!(report.rows_checked, 3);
        assert_eq!(report.issue_count, 3);
        assert_eq!(report.issues[0].line, 3);
        assert_eq!(report.issues[0].column.as_deref(), Some("datetime"));
        assert_eq!(report.issues[1].column.as_deref(), Some("int"));
        assert_eq!(report.issues[2].line, 4);
        assert_eq!(report.issues[2].column, None);
    }

    #[test]
    fn test_truncated_last_row_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("truncated.csv");
        std::fs::write(&path, "string;datetime;int;float;longtext\nabcdeFGHIJ;2005").unwrap();

        let report = FileVerifier::new(TableLayout::simple()).verify(&path).unwrap();

        assert!(report
            .issues
            .iter()
            .any(|i| i.message == "file does not end with a record terminator"));
        assert!(report
            .issues
            .iter()
            .any(|i| i.message == "expected 5 fields, found 2"));
    }

    #[test]
    fn test_without_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("noheader.csv");
        let metrics = CSVPopulator::new(TableLayout::simple(), Some(1))
            .with_header(false)
            .populate(&path, 1000)
            .unwrap();

        let report = FileVerifier::new(TableLayout::simple())
            .with_header(false)
            .verify(&path)
            .unwrap();

        assert!(report.is_success(), "{:?}", report.issues);
        assert!(!report.header_checked);
        assert_eq!(report.rows_checked, metrics.rows_written);
    }

    #[test]
    fn test_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileVerifier::new(TableLayout::simple()).verify(temp_dir.path().join("nope.csv"));
        assert!(matches!(result, Err(VerifyError::Io(_))));
    }
}
