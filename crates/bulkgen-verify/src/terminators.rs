//! Line terminator scanning beneath the CSV reader.

use bulkgen_core::LineEnding;
use std::io::{self, Read};

/// Records how every line read through it is terminated.
///
/// Sits between the file and the CSV reader, so terminators are checked in
/// the same pass as the records.
pub struct TerminatorScan<R: Read> {
    inner: R,
    last_byte: Option<u8>,
    lines: u64,
    crlf_lines: u64,
    first_lf_line: Option<u64>,
    first_crlf_line: Option<u64>,
}

/// Lines that do not end with the expected terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminatorMismatch {
    /// 1-based line number of the first offending line
    pub first_line: u64,
    /// Number of offending lines
    pub count: u64,
    /// Terminator found on those lines
    pub found: LineEnding,
}

impl<R: Read> TerminatorScan<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            last_byte: None,
            lines: 0,
            crlf_lines: 0,
            first_lf_line: None,
            first_crlf_line: None,
        }
    }

    /// Number of terminated lines seen so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Whether the data read so far is empty or ends with `\n`.
    pub fn ends_with_newline(&self) -> bool {
        matches!(self.last_byte, None | Some(b'\n'))
    }

    /// Lines terminated differently from `expected`, if any.
    pub fn mismatch(&self, expected: LineEnding) -> Option<TerminatorMismatch> {
        let (first_line, count, found) = match expected {
            LineEnding::Lf => (self.first_crlf_line, self.crlf_lines, LineEnding::Crlf),
            LineEnding::Crlf => (
                self.first_lf_line,
                self.lines - self.crlf_lines,
                LineEnding::Lf,
            ),
        };
        first_line.map(|first_line| TerminatorMismatch {
            first_line,
            count,
            found,
        })
    }
}

impl<R: Read> Read for TerminatorScan<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        for &b in &buf[..n] {
            if b == b'\n' {
                self.lines += 1;
                if self.last_byte == Some(b'\r') {
                    self.crlf_lines += 1;
                    self.first_crlf_line.get_or_insert(self.lines);
                } else {
                    self.first_lf_line.get_or_insert(self.lines);
                }
            }
            self.last_byte = Some(b);
        }
        Ok(n)
    }
}
