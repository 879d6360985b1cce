//! Byte-counting writer between the CSV encoder and the buffered file.

use std::io::{self, Write};

/// Counts every byte passed through to the inner writer.
///
/// `flush` only reaches the inner writer when `forward_flush` is set. The CSV
/// encoder is flushed after every row to make the count exact; without
/// forwarding that stays a memory copy into the inner buffer instead of a
/// syscall per row.
pub struct ByteCounter<W: Write> {
    inner: W,
    bytes_written: u64,
    forward_flush: bool,
}

impl<W: Write> ByteCounter<W> {
    pub fn new(inner: W, forward_flush: bool) -> Self {
        Self {
            inner,
            bytes_written: 0,
            forward_flush,
        }
    }

    /// Total bytes accepted by the inner writer.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush the inner writer regardless of `forward_flush` and return it.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> Write for ByteCounter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bytes_written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.forward_flush {
            self.inner.flush()
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufWriter;

    #[test]
    fn test_counts_bytes() {
        let mut counter = ByteCounter::new(Vec::new(), false);
        counter.write_all(b"abc;def\n").unwrap();
        counter.write_all(b"x\n").unwrap();

        assert_eq!(counter.bytes_written(), 10);
        assert_eq!(counter.into_inner().unwrap(), b"abc;def\nx\n");
    }

    #[test]
    fn test_flush_not_forwarded() {
        let mut counter = ByteCounter::new(BufWriter::new(Vec::new()), false);
        counter.write_all(b"row\n").unwrap();
        counter.flush().unwrap();

        // Still held in the BufWriter
        assert!(counter.inner.get_ref().is_empty());
        assert_eq!(counter.bytes_written(), 4);

        let inner = counter.into_inner().unwrap();
        assert_eq!(inner.get_ref(), b"row\n");
    }

    #[test]
    fn test_flush_forwarded() {
        let mut counter = ByteCounter::new(BufWriter::new(Vec::new()), true);
        counter.write_all(b"row\n").unwrap();
        counter.flush().unwrap();

        assert_eq!(counter.inner.get_ref(), b"row\n");
    }
}
