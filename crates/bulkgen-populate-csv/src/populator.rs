//! Size-bounded CSV populator.

use crate::counting::ByteCounter;
use crate::error::CSVPopulatorError;
use bulkgen_core::{CsvDialect, LineEnding, TableLayout};
use bulkgen_generator::RowGenerator;
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Rows between progress log lines.
const PROGRESS_INTERVAL: u64 = 100_000;

/// How the output size is measured after each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SizeCheck {
    /// Count bytes handed to the file buffer (exact, no per-row syscalls)
    #[default]
    Counted,
    /// Flush every row to the file and read its length from filesystem metadata
    Metadata,
}

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PopulateMetrics {
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Requested target size in bytes.
    pub target_size_bytes: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Bytes written beyond the target.
    pub fn overshoot_bytes(&self) -> u64 {
        self.file_size_bytes.saturating_sub(self.target_size_bytes)
    }
}

/// CSV writer builder for the given dialect.
///
/// Fields are quoted only when they contain the delimiter, the quote
/// character or a line break; embedded quotes are doubled.
pub fn csv_writer_builder(dialect: &CsvDialect) -> WriterBuilder {
    let terminator = match dialect.line_ending {
        LineEnding::Lf => Terminator::Any(b'\n'),
        LineEnding::Crlf => Terminator::CRLF,
    };
    let mut builder = WriterBuilder::new();
    builder
        .delimiter(dialect.delimiter)
        .quote(dialect.quote)
        .quote_style(QuoteStyle::Necessary)
        .double_quote(true)
        .terminator(terminator);
    builder
}

/// Populator that grows a CSV file with random rows until it reaches a
/// target size.
pub struct CSVPopulator {
    generator: RowGenerator,
    dialect: CsvDialect,
    include_header: bool,
    size_check: SizeCheck,
}

impl CSVPopulator {
    /// Create a new CSV populator.
    ///
    /// # Arguments
    ///
    /// * `layout` - Columns to generate
    /// * `seed` - Random seed for deterministic generation, `None` for OS entropy
    ///
    /// # Example
    ///
    /// ```ignore
    /// let populator = CSVPopulator::new(TableLayout::simple(), Some(42));
    /// ```
    pub fn new(layout: TableLayout, seed: Option<u64>) -> Self {
        Self {
            generator: RowGenerator::new(layout, seed),
            dialect: CsvDialect::default(),
            include_header: true,
            size_check: SizeCheck::default(),
        }
    }

    /// Set whether to include a header row in the CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.dialect.line_ending = line_ending;
        self
    }

    pub fn with_size_check(mut self, size_check: SizeCheck) -> Self {
        self.size_check = size_check;
        self
    }

    pub fn layout(&self) -> &TableLayout {
        self.generator.layout()
    }

    /// Write a header and then random rows to `output_path` until the file
    /// is at least `target_size` bytes.
    ///
    /// The file is created, or truncated if it exists. The size is measured
    /// after each whole row, so the result overshoots the target by less than
    /// one row. On error the partially written file is left in place.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        target_size: u64,
    ) -> Result<PopulateMetrics, CSVPopulatorError> {
        if target_size == 0 {
            return Err(CSVPopulatorError::InvalidTarget(target_size));
        }

        let start_time = Instant::now();
        let mut metrics = PopulateMetrics {
            target_size_bytes: target_size,
            ..Default::default()
        };

        let output_path = output_path.as_ref();
        info!(
            "Generating CSV file '{}' ({} layout, {} columns) up to {} bytes",
            output_path.display(),
            self.layout().variant(),
            self.layout().len(),
            target_size
        );

        // Create writer
        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let counter = ByteCounter::new(buf_writer, self.size_check == SizeCheck::Metadata);
        let mut writer = csv_writer_builder(&self.dialect).from_writer(counter);

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        if self.include_header {
            let write_start = Instant::now();
            writer.write_record(self.generator.layout().column_names())?;
            write_time += write_start.elapsed();
        }

        let mut current_size = self.measure(&mut writer, output_path)?;

        while current_size < target_size {
            let gen_start = Instant::now();
            let record = self.generator.next_row().into_csv_record();
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            writer.write_record(&record)?;
            current_size = self.measure(&mut writer, output_path)?;
            write_time += write_start.elapsed();

            metrics.rows_written += 1;

            if metrics.rows_written % PROGRESS_INTERVAL == 0 {
                debug!(
                    "Written {} rows, {} of {} bytes",
                    metrics.rows_written, current_size, target_size
                );
            }
        }

        // Flush everything down to the file
        let counter = writer.into_inner().map_err(|e| e.into_error())?;
        drop(counter.into_inner()?);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "CSV generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec, {:.0} bytes/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second(),
            metrics.bytes_per_second()
        );

        Ok(metrics)
    }

    /// Current output size in bytes, after pushing the encoder's buffer out.
    fn measure(
        &self,
        writer: &mut Writer<ByteCounter<BufWriter<File>>>,
        output_path: &Path,
    ) -> Result<u64, CSVPopulatorError> {
        writer.flush()?;
        let size = match self.size_check {
            SizeCheck::Counted => writer.get_ref().bytes_written(),
            SizeCheck::Metadata => std::fs::metadata(output_path)?.len(),
        };
        Ok(size)
    }
}
