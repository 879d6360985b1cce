//! Column types, value bounds and the CSV dialect.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Length of a short random string.
pub const SHORT_TEXT_LEN: usize = 10;

/// Length of a long random string.
pub const LONG_TEXT_LEN: usize = 50;

/// Inclusive upper bound for generated integers (lower bound is 0).
pub const INT_MAX: i64 = 1_000_000;

/// Exclusive upper bound for generated floats (lower bound is 0).
pub const FLOAT_MAX: f64 = 1000.0;

/// Field delimiter.
pub const DELIMITER: u8 = b';';

/// Quote character. Embedded quotes are doubled.
pub const QUOTE: u8 = b'"';

/// Format of a generated datetime field.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The kind of value a column holds.
///
/// The declaration order is also the order in which the extended layout
/// cycles through types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Random ASCII letters, [`SHORT_TEXT_LEN`] characters
    ShortText,

    /// A day between the calendar bounds, at midnight
    DateTime,

    /// Whole number in `[0, INT_MAX]`
    Integer,

    /// Real number in `[0, FLOAT_MAX)`
    Float,

    /// Random ASCII letters, [`LONG_TEXT_LEN`] characters
    LongText,
}

impl ColumnType {
    /// All column types in cycle order.
    pub const CYCLE: [ColumnType; 5] = [
        ColumnType::ShortText,
        ColumnType::DateTime,
        ColumnType::Integer,
        ColumnType::Float,
        ColumnType::LongText,
    ];

    /// Header name used for this type (the simple layout uses it verbatim,
    /// the extended layout appends `_{index}`).
    pub fn header_name(&self) -> &'static str {
        match self {
            ColumnType::ShortText => "string",
            ColumnType::DateTime => "datetime",
            ColumnType::Integer => "int",
            ColumnType::Float => "float",
            ColumnType::LongText => "longtext",
        }
    }

    /// Type of the column at a 1-based position in the extended layout.
    pub fn for_position(position: usize) -> ColumnType {
        // position 1 is the first entry of the cycle
        Self::CYCLE[(position + Self::CYCLE.len() - 1) % Self::CYCLE.len()]
    }

    /// Fixed text length for string columns.
    pub fn text_len(&self) -> Option<usize> {
        match self {
            ColumnType::ShortText => Some(SHORT_TEXT_LEN),
            ColumnType::LongText => Some(LONG_TEXT_LEN),
            _ => None,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::ShortText => "short-string",
            ColumnType::DateTime => "datetime-string",
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::LongText => "long-string",
        };
        f.write_str(name)
    }
}

/// Inclusive day range datetime columns are sampled from.
///
/// `start` must not be after `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarRange {
    /// First day (inclusive)
    pub start: NaiveDate,
    /// Last day (inclusive)
    pub end: NaiveDate,
}

impl CalendarRange {
    /// Number of days after `start` that `end` falls on.
    pub fn span_days(&self) -> u64 {
        (self.end - self.start).num_days().unsigned_abs()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl Default for CalendarRange {
    /// 2000-01-01 through 2020-12-31.
    fn default() -> Self {
        let start = NaiveDate::from_ymd_opt(2000, 1, 1).expect("2000-01-01 is a valid date");
        let end = NaiveDate::from_ymd_opt(2020, 12, 31).expect("2020-12-31 is a valid date");
        Self { start, end }
    }
}

/// Record terminator written after every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    Crlf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Delimiter, quote and terminator used for reading and writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvDialect {
    pub delimiter: u8,
    pub quote: u8,
    pub line_ending: LineEnding,
}

impl Default for CsvDialect {
    fn default() -> Self {
        Self {
            delimiter: DELIMITER,
            quote: QUOTE,
            line_ending: LineEnding::Lf,
        }
    }
}
