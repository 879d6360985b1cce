//! Generated values and their CSV text form.

use crate::types::DATETIME_FORMAT;
use chrono::NaiveDateTime;

/// Raw generated value.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    /// String value
    Text(String),

    /// Naive date/time, rendered with [`DATETIME_FORMAT`]
    DateTime(NaiveDateTime),

    /// 64-bit signed integer
    Int64(i64),

    /// 64-bit floating point, rendered with shortest round-trip formatting
    Float64(f64),

    /// Fixed-point value stored as its text form
    Decimal {
        /// String representation of the decimal value
        value: String,
        /// Number of digits after decimal point
        scale: u32,
    },
}

/// Wrapper for CSV field text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvValue(pub String);

impl CsvValue {
    /// Get the inner CSV string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<GeneratedValue> for CsvValue {
    fn from(value: GeneratedValue) -> Self {
        match value {
            GeneratedValue::Text(s) => CsvValue(s),
            GeneratedValue::DateTime(dt) => CsvValue(dt.format(DATETIME_FORMAT).to_string()),
            GeneratedValue::Int64(i) => CsvValue(i.to_string()),
            GeneratedValue::Float64(f) => CsvValue(f.to_string()),
            GeneratedValue::Decimal { value, .. } => CsvValue(value),
        }
    }
}

/// One generated row, values in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRow {
    pub values: Vec<GeneratedValue>,
}

impl GeneratedRow {
    pub fn new(values: Vec<GeneratedValue>) -> Self {
        Self { values }
    }

    /// Convert into CSV field strings.
    pub fn into_csv_record(self) -> Vec<String> {
        self.values
            .into_iter()
            .map(|v| CsvValue::from(v).into_inner())
            .collect()
    }
}
