//! Per-field validity checks.

use bulkgen_core::types::{DATETIME_FORMAT, FLOAT_MAX, INT_MAX};
use bulkgen_core::{CalendarRange, ColumnType};
use chrono::NaiveDateTime;

/// Check that `value` is a valid field for a column of `column_type`.
///
/// `float_scale` limits the number of fractional digits of float columns.
/// Returns a description of the problem on failure.
pub fn check_field(
    column_type: ColumnType,
    value: &str,
    calendar: &CalendarRange,
    float_scale: Option<u32>,
) -> Result<(), String> {
    match column_type {
        ColumnType::ShortText | ColumnType::LongText => {
            let expected = column_type.text_len().unwrap_or_default();
            if value.len() != expected {
                return Err(format!(
                    "expected {expected} characters, found {}",
                    value.chars().count()
                ));
            }
            if !value.bytes().all(|b| b.is_ascii_alphabetic()) {
                return Err(format!("'{value}' contains non-letter characters"));
            }
            Ok(())
        }

        ColumnType::DateTime => {
            let dt = NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
                .map_err(|e| format!("'{value}' is not a {DATETIME_FORMAT} datetime: {e}"))?;
            if !calendar.contains(dt.date()) {
                return Err(format!(
                    "'{value}' is outside {} to {}",
                    calendar.start, calendar.end
                ));
            }
            Ok(())
        }

        ColumnType::Integer => {
            let v: i64 = value
                .parse()
                .map_err(|_| format!("'{value}' is not an integer"))?;
            if !(0..=INT_MAX).contains(&v) {
                return Err(format!("{v} is outside [0, {INT_MAX}]"));
            }
            Ok(())
        }

        ColumnType::Float => {
            if !is_plain_decimal(value) {
                return Err(format!("'{value}' is not a plain decimal number"));
            }
            let v: f64 = value
                .parse()
                .map_err(|_| format!("'{value}' is not a number"))?;
            if !(0.0..FLOAT_MAX).contains(&v) {
                return Err(format!("{value} is outside [0, {FLOAT_MAX})"));
            }
            if let Some(scale) = float_scale {
                let digits = value.split_once('.').map_or(0, |(_, frac)| frac.len());
                if digits > scale as usize {
                    return Err(format!(
                        "{value} has {digits} decimal places, at most {scale} allowed"
                    ));
                }
            }
            Ok(())
        }
    }
}

/// `digits` or `digits.digits`: no sign, exponent or bare dot.
fn is_plain_decimal(value: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match value.split_once('.') {
        Some((whole, frac)) => all_digits(whole) && all_digits(frac),
        None => all_digits(value),
    }
}
