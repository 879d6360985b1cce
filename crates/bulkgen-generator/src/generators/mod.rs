//! Individual value generators for each column type.

pub mod numeric;
pub mod text;
pub mod timestamp;

use bulkgen_core::types::{FLOAT_MAX, INT_MAX};
use bulkgen_core::{CalendarRange, ColumnType, GeneratedValue};
use rand::Rng;

/// Generate a value for a column of the given type.
///
/// `float_scale` rounds float columns to that many decimal places when set.
pub fn generate_value<R: Rng>(
    column_type: ColumnType,
    rng: &mut R,
    calendar: &CalendarRange,
    float_scale: Option<u32>,
) -> GeneratedValue {
    match column_type {
        ColumnType::ShortText | ColumnType::LongText => {
            // text_len is always Some for string columns
            text::generate_letters(rng, column_type.text_len().unwrap_or_default())
        }

        ColumnType::DateTime => timestamp::generate_day_in_range(rng, calendar),

        ColumnType::Integer => numeric::generate_int_range(rng, 0, INT_MAX),

        ColumnType::Float => match float_scale {
            Some(scale) => numeric::generate_scaled_float(rng, FLOAT_MAX, scale),
            None => numeric::generate_float_range(rng, 0.0, FLOAT_MAX),
        },
    }
}
