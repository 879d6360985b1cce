//! Numeric value generators.

use bulkgen_core::GeneratedValue;
use rand::Rng;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> GeneratedValue {
    GeneratedValue::Int64(rng.random_range(min..=max))
}

/// Generate a random float in `[min, max)`.
pub fn generate_float_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> GeneratedValue {
    GeneratedValue::Float64(rng.random_range(min..max))
}

/// Generate a random value in `[0, max)` with exactly `scale` decimal places.
///
/// The value is drawn as a whole number of `10^-scale` units, so it never
/// rounds up to `max`.
pub fn generate_scaled_float<R: Rng>(rng: &mut R, max: f64, scale: u32) -> GeneratedValue {
    let units_per_one = 10u64.pow(scale);
    let upper = (max * units_per_one as f64) as u64;
    let units = rng.random_range(0..upper.max(1));

    let whole = units / units_per_one;
    let value = if scale == 0 {
        whole.to_string()
    } else {
        format!(
            "{whole}.{:0width$}",
            units % units_per_one,
            width = scale as usize
        )
    };
    GeneratedValue::Decimal { value, scale }
}
