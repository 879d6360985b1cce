//! Random letter strings.

use bulkgen_core::GeneratedValue;
use rand::Rng;

/// Upper and lowercase ASCII letters.
const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a string of `len` letters drawn uniformly from `[A-Za-z]`.
pub fn generate_letters<R: Rng>(rng: &mut R, len: usize) -> GeneratedValue {
    let s: String = (0..len)
        .map(|_| LETTERS[rng.random_range(0..LETTERS.len())] as char)
        .collect();
    GeneratedValue::Text(s)
}
