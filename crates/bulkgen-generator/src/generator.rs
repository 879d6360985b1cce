//! Row generator producing one random row per call.

use crate::generators::generate_value;
use bulkgen_core::{CalendarRange, GeneratedRow, TableLayout};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generates rows of random values matching a [`TableLayout`].
///
/// With a seed the sequence of rows is reproducible across runs; without one
/// every run differs.
pub struct RowGenerator {
    /// Columns to generate values for
    layout: TableLayout,
    /// Random number generator
    rng: StdRng,
    /// Day range for datetime columns
    calendar: CalendarRange,
}

impl RowGenerator {
    /// Create a generator, seeded if `seed` is given and from OS entropy
    /// otherwise.
    pub fn new(layout: TableLayout, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            layout,
            rng,
            calendar: CalendarRange::default(),
        }
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    /// Generate the next row.
    pub fn next_row(&mut self) -> GeneratedRow {
        let float_scale = self.layout.float_scale();
        let values = self
            .layout
            .columns()
            .iter()
            .map(|column| {
                generate_value(
                    column.column_type,
                    &mut self.rng,
                    &self.calendar,
                    float_scale,
                )
            })
            .collect();

        GeneratedRow::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulkgen_core::{ColumnType, GeneratedValue};

    #[test]
    fn test_generate_single_row() {
        let mut generator = RowGenerator::new(TableLayout::simple(), Some(42));

        let row = generator.next_row();

        assert_eq!(row.values.len(), 5);
        assert!(matches!(&row.values[0], GeneratedValue::Text(s) if s.len() == 10));
        assert!(matches!(row.values[1], GeneratedValue::DateTime(_)));
        if let GeneratedValue::Int64(v) = row.values[2] {
            assert!((0..=1_000_000).contains(&v));
        } else {
            panic!("Expected Int64 for int, got {:?}", row.values[2]);
        }
        assert!(matches!(row.values[3], GeneratedValue::Float64(_)));
        assert!(matches!(&row.values[4], GeneratedValue::Text(s) if s.len() == 50));
    }

    #[test]
    fn test_extended_row_types_follow_layout() {
        let layout = TableLayout::extended();
        let mut generator = RowGenerator::new(layout.clone(), Some(42));

        let row = generator.next_row();
        assert_eq!(row.values.len(), 50);

        for (column, value) in layout.columns().iter().zip(&row.values) {
            match column.column_type {
                ColumnType::Integer => assert!(matches!(value, GeneratedValue::Int64(_))),
                ColumnType::Float => {
                    assert!(matches!(value, GeneratedValue::Decimal { scale: 2, .. }))
                }
                ColumnType::DateTime => assert!(matches!(value, GeneratedValue::DateTime(_))),
                ColumnType::ShortText | ColumnType::LongText => {
                    assert!(matches!(value, GeneratedValue::Text(_)))
                }
            }
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = RowGenerator::new(TableLayout::simple(), Some(42));
        let mut gen2 = RowGenerator::new(TableLayout::simple(), Some(42));

        for _ in 0..10 {
            assert_eq!(gen1.next_row(), gen2.next_row());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut gen1 = RowGenerator::new(TableLayout::simple(), Some(1));
        let mut gen2 = RowGenerator::new(TableLayout::simple(), Some(2));

        assert_ne!(gen1.next_row(), gen2.next_row());
    }

    #[test]
    fn test_unseeded_generation() {
        let mut generator = RowGenerator::new(TableLayout::extended(), None);

        let row = generator.next_row();
        assert_eq!(row.values.len(), 50);
        assert_eq!(generator.layout().variant(), bulkgen_core::Variant::Extended);
    }
}
