//! Datetime value generators.

use bulkgen_core::{CalendarRange, GeneratedValue};
use chrono::{Days, NaiveTime};
use rand::Rng;

/// Generate a random day in the calendar range, at midnight.
///
/// Days are sampled uniformly; the time of day is always `00:00:00`.
pub fn generate_day_in_range<R: Rng>(rng: &mut R, calendar: &CalendarRange) -> GeneratedValue {
    let offset = rng.random_range(0..=calendar.span_days());
    let day = calendar
        .start
        .checked_add_days(Days::new(offset))
        .unwrap_or(calendar.end);
    GeneratedValue::DateTime(day.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Timelike};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_day_in_default_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let calendar = CalendarRange::default();

        for _ in 0..1000 {
            if let GeneratedValue::DateTime(dt) = generate_day_in_range(&mut rng, &calendar) {
                assert!(dt.year() >= 2000 && dt.year() <= 2020);
                assert!(calendar.contains(dt.date()));
                assert_eq!((dt.hour(), dt.minute(), dt.second()), (0, 0, 0));
            } else {
                panic!("Expected DateTime value");
            }
        }
    }

    #[test]
    fn test_single_day_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let day = NaiveDate::from_ymd_opt(2012, 2, 29).unwrap();
        let calendar = CalendarRange {
            start: day,
            end: day,
        };

        let value = generate_day_in_range(&mut rng, &calendar);
        assert_eq!(
            value,
            GeneratedValue::DateTime(day.and_hms_opt(0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_deterministic_generation() {
        let calendar = CalendarRange::default();
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_day_in_range(&mut rng1, &calendar),
            generate_day_in_range(&mut rng2, &calendar)
        );
    }
}
