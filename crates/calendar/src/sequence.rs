//! Expected contiguous key sequences.

use crate::date::reconstruct_date;
use crate::error::CalendarError;
use crate::key::DayKey;
use crate::mode::CalendarMode;

/// Builds the contiguous daily key sequence from `first` to `last`
/// (inclusive) under `mode`.
///
/// Both endpoints are reconstructed to calendar dates, every date in
/// between is visited once, and each is mapped back to a key. In
/// [`CalendarMode::NoLeap`] February 29 is dropped. When `last` precedes
/// `first` the sequence is empty.
///
/// # Errors
///
/// Returns [`CalendarError`] if either endpoint does not name a date in
/// `mode`.
///
/// # Example
///
/// ```
/// use pasture_calendar::{CalendarMode, DayKey, expected_calendar};
///
/// let keys = expected_calendar(
///     DayKey::new(2023, 364),
///     DayKey::new(2024, 2),
///     CalendarMode::Gregorian,
/// )
/// .unwrap();
/// assert_eq!(keys.len(), 4);
/// assert_eq!(keys[2], DayKey::new(2024, 1));
/// ```
pub fn expected_calendar(
    first: DayKey,
    last: DayKey,
    mode: CalendarMode,
) -> Result<Vec<DayKey>, CalendarError> {
    let start = reconstruct_date(first, mode)?;
    let end = reconstruct_date(last, mode)?;
    Ok(start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter_map(|d| mode.key_for_date(d))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gregorian_leap_year_has_366_keys() {
        let keys = expected_calendar(
            DayKey::new(2024, 1),
            DayKey::new(2024, 366),
            CalendarMode::Gregorian,
        )
        .unwrap();
        assert_eq!(keys.len(), 366);
        assert_eq!(keys[59], DayKey::new(2024, 60));
    }

    #[test]
    fn noleap_leap_year_has_365_keys() {
        let keys = expected_calendar(
            DayKey::new(2024, 1),
            DayKey::new(2024, 365),
            CalendarMode::NoLeap,
        )
        .unwrap();
        assert_eq!(keys.len(), 365);
        assert_eq!(keys[58], DayKey::new(2024, 59));
        assert_eq!(keys[59], DayKey::new(2024, 60));
        assert_eq!(keys[364], DayKey::new(2024, 365));
    }

    #[test]
    fn reversed_range_is_empty() {
        let keys = expected_calendar(
            DayKey::new(2024, 10),
            DayKey::new(2024, 5),
            CalendarMode::Gregorian,
        )
        .unwrap();
        assert!(keys.is_empty());
    }

    #[test]
    fn single_day() {
        let keys = expected_calendar(
            DayKey::new(2001, 100),
            DayKey::new(2001, 100),
            CalendarMode::NoLeap,
        )
        .unwrap();
        assert_eq!(keys, vec![DayKey::new(2001, 100)]);
    }
}
