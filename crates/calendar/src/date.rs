//! Calendar date reconstruction from `(year, doy)` keys.

use chrono::NaiveDate;

use crate::doy::Doy;
use crate::error::CalendarError;
use crate::key::DayKey;
use crate::mode::CalendarMode;

/// Reconstructs the calendar date named by `key` under `mode`.
///
/// In [`CalendarMode::Gregorian`] the key is an ordinal date. In
/// [`CalendarMode::NoLeap`] the doy is looked up in the 365-day table and
/// the resulting `(month, day)` is placed in `key.year()`. For leap years
/// this means the returned date's own ordinal is one greater than
/// `key.doy()` from March onwards; callers rely on that offset.
///
/// # Errors
///
/// - [`CalendarError::InvalidOrdinal`] when a Gregorian ordinal does not exist
///   in that year.
/// - [`CalendarError::InvalidDoy`] when a NoLeap doy is outside 1..=365.
/// - [`CalendarError::YearOutOfRange`] when the year cannot be represented.
pub fn reconstruct_date(key: DayKey, mode: CalendarMode) -> Result<NaiveDate, CalendarError> {
    match mode {
        CalendarMode::Gregorian => NaiveDate::from_yo_opt(key.year(), u32::from(key.doy()))
            .ok_or(CalendarError::InvalidOrdinal {
                year: key.year(),
                doy: key.doy(),
            }),
        CalendarMode::NoLeap => {
            let (month, day) = Doy::new(key.doy())?.month_day();
            NaiveDate::from_ymd_opt(key.year(), u32::from(month), u32::from(day))
                .ok_or(CalendarError::YearOutOfRange { year: key.year() })
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    #[test]
    fn gregorian_ordinal() {
        let date = reconstruct_date(DayKey::new(2024, 60), CalendarMode::Gregorian).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn gregorian_day_366_of_common_year_rejected() {
        assert_eq!(
            reconstruct_date(DayKey::new(2023, 366), CalendarMode::Gregorian).unwrap_err(),
            CalendarError::InvalidOrdinal {
                year: 2023,
                doy: 366,
            }
        );
    }

    #[test]
    fn noleap_leap_year_after_february_is_offset() {
        let date = reconstruct_date(DayKey::new(2024, 60), CalendarMode::NoLeap).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(date.ordinal(), 61);
    }

    #[test]
    fn noleap_common_year_matches_ordinal() {
        for doy in [1u16, 59, 60, 200, 365] {
            let date = reconstruct_date(DayKey::new(2023, doy), CalendarMode::NoLeap).unwrap();
            assert_eq!(date.ordinal(), u32::from(doy));
        }
    }

    #[test]
    fn noleap_rejects_366() {
        assert_eq!(
            reconstruct_date(DayKey::new(2024, 366), CalendarMode::NoLeap).unwrap_err(),
            CalendarError::InvalidDoy { doy: 366 }
        );
    }
}
