//! Calendar run modes.

use chrono::{Datelike, NaiveDate};

use crate::date::reconstruct_date;
use crate::doy::Doy;
use crate::key::DayKey;

/// How `(year, doy)` keys are interpreted for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalendarMode {
    /// True Gregorian calendar: leap years have 366 days and `doy` is the
    /// ordinal day of the year.
    #[default]
    Gregorian,
    /// Normalised 365-day calendar: leap days are removed by the caller and
    /// `doy` is always read against the non-leap lookup table.
    NoLeap,
}

impl CalendarMode {
    /// Largest day-of-year value that can appear in this mode.
    pub fn max_doy(self) -> u16 {
        match self {
            CalendarMode::Gregorian => 366,
            CalendarMode::NoLeap => 365,
        }
    }

    /// Returns the key that represents `date` in this mode.
    ///
    /// Returns `None` for February 29 in [`CalendarMode::NoLeap`], which has
    /// no slot in the 365-day year.
    pub fn key_for_date(self, date: NaiveDate) -> Option<DayKey> {
        match self {
            CalendarMode::Gregorian => Some(DayKey::new(date.year(), date.ordinal() as u16)),
            CalendarMode::NoLeap => {
                let doy = Doy::from_month_day(date.month() as u8, date.day() as u8).ok()?;
                Some(DayKey::new(date.year(), doy.get()))
            }
        }
    }

    /// The key of the day after `key` in this mode.
    ///
    /// In [`CalendarMode::NoLeap`] February 28 is followed by March 1.
    /// Returns `None` if `key` is not a date in this mode or its successor
    /// is past the supported date range.
    pub fn next_key(self, key: DayKey) -> Option<DayKey> {
        let date = reconstruct_date(key, self).ok()?;
        date.iter_days().skip(1).take(2).find_map(|d| self.key_for_date(d))
    }
}

/// Returns `true` when `year` has a February 29 in the Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn noleap_key_skips_feb_29() {
        let feb29 = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(CalendarMode::NoLeap.key_for_date(feb29), None);
        assert_eq!(
            CalendarMode::Gregorian.key_for_date(feb29),
            Some(DayKey::new(2024, 60))
        );
    }

    #[test]
    fn march_first_differs_between_modes_in_leap_year() {
        let mar1 = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(
            CalendarMode::Gregorian.key_for_date(mar1).unwrap().doy(),
            61
        );
        assert_eq!(CalendarMode::NoLeap.key_for_date(mar1).unwrap().doy(), 60);
    }

    #[test]
    fn next_key_crosses_month_and_year() {
        let g = CalendarMode::Gregorian;
        let n = CalendarMode::NoLeap;
        assert_eq!(g.next_key(DayKey::new(2024, 59)), Some(DayKey::new(2024, 60)));
        assert_eq!(n.next_key(DayKey::new(2024, 59)), Some(DayKey::new(2024, 60)));
        assert_eq!(g.next_key(DayKey::new(2024, 366)), Some(DayKey::new(2025, 1)));
        assert_eq!(n.next_key(DayKey::new(2024, 365)), Some(DayKey::new(2025, 1)));
        assert_eq!(g.next_key(DayKey::new(2023, 366)), None);
    }

    #[test]
    fn max_doy() {
        assert_eq!(CalendarMode::Gregorian.max_doy(), 366);
        assert_eq!(CalendarMode::NoLeap.max_doy(), 365);
    }
}
