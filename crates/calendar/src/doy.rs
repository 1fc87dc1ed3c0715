//! Day-of-year newtype and the canonical non-leap lookup table.
//!
//! Every `(month, day)` <-> day-of-year conversion in the workspace goes
//! through [`MONTH_DAY_TABLE`], which is built once at compile time for a
//! single 365-day year. Lookups are plain array indexing.

use crate::error::CalendarError;

/// Day-of-year in the canonical 365-day year (1..=365).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doy(u16);

/// Days in January..December of a common year.
const MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days elapsed before the first of January..December.
const DAYS_BEFORE_MONTH: [u16; 12] = days_before_month();

/// `(month, day)` at each 0-based position of the common year.
pub(crate) const MONTH_DAY_TABLE: [(u8, u8); 365] = month_day_table();

const fn days_before_month() -> [u16; 12] {
    let mut out = [0u16; 12];
    let mut i = 1;
    while i < 12 {
        out[i] = out[i - 1] + MONTH_LENGTHS[i - 1] as u16;
        i += 1;
    }
    out
}

const fn month_day_table() -> [(u8, u8); 365] {
    let mut table = [(0u8, 0u8); 365];
    let mut pos = 0;
    let mut month = 0;
    while month < 12 {
        let mut day = 1;
        while day <= MONTH_LENGTHS[month] {
            table[pos] = (month as u8 + 1, day);
            pos += 1;
            day += 1;
        }
        month += 1;
    }
    table
}

/// Length of `month` (1-based) in a common year, or `None` for a
/// non-existent month.
fn month_length(month: u8) -> Option<u8> {
    MONTH_LENGTHS.get(usize::from(month).checked_sub(1)?).copied()
}

impl Doy {
    /// Wraps a raw day-of-year.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidDoy`] outside 1..=365; day 366 never exists
    /// in the normalised year.
    pub fn new(doy: u16) -> Result<Self, CalendarError> {
        match doy {
            1..=365 => Ok(Self(doy)),
            _ => Err(CalendarError::InvalidDoy { doy }),
        }
    }

    /// Position of a common-year `(month, day)`.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidMonth`] for a month outside 1..=12 and
    /// [`CalendarError::InvalidDay`] for a day the month does not have.
    /// February 29 is always invalid here.
    pub fn from_month_day(month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = month_length(month).ok_or(CalendarError::InvalidMonth { month })?;
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self(DAYS_BEFORE_MONTH[usize::from(month - 1)] + u16::from(day)))
    }

    /// The raw value.
    pub fn get(self) -> u16 {
        self.0
    }

    /// Zero-based position in [`MONTH_DAY_TABLE`].
    pub fn index(self) -> usize {
        usize::from(self.0) - 1
    }

    /// Calendar month and day in a common year.
    pub fn month_day(self) -> (u8, u8) {
        MONTH_DAY_TABLE[self.index()]
    }
}

/// Maps a non-leap `(month, day)` to its day-of-year.
pub fn to_doy(month: u8, day: u8) -> Result<Doy, CalendarError> {
    Doy::from_month_day(month, day)
}

/// Maps a day-of-year back to its non-leap `(month, day)`.
///
/// Total: every [`Doy`] has exactly one table entry.
pub fn to_month_day(doy: Doy) -> (u8, u8) {
    doy.month_day()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_endpoints() {
        assert_eq!(MONTH_DAY_TABLE[0], (1, 1));
        assert_eq!(MONTH_DAY_TABLE[58], (2, 28));
        assert_eq!(MONTH_DAY_TABLE[59], (3, 1));
        assert_eq!(MONTH_DAY_TABLE[364], (12, 31));
    }

    #[test]
    fn first_of_each_month() {
        let firsts: Vec<u16> = (1..=12).map(|m| to_doy(m, 1).unwrap().get()).collect();
        assert_eq!(
            firsts,
            vec![1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335]
        );
    }

    #[test]
    fn raw_range() {
        assert_eq!(Doy::new(0), Err(CalendarError::InvalidDoy { doy: 0 }));
        assert_eq!(Doy::new(366), Err(CalendarError::InvalidDoy { doy: 366 }));
        assert_eq!(Doy::new(365).map(Doy::get), Ok(365));
    }

    #[test]
    fn leap_day_is_not_in_the_table() {
        assert_eq!(
            to_doy(2, 29),
            Err(CalendarError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28,
            })
        );
        assert!(to_doy(4, 0).is_err());
    }

    #[test]
    fn months_outside_the_year() {
        for month in [0, 13, 255] {
            assert_eq!(to_doy(month, 1), Err(CalendarError::InvalidMonth { month }));
        }
    }

    #[test]
    fn round_trip_through_table() {
        for raw in 1..=365u16 {
            let doy = Doy::new(raw).unwrap();
            let (m, d) = to_month_day(doy);
            assert_eq!(to_doy(m, d), Ok(doy), "{raw} -> ({m}, {d})");
        }
    }

    #[test]
    fn march_first_sits_at_index_59() {
        let doy = Doy::new(60).unwrap();
        assert_eq!(doy.index(), 59);
        assert_eq!(doy.month_day(), (3, 1));
    }
}
