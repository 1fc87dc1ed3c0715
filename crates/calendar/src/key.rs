//! `(year, doy)` row keys.

use std::fmt;

/// Raw `(year, day-of-year)` key as stored in a weather or harvest row.
///
/// The key carries no calendar interpretation; whether `doy` is an ordinal
/// day or a non-leap table slot depends on the [`CalendarMode`] it is read
/// under.
///
/// [`CalendarMode`]: crate::CalendarMode
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey {
    year: i32,
    doy: u16,
}

impl DayKey {
    /// Creates a key without validating the day-of-year.
    pub fn new(year: i32, doy: u16) -> Self {
        Self { year, doy }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the raw day-of-year.
    pub fn doy(self) -> u16 {
        self.doy
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:03}", self.year, self.doy)
    }
}
