//! Error types for the pasture-calendar crate.

/// Failures of day-of-year lookups and date reconstruction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// A doy outside the 365-day table.
    #[error("day of year {doy} is outside 1..=365")]
    InvalidDoy {
        /// Offending value.
        doy: u16,
    },

    /// A month number outside 1..=12.
    #[error("month {month} is outside 1..=12")]
    InvalidMonth {
        /// Offending value.
        month: u8,
    },

    /// A day the month does not have in a common year.
    #[error("month {month} has no day {day} in a 365-day year (last is {max_day})")]
    InvalidDay {
        /// Offending day.
        day: u8,
        /// Month it was paired with.
        month: u8,
        /// Last day of that month.
        max_day: u8,
    },

    /// Returned when a (year, day-of-year) pair names no Gregorian date,
    /// e.g. day 366 of a common year.
    #[error("day {doy} does not exist in year {year}")]
    InvalidOrdinal {
        /// Calendar year.
        year: i32,
        /// Requested ordinal day.
        doy: u16,
    },

    /// Returned when the year is outside the range representable by the
    /// date backend.
    #[error("year {year} is out of the supported date range")]
    YearOutOfRange {
        /// The unsupported year.
        year: i32,
    },
}
