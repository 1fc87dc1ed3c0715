//! Error types for the pasture-harvest crate.

use pasture_calendar::DayKey;

/// Error type for harvest normalisation.
///
/// Tables reaching the normaliser are expected to have passed
/// `validate_harvest`; these errors surface callers that skip validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HarvestError {
    /// Returned when a harvest table lacks a required column.
    #[error("harvest table has no usable '{name}' column")]
    MissingColumn {
        /// Column name.
        name: &'static str,
    },

    /// Returned when a row's `(year, doy)` cannot form a day key.
    #[error("row {row}: ({year}, {doy}) is not a valid day key")]
    InvalidKey {
        /// Row index.
        row: usize,
        /// Raw year value.
        year: i64,
        /// Raw day-of-year value.
        doy: i64,
    },

    /// Returned when an event's day is not simulated.
    #[error("harvest event on {key} is outside the weather timeline")]
    EventOutsideTimeline {
        /// Day key of the event.
        key: DayKey,
    },

    /// Returned when an auto-harvest table does not cover the timeline
    /// row for row.
    #[error("auto harvest table has {got} rows, expected {expected}")]
    LengthMismatch {
        /// Timeline length.
        expected: usize,
        /// Harvest rows supplied.
        got: usize,
    },

    /// Returned when an auto-harvest row is keyed to a different day than
    /// the timeline row it aligns with.
    #[error("auto harvest row {row} is keyed {found}, expected {expected}")]
    KeyMismatch {
        /// Row index.
        row: usize,
        /// Timeline key.
        expected: DayKey,
        /// Harvest key.
        found: DayKey,
    },
}
