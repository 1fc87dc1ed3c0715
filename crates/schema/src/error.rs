//! Error types for pasture-schema.

use std::fmt;

use chrono::NaiveDate;
use pasture_calendar::DayKey;

/// Which input a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// The parameter mapping.
    Parameters,
    /// The daily weather and irrigation-policy table.
    Weather,
    /// The harvest and reseed table.
    Harvest,
    /// The irrigation-day whitelist.
    IrrigationDays,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableKind::Parameters => "parameters",
            TableKind::Weather => "weather table",
            TableKind::Harvest => "harvest table",
            TableKind::IrrigationDays => "irrigation days",
        };
        f.write_str(name)
    }
}

/// One failed check.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Violation {
    /// The table has no rows.
    #[error("table is empty")]
    Empty,

    /// The key set differs from the expected schema.
    #[error("incorrect keys: missing [{}], unexpected [{}]", join(.missing), join(.unexpected))]
    KeySetMismatch {
        /// Expected keys that are absent.
        missing: Vec<String>,
        /// Present keys that are not part of the schema.
        unexpected: Vec<String>,
    },

    /// A parameter is NaN.
    #[error("parameter '{key}' is undefined (NaN)")]
    UndefinedParameter {
        /// Parameter name.
        key: String,
    },

    /// An integer-valued switch holds a fractional value.
    #[error("switch '{key}' must be an integer, got {value}")]
    SwitchNotIntegral {
        /// Parameter name.
        key: String,
        /// The offending value.
        value: f64,
    },

    /// The reseed-to-harvest delay is below one day.
    #[error("harvest delay must be >= 1, got {value}")]
    HarvestDelayTooShort {
        /// The offending value.
        value: f64,
    },

    /// The reseed-to-harvest delay is not a whole number of days.
    #[error("harvest delay must effectively be an integer, got {value}")]
    HarvestDelayNotIntegral {
        /// The offending value.
        value: f64,
    },

    /// A column that must hold integers holds floats.
    #[error("column '{column}' must be integer typed")]
    NotInteger {
        /// Column name.
        column: String,
    },

    /// A column holds NaN values.
    #[error("column '{column}' has {count} missing value(s)")]
    MissingValues {
        /// Column name.
        column: String,
        /// Number of NaN entries.
        count: usize,
    },

    /// More rows than the kernel can hold.
    #[error("maximum run size is {capacity} days, got {n_days}")]
    CapacityExceeded {
        /// Rows supplied.
        n_days: usize,
        /// Kernel capacity.
        capacity: usize,
    },

    /// A year value does not fit the calendar's year type.
    #[error("row {row}: year {year} is out of range")]
    YearOutOfRange {
        /// Row index.
        row: usize,
        /// The offending year.
        year: i64,
    },

    /// A day-of-year value is outside the range the active calendar allows.
    #[error("row {row}: doy {doy} outside 1..={max}{}", noleap_hint(.max))]
    DoyOutOfRange {
        /// Row index.
        row: usize,
        /// The offending value.
        doy: i64,
        /// Largest allowed value.
        max: u16,
    },

    /// A `(year, doy)` key names no calendar date.
    #[error("row {row}: {key} is not a valid date")]
    InvalidDate {
        /// Row index.
        row: usize,
        /// The offending key.
        key: DayKey,
    },

    /// The day sequence has gaps, duplicates or is out of order.
    #[error(
        "the date range contains missing or duplicate days: first difference at row {row} (expected {}, found {}){}",
        fmt_key(.expected),
        fmt_key(.found),
        leap_note(.leap_days_removed)
    )]
    NotContiguous {
        /// First row that differs from the expected calendar.
        row: usize,
        /// Expected key at that row; `None` past the supported date range.
        expected: Option<DayKey>,
        /// Supplied key at that row, if the table is that long.
        found: Option<DayKey>,
        /// Whether the run uses the normalised 365-day calendar.
        leap_days_removed: bool,
    },

    /// Removal fractions above one.
    #[error("frac_harv cannot be greater than 1: {count} row(s), first at row {first_row} ({value})")]
    FractionAboveOne {
        /// Number of offending rows.
        count: usize,
        /// First offending row.
        first_row: usize,
        /// Value at the first offending row.
        value: f64,
    },

    /// Fixed-removal mode with a trigger below its target.
    #[error(
        "when using fixed harvest mode harv_trig >= harv_targ: {count} row(s) violate it, first at row {first_row} (trig {trigger} < targ {target})"
    )]
    TriggerBelowTarget {
        /// Number of offending rows.
        count: usize,
        /// First offending row.
        first_row: usize,
        /// Trigger at the first offending row.
        trigger: f64,
        /// Target at the first offending row.
        target: f64,
    },

    /// Auto-harvest table length differs from the weather table.
    #[error("harvest table must be the same length as the weather table: expected {expected}, got {got}")]
    LengthMismatch {
        /// Weather row count.
        expected: usize,
        /// Harvest row count.
        got: usize,
    },

    /// Auto-harvest table keys differ from the weather keys.
    #[error("harvest dates do not match the weather dates: first difference at row {row} (weather {expected}, harvest {found})")]
    SequenceMismatch {
        /// First differing row.
        row: usize,
        /// Weather key at that row.
        expected: DayKey,
        /// Harvest key at that row.
        found: DayKey,
    },

    /// A manual harvest event falls outside the simulated period.
    #[error("row {row}: harvest date {date} is outside the simulation period {start}..={end}")]
    EventOutsideTimeline {
        /// Row index.
        row: usize,
        /// Reconstructed event date.
        date: NaiveDate,
        /// First simulated date.
        start: NaiveDate,
        /// Last simulated date.
        end: NaiveDate,
    },

    /// An irrigation day outside 0..=366.
    #[error("entry {index}: irrigation day {value} outside 0..=366")]
    IrrigationDayOutOfRange {
        /// Position in the whitelist.
        index: usize,
        /// The offending value.
        value: i64,
    },
}

fn join(keys: &[String]) -> String {
    keys.join(", ")
}

fn noleap_hint(max: &u16) -> &'static str {
    if *max == 365 {
        " (leap days are expected to have been removed)"
    } else {
        ""
    }
}

fn leap_note(leap_days_removed: &bool) -> &'static str {
    if *leap_days_removed {
        "; note that leap days are expected to have been removed"
    } else {
        ""
    }
}

fn fmt_key(key: &Option<DayKey>) -> String {
    key.map_or_else(|| "nothing".to_string(), |k| k.to_string())
}

fn summarize(violations: &[Violation]) -> String {
    let details = violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    format!("{} check(s): {details}", violations.len())
}

/// Error type for all fallible operations in the pasture-schema crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    /// One or more checks failed for an input.
    #[error("{table} failed {}", summarize(.violations))]
    Invalid {
        /// The input that failed.
        table: TableKind,
        /// Every failed check, in the order it was found.
        violations: Vec<Violation>,
    },

    /// A column was added whose length differs from the table's.
    #[error("column '{name}' has {got} rows, table has {expected}")]
    ColumnLength {
        /// Column name.
        name: String,
        /// Table row count.
        expected: usize,
        /// Column row count.
        got: usize,
    },

    /// A column name was added twice.
    #[error("duplicate column '{name}'")]
    DuplicateColumn {
        /// Column name.
        name: String,
    },
}

impl SchemaError {
    /// Returns the failed checks, or an empty slice for construction errors.
    pub fn violations(&self) -> &[Violation] {
        match self {
            SchemaError::Invalid { violations, .. } => violations,
            _ => &[],
        }
    }
}
