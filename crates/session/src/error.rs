//! Error types for the pasture-session crate.

use pasture_calendar::CalendarError;
use pasture_harvest::HarvestError;
use pasture_schema::SchemaError;

use crate::kernel::KernelError;

/// Error type for all fallible operations in the pasture-session crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// Returned when a configuration value is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when more days are requested than the kernel buffers hold.
    #[error("weather data is too long: maximum is {capacity} days, got {n_days}")]
    CapacityExceeded {
        /// Requested day count.
        n_days: usize,
        /// Kernel capacity.
        capacity: usize,
    },

    /// Returned when the columns handed to a padded buffer differ in length.
    #[error("column {column} has {got} rows, expected {expected}")]
    RaggedColumns {
        /// Position of the offending column.
        column: usize,
        /// Length of the first column.
        expected: usize,
        /// Length of the offending column.
        got: usize,
    },

    /// Returned when a table lacks a column required for packing.
    #[error("cannot pack: column '{name}' is missing")]
    MissingColumn {
        /// Column name.
        name: &'static str,
    },

    /// Returned when a parameter required for packing is absent.
    #[error("cannot pack: parameter '{name}' is missing")]
    MissingParameter {
        /// Parameter name.
        name: &'static str,
    },

    /// Returned when the kernel's output dimensions disagree with the
    /// requested ones.
    #[error(
        "kernel output shape mismatch: expected {expected_days}x{expected_columns}, got {got_days}x{got_columns} ({len} values)"
    )]
    OutputShape {
        /// Requested day count.
        expected_days: usize,
        /// Requested column count.
        expected_columns: usize,
        /// Advertised day count.
        got_days: usize,
        /// Advertised column count.
        got_columns: usize,
        /// Length of the flat buffer.
        len: usize,
    },

    /// Returned when the output buffer length does not match the
    /// advertised dimensions.
    #[error("kernel output holds {len} values, not {n_days}x{n_columns}")]
    OutputLength {
        /// Advertised day count.
        n_days: usize,
        /// Advertised column count.
        n_columns: usize,
        /// Length of the flat buffer.
        len: usize,
    },

    /// Returned when an output column name is unknown.
    #[error("unknown output column '{name}'")]
    UnknownColumn {
        /// The requested name.
        name: String,
    },

    /// Wrapped validation error.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Wrapped harvest normalisation error.
    #[error(transparent)]
    Harvest(#[from] HarvestError),

    /// Wrapped calendar error.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Wrapped kernel failure.
    #[error(transparent)]
    Kernel(#[from] KernelError),
}
