//! Calendar-indexed simulation output.

use chrono::{Datelike, NaiveDate};
use ndarray::{Array2, ArrayView1};
use pasture_calendar::{CalendarMode, DayKey, to_doy};
use pasture_schema::WeatherTimeline;
use pasture_schema::keys::{OUTPUT_COLUMNS, key_index};
use tracing::warn;

use crate::error::SessionError;
use crate::kernel::KernelOutput;
use crate::reshape::reorder_kernel_output;

const YEAR_COLUMN: usize = 1;
const DOY_COLUMN: usize = 2;

/// Kernel output keyed to the simulated days.
///
/// Rows follow the weather timeline. [`dates`](Self::dates) are true
/// calendar dates in either calendar mode; in the normalised 365-day mode
/// the kernel's own `doy` column is kept as is and differs from the
/// dates' ordinal day after February of a leap year.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    keys: Vec<DayKey>,
    dates: Vec<NaiveDate>,
    values: Array2<f64>,
    mode: CalendarMode,
}

impl SimulationResult {
    /// Number of simulated days.
    pub fn n_days(&self) -> usize {
        self.values.nrows()
    }

    /// Output column names, left to right.
    pub fn column_names(&self) -> &'static [&'static str] {
        OUTPUT_COLUMNS
    }

    /// Day keys of the rows.
    pub fn keys(&self) -> &[DayKey] {
        &self.keys
    }

    /// Calendar date of each row.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// The calendar mode of the run.
    pub fn calendar_mode(&self) -> CalendarMode {
        self.mode
    }

    /// All values, `n_days × n_columns`.
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// One output series.
    ///
    /// # Errors
    ///
    /// [`SessionError::UnknownColumn`] if `name` is not an output column.
    pub fn column(&self, name: &str) -> Result<ArrayView1<'_, f64>, SessionError> {
        let idx = key_index(OUTPUT_COLUMNS, name).ok_or_else(|| SessionError::UnknownColumn {
            name: name.to_string(),
        })?;
        Ok(self.values.column(idx))
    }

    /// The kernel's `doy` column as integers.
    pub fn raw_doy(&self) -> Vec<i64> {
        self.values
            .column(DOY_COLUMN)
            .iter()
            .map(|&v| v.round() as i64)
            .collect()
    }

    /// Running total of `column` that restarts every year on
    /// `(start_month, start_day)`.
    ///
    /// A start of `(1, 1)` gives calendar-year totals, `(7, 1)` July–June
    /// water-year totals.
    ///
    /// # Errors
    ///
    /// [`SessionError::UnknownColumn`] for an unknown column,
    /// [`SessionError::Calendar`] if the start is not a day of the 365-day
    /// year.
    pub fn cumulative_annual(
        &self,
        column: &str,
        start_month: u8,
        start_day: u8,
    ) -> Result<Vec<f64>, SessionError> {
        to_doy(start_month, start_day)?;
        let series = self.column(column)?;
        let start = (u32::from(start_month), u32::from(start_day));

        let mut out = Vec::with_capacity(series.len());
        let mut season = None;
        let mut total = 0.0;
        for (date, &v) in self.dates.iter().zip(series.iter()) {
            let this_season = if (date.month(), date.day()) >= start {
                date.year()
            } else {
                date.year() - 1
            };
            if season != Some(this_season) {
                season = Some(this_season);
                total = 0.0;
            }
            total += v;
            out.push(total);
        }
        Ok(out)
    }
}

/// Reorders the kernel buffer and keys it to `timeline`.
///
/// Rows are keyed from the timeline. When the kernel's echoed `year`/`doy`
/// columns disagree with it a warning is logged.
///
/// # Errors
///
/// [`SessionError::OutputShape`] if the advertised dimensions differ from
/// the timeline length and output column count;
/// [`SessionError::OutputLength`] if the buffer length differs from their
/// product.
pub fn unpack_output(
    output: &KernelOutput,
    timeline: &WeatherTimeline,
) -> Result<SimulationResult, SessionError> {
    let (n_days, n_out) = (timeline.len(), OUTPUT_COLUMNS.len());
    if output.n_days != n_days || output.n_out != n_out {
        return Err(SessionError::OutputShape {
            expected_days: n_days,
            expected_columns: n_out,
            got_days: output.n_days,
            got_columns: output.n_out,
            len: output.data.len(),
        });
    }
    let values = reorder_kernel_output(&output.data, n_days, n_out)?;

    let echo_mismatches = timeline
        .keys()
        .iter()
        .zip(values.rows())
        .filter(|(key, row)| {
            row[YEAR_COLUMN] != f64::from(key.year()) || row[DOY_COLUMN] != f64::from(key.doy())
        })
        .count();
    if echo_mismatches > 0 {
        warn!(
            rows = echo_mismatches,
            "kernel year/doy output disagrees with the weather timeline"
        );
    }

    Ok(SimulationResult {
        keys: timeline.keys().to_vec(),
        dates: timeline.dates().to_vec(),
        values,
        mode: timeline.mode(),
    })
}
