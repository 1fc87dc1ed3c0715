//! Weather table validation and the simulated timeline.

use std::fmt;

use pasture_calendar::{CalendarMode, DayKey, NaiveDate, reconstruct_date};
use tracing::{debug, warn};

use crate::error::{SchemaError, TableKind, Violation};
use crate::keys::ABS_MAX_IRR_KEY;
use crate::modes::PetMode;
use crate::params::SimulationParameters;
use crate::table::Table;
use crate::validate::{
    ValidationCollector, check_integer_columns, check_key_set, check_missing, read_day_keys,
};

/// The validated sequence of simulated days.
///
/// Produced only by [`validate_weather`], so the keys are strictly
/// increasing and contiguous under [`mode`](Self::mode).
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherTimeline {
    keys: Vec<DayKey>,
    dates: Vec<NaiveDate>,
    mode: CalendarMode,
}

impl WeatherTimeline {
    /// Day keys in simulation order.
    pub fn keys(&self) -> &[DayKey] {
        &self.keys
    }

    /// Reconstructed calendar dates, parallel to [`keys`](Self::keys).
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// The calendar mode the keys were read under.
    pub fn mode(&self) -> CalendarMode {
        self.mode
    }

    /// Number of simulated days.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always `false` for a validated timeline.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// First simulated date.
    pub fn start(&self) -> NaiveDate {
        self.dates[0]
    }

    /// Last simulated date.
    pub fn end(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    /// Row index of `key`, if it is simulated.
    pub fn position(&self, key: DayKey) -> Option<usize> {
        self.keys.binary_search(&key).ok()
    }

    /// Whether `date` lies within `start()..=end()`.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.start() <= date && date <= self.end()
    }
}

/// Validates a weather table and derives its timeline.
///
/// Checks run in stages; each stage only runs if the previous one passed:
///
/// 1. non-empty, exact key set for `pet_mode`;
/// 2. integer `year`/`doy`, no missing values, at most `capacity` rows;
/// 3. every `doy` within the range `calendar_mode` allows and every key a
///    real date;
/// 4. the keys equal the contiguous calendar from the first to the last
///    simulated day.
///
/// # Errors
///
/// Returns [`SchemaError::Invalid`] with the violations of the first
/// failing stage.
#[tracing::instrument(skip(table), fields(rows = table.n_rows()))]
pub fn validate_weather(
    table: &Table,
    pet_mode: PetMode,
    calendar_mode: CalendarMode,
    capacity: usize,
) -> Result<WeatherTimeline, SchemaError> {
    let mut c = ValidationCollector::new(TableKind::Weather);

    if table.is_empty() {
        c.push(Violation::Empty);
    }
    check_key_set(&mut c, table.column_names(), pet_mode.weather_keys());
    c.checkpoint()?;

    check_integer_columns(&mut c, table, &["year", "doy"]);
    check_missing(&mut c, table);
    if table.n_rows() > capacity {
        c.push(Violation::CapacityExceeded {
            n_days: table.n_rows(),
            capacity,
        });
    }
    c.checkpoint()?;

    let keys = read_day_keys(&mut c, table, calendar_mode.max_doy());
    c.checkpoint()?;

    let mut dates = Vec::with_capacity(keys.len());
    for (row, &key) in keys.iter().enumerate() {
        match reconstruct_date(key, calendar_mode) {
            Ok(date) => dates.push(date),
            Err(_) => c.push(Violation::InvalidDate { row, key }),
        }
    }
    c.checkpoint()?;

    check_contiguous(&mut c, &keys, calendar_mode);
    c.checkpoint()?;

    debug!(
        days = keys.len(),
        first = %keys[0],
        last = %keys[keys.len() - 1],
        "weather timeline validated"
    );
    Ok(WeatherTimeline {
        keys,
        dates,
        mode: calendar_mode,
    })
}

/// Walks the keys from the earliest one, comparing each row with the
/// successor of the row before. Work is bounded by the row count however
/// far apart the endpoints are.
fn check_contiguous(c: &mut ValidationCollector, keys: &[DayKey], mode: CalendarMode) {
    let Some(&first) = keys.iter().min() else {
        return;
    };
    let mut expected = Some(first);
    for (row, &key) in keys.iter().enumerate() {
        if expected != Some(key) {
            c.push(Violation::NotContiguous {
                row,
                expected,
                found: Some(key),
                leap_days_removed: mode == CalendarMode::NoLeap,
            });
            return;
        }
        expected = mode.next_key(key);
    }
}

/// Days on which the requested irrigation exceeds the absolute ceiling.
#[derive(Debug, Clone, PartialEq)]
pub struct IrrigationCeilingWarning {
    /// Number of days above the ceiling.
    pub days: usize,
    /// Largest requested value.
    pub max_requested: f64,
    /// The `abs_max_irr` parameter.
    pub ceiling: f64,
}

impl fmt::Display for IrrigationCeilingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "max_irr exceeds abs_max_irr ({}) on {} day(s), up to {}; the excess cannot be applied \
             to the field but may still be captured into storage",
            self.ceiling, self.days, self.max_requested
        )
    }
}

/// Soft check of `max_irr` against the `abs_max_irr` parameter.
///
/// Emits a `warn!` event and returns the details when any day exceeds the
/// ceiling. Missing columns or parameters yield `None`; they are caught by
/// the hard checks.
pub fn check_irrigation_ceiling(
    table: &Table,
    params: &SimulationParameters,
) -> Option<IrrigationCeilingWarning> {
    let ceiling = params.get(ABS_MAX_IRR_KEY)?;
    let max_irr = table.float_column("max_irr")?;
    let above: Vec<f64> = max_irr.into_iter().filter(|&v| v > ceiling).collect();
    if above.is_empty() {
        return None;
    }
    let warning = IrrigationCeilingWarning {
        days: above.len(),
        max_requested: above.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        ceiling,
    };
    warn!(%warning, "irrigation ceiling");
    Some(warning)
}
