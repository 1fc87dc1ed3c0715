//! The irrigation-day whitelist.

use crate::error::{SchemaError, TableKind, Violation};
use crate::validate::ValidationCollector;

/// Largest day-of-year accepted in the whitelist.
pub const MAX_IRRIGATION_DAY: u16 = 366;

/// Days of year on which irrigation may be applied at all.
///
/// Day `0` never matches a simulated day, so `[0]` disables irrigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrrigationDays {
    days: Vec<u16>,
}

impl IrrigationDays {
    /// Every day of the year.
    pub fn all_year() -> Self {
        Self {
            days: (1..=MAX_IRRIGATION_DAY).collect(),
        }
    }

    /// A whitelist that never matches.
    pub fn never() -> Self {
        Self { days: vec![0] }
    }

    /// The whitelisted days, in caller order.
    pub fn as_slice(&self) -> &[u16] {
        &self.days
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always `false`; an empty whitelist is rejected.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Whether irrigation may be applied on `doy`.
    pub fn contains(&self, doy: u16) -> bool {
        doy != 0 && self.days.contains(&doy)
    }
}

/// Validates a whitelist: non-empty with every value in `0..=366`.
///
/// # Errors
///
/// Returns [`SchemaError::Invalid`] naming every out-of-range entry.
pub fn validate_irrigation_days(values: &[i64]) -> Result<IrrigationDays, SchemaError> {
    let mut c = ValidationCollector::new(TableKind::IrrigationDays);
    if values.is_empty() {
        c.push(Violation::Empty);
    }
    let mut days = Vec::with_capacity(values.len());
    for (index, &value) in values.iter().enumerate() {
        match u16::try_from(value) {
            Ok(d) if d <= MAX_IRRIGATION_DAY => days.push(d),
            _ => c.push(Violation::IrrigationDayOutOfRange { index, value }),
        }
    }
    c.finish()?;
    Ok(IrrigationDays { days })
}
