//! Conversion of validated inputs into kernel buffers.

use pasture_harvest::{HarvestAction, HarvestControl, ReseedAction};
use pasture_schema::keys::{HARVEST_KEYS, PARAM_KEYS};
use pasture_schema::{IrrigationDays, PetMode, SimulationParameters, Table};

use crate::buffer::PaddedMatrix;
use crate::error::SessionError;

/// Trigger value the kernel reads as "skip this check".
pub const NO_ACTION_TRIGGER: f64 = -1.0;

/// Parameter values in canonical kernel order.
///
/// # Errors
///
/// [`SessionError::MissingParameter`] for the first absent key.
pub fn pack_parameters(params: &SimulationParameters) -> Result<Vec<f64>, SessionError> {
    PARAM_KEYS
        .iter()
        .map(|&name| {
            params
                .get(name)
                .ok_or(SessionError::MissingParameter { name })
        })
        .collect()
}

/// Weather columns in the canonical order for `pet_mode`, padded to
/// `capacity` rows.
///
/// # Errors
///
/// [`SessionError::MissingColumn`] or the buffer errors of
/// [`PaddedMatrix::from_columns`].
pub fn pack_weather(
    table: &Table,
    pet_mode: PetMode,
    capacity: usize,
) -> Result<PaddedMatrix, SessionError> {
    let columns = pet_mode
        .weather_keys()
        .iter()
        .map(|&name| {
            table
                .float_column(name)
                .ok_or(SessionError::MissingColumn { name })
        })
        .collect::<Result<Vec<_>, _>>()?;
    PaddedMatrix::from_columns(&columns, capacity)
}

/// The dense harvest control as a padded matrix in harvest-key order.
///
/// [`HarvestAction::NoAction`] packs as fraction 0, trigger
/// [`NO_ACTION_TRIGGER`], target 0; [`ReseedAction::NoReseed`] as trigger
/// [`NO_ACTION_TRIGGER`], basal 0.
///
/// # Errors
///
/// [`SessionError::CapacityExceeded`] if the control is longer than
/// `capacity`.
pub fn pack_harvest(control: &HarvestControl, capacity: usize) -> Result<PaddedMatrix, SessionError> {
    let mut columns = vec![Vec::with_capacity(control.len()); HARVEST_KEYS.len()];
    for day in control {
        let (frac, trig, targ) = match day.harvest {
            HarvestAction::NoAction => (0.0, NO_ACTION_TRIGGER, 0.0),
            HarvestAction::Scheduled {
                fraction,
                trigger,
                target,
            } => (fraction, trigger, target),
        };
        let (reseed_trig, reseed_basal) = match day.reseed {
            ReseedAction::NoReseed => (NO_ACTION_TRIGGER, 0.0),
            ReseedAction::Reseed { trigger, basal } => (trigger, basal),
        };
        let row = [
            f64::from(day.key.year()),
            f64::from(day.key.doy()),
            frac,
            trig,
            targ,
            day.weed_dm_frac,
            reseed_trig,
            reseed_basal,
        ];
        for (col, v) in columns.iter_mut().zip(row) {
            col.push(v);
        }
    }
    PaddedMatrix::from_columns(&columns, capacity)
}

/// Whitelist entries as the kernel's integer type.
pub fn pack_irrigation_days(days: &IrrigationDays) -> Vec<i32> {
    days.as_slice().iter().map(|&d| i32::from(d)).collect()
}
