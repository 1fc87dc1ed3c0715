//! Densification of harvest input onto the weather timeline.

use pasture_schema::{HarvestMode, Table, WeatherTimeline};
use tracing::{debug, warn};

use crate::action::{HarvestAction, ReseedAction};
use crate::control::{DailyHarvestControl, HarvestControl};
use crate::error::HarvestError;
use crate::event::{HarvestColumns, HarvestEvent, events_from_table};

/// Scatters sparse events onto the timeline.
///
/// Every day starts as [`HarvestAction::NoAction`] and
/// [`ReseedAction::NoReseed`] with an undefined weed fraction. Each event
/// overwrites the day it is keyed to; when two events share a day the later
/// one wins. Weed fractions are then filled: if the first day has none it
/// takes the first defined value (with a warning), and every later gap
/// carries the previous day's value forward. With no defined weed fraction
/// at all every day gets 0.
///
/// # Errors
///
/// [`HarvestError::EventOutsideTimeline`] if an event's day is not simulated.
#[tracing::instrument(skip_all, fields(events = events.len(), days = timeline.len()))]
pub fn normalize_manual(
    events: &[HarvestEvent],
    timeline: &WeatherTimeline,
) -> Result<HarvestControl, HarvestError> {
    let n = timeline.len();
    let mut harvest = vec![HarvestAction::NoAction; n];
    let mut reseed = vec![ReseedAction::NoReseed; n];
    let mut weed: Vec<Option<f64>> = vec![None; n];
    let mut seen = vec![false; n];

    for event in events {
        let row = timeline
            .position(event.key)
            .ok_or(HarvestError::EventOutsideTimeline { key: event.key })?;
        if seen[row] {
            debug!(key = %event.key, "several harvest events on one day, keeping the last");
        }
        seen[row] = true;
        harvest[row] = event.harvest;
        reseed[row] = event.reseed;
        weed[row] = event.weed_dm_frac;
    }

    let weed = fill_weed_fraction(&weed);
    let days = timeline
        .keys()
        .iter()
        .zip(harvest)
        .zip(reseed)
        .zip(weed)
        .map(|(((&key, harvest), reseed), weed_dm_frac)| DailyHarvestControl {
            key,
            harvest,
            reseed,
            weed_dm_frac,
        })
        .collect();
    Ok(HarvestControl::from_days(days))
}

/// Reads a per-day harvest table that is already aligned with the timeline.
///
/// Undefined weed fractions are filled as in [`normalize_manual`].
///
/// # Errors
///
/// [`HarvestError::LengthMismatch`] or [`HarvestError::KeyMismatch`] if the
/// table is not keyed exactly like the timeline, plus the column errors of
/// [`events_from_table`].
#[tracing::instrument(skip_all, fields(rows = table.n_rows(), days = timeline.len()))]
pub fn from_auto_table(
    table: &Table,
    timeline: &WeatherTimeline,
) -> Result<HarvestControl, HarvestError> {
    let cols = HarvestColumns::read(table)?;
    if cols.len() != timeline.len() {
        return Err(HarvestError::LengthMismatch {
            expected: timeline.len(),
            got: cols.len(),
        });
    }
    let mut events = Vec::with_capacity(cols.len());
    for (row, &expected) in timeline.keys().iter().enumerate() {
        let event = cols.event(row)?;
        if event.key != expected {
            return Err(HarvestError::KeyMismatch {
                row,
                expected,
                found: event.key,
            });
        }
        events.push(event);
    }
    let weed: Vec<Option<f64>> = events.iter().map(|e| e.weed_dm_frac).collect();
    let days = events
        .into_iter()
        .zip(fill_weed_fraction(&weed))
        .map(|(e, weed_dm_frac)| DailyHarvestControl {
            key: e.key,
            harvest: e.harvest,
            reseed: e.reseed,
            weed_dm_frac,
        })
        .collect();
    Ok(HarvestControl::from_days(days))
}

/// Builds the dense control array for either harvest mode.
///
/// # Errors
///
/// See [`normalize_manual`] and [`from_auto_table`].
pub fn build_harvest_control(
    table: &Table,
    timeline: &WeatherTimeline,
    mode: HarvestMode,
) -> Result<HarvestControl, HarvestError> {
    let control = match mode {
        HarvestMode::Manual => normalize_manual(&events_from_table(table)?, timeline)?,
        HarvestMode::Auto => from_auto_table(table, timeline)?,
    };
    debug!(
        days = control.len(),
        harvests = control.scheduled_harvests(),
        "harvest control built"
    );
    Ok(control)
}

fn fill_weed_fraction(weed: &[Option<f64>]) -> Vec<f64> {
    let first_defined = weed.iter().flatten().copied().next();
    let mut last = match (weed.first().copied().flatten(), first_defined) {
        (Some(v), _) => v,
        (None, Some(v)) => {
            warn!(
                weed_dm_frac = v,
                "weed_dm_frac undefined on the first day, using the first defined value"
            );
            v
        }
        (None, None) => {
            debug!("no weed_dm_frac defined, using 0");
            0.0
        }
    };
    weed.iter()
        .map(|w| {
            if let Some(v) = *w {
                last = v;
            }
            last
        })
        .collect()
}
