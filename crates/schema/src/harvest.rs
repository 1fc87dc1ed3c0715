//! Harvest table validation against the weather timeline.

use tracing::debug;

use crate::error::{SchemaError, TableKind, Violation};
use crate::keys::HARVEST_KEYS;
use crate::modes::HarvestMode;
use crate::params::SimulationParameters;
use crate::table::Table;
use crate::validate::{
    ValidationCollector, check_integer_columns, check_key_set, check_missing, read_day_keys,
};
use crate::weather::WeatherTimeline;
use pasture_calendar::reconstruct_date;

/// Validates a harvest table.
///
/// The calendar mode is taken from `timeline`. In [`HarvestMode::Auto`] the
/// table must carry exactly the timeline's keys in order. In
/// [`HarvestMode::Manual`] it may be empty, and every event must fall on a
/// simulated date.
///
/// # Errors
///
/// Returns [`SchemaError::Invalid`] with the violations of the first
/// failing stage.
#[tracing::instrument(skip_all, fields(rows = table.n_rows(), mode = ?mode))]
pub fn validate_harvest(
    table: &Table,
    params: &SimulationParameters,
    timeline: &WeatherTimeline,
    mode: HarvestMode,
) -> Result<(), SchemaError> {
    let mut c = ValidationCollector::new(TableKind::Harvest);

    check_key_set(&mut c, table.column_names(), HARVEST_KEYS);
    c.checkpoint()?;

    check_integer_columns(&mut c, table, &["year", "doy"]);
    check_missing(&mut c, table);
    c.checkpoint()?;

    let keys = read_day_keys(&mut c, table, timeline.mode().max_doy());
    c.checkpoint()?;

    check_fractions(&mut c, table);
    if params.fixed_removal() {
        check_trigger_above_target(&mut c, table);
    }

    match mode {
        HarvestMode::Auto => {
            if keys.len() != timeline.len() {
                c.push(Violation::LengthMismatch {
                    expected: timeline.len(),
                    got: keys.len(),
                });
            } else if let Some(row) = keys.iter().zip(timeline.keys()).position(|(h, w)| h != w) {
                c.push(Violation::SequenceMismatch {
                    row,
                    expected: timeline.keys()[row],
                    found: keys[row],
                });
            }
        }
        HarvestMode::Manual => {
            for (row, &key) in keys.iter().enumerate() {
                match reconstruct_date(key, timeline.mode()) {
                    Ok(date) if timeline.contains_date(date) => {}
                    Ok(date) => c.push(Violation::EventOutsideTimeline {
                        row,
                        date,
                        start: timeline.start(),
                        end: timeline.end(),
                    }),
                    Err(_) => c.push(Violation::InvalidDate { row, key }),
                }
            }
        }
    }

    c.finish()?;
    debug!(events = keys.len(), "harvest table validated");
    Ok(())
}

fn check_fractions(c: &mut ValidationCollector, table: &Table) {
    let Some(frac) = table.float_column("frac_harv") else {
        return;
    };
    let offending: Vec<(usize, f64)> = frac
        .into_iter()
        .enumerate()
        .filter(|&(_, v)| v > 1.0)
        .collect();
    if let Some(&(first_row, value)) = offending.first() {
        c.push(Violation::FractionAboveOne {
            count: offending.len(),
            first_row,
            value,
        });
    }
}

fn check_trigger_above_target(c: &mut ValidationCollector, table: &Table) {
    let (Some(trig), Some(targ)) = (
        table.float_column("harv_trig"),
        table.float_column("harv_targ"),
    ) else {
        return;
    };
    let offending: Vec<usize> = trig
        .iter()
        .zip(&targ)
        .enumerate()
        .filter(|(_, (t, g))| t < g)
        .map(|(row, _)| row)
        .collect();
    if let Some(&first_row) = offending.first() {
        c.push(Violation::TriggerBelowTarget {
            count: offending.len(),
            first_row,
            trigger: trig[first_row],
            target: targ[first_row],
        });
    }
}

#[cfg(test)]
mod tests {
    use pasture_calendar::{CalendarMode, DayKey};

    use super::*;
    use crate::keys::{FIXED_REMOVAL_KEY, WEATHER_KEYS_PET};
    use crate::modes::PetMode;
    use crate::weather::validate_weather;

    fn timeline(mode: CalendarMode) -> WeatherTimeline {
        let n = 10;
        let mut t = Table::new()
            .with_column("year", vec![2024_i64; n])
            .unwrap()
            .with_column("doy", (55..55 + n as i64).collect::<Vec<_>>())
            .unwrap();
        for &k in &WEATHER_KEYS_PET[2..] {
            t.push_column(k, vec![0.0; n]).unwrap();
        }
        validate_weather(&t, PetMode::Supplied, mode, 100).unwrap()
    }

    fn events(keys: &[(i64, i64)], trig: f64, targ: f64) -> Table {
        let n = keys.len();
        Table::new()
            .with_column("year", keys.iter().map(|k| k.0).collect::<Vec<_>>())
            .unwrap()
            .with_column("doy", keys.iter().map(|k| k.1).collect::<Vec<_>>())
            .unwrap()
            .with_column("frac_harv", vec![0.5; n])
            .unwrap()
            .with_column("harv_trig", vec![trig; n])
            .unwrap()
            .with_column("harv_targ", vec![targ; n])
            .unwrap()
            .with_column("weed_dm_frac", vec![0.0; n])
            .unwrap()
            .with_column("reseed_trig", vec![-1.0; n])
            .unwrap()
            .with_column("reseed_basal", vec![0.0; n])
            .unwrap()
    }

    #[test]
    fn empty_manual_table_accepted() {
        let tl = timeline(CalendarMode::Gregorian);
        let params = SimulationParameters::new();
        assert!(validate_harvest(&events(&[], 0.0, 0.0), &params, &tl, HarvestMode::Manual).is_ok());
    }

    #[test]
    fn fixed_removal_enforces_trigger_order() {
        let tl = timeline(CalendarMode::Gregorian);
        let table = events(&[(2024, 56), (2024, 60)], 1000.0, 1500.0);

        let off = SimulationParameters::new().with(FIXED_REMOVAL_KEY, 0.0);
        assert!(validate_harvest(&table, &off, &tl, HarvestMode::Manual).is_ok());

        let on = SimulationParameters::new().with(FIXED_REMOVAL_KEY, 1.0);
        let err = validate_harvest(&table, &on, &tl, HarvestMode::Manual).unwrap_err();
        assert_eq!(
            err.violations(),
            &[Violation::TriggerBelowTarget {
                count: 2,
                first_row: 0,
                trigger: 1000.0,
                target: 1500.0,
            }]
        );
    }

    #[test]
    fn fraction_above_one_rejected() {
        let tl = timeline(CalendarMode::Gregorian);
        let mut table = events(&[(2024, 56), (2024, 57)], 0.0, 0.0);
        table.set_column("frac_harv", vec![0.2, 1.5]).unwrap();
        let err =
            validate_harvest(&table, &SimulationParameters::new(), &tl, HarvestMode::Manual)
                .unwrap_err();
        assert_eq!(
            err.violations(),
            &[Violation::FractionAboveOne {
                count: 1,
                first_row: 1,
                value: 1.5,
            }]
        );
    }

    #[test]
    fn manual_event_outside_period_rejected() {
        let tl = timeline(CalendarMode::Gregorian);
        let table = events(&[(2024, 70)], 0.0, 0.0);
        let err =
            validate_harvest(&table, &SimulationParameters::new(), &tl, HarvestMode::Manual)
                .unwrap_err();
        assert!(matches!(
            err.violations(),
            [Violation::EventOutsideTimeline { row: 0, .. }]
        ));
    }

    #[test]
    fn auto_requires_identical_keys() {
        let tl = timeline(CalendarMode::NoLeap);
        let mut keys: Vec<(i64, i64)> = tl
            .keys()
            .iter()
            .map(|k| (i64::from(k.year()), i64::from(k.doy())))
            .collect();
        let params = SimulationParameters::new();
        assert!(validate_harvest(&events(&keys, 0.0, 0.0), &params, &tl, HarvestMode::Auto).is_ok());

        keys[4].1 += 1;
        let err =
            validate_harvest(&events(&keys, 0.0, 0.0), &params, &tl, HarvestMode::Auto).unwrap_err();
        assert_eq!(
            err.violations(),
            &[Violation::SequenceMismatch {
                row: 4,
                expected: DayKey::new(2024, 59),
                found: DayKey::new(2024, 60),
            }]
        );

        keys.pop();
        let err =
            validate_harvest(&events(&keys, 0.0, 0.0), &params, &tl, HarvestMode::Auto).unwrap_err();
        assert_eq!(
            err.violations(),
            &[Violation::LengthMismatch {
                expected: 10,
                got: 9,
            }]
        );
    }
}
