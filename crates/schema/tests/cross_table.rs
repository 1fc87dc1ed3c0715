//! Integration tests: weather contiguity and harvest alignment across
//! calendar modes.

use pasture_calendar::{CalendarMode, DayKey, expected_calendar};
use pasture_schema::{
    HarvestMode, PetMode, SchemaError, SimulationParameters, Table, TableKind, Violation,
    keys::{HARVEST_KEYS, WEATHER_KEYS_PET},
    validate_harvest, validate_weather,
};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn keys_between(first: DayKey, last: DayKey, mode: CalendarMode) -> Vec<DayKey> {
    expected_calendar(first, last, mode).unwrap()
}

/// Weather table with the PET schema over `keys`, all met columns constant.
fn weather_table(keys: &[DayKey]) -> Table {
    let n = keys.len();
    let mut t = Table::new()
        .with_column("year", keys.iter().map(|k| i64::from(k.year())).collect::<Vec<_>>())
        .unwrap()
        .with_column("doy", keys.iter().map(|k| i64::from(k.doy())).collect::<Vec<_>>())
        .unwrap();
    for &name in &WEATHER_KEYS_PET[2..] {
        t.push_column(name, vec![1.0; n]).unwrap();
    }
    t
}

/// Harvest table over `keys` with the given trigger and target on every row.
fn harvest_table(keys: &[DayKey], trig: f64, targ: f64) -> Table {
    let n = keys.len();
    let mut t = Table::new()
        .with_column("year", keys.iter().map(|k| i64::from(k.year())).collect::<Vec<_>>())
        .unwrap()
        .with_column("doy", keys.iter().map(|k| i64::from(k.doy())).collect::<Vec<_>>())
        .unwrap();
    for &name in &HARVEST_KEYS[2..] {
        let value = match name {
            "harv_trig" => trig,
            "harv_targ" => targ,
            "reseed_trig" => -1.0,
            _ => 0.0,
        };
        t.push_column(name, vec![value; n]).unwrap();
    }
    t
}

fn fixed_removal(on: bool) -> SimulationParameters {
    SimulationParameters::new().with("fixed_removal", if on { 1.0 } else { 0.0 })
}

// ---------------------------------------------------------------------------
// Contiguity
// ---------------------------------------------------------------------------

#[test]
fn every_single_skip_is_rejected() {
    for mode in [CalendarMode::Gregorian, CalendarMode::NoLeap] {
        let keys = keys_between(DayKey::new(2023, 355), DayKey::new(2024, 70), mode);
        assert!(validate_weather(&weather_table(&keys), PetMode::Supplied, mode, 1000).is_ok());

        // Bump each interior row's doy by one so it skips a day.
        for row in 1..keys.len() - 1 {
            let mut mutated = keys.clone();
            let k = mutated[row];
            mutated[row] = DayKey::new(k.year(), k.doy() + 1);
            let result = validate_weather(&weather_table(&mutated), PetMode::Supplied, mode, 1000);
            assert!(result.is_err(), "{mode:?}: skip at row {row} was accepted");
        }
    }
}

#[test]
fn noleap_gap_error_mentions_removed_leap_days() {
    let keys: Vec<DayKey> = (50..=70)
        .filter(|&d| d != 60)
        .map(|d| DayKey::new(2024, d))
        .collect();
    let err = validate_weather(
        &weather_table(&keys),
        PetMode::Supplied,
        CalendarMode::NoLeap,
        1000,
    )
    .unwrap_err();
    assert!(err.to_string().contains("leap days are expected to have been removed"));
    match err {
        SchemaError::Invalid { table, violations } => {
            assert_eq!(table, TableKind::Weather);
            assert_eq!(
                violations,
                vec![Violation::NotContiguous {
                    row: 10,
                    expected: Some(DayKey::new(2024, 60)),
                    found: Some(DayKey::new(2024, 61)),
                    leap_days_removed: true,
                }]
            );
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn far_apart_endpoints_rejected_at_second_row() {
    for mode in [CalendarMode::Gregorian, CalendarMode::NoLeap] {
        let keys = [DayKey::new(-200_000, 1), DayKey::new(200_000, 1)];
        let err = validate_weather(&weather_table(&keys), PetMode::Supplied, mode, 36_600)
            .unwrap_err();
        assert_eq!(
            err.violations(),
            &[Violation::NotContiguous {
                row: 1,
                expected: Some(DayKey::new(-200_000, 2)),
                found: Some(DayKey::new(200_000, 1)),
                leap_days_removed: mode == CalendarMode::NoLeap,
            }]
        );
    }
}

#[test]
fn multi_year_noleap_timeline_has_365_days_per_year() {
    let mode = CalendarMode::NoLeap;
    let keys = keys_between(DayKey::new(2023, 1), DayKey::new(2025, 365), mode);
    let tl = validate_weather(&weather_table(&keys), PetMode::Supplied, mode, 36_600).unwrap();
    assert_eq!(tl.len(), 3 * 365);
    assert_eq!(tl.end().to_string(), "2025-12-31");
}

#[test]
fn capacity_is_inclusive() {
    let mode = CalendarMode::Gregorian;
    let keys = keys_between(DayKey::new(2023, 1), DayKey::new(2023, 10), mode);
    let table = weather_table(&keys);
    assert!(validate_weather(&table, PetMode::Supplied, mode, 10).is_ok());

    let err = validate_weather(&table, PetMode::Supplied, mode, 9).unwrap_err();
    assert_eq!(
        err.violations(),
        &[Violation::CapacityExceeded {
            n_days: 10,
            capacity: 9,
        }]
    );
}

// ---------------------------------------------------------------------------
// Harvest
// ---------------------------------------------------------------------------

#[test]
fn fixed_removal_toggle_decides_trigger_check() {
    let mode = CalendarMode::Gregorian;
    let keys = keys_between(DayKey::new(2023, 1), DayKey::new(2023, 30), mode);
    let tl = validate_weather(&weather_table(&keys), PetMode::Supplied, mode, 100).unwrap();
    let events = harvest_table(&[DayKey::new(2023, 10)], 2000.0, 2500.0);

    assert!(validate_harvest(&events, &fixed_removal(false), &tl, HarvestMode::Manual).is_ok());
    let err =
        validate_harvest(&events, &fixed_removal(true), &tl, HarvestMode::Manual).unwrap_err();
    assert!(
        err.to_string()
            .contains("when using fixed harvest mode harv_trig >= harv_targ")
    );
}

#[test]
fn auto_harvest_alignment() {
    let mode = CalendarMode::NoLeap;
    let keys = keys_between(DayKey::new(2024, 1), DayKey::new(2024, 365), mode);
    let tl = validate_weather(&weather_table(&keys), PetMode::Supplied, mode, 1000).unwrap();
    let params = fixed_removal(false);

    assert!(
        validate_harvest(&harvest_table(&keys, 0.0, 0.0), &params, &tl, HarvestMode::Auto)
            .is_ok()
    );

    let mut shifted = keys.clone();
    shifted[200] = DayKey::new(2024, 1);
    let err = validate_harvest(
        &harvest_table(&shifted, 0.0, 0.0),
        &params,
        &tl,
        HarvestMode::Auto,
    )
    .unwrap_err();
    assert!(matches!(
        err.violations(),
        [Violation::SequenceMismatch { row: 200, .. }]
    ));
}

#[test]
fn noleap_harvest_rejects_day_366() {
    let mode = CalendarMode::NoLeap;
    let keys = keys_between(DayKey::new(2024, 300), DayKey::new(2024, 365), mode);
    let tl = validate_weather(&weather_table(&keys), PetMode::Supplied, mode, 1000).unwrap();
    let events = harvest_table(&[DayKey::new(2024, 366)], 0.0, 0.0);
    let err =
        validate_harvest(&events, &fixed_removal(false), &tl, HarvestMode::Manual).unwrap_err();
    assert_eq!(
        err.violations(),
        &[Violation::DoyOutOfRange {
            row: 0,
            doy: 366,
            max: 365,
        }]
    );
}

#[test]
fn manual_events_on_boundaries_are_inside() {
    let mode = CalendarMode::Gregorian;
    let keys = keys_between(DayKey::new(2020, 100), DayKey::new(2020, 200), mode);
    let tl = validate_weather(&weather_table(&keys), PetMode::Supplied, mode, 1000).unwrap();
    let events = harvest_table(&[DayKey::new(2020, 100), DayKey::new(2020, 200)], 0.0, 0.0);
    assert!(validate_harvest(&events, &fixed_removal(false), &tl, HarvestMode::Manual).is_ok());

    let late = harvest_table(&[DayKey::new(2020, 201)], 0.0, 0.0);
    assert!(validate_harvest(&late, &fixed_removal(false), &tl, HarvestMode::Manual).is_err());
}
