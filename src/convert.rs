//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use pasture_calendar::CalendarMode;
use pasture_schema::{HarvestMode, PetMode, validate_irrigation_days};
use pasture_session::SessionConfig;

use crate::config::{IrrigationToml, SessionToml};

/// Maps the `supply_pet` flag to a [`PetMode`].
pub fn parse_pet_mode(supply_pet: bool) -> PetMode {
    if supply_pet {
        PetMode::Supplied
    } else {
        PetMode::Penman
    }
}

/// Maps the `auto_harvest` flag to a [`HarvestMode`].
pub fn parse_harvest_mode(auto_harvest: bool) -> HarvestMode {
    if auto_harvest {
        HarvestMode::Auto
    } else {
        HarvestMode::Manual
    }
}

/// Maps the `run_365_calendar` flag to a [`CalendarMode`].
pub fn parse_calendar_mode(run_365_calendar: bool) -> CalendarMode {
    if run_365_calendar {
        CalendarMode::NoLeap
    } else {
        CalendarMode::Gregorian
    }
}

/// Builds a [`SessionConfig`] from the `[session]` table.
pub fn build_session_config(s: &SessionToml) -> Result<SessionConfig> {
    if s.max_weather_days == 0 {
        bail!("max_weather_days must be at least 1");
    }
    let cfg = SessionConfig::new()
        .with_pet_mode(parse_pet_mode(s.supply_pet))
        .with_harvest_mode(parse_harvest_mode(s.auto_harvest))
        .with_calendar_mode(parse_calendar_mode(s.run_365_calendar))
        .with_capacity(s.max_weather_days)
        .with_verbose(s.verbose);
    cfg.validate().context("invalid [session] configuration")?;
    Ok(cfg)
}

/// Checks the `[irrigation]` whitelist and returns its days.
pub fn build_irrigation_days(i: &IrrigationToml) -> Result<Vec<i64>> {
    validate_irrigation_days(&i.days).context("invalid [irrigation] days")?;
    Ok(i.days.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_modes() {
        assert_eq!(parse_pet_mode(false), PetMode::Penman);
        assert_eq!(parse_harvest_mode(true), HarvestMode::Auto);
        assert_eq!(parse_calendar_mode(true), CalendarMode::NoLeap);
        assert_eq!(parse_calendar_mode(false), CalendarMode::Gregorian);
    }

    #[test]
    fn session_table_converts() {
        let s = SessionToml {
            supply_pet: false,
            auto_harvest: true,
            run_365_calendar: true,
            max_weather_days: 500,
            verbose: true,
        };
        let cfg = build_session_config(&s).unwrap();
        assert_eq!(cfg.pet_mode(), PetMode::Penman);
        assert_eq!(cfg.harvest_mode(), HarvestMode::Auto);
        assert_eq!(cfg.calendar_mode(), CalendarMode::NoLeap);
        assert_eq!(cfg.capacity(), 500);
        assert!(cfg.verbose());
    }

    #[test]
    fn zero_capacity_rejected() {
        let s = SessionToml {
            max_weather_days: 0,
            ..SessionToml::default()
        };
        let err = build_session_config(&s).unwrap_err();
        assert!(err.to_string().contains("max_weather_days"));
    }

    #[test]
    fn irrigation_days_checked() {
        let ok = IrrigationToml { days: vec![0] };
        assert_eq!(build_irrigation_days(&ok).unwrap(), vec![0]);

        let bad = IrrigationToml { days: vec![1, 400] };
        let err = build_irrigation_days(&bad).unwrap_err();
        assert_eq!(err.to_string(), "invalid [irrigation] days");
        assert!(format!("{err:#}").contains("irrigation day 400 outside 0..=366"));
    }
}
