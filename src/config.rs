use serde::Deserialize;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PastureConfig {
    /// Session run modes and sizing.
    #[serde(default)]
    pub session: SessionToml,

    /// Irrigation whitelist.
    #[serde(default)]
    pub irrigation: IrrigationToml,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionToml {
    /// `true`: the weather table carries PET. `false`: Penman inputs.
    #[serde(default = "default_true")]
    pub supply_pet: bool,
    /// `true`: one harvest row per day. `false`: sparse events.
    #[serde(default)]
    pub auto_harvest: bool,
    /// Leap days are removed from all tables.
    #[serde(default)]
    pub run_365_calendar: bool,
    /// Kernel buffer capacity in days.
    #[serde(default = "default_max_weather_days")]
    pub max_weather_days: usize,
    /// Kernel verbosity.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for SessionToml {
    fn default() -> Self {
        Self {
            supply_pet: true,
            auto_harvest: false,
            run_365_calendar: false,
            max_weather_days: default_max_weather_days(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IrrigationToml {
    /// Days of year on which irrigation may be applied.
    #[serde(default = "default_irrigation_days")]
    pub days: Vec<i64>,
}

impl Default for IrrigationToml {
    fn default() -> Self {
        Self {
            days: default_irrigation_days(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_max_weather_days() -> usize {
    pasture_session::DEFAULT_CAPACITY
}
fn default_irrigation_days() -> Vec<i64> {
    (1..=366).collect()
}
