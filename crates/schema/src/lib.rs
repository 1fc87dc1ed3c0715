//! # pasture-schema
//!
//! Schemas for the three inputs of a pasture simulation (parameters, the
//! daily weather table and the harvest table) plus the irrigation-day
//! whitelist, and the validators that check them against each other before
//! anything reaches the kernel.
//!
//! Every validator accumulates all failed checks of a stage into one
//! [`SchemaError::Invalid`]; [`validate_weather`] additionally returns the
//! [`WeatherTimeline`] that the harvest validator and the session packer
//! align against.
//!
//! | Module | Description |
//! |--------|-------------|
//! | `keys` | Canonical parameter, column and output name lists |
//! | `table` | Column-typed input tables |
//! | `params` | Parameter mapping and its checks |
//! | `weather` | Weather checks, timeline, irrigation ceiling warning |
//! | `harvest` | Harvest table checks |
//! | `irrigation` | Irrigation-day whitelist |
//! | `met` | Vapour pressure and wind height conversions |

mod error;
mod harvest;
mod irrigation;
pub mod keys;
mod met;
mod modes;
mod params;
mod table;
mod validate;
mod weather;

pub use error::{SchemaError, TableKind, Violation};
pub use harvest::validate_harvest;
pub use irrigation::{IrrigationDays, MAX_IRRIGATION_DAY, validate_irrigation_days};
pub use met::{vapour_pressure_from_rh, wind_speed_at_2m};
pub use modes::{HarvestMode, PetMode};
pub use params::{SimulationParameters, validate_params};
pub use table::{Column, Table};
pub use weather::{
    IrrigationCeilingWarning, WeatherTimeline, check_irrigation_ceiling, validate_weather,
};
