//! # pasture
//!
//! Session builder for a daily pasture-growth and field-water simulation
//! kernel. The work is split across the workspace crates, re-exported
//! here:
//!
//! | Crate | Description |
//! |-------|-------------|
//! | [`calendar`] | Day-of-year lookup and the Gregorian / 365-day calendar modes |
//! | [`schema`] | Input tables, key lists and cross-table validation |
//! | [`harvest`] | Sparse harvest events to a dense daily control array |
//! | [`session`] | Packing, the kernel call and calendar-indexed results |
//!
//! This crate adds file configuration ([`load_config`]) and logging setup
//! ([`logging::init`]).

pub mod config;
pub mod convert;
pub mod logging;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

pub use pasture_calendar as calendar;
pub use pasture_harvest as harvest;
pub use pasture_schema as schema;
pub use pasture_session as session;

use crate::config::PastureConfig;
use pasture_schema::{SimulationParameters, Table};
use pasture_session::{GrowthKernel, SessionInputs, SimulationResult, run_session};

/// Reads and parses a TOML configuration file.
pub fn load_config(path: &Path) -> Result<PastureConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}

/// Runs one session with the modes and whitelist from `config`.
pub fn simulate<K: GrowthKernel + ?Sized>(
    kernel: &K,
    config: &PastureConfig,
    params: &SimulationParameters,
    weather: &Table,
    harvest: &Table,
) -> Result<SimulationResult> {
    let session_cfg = convert::build_session_config(&config.session)?;
    let irrigation_days = convert::build_irrigation_days(&config.irrigation)?;
    info!(
        days = weather.n_rows(),
        calendar = ?session_cfg.calendar_mode(),
        "running session"
    );
    let result = run_session(
        kernel,
        &session_cfg,
        SessionInputs {
            params,
            weather,
            harvest,
            irrigation_days: &irrigation_days,
        },
    )
    .context("simulation session failed")?;
    Ok(result)
}
