//! Session preparation and the single kernel call.

use pasture_harvest::{HarvestControl, build_harvest_control};
use pasture_schema::keys::OUTPUT_COLUMNS;
use pasture_schema::{
    IrrigationCeilingWarning, SimulationParameters, Table, WeatherTimeline,
    check_irrigation_ceiling, validate_harvest, validate_irrigation_days, validate_params,
    validate_weather,
};
use tracing::{debug, info};

use crate::buffer::PaddedMatrix;
use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::kernel::{GrowthKernel, KernelInput};
use crate::pack::{pack_harvest, pack_irrigation_days, pack_parameters, pack_weather};
use crate::result::{SimulationResult, unpack_output};

/// The caller's inputs for one run. Nothing here is modified.
#[derive(Debug, Clone, Copy)]
pub struct SessionInputs<'a> {
    /// Model parameters.
    pub params: &'a SimulationParameters,
    /// Daily weather and irrigation policy.
    pub weather: &'a Table,
    /// Harvest events (manual) or daily harvest rows (auto).
    pub harvest: &'a Table,
    /// Days of year on which irrigation may happen.
    pub irrigation_days: &'a [i64],
}

/// A validated, packed session ready for the kernel.
#[derive(Debug, Clone)]
pub struct PreparedSession {
    config: SessionConfig,
    timeline: WeatherTimeline,
    control: HarvestControl,
    params: Vec<f64>,
    weather: PaddedMatrix,
    harvest: PaddedMatrix,
    irrigation_days: Vec<i32>,
    warnings: Vec<IrrigationCeilingWarning>,
}

impl PreparedSession {
    /// The configuration the session was prepared with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The validated weather timeline.
    pub fn timeline(&self) -> &WeatherTimeline {
        &self.timeline
    }

    /// The dense harvest control array.
    pub fn harvest_control(&self) -> &HarvestControl {
        &self.control
    }

    /// Packed parameter vector.
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Padded weather matrix.
    pub fn weather(&self) -> &PaddedMatrix {
        &self.weather
    }

    /// Padded harvest matrix.
    pub fn harvest(&self) -> &PaddedMatrix {
        &self.harvest
    }

    /// Packed irrigation-day whitelist.
    pub fn irrigation_days(&self) -> &[i32] {
        &self.irrigation_days
    }

    /// Soft-check warnings raised during preparation.
    pub fn warnings(&self) -> &[IrrigationCeilingWarning] {
        &self.warnings
    }

    /// The exact arguments the kernel will be called with.
    pub fn kernel_input(&self) -> KernelInput<'_> {
        KernelInput {
            params: &self.params,
            weather: &self.weather,
            pet_mode: self.config.pet_mode(),
            harvest: &self.harvest,
            n_days: self.timeline.len(),
            n_out: OUTPUT_COLUMNS.len(),
            irrigation_days: &self.irrigation_days,
            verbose: self.config.verbose(),
        }
    }

    /// Calls the kernel once and decodes its output.
    ///
    /// # Errors
    ///
    /// [`SessionError::Kernel`] if the kernel fails,
    /// [`SessionError::OutputShape`] or [`SessionError::OutputLength`] if
    /// its output has the wrong shape.
    #[tracing::instrument(skip_all, fields(days = self.timeline.len()))]
    pub fn run<K: GrowthKernel + ?Sized>(&self, kernel: &K) -> Result<SimulationResult, SessionError> {
        let output = kernel.run(&self.kernel_input())?;
        let result = unpack_output(&output, &self.timeline)?;
        info!(
            days = result.n_days(),
            start = %self.timeline.start(),
            end = %self.timeline.end(),
            "simulation complete"
        );
        Ok(result)
    }
}

/// Validates and packs the inputs of one run.
///
/// Checks run before anything is packed: configuration, parameters,
/// weather (yielding the timeline), harvest against the timeline, the
/// irrigation whitelist. The irrigation ceiling check only warns.
///
/// # Errors
///
/// The first failing check, as [`SessionError::InvalidConfig`],
/// [`SessionError::Schema`] or [`SessionError::Harvest`]; packing errors
/// such as [`SessionError::CapacityExceeded`].
#[tracing::instrument(skip_all, fields(
    days = inputs.weather.n_rows(),
    pet_mode = ?config.pet_mode(),
    harvest_mode = ?config.harvest_mode(),
    calendar_mode = ?config.calendar_mode()
))]
pub fn prepare_session(
    config: &SessionConfig,
    inputs: SessionInputs<'_>,
) -> Result<PreparedSession, SessionError> {
    config.validate()?;

    validate_params(inputs.params)?;
    let timeline = validate_weather(
        inputs.weather,
        config.pet_mode(),
        config.calendar_mode(),
        config.capacity(),
    )?;
    validate_harvest(inputs.harvest, inputs.params, &timeline, config.harvest_mode())?;
    let irrigation = validate_irrigation_days(inputs.irrigation_days)?;
    let warnings: Vec<_> = check_irrigation_ceiling(inputs.weather, inputs.params)
        .into_iter()
        .collect();
    debug!("inputs validated");

    let control = build_harvest_control(inputs.harvest, &timeline, config.harvest_mode())?;
    let params = pack_parameters(inputs.params)?;
    let weather = pack_weather(inputs.weather, config.pet_mode(), config.capacity())?;
    let harvest = pack_harvest(&control, config.capacity())?;
    let irrigation_days = pack_irrigation_days(&irrigation);
    debug!(
        padding_rows = weather.padding_rows(),
        harvests = control.scheduled_harvests(),
        "session packed"
    );

    Ok(PreparedSession {
        config: config.clone(),
        timeline,
        control,
        params,
        weather,
        harvest,
        irrigation_days,
        warnings,
    })
}

/// Prepares a session and runs it with `kernel`.
///
/// # Errors
///
/// See [`prepare_session`] and [`PreparedSession::run`].
pub fn run_session<K: GrowthKernel + ?Sized>(
    kernel: &K,
    config: &SessionConfig,
    inputs: SessionInputs<'_>,
) -> Result<SimulationResult, SessionError> {
    prepare_session(config, inputs)?.run(kernel)
}
