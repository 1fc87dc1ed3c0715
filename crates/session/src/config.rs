//! Session configuration.

use pasture_calendar::CalendarMode;
use pasture_schema::{HarvestMode, PetMode};

use crate::error::SessionError;

/// Day capacity of the kernel's static buffers.
pub const DEFAULT_CAPACITY: usize = 36_600;

/// Run modes and sizing for one simulation session.
///
/// # Example
///
/// ```
/// use pasture_calendar::CalendarMode;
/// use pasture_schema::{HarvestMode, PetMode};
/// use pasture_session::SessionConfig;
///
/// let config = SessionConfig::new()
///     .with_pet_mode(PetMode::Penman)
///     .with_harvest_mode(HarvestMode::Auto)
///     .with_calendar_mode(CalendarMode::NoLeap);
///
/// assert_eq!(config.capacity(), 36_600);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Which weather schema is expected.
    pet_mode: PetMode,
    /// Whether the harvest table is sparse or daily.
    harvest_mode: HarvestMode,
    /// How `(year, doy)` keys map to dates.
    calendar_mode: CalendarMode,
    /// Kernel buffer size in days.
    capacity: usize,
    /// Passed through to the kernel.
    verbose: bool,
}

impl SessionConfig {
    /// Creates a configuration with defaults: supplied PET, manual harvest,
    /// Gregorian calendar, capacity [`DEFAULT_CAPACITY`], quiet kernel.
    pub fn new() -> Self {
        Self {
            pet_mode: PetMode::Supplied,
            harvest_mode: HarvestMode::Manual,
            calendar_mode: CalendarMode::Gregorian,
            capacity: DEFAULT_CAPACITY,
            verbose: false,
        }
    }

    /// Sets the PET mode.
    pub fn with_pet_mode(mut self, pet_mode: PetMode) -> Self {
        self.pet_mode = pet_mode;
        self
    }

    /// Sets the harvest mode.
    pub fn with_harvest_mode(mut self, harvest_mode: HarvestMode) -> Self {
        self.harvest_mode = harvest_mode;
        self
    }

    /// Sets the calendar mode.
    pub fn with_calendar_mode(mut self, calendar_mode: CalendarMode) -> Self {
        self.calendar_mode = calendar_mode;
        self
    }

    /// Sets the kernel capacity in days.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the kernel verbosity flag.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Returns the PET mode.
    pub fn pet_mode(&self) -> PetMode {
        self.pet_mode
    }

    /// Returns the harvest mode.
    pub fn harvest_mode(&self) -> HarvestMode {
        self.harvest_mode
    }

    /// Returns the calendar mode.
    pub fn calendar_mode(&self) -> CalendarMode {
        self.calendar_mode
    }

    /// Returns the kernel capacity in days.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the kernel verbosity flag.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the capacity is zero.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.capacity == 0 {
            return Err(SessionError::InvalidConfig {
                reason: "kernel capacity must be at least one day".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.pet_mode(), PetMode::Supplied);
        assert_eq!(cfg.harvest_mode(), HarvestMode::Manual);
        assert_eq!(cfg.calendar_mode(), CalendarMode::Gregorian);
        assert_eq!(cfg.capacity(), DEFAULT_CAPACITY);
        assert!(!cfg.verbose());
    }

    #[test]
    fn test_builder_chaining() {
        let cfg = SessionConfig::new()
            .with_capacity(100)
            .with_verbose(true)
            .with_calendar_mode(CalendarMode::NoLeap);
        assert_eq!(cfg.capacity(), 100);
        assert!(cfg.verbose());
        assert_eq!(cfg.calendar_mode(), CalendarMode::NoLeap);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = SessionConfig::new().with_capacity(0).validate().unwrap_err();
        assert!(matches!(err, SessionError::InvalidConfig { .. }));
    }
}
