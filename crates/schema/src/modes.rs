//! Run-mode switches that select schemas.

use crate::keys::{WEATHER_KEYS_PENMAN, WEATHER_KEYS_PET};

/// How potential evapotranspiration reaches the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PetMode {
    /// PET is a weather column.
    #[default]
    Supplied,
    /// The kernel computes PET from vapour pressure and wind.
    Penman,
}

impl PetMode {
    /// Weather columns required in this mode, in kernel order.
    pub fn weather_keys(self) -> &'static [&'static str] {
        match self {
            PetMode::Supplied => WEATHER_KEYS_PET,
            PetMode::Penman => WEATHER_KEYS_PENMAN,
        }
    }
}

/// Shape of the harvest table supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HarvestMode {
    /// One row per simulated day, aligned with the weather table.
    Auto,
    /// Sparse dated events, densified before packing.
    #[default]
    Manual,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_keys_by_mode() {
        assert!(PetMode::Supplied.weather_keys().contains(&"pet"));
        assert!(PetMode::Penman.weather_keys().contains(&"vpa"));
        assert!(PetMode::Penman.weather_keys().contains(&"wind"));
    }

    #[test]
    fn defaults() {
        assert_eq!(PetMode::default(), PetMode::Supplied);
        assert_eq!(HarvestMode::default(), HarvestMode::Manual);
    }
}
