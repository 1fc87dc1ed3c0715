//! The dense, per-day harvest control array.

use pasture_calendar::DayKey;

use crate::action::{HarvestAction, ReseedAction};

/// Harvest and reseed settings for one simulated day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyHarvestControl {
    /// Simulated day.
    pub key: DayKey,
    /// Harvest action for the day.
    pub harvest: HarvestAction,
    /// Reseed action for the day.
    pub reseed: ReseedAction,
    /// Weed share of harvested dry matter.
    pub weed_dm_frac: f64,
}

/// One [`DailyHarvestControl`] per timeline day, in timeline order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HarvestControl {
    days: Vec<DailyHarvestControl>,
}

impl HarvestControl {
    pub(crate) fn from_days(days: Vec<DailyHarvestControl>) -> Self {
        Self { days }
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if there are no days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// All days.
    pub fn as_slice(&self) -> &[DailyHarvestControl] {
        &self.days
    }

    /// Iterates the days in order.
    pub fn iter(&self) -> std::slice::Iter<'_, DailyHarvestControl> {
        self.days.iter()
    }

    /// Number of days with a scheduled harvest.
    pub fn scheduled_harvests(&self) -> usize {
        self.days.iter().filter(|d| d.harvest.is_scheduled()).count()
    }
}

impl<'a> IntoIterator for &'a HarvestControl {
    type Item = &'a DailyHarvestControl;
    type IntoIter = std::slice::Iter<'a, DailyHarvestControl>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
