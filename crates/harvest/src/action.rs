//! Tagged harvest and reseed actions.

/// What happens to the sward on one day.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HarvestAction {
    /// The harvest check is skipped.
    #[default]
    NoAction,
    /// Harvest when standing dry matter reaches `trigger`.
    ///
    /// In cut-to-target mode the sward is cut down to `target`; in
    /// fixed-removal mode `target` is the amount removed. `fraction` is the
    /// share of the cut that is harvested rather than left on the paddock.
    Scheduled {
        /// Harvested share of the cut, 0..=1.
        fraction: f64,
        /// Dry matter that triggers the harvest.
        trigger: f64,
        /// Residual or removal amount.
        target: f64,
    },
}

impl HarvestAction {
    /// Interprets raw table values: a negative trigger means no action.
    pub fn from_raw(fraction: f64, trigger: f64, target: f64) -> Self {
        if trigger < 0.0 {
            HarvestAction::NoAction
        } else {
            HarvestAction::Scheduled {
                fraction,
                trigger,
                target,
            }
        }
    }

    /// Returns `true` for [`HarvestAction::Scheduled`].
    pub fn is_scheduled(&self) -> bool {
        matches!(self, HarvestAction::Scheduled { .. })
    }
}

/// Whether the sward is reseeded on one day.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ReseedAction {
    /// No reseed check.
    #[default]
    NoReseed,
    /// Reseed when the basal fraction falls below `trigger`, resetting it to
    /// `basal`.
    Reseed {
        /// Basal fraction that triggers reseeding.
        trigger: f64,
        /// Basal fraction after reseeding.
        basal: f64,
    },
}

impl ReseedAction {
    /// Interprets raw table values: a negative trigger means no reseed.
    pub fn from_raw(trigger: f64, basal: f64) -> Self {
        if trigger < 0.0 {
            ReseedAction::NoReseed
        } else {
            ReseedAction::Reseed { trigger, basal }
        }
    }
}
