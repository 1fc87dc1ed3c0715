//! Sparse, dated harvest events.

use pasture_calendar::DayKey;
use pasture_schema::Table;

use crate::action::{HarvestAction, ReseedAction};
use crate::error::HarvestError;

/// One row of a sparse harvest table.
#[derive(Debug, Clone, PartialEq)]
pub struct HarvestEvent {
    /// Day the event applies to.
    pub key: DayKey,
    /// Harvest settings from this day on.
    pub harvest: HarvestAction,
    /// Reseed settings from this day on.
    pub reseed: ReseedAction,
    /// Weed share of harvested dry matter, if given.
    pub weed_dm_frac: Option<f64>,
}

impl HarvestEvent {
    /// An event that only sets the harvest action.
    pub fn new(key: DayKey, harvest: HarvestAction) -> Self {
        Self {
            key,
            harvest,
            reseed: ReseedAction::NoReseed,
            weed_dm_frac: None,
        }
    }

    /// Builder: set the reseed action.
    pub fn with_reseed(mut self, reseed: ReseedAction) -> Self {
        self.reseed = reseed;
        self
    }

    /// Builder: set the weed fraction.
    pub fn with_weed_dm_frac(mut self, frac: f64) -> Self {
        self.weed_dm_frac = Some(frac);
        self
    }

    /// Converts a legacy `(year, doy, percent_harvest)` record.
    ///
    /// The percentage becomes the harvest fraction, with zero trigger and
    /// target, no weeds and no reseed.
    pub fn from_percent_harvest(year: i32, doy: u16, percent: f64) -> Self {
        Self::new(
            DayKey::new(year, doy),
            HarvestAction::Scheduled {
                fraction: percent / 100.0,
                trigger: 0.0,
                target: 0.0,
            },
        )
        .with_weed_dm_frac(0.0)
    }
}

/// Column data of a harvest table, borrowed or copied out once.
pub(crate) struct HarvestColumns<'a> {
    pub years: &'a [i64],
    pub doys: &'a [i64],
    pub frac_harv: Vec<f64>,
    pub harv_trig: Vec<f64>,
    pub harv_targ: Vec<f64>,
    pub weed_dm_frac: Vec<f64>,
    pub reseed_trig: Vec<f64>,
    pub reseed_basal: Vec<f64>,
}

impl<'a> HarvestColumns<'a> {
    pub(crate) fn read(table: &'a Table) -> Result<Self, HarvestError> {
        let int = move |name: &'static str| {
            table
                .int_column(name)
                .ok_or(HarvestError::MissingColumn { name })
        };
        let float = move |name: &'static str| {
            table
                .float_column(name)
                .ok_or(HarvestError::MissingColumn { name })
        };
        Ok(Self {
            years: int("year")?,
            doys: int("doy")?,
            frac_harv: float("frac_harv")?,
            harv_trig: float("harv_trig")?,
            harv_targ: float("harv_targ")?,
            weed_dm_frac: float("weed_dm_frac")?,
            reseed_trig: float("reseed_trig")?,
            reseed_basal: float("reseed_basal")?,
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.years.len()
    }

    pub(crate) fn key(&self, row: usize) -> Result<DayKey, HarvestError> {
        let (year, doy) = (self.years[row], self.doys[row]);
        match (i32::try_from(year), u16::try_from(doy)) {
            (Ok(y), Ok(d)) => Ok(DayKey::new(y, d)),
            _ => Err(HarvestError::InvalidKey { row, year, doy }),
        }
    }

    pub(crate) fn event(&self, row: usize) -> Result<HarvestEvent, HarvestError> {
        let weed = self.weed_dm_frac[row];
        Ok(HarvestEvent {
            key: self.key(row)?,
            harvest: HarvestAction::from_raw(
                self.frac_harv[row],
                self.harv_trig[row],
                self.harv_targ[row],
            ),
            reseed: ReseedAction::from_raw(self.reseed_trig[row], self.reseed_basal[row]),
            weed_dm_frac: (!weed.is_nan()).then_some(weed),
        })
    }
}

/// Reads every row of a harvest table as an event.
///
/// # Errors
///
/// [`HarvestError::MissingColumn`] if a harvest column is absent (or
/// `year`/`doy` are not integer typed), [`HarvestError::InvalidKey`] for
/// keys that do not fit a [`DayKey`].
pub fn events_from_table(table: &Table) -> Result<Vec<HarvestEvent>, HarvestError> {
    let cols = HarvestColumns::read(table)?;
    (0..cols.len()).map(|row| cols.event(row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::new()
            .with_column("year", vec![2021_i64, 2021])
            .unwrap()
            .with_column("doy", vec![30_i64, 90])
            .unwrap()
            .with_column("frac_harv", vec![1.0, 0.0])
            .unwrap()
            .with_column("harv_trig", vec![2500.0, -1.0])
            .unwrap()
            .with_column("harv_targ", vec![1000.0, 0.0])
            .unwrap()
            .with_column("weed_dm_frac", vec![0.1, f64::NAN])
            .unwrap()
            .with_column("reseed_trig", vec![-1.0, 0.3])
            .unwrap()
            .with_column("reseed_basal", vec![0.0, 0.8])
            .unwrap()
    }

    #[test]
    fn rows_become_tagged_events() {
        let events = events_from_table(&table()).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            HarvestEvent::new(
                DayKey::new(2021, 30),
                HarvestAction::Scheduled {
                    fraction: 1.0,
                    trigger: 2500.0,
                    target: 1000.0,
                }
            )
            .with_weed_dm_frac(0.1)
        );
        assert_eq!(events[1].harvest, HarvestAction::NoAction);
        assert_eq!(
            events[1].reseed,
            ReseedAction::Reseed {
                trigger: 0.3,
                basal: 0.8
            }
        );
        assert_eq!(events[1].weed_dm_frac, None);
    }

    #[test]
    fn missing_column_reported() {
        let mut t = table();
        t.remove_column("harv_targ");
        assert_eq!(
            events_from_table(&t).unwrap_err(),
            HarvestError::MissingColumn { name: "harv_targ" }
        );
    }

    #[test]
    fn percent_harvest_conversion() {
        let e = HarvestEvent::from_percent_harvest(2019, 100, 40.0);
        assert_eq!(e.key, DayKey::new(2019, 100));
        assert_eq!(
            e.harvest,
            HarvestAction::Scheduled {
                fraction: 0.4,
                trigger: 0.0,
                target: 0.0,
            }
        );
        assert_eq!(e.reseed, ReseedAction::NoReseed);
        assert_eq!(e.weed_dm_frac, Some(0.0));
    }
}
