//! # pasture-harvest
//!
//! Turns harvest input into the dense control array the kernel consumes:
//! one [`DailyHarvestControl`] per simulated day, aligned with the
//! [`WeatherTimeline`](pasture_schema::WeatherTimeline).
//!
//! Manual schedules are sparse [`HarvestEvent`]s scattered onto the
//! timeline by day key; auto schedules already carry one row per day.
//! "No action" is a variant of [`HarvestAction`] / [`ReseedAction`] here;
//! the numeric sentinel the kernel expects is produced only when packing.
//!
//! ```mermaid
//! graph LR
//!     T["harvest Table"] -->|"events_from_table()"| E["Vec of HarvestEvent"]
//!     E -->|"normalize_manual()"| C["HarvestControl"]
//!     T -->|"from_auto_table()"| C
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | `action` | Tagged harvest and reseed actions |
//! | `event` | Sparse events and table reading |
//! | `control` | Dense per-day control array |
//! | `normalize` | Scatter, weed-fraction fill, auto tables |
//! | `error` | Error types |

mod action;
mod control;
mod error;
mod event;
mod normalize;

pub use action::{HarvestAction, ReseedAction};
pub use control::{DailyHarvestControl, HarvestControl};
pub use error::HarvestError;
pub use event::{HarvestEvent, events_from_table};
pub use normalize::{build_harvest_control, from_auto_table, normalize_manual};
