//! # pasture-calendar
//!
//! Day-of-year arithmetic for the two calendar modes a pasture simulation
//! can run under.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Doy (1..=365)"] -->|"to_month_day()"| B["(month, day)"]
//!     B -->|"to_doy()"| A
//!     C["DayKey (year, doy)"] -->|"reconstruct_date(mode)"| D["NaiveDate"]
//!     D -->|"CalendarMode::key_for_date()"| C
//!     C -->|"expected_calendar()"| E["Vec of DayKey"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use pasture_calendar::{CalendarMode, DayKey, reconstruct_date, to_doy};
//!
//! assert_eq!(to_doy(3, 1).unwrap().get(), 60);
//!
//! // 2024 is a leap year: doy 60 is Feb 29 in the Gregorian calendar but
//! // Mar 1 in the normalised 365-day calendar.
//! let key = DayKey::new(2024, 60);
//! let greg = reconstruct_date(key, CalendarMode::Gregorian).unwrap();
//! let noleap = reconstruct_date(key, CalendarMode::NoLeap).unwrap();
//! assert_eq!(greg.to_string(), "2024-02-29");
//! assert_eq!(noleap.to_string(), "2024-03-01");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `doy` | Day-of-year newtype and the non-leap lookup table |
//! | `key` | Raw `(year, doy)` row keys |
//! | `mode` | Gregorian vs normalised 365-day run modes |
//! | `date` | Date reconstruction from keys |
//! | `sequence` | Expected contiguous key sequences |
//! | `error` | Error types |

mod date;
mod doy;
mod error;
mod key;
mod mode;
mod sequence;

pub use chrono::NaiveDate;
pub use date::reconstruct_date;
pub use doy::{Doy, to_doy, to_month_day};
pub use error::CalendarError;
pub use key::DayKey;
pub use mode::{CalendarMode, is_leap_year};
pub use sequence::expected_calendar;
