//! # pasture-session
//!
//! Builds one simulation session: validates the inputs, densifies the
//! harvest schedule, packs everything into the kernel's fixed-capacity
//! buffers, calls the kernel once and keys its output to calendar dates.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph TD
//!     P[SimulationParameters] --> V{validate}
//!     W[weather Table] --> V
//!     H[harvest Table] --> V
//!     I[irrigation days] --> V
//!     V -->|WeatherTimeline| N[HarvestControl]
//!     V --> K[pack into PaddedMatrix buffers]
//!     N --> K
//!     K -->|KernelInput| G[GrowthKernel::run]
//!     G -->|flat column-major buffer| R[reorder_kernel_output]
//!     R --> S[SimulationResult]
//! ```
//!
//! The kernel is a trait object supplied by the caller, so sessions can be
//! run against the native model or a test double.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Session run modes and kernel capacity |
//! | `buffer` | Capacity-checked padded matrices |
//! | `pack` | Inputs to kernel buffers, sentinel encoding |
//! | `kernel` | Kernel call contract |
//! | `reshape` | Column-major output reordering |
//! | `result` | Calendar-indexed output |
//! | `session` | Preparation and the kernel call |
//! | `error` | Error types |

mod buffer;
mod config;
mod error;
mod kernel;
mod pack;
mod reshape;
mod result;
mod session;

pub use buffer::PaddedMatrix;
pub use config::{DEFAULT_CAPACITY, SessionConfig};
pub use error::SessionError;
pub use kernel::{GrowthKernel, KernelError, KernelInput, KernelOutput};
pub use pack::{
    NO_ACTION_TRIGGER, pack_harvest, pack_irrigation_days, pack_parameters, pack_weather,
};
pub use reshape::reorder_kernel_output;
pub use result::{SimulationResult, unpack_output};
pub use session::{PreparedSession, SessionInputs, prepare_session, run_session};
