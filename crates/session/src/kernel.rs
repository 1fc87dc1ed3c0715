//! The call boundary to the external growth-water kernel.

use pasture_schema::PetMode;

use crate::buffer::PaddedMatrix;

/// Everything the kernel receives for one run.
///
/// Both matrices are padded to the same capacity; only the first
/// [`n_days`](Self::n_days) rows are meaningful.
#[derive(Debug, Clone, Copy)]
pub struct KernelInput<'a> {
    /// Parameter vector in canonical order.
    pub params: &'a [f64],
    /// Weather and irrigation-policy matrix.
    pub weather: &'a PaddedMatrix,
    /// Column schema of [`weather`](Self::weather): supplied PET or the
    /// Penman inputs.
    pub pet_mode: PetMode,
    /// Dense harvest and reseed matrix.
    pub harvest: &'a PaddedMatrix,
    /// Real day count.
    pub n_days: usize,
    /// Output column count.
    pub n_out: usize,
    /// Irrigation-day whitelist.
    pub irrigation_days: &'a [i32],
    /// Kernel verbosity flag.
    pub verbose: bool,
}

/// The kernel's result: a flat buffer and the dimensions it advertises.
///
/// Element `(d, c)` sits at `data[c * n_days + d]`.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelOutput {
    /// Flat column-major values.
    pub data: Vec<f64>,
    /// Advertised day count.
    pub n_days: usize,
    /// Advertised column count.
    pub n_out: usize,
}

/// Failure reported by a kernel implementation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("kernel failed: {message}")]
pub struct KernelError {
    /// Description from the kernel.
    pub message: String,
}

impl KernelError {
    /// Creates a kernel error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A daily pasture-growth and water-balance model.
///
/// One call simulates the whole run; the result is complete or an error.
/// Implementations must not keep state between calls, so independent
/// sessions can share one kernel across threads.
pub trait GrowthKernel: Send + Sync {
    /// Runs the simulation.
    fn run(&self, input: &KernelInput<'_>) -> Result<KernelOutput, KernelError>;
}

impl<F> GrowthKernel for F
where
    F: Fn(&KernelInput<'_>) -> Result<KernelOutput, KernelError> + Send + Sync,
{
    fn run(&self, input: &KernelInput<'_>) -> Result<KernelOutput, KernelError> {
        self(input)
    }
}
