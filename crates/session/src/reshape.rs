//! Reordering of the kernel's flat output buffer.
//!
//! The kernel writes its `(n_days, n_cols)` result matrix column by column:
//! all days of column 0, then all days of column 1, and so on. Element
//! `(d, c)` of the logical matrix is therefore
//!
//! ```text
//! flat[c * n_days + d]
//! ```
//!
//! Reading the buffer row by row instead silently scrambles every column.

use ndarray::{Array2, ShapeBuilder};

use crate::error::SessionError;

/// Reinterprets a column-major flat buffer as an `(n_days, n_cols)` matrix
/// in standard row-major layout.
///
/// # Errors
///
/// [`SessionError::OutputLength`] if `flat.len() != n_days * n_cols`.
///
/// # Example
///
/// ```
/// use pasture_session::reorder_kernel_output;
///
/// // 3 days × 2 columns, written column by column
/// let flat = [1.0, 2.0, 3.0, 10.0, 20.0, 30.0];
/// let m = reorder_kernel_output(&flat, 3, 2).unwrap();
/// assert_eq!(m.row(1).to_vec(), vec![2.0, 20.0]);
/// assert_eq!(m.column(1).to_vec(), vec![10.0, 20.0, 30.0]);
/// ```
pub fn reorder_kernel_output(
    flat: &[f64],
    n_days: usize,
    n_cols: usize,
) -> Result<Array2<f64>, SessionError> {
    let length_error = || SessionError::OutputLength {
        n_days,
        n_columns: n_cols,
        len: flat.len(),
    };
    if n_days.checked_mul(n_cols) != Some(flat.len()) {
        return Err(length_error());
    }
    let logical = Array2::from_shape_vec((n_days, n_cols).f(), flat.to_vec())
        .map_err(|_| length_error())?;
    Ok(logical.as_standard_layout().into_owned())
}
