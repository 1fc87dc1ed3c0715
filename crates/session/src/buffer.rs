//! Capacity-checked, zero-padded kernel buffers.

use ndarray::{Array2, ArrayView2, ShapeBuilder, s};

use crate::error::SessionError;

/// A `capacity × n_columns` matrix whose first `logical_len` rows hold data
/// and whose remaining rows are zero.
///
/// Storage is column-major, the layout the kernel reads. Construction fails
/// instead of truncating when the data does not fit.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddedMatrix {
    data: Array2<f64>,
    logical_len: usize,
}

impl PaddedMatrix {
    /// Builds a padded matrix from equal-length columns.
    ///
    /// # Errors
    ///
    /// - [`SessionError::RaggedColumns`] if the columns differ in length.
    /// - [`SessionError::CapacityExceeded`] if they are longer than
    ///   `capacity`.
    pub fn from_columns(columns: &[Vec<f64>], capacity: usize) -> Result<Self, SessionError> {
        let logical_len = columns.first().map_or(0, Vec::len);
        if let Some((column, col)) = columns
            .iter()
            .enumerate()
            .find(|(_, c)| c.len() != logical_len)
        {
            return Err(SessionError::RaggedColumns {
                column,
                expected: logical_len,
                got: col.len(),
            });
        }
        if logical_len > capacity {
            return Err(SessionError::CapacityExceeded {
                n_days: logical_len,
                capacity,
            });
        }

        let mut data = Array2::<f64>::zeros((capacity, columns.len()).f());
        for (j, col) in columns.iter().enumerate() {
            for (i, &v) in col.iter().enumerate() {
                data[[i, j]] = v;
            }
        }
        Ok(Self { data, logical_len })
    }

    /// Rows holding data.
    pub fn logical_len(&self) -> usize {
        self.logical_len
    }

    /// Total rows, data plus padding.
    pub fn capacity(&self) -> usize {
        self.data.nrows()
    }

    /// Zero rows appended after the data.
    pub fn padding_rows(&self) -> usize {
        self.capacity() - self.logical_len
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.data.ncols()
    }

    /// The full buffer, padding included.
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    /// Only the data rows.
    pub fn logical_view(&self) -> ArrayView2<'_, f64> {
        self.data.slice(s![..self.logical_len, ..])
    }

    /// The full buffer flattened in column-major order.
    pub fn to_fortran_vec(&self) -> Vec<f64> {
        self.data.t().iter().copied().collect()
    }
}
