//! Column-typed tables for weather and harvest data.

use crate::error::SchemaError;

/// One named column of a [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Integer-typed values. Used for `year`, `doy` and any count data.
    Int(Vec<i64>),
    /// Floating-point values. `NaN` marks a missing value.
    Float(Vec<f64>),
}

impl Column {
    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            Column::Int(v) => v.len(),
            Column::Float(v) => v.len(),
        }
    }

    /// Returns `true` if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` for [`Column::Int`].
    pub fn is_integer(&self) -> bool {
        matches!(self, Column::Int(_))
    }

    /// Number of missing (`NaN`) entries. Integer columns have none.
    pub fn missing_count(&self) -> usize {
        match self {
            Column::Int(_) => 0,
            Column::Float(v) => v.iter().filter(|x| x.is_nan()).count(),
        }
    }

    /// Copies the column out as `f64`.
    pub fn to_f64(&self) -> Vec<f64> {
        match self {
            Column::Int(v) => v.iter().map(|&x| x as f64).collect(),
            Column::Float(v) => v.clone(),
        }
    }

    /// Borrows integer values, or `None` for a float column.
    pub fn as_int(&self) -> Option<&[i64]> {
        match self {
            Column::Int(v) => Some(v),
            Column::Float(_) => None,
        }
    }
}

impl From<Vec<i64>> for Column {
    fn from(v: Vec<i64>) -> Self {
        Column::Int(v)
    }
}

impl From<Vec<f64>> for Column {
    fn from(v: Vec<f64>) -> Self {
        Column::Float(v)
    }
}

/// Ordered set of equal-length named columns.
///
/// This is the caller-facing container for weather and harvest data. Column
/// order is free; validators compare key sets and packers select columns by
/// name.
///
/// # Example
///
/// ```
/// use pasture_schema::Table;
///
/// let table = Table::new()
///     .with_column("year", vec![2020_i64, 2020])?
///     .with_column("doy", vec![1_i64, 2])?
///     .with_column("rain", vec![0.0, 4.2])?;
/// assert_eq!(table.n_rows(), 2);
/// assert_eq!(table.float_column("rain"), Some(vec![0.0, 4.2]));
/// # Ok::<(), pasture_schema::SchemaError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl Table {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column, builder style.
    ///
    /// # Errors
    ///
    /// See [`push_column`](Self::push_column).
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        column: impl Into<Column>,
    ) -> Result<Self, SchemaError> {
        self.push_column(name, column)?;
        Ok(self)
    }

    /// Appends a column.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::DuplicateColumn`] if `name` is already present.
    /// - [`SchemaError::ColumnLength`] if the column length differs from the
    ///   existing columns.
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        column: impl Into<Column>,
    ) -> Result<(), SchemaError> {
        let name = name.into();
        let column = column.into();
        if self.names.contains(&name) {
            return Err(SchemaError::DuplicateColumn { name });
        }
        if let Some(first) = self.columns.first()
            && first.len() != column.len()
        {
            return Err(SchemaError::ColumnLength {
                name,
                expected: first.len(),
                got: column.len(),
            });
        }
        self.names.push(name);
        self.columns.push(column);
        Ok(())
    }

    /// Replaces the column `name`, or appends it when absent.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::ColumnLength`] on a length mismatch.
    pub fn set_column(
        &mut self,
        name: impl Into<String>,
        column: impl Into<Column>,
    ) -> Result<(), SchemaError> {
        let name = name.into();
        let column = column.into();
        match self.names.iter().position(|n| *n == name) {
            Some(idx) => {
                if self.columns.len() > 1 && column.len() != self.columns[idx].len() {
                    return Err(SchemaError::ColumnLength {
                        name,
                        expected: self.columns[idx].len(),
                        got: column.len(),
                    });
                }
                self.columns[idx] = column;
                Ok(())
            }
            None => self.push_column(name, column),
        }
    }

    /// Removes and returns the column `name`.
    pub fn remove_column(&mut self, name: &str) -> Option<Column> {
        let idx = self.names.iter().position(|n| n == name)?;
        self.names.remove(idx);
        Some(self.columns.remove(idx))
    }

    /// Number of rows (zero for a table without columns).
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns the column `name`.
    pub fn column(&self, name: &str) -> Option<&Column> {
        let idx = self.names.iter().position(|n| n == name)?;
        Some(&self.columns[idx])
    }

    /// Copies the column `name` out as `f64`.
    pub fn float_column(&self, name: &str) -> Option<Vec<f64>> {
        self.column(name).map(Column::to_f64)
    }

    /// Borrows the integer column `name`; `None` if absent or float typed.
    pub fn int_column(&self, name: &str) -> Option<&[i64]> {
        self.column(name).and_then(Column::as_int)
    }

    /// Iterates `(name, column)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names.iter().map(String::as_str).zip(self.columns.iter())
    }
}
