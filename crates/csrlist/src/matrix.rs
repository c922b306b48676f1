//! Sparse integer matrix in compressed sparse row form.
//!
//! A [`SparseMatrix`] is either empty (no storage, zero dimensions) or
//! populated with a [`CsrStorage`] whose three arrays are mutually
//! consistent. The only way to populate one is [`SparseMatrix::encode`].

use std::fmt;

use tracing::trace;

use crate::error::{Axis, CsrError, Result};
use crate::storage::CsrStorage;

/// An `rows x cols` integer matrix storing only its non-zero entries.
///
/// # Example
///
/// ```
/// use csrlist::SparseMatrix;
///
/// let m = SparseMatrix::from_dense(2, 3, &[0, 5, 0, 7, 0, 9]);
/// assert_eq!(m.values(), &[5, 7, 9]);
/// assert_eq!(m.col_index(), &[1, 0, 2]);
/// assert_eq!(m.row_offset(), &[0, 1, 3]);
/// assert_eq!(m.get(1, 2).unwrap(), 9);
/// assert_eq!(m.get(0, 0).unwrap(), 0);
/// assert!(m.get(2, 0).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    storage: Option<CsrStorage>,
}

impl SparseMatrix {
    /// Create an empty matrix.
    pub const fn new() -> Self {
        Self {
            rows: 0,
            cols: 0,
            storage: None,
        }
    }

    /// Create a matrix by encoding a row-major source.
    ///
    /// Equivalent to [`SparseMatrix::new`] followed by
    /// [`SparseMatrix::encode`].
    pub fn from_dense(rows: usize, cols: usize, source: &[i32]) -> Self {
        let mut matrix = Self::new();
        matrix.encode(rows, cols, source);
        matrix
    }

    /// Replace the contents with the encoding of a row-major source.
    ///
    /// Any previous contents are dropped first. A zero dimension leaves the
    /// matrix empty whatever `source` holds. Positions at or beyond
    /// `min(source.len(), rows * cols)` are never read and count as zeros,
    /// so a short source is valid input rather than an error.
    pub fn encode(&mut self, rows: usize, cols: usize, source: &[i32]) {
        self.clear();

        if rows == 0 || cols == 0 {
            trace!(rows, cols, "zero dimension, matrix left empty");
            return;
        }

        let storage = CsrStorage::encode(rows, cols, source);
        trace!(
            rows,
            cols,
            source_len = source.len(),
            nnz = storage.nnz(),
            "encoded matrix"
        );

        self.rows = rows;
        self.cols = cols;
        self.storage = Some(storage);
    }

    /// Drop all storage and return to the empty state.
    pub fn clear(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.storage = None;
    }

    /// Check if the matrix holds no storage.
    ///
    /// An encoded matrix whose source was all zeros is *not* empty: it has
    /// dimensions and a row-offset array, just no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_none()
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored (non-zero) entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.storage.as_ref().map_or(0, CsrStorage::nnz)
    }

    /// Stored values in row-major order.
    pub fn values(&self) -> &[i32] {
        self.storage
            .as_ref()
            .map(CsrStorage::values)
            .unwrap_or_default()
    }

    /// Column of each stored value.
    pub fn col_index(&self) -> &[usize] {
        self.storage
            .as_ref()
            .map(CsrStorage::col_index)
            .unwrap_or_default()
    }

    /// Row offsets, `rows + 1` long when populated and empty otherwise.
    pub fn row_offset(&self) -> &[usize] {
        self.storage
            .as_ref()
            .map(|storage| storage.row_offsets().as_slice())
            .unwrap_or_default()
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows {
            return Err(CsrError::out_of_range(Axis::Row, row, self.rows));
        }
        if col >= self.cols {
            return Err(CsrError::out_of_range(Axis::Column, col, self.cols));
        }
        Ok(())
    }

    /// Get the value at `(row, col)`.
    ///
    /// Positions without a stored entry read as `0`.
    ///
    /// # Errors
    ///
    /// Returns `CsrError::IndexOutOfRange` if `row >= rows()` or
    /// `col >= cols()`, which includes every lookup on an empty matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<i32> {
        self.check_bounds(row, col)?;
        Ok(self
            .storage
            .as_ref()
            .map_or(0, |storage| storage.value_at(row, col)))
    }

    /// Column indices and values stored for one row.
    ///
    /// # Errors
    ///
    /// Returns `CsrError::IndexOutOfRange` if `row >= rows()`.
    pub fn row(&self, row: usize) -> Result<(&[usize], &[i32])> {
        match &self.storage {
            Some(storage) if row < self.rows => Ok(storage.row(row)),
            _ => Err(CsrError::out_of_range(Axis::Row, row, self.rows)),
        }
    }

    /// Iterate over stored entries as `(row, col, value)` in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, i32)> + '_ {
        self.storage.iter().flat_map(move |storage| {
            (0..self.rows).flat_map(move |row| {
                let (cols, values) = storage.row(row);
                cols.iter()
                    .zip(values)
                    .map(move |(&col, &value)| (row, col, value))
            })
        })
    }

    /// Decode back to a row-major array of `rows * cols` entries.
    pub fn to_dense(&self) -> Vec<i32> {
        let mut dense = vec![0; self.rows * self.cols];
        for (row, col, value) in self.iter() {
            dense[row * self.cols + col] = value;
        }
        dense
    }

    /// Fraction of entries that are non-zero, `0.0` for an empty matrix.
    pub fn density(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.nnz() as f64 / (self.rows as f64 * self.cols as f64)
    }

    /// Integer percentage of entries that are zero.
    ///
    /// Computed as `100 - trunc(100 * density)`; an empty matrix reports `0`.
    pub fn sparsity_ratio(&self) -> u32 {
        if self.is_empty() {
            return 0;
        }
        100 - (self.density() * 100.0) as u32
    }

    /// Print the internal arrays to stdout.
    pub fn dump(&self) {
        println!("{self}");
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Three lines: values, column indices, row offsets.
impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.storage {
            Some(storage) => {
                write_joined(f, storage.values())?;
                writeln!(f)?;
                write_joined(f, storage.col_index())?;
                writeln!(f)?;
                write_joined(f, storage.row_offsets().as_slice())
            }
            None => f.write_str("The object is empty!"),
        }
    }
}
