//! Error types for csrlist.

use std::fmt;

use thiserror::Error;

/// Which index of a lookup was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Row index into a matrix.
    Row,
    /// Column index into a matrix.
    Column,
    /// Position of a matrix inside a list.
    Matrix,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
            Axis::Matrix => f.write_str("matrix"),
        }
    }
}

/// Errors that can occur when querying matrices and lists.
///
/// Degenerate inputs (zero dimensions, short or long source data, empty
/// containers) are valid everywhere, so the only failure is an index that
/// falls outside its bound.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsrError {
    /// Index out of range.
    #[error("index out of range: {axis} index {index} is out of range for size {bound}")]
    IndexOutOfRange { axis: Axis, index: usize, bound: usize },
}

impl CsrError {
    pub(crate) fn out_of_range(axis: Axis, index: usize, bound: usize) -> Self {
        CsrError::IndexOutOfRange { axis, index, bound }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CsrError>;
