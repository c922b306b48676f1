//! Ordered list of encoded matrices.
//!
//! The list owns every matrix it holds. Matrices go in by copy (or by value
//! through [`SparseMatrixList::push_front`]) and come out only as values or
//! shared references, so no two lists ever share storage.

use std::collections::VecDeque;
use std::fmt;

use tracing::debug;

use crate::error::{Axis, CsrError, Result};
use crate::matrix::SparseMatrix;

/// A sequence of [`SparseMatrix`] values with insertion at the head.
///
/// Equality is element-wise in order; `Clone` produces a deep copy.
///
/// # Example
///
/// ```
/// use csrlist::{SparseMatrix, SparseMatrixList};
///
/// let a = SparseMatrix::from_dense(2, 2, &[1, 0, 0, 2]);
/// let b = SparseMatrix::from_dense(1, 3, &[0, 0, 7]);
///
/// let mut list = SparseMatrixList::new();
/// list.insert_front(&a);
/// list.insert_front(&b);
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get(0, 0, 2).unwrap(), 7); // b is at the head
/// assert_eq!(list.get(1, 1, 1).unwrap(), 2);
/// assert!(list.get(2, 0, 0).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseMatrixList {
    matrices: VecDeque<SparseMatrix>,
}

impl SparseMatrixList {
    /// Create an empty list.
    pub const fn new() -> Self {
        Self {
            matrices: VecDeque::new(),
        }
    }

    /// Copy `matrix` into the list as the new head.
    pub fn insert_front(&mut self, matrix: &SparseMatrix) {
        self.push_front(matrix.clone());
    }

    /// Move `matrix` into the list as the new head.
    pub fn push_front(&mut self, matrix: SparseMatrix) {
        self.matrices.push_front(matrix);
        debug!(
            len = self.matrices.len(),
            rows = self.matrices[0].rows(),
            cols = self.matrices[0].cols(),
            "inserted matrix at head"
        );
    }

    /// Number of matrices held.
    #[inline]
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    /// Check if the list holds no matrices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Drop every matrix. Calling this on an empty list is a no-op.
    pub fn clear(&mut self) {
        if !self.matrices.is_empty() {
            debug!(len = self.matrices.len(), "clearing matrix list");
        }
        self.matrices.clear();
    }

    /// Matrix at position `index`, counting from the head.
    ///
    /// # Errors
    ///
    /// Returns `CsrError::IndexOutOfRange` if `index >= len()`.
    pub fn matrix(&self, index: usize) -> Result<&SparseMatrix> {
        self.matrices
            .get(index)
            .ok_or_else(|| CsrError::out_of_range(Axis::Matrix, index, self.matrices.len()))
    }

    /// Value at `(row, col)` of the matrix at position `index`.
    ///
    /// # Errors
    ///
    /// Returns `CsrError::IndexOutOfRange` if `index >= len()`, or the
    /// matrix's own error if `(row, col)` is outside it.
    pub fn get(&self, index: usize, row: usize, col: usize) -> Result<i32> {
        self.matrix(index)?.get(row, col)
    }

    /// Iterate over the matrices from head to tail.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &SparseMatrix> + '_ {
        self.matrices.iter()
    }

    /// Replace the contents with a deep copy of `other`.
    ///
    /// Existing matrices are dropped first.
    pub fn assign(&mut self, other: &SparseMatrixList) {
        self.clear();
        self.matrices.extend(other.matrices.iter().cloned());
        debug!(len = self.matrices.len(), "assigned matrix list");
    }

    /// Mean of the matrices' sparsity ratios, truncated; `0` when empty.
    pub fn average_sparsity_ratio(&self) -> u32 {
        if self.matrices.is_empty() {
            return 0;
        }
        let total: u64 = self
            .matrices
            .iter()
            .map(|m| u64::from(m.sparsity_ratio()))
            .sum();
        (total / self.matrices.len() as u64) as u32
    }

    /// Print every matrix to stdout.
    pub fn dump(&self) {
        println!("{self}");
    }
}

impl fmt::Display for SparseMatrixList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matrices.is_empty() {
            return f.write_str("Error: List is empty!");
        }
        for (i, matrix) in self.matrices.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{matrix}")?;
        }
        Ok(())
    }
}

/// Each matrix becomes the new head, so the last one yielded ends up first.
impl Extend<SparseMatrix> for SparseMatrixList {
    fn extend<I: IntoIterator<Item = SparseMatrix>>(&mut self, iter: I) {
        for matrix in iter {
            self.push_front(matrix);
        }
    }
}

impl FromIterator<SparseMatrix> for SparseMatrixList {
    fn from_iter<I: IntoIterator<Item = SparseMatrix>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a> IntoIterator for &'a SparseMatrixList {
    type Item = &'a SparseMatrix;
    type IntoIter = std::collections::vec_deque::Iter<'a, SparseMatrix>;

    fn into_iter(self) -> Self::IntoIter {
        self.matrices.iter()
    }
}
