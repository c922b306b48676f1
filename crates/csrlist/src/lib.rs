//! csrlist - compressed sparse row integer matrices
//!
//! This crate encodes integer matrices into compressed sparse row (CSR) form
//! and keeps ordered lists of the encoded matrices.
//!
//! # Architecture
//!
//! ```text
//! SparseMatrixList          - owned sequence, insertion at the head
//!     └── SparseMatrix      - empty, or populated with:
//!             └── CsrStorage
//!                 ├── values / col_index
//!                 └── RowOffsets
//! ```
//!
//! Every lookup that can fail returns [`CsrError::IndexOutOfRange`]. Zero
//! dimensions, short or long source arrays and empty lists are valid input
//! with well-defined (often empty or zero) results.
//!
//! # Example
//!
//! ```
//! use csrlist::{SparseMatrix, SparseMatrixList};
//!
//! let source = [
//!     10, 20, 0, 0, 0, 0,
//!     0, 30, 0, 40, 0, 0,
//!     0, 0, 50, 60, 70, 0,
//!     0, 0, 0, 0, 0, 80,
//! ];
//! let m = SparseMatrix::from_dense(4, 6, &source);
//! assert_eq!(m.values(), &[10, 20, 30, 40, 50, 60, 70, 80]);
//! assert_eq!(m.col_index(), &[0, 1, 1, 3, 2, 3, 4, 5]);
//! assert_eq!(m.row_offset(), &[0, 2, 4, 7, 8]);
//! assert_eq!(m.sparsity_ratio(), 67);
//!
//! let mut list = SparseMatrixList::new();
//! list.insert_front(&m);
//! assert_eq!(list.get(0, 2, 4).unwrap(), 70);
//! assert_eq!(list.average_sparsity_ratio(), 67);
//! ```

pub mod error;
pub mod list;
pub mod matrix;
pub mod random;
pub mod storage;

pub use error::{Axis, CsrError, Result};
pub use list::SparseMatrixList;
pub use matrix::SparseMatrix;
pub use storage::{CsrStorage, RowOffsets};
