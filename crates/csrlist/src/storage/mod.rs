//! Storage types for encoded matrix data.
//!
//! ```text
//! CsrStorage
//! ├── values      - non-zero entries, row-major
//! ├── col_index   - column of each entry
//! └── RowOffsets  - start of each row, rows + 1 long
//! ```
//!
//! An empty matrix holds no storage at all, so a `CsrStorage` always carries
//! a complete, consistent triple.

mod csr;
mod row_offsets;

pub use csr::CsrStorage;
pub use row_offsets::RowOffsets;
