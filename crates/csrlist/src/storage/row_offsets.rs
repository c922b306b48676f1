//! RowOffsets for mapping rows to ranges of the entry arrays.
//!
//! Provides O(1) lookup from a row number to the slice of `values` and
//! `col_index` holding that row's entries.

use std::ops::Range;

/// Per-row start offsets into the entry arrays.
///
/// Always holds `rows + 1` entries: `offsets[0] == 0`, the sequence is
/// non-decreasing and `offsets[rows]` is the total number of stored entries.
///
/// # Example
/// ```
/// use csrlist::storage::RowOffsets;
///
/// // Rows holding 2, 0 and 3 entries.
/// let offsets = RowOffsets::from_counts(&[2, 0, 3]);
///
/// assert_eq!(offsets.as_slice(), &[0, 2, 2, 5]);
/// assert_eq!(offsets.range(2), 2..5);
/// assert_eq!(offsets.nnz(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowOffsets {
    offsets: Vec<usize>,
}

impl RowOffsets {
    /// Create offsets from per-row entry counts by prefix summation.
    pub fn from_counts(counts: &[usize]) -> Self {
        let mut offsets = Vec::with_capacity(counts.len() + 1);
        let mut current_offset = 0;
        offsets.push(current_offset);

        for &count in counts {
            current_offset += count;
            offsets.push(current_offset);
        }

        Self { offsets }
    }

    /// Number of rows described.
    #[inline]
    pub fn rows(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Total number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.offsets[self.rows()]
    }

    /// Range of entry positions belonging to `row`.
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`. Callers check the bound first.
    #[inline]
    pub fn range(&self, row: usize) -> Range<usize> {
        self.offsets[row]..self.offsets[row + 1]
    }

    /// Raw offsets, `rows + 1` long.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_entries() {
        let offsets = RowOffsets::from_counts(&[0, 0, 0]);
        assert_eq!(offsets.as_slice(), &[0, 0, 0, 0]);
        assert_eq!(offsets.rows(), 3);
        assert_eq!(offsets.nnz(), 0);
    }

    #[test]
    fn test_from_counts() {
        let offsets = RowOffsets::from_counts(&[2, 2, 3, 1]);
        assert_eq!(offsets.as_slice(), &[0, 2, 4, 7, 8]);
        assert_eq!(offsets.rows(), 4);
        assert_eq!(offsets.nnz(), 8);
    }

    #[test]
    fn test_range() {
        let offsets = RowOffsets::from_counts(&[1, 0, 2]);
        assert_eq!(offsets.range(0), 0..1);
        assert!(offsets.range(1).is_empty());
        assert_eq!(offsets.range(2), 1..3);
    }
}
