//! Compressed sparse row buffers.

use super::row_offsets::RowOffsets;

/// The three parallel arrays of a populated CSR matrix.
///
/// `values[i]` sits in column `col_index[i]`; row `r` owns positions
/// `row_offsets.range(r)`, stored in increasing column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrStorage {
    values: Vec<i32>,
    col_index: Vec<usize>,
    row_offsets: RowOffsets,
}

impl CsrStorage {
    /// Encode a row-major `rows x cols` source.
    ///
    /// Only positions below `min(source.len(), rows * cols)` are visited;
    /// anything past that is an implicit zero. Both dimensions must be
    /// non-zero.
    pub fn encode(rows: usize, cols: usize, source: &[i32]) -> Self {
        debug_assert!(rows > 0 && cols > 0);

        let visited = &source[..source.len().min(rows.saturating_mul(cols))];

        // First pass: per-row non-zero counts.
        let mut counts = vec![0usize; rows];
        for (position, _) in visited.iter().enumerate().filter(|(_, v)| **v != 0) {
            counts[position / cols] += 1;
        }
        let row_offsets = RowOffsets::from_counts(&counts);

        // Second pass: row-major order already matches the offsets.
        let nnz = row_offsets.nnz();
        let mut values = Vec::with_capacity(nnz);
        let mut col_index = Vec::with_capacity(nnz);
        for (position, &value) in visited.iter().enumerate() {
            if value != 0 {
                values.push(value);
                col_index.push(position % cols);
            }
        }
        debug_assert_eq!(values.len(), nnz);

        Self {
            values,
            col_index,
            row_offsets,
        }
    }

    /// Number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    #[inline]
    pub fn col_index(&self) -> &[usize] {
        &self.col_index
    }

    #[inline]
    pub fn row_offsets(&self) -> &RowOffsets {
        &self.row_offsets
    }

    /// Column indices and values of one row.
    #[inline]
    pub fn row(&self, row: usize) -> (&[usize], &[i32]) {
        let range = self.row_offsets.range(row);
        (&self.col_index[range.clone()], &self.values[range])
    }

    /// Value at `(row, col)`, zero when no entry is stored.
    ///
    /// `row` must be below the row count.
    pub fn value_at(&self, row: usize, col: usize) -> i32 {
        let (cols, values) = self.row(row);
        cols.iter()
            .position(|&c| c == col)
            .map_or(0, |i| values[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: [i32; 24] = [
        10, 20, 0, 0, 0, 0, //
        0, 30, 0, 40, 0, 0, //
        0, 0, 50, 60, 70, 0, //
        0, 0, 0, 0, 0, 80,
    ];

    #[test]
    fn test_encode() {
        let storage = CsrStorage::encode(4, 6, &SOURCE);
        assert_eq!(storage.values(), &[10, 20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(storage.col_index(), &[0, 1, 1, 3, 2, 3, 4, 5]);
        assert_eq!(storage.row_offsets().as_slice(), &[0, 2, 4, 7, 8]);
        assert_eq!(storage.nnz(), 8);
    }

    #[test]
    fn test_encode_short_source() {
        // The last row is never reached.
        let storage = CsrStorage::encode(4, 6, &SOURCE[..18]);
        assert_eq!(storage.nnz(), 7);
        assert_eq!(storage.row_offsets().as_slice(), &[0, 2, 4, 7, 7]);
    }

    #[test]
    fn test_encode_long_source() {
        let storage = CsrStorage::encode(2, 6, &SOURCE);
        assert_eq!(storage.values(), &[10, 20, 30, 40]);
        assert_eq!(storage.row_offsets().as_slice(), &[0, 2, 4]);
    }

    #[test]
    fn test_encode_all_zero() {
        let storage = CsrStorage::encode(2, 2, &[0, 0, 0, 0]);
        assert_eq!(storage.nnz(), 0);
        assert_eq!(storage.row_offsets().as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn test_row() {
        let storage = CsrStorage::encode(4, 6, &SOURCE);
        let (cols, values) = storage.row(2);
        assert_eq!(cols, &[2, 3, 4]);
        assert_eq!(values, &[50, 60, 70]);
    }

    #[test]
    fn test_value_at() {
        let storage = CsrStorage::encode(4, 6, &SOURCE);
        assert_eq!(storage.value_at(1, 3), 40);
        assert_eq!(storage.value_at(1, 2), 0);
        assert_eq!(storage.value_at(3, 5), 80);
    }
}
