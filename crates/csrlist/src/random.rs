//! Random sparse matrix construction.
//!
//! This module provides functions for creating matrices with a given fraction
//! of randomly placed non-zero entries.

use rand::Rng;

use crate::matrix::SparseMatrix;

/// Largest magnitude of a generated entry.
pub const MAX_MAGNITUDE: i32 = 99;

fn clamp_density(density: f64) -> f64 {
    if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    }
}

/// Generate a row-major `rows x cols` source array.
///
/// Each position is non-zero with probability `density` (clamped to
/// `[0, 1]`, NaN treated as `0`). Non-zero entries are drawn uniformly from
/// `[-MAX_MAGNITUDE, -1] ∪ [1, MAX_MAGNITUDE]`.
pub fn random_source<R: Rng>(rows: usize, cols: usize, density: f64, rng: &mut R) -> Vec<i32> {
    let density = clamp_density(density);
    (0..rows * cols)
        .map(|_| {
            if !rng.random_bool(density) {
                return 0;
            }
            let magnitude = rng.random_range(1..=MAX_MAGNITUDE);
            if rng.random_bool(0.5) {
                -magnitude
            } else {
                magnitude
            }
        })
        .collect()
}

impl SparseMatrix {
    /// Create a matrix with randomly placed non-zero entries.
    ///
    /// # Example
    ///
    /// ```
    /// use csrlist::SparseMatrix;
    ///
    /// let m = SparseMatrix::random(5, 4, 0.25);
    /// assert_eq!(m.rows(), 5);
    /// assert_eq!(m.cols(), 4);
    /// assert!(m.values().iter().all(|&v| v != 0));
    /// ```
    pub fn random(rows: usize, cols: usize, density: f64) -> Self {
        Self::random_with_rng(rows, cols, density, &mut rand::rng())
    }

    /// Create a random matrix using a specific RNG.
    ///
    /// This is useful for reproducible results with a seeded RNG.
    ///
    /// # Example
    ///
    /// ```
    /// use csrlist::SparseMatrix;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let m1 = SparseMatrix::random_with_rng(6, 6, 0.3, &mut rng);
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let m2 = SparseMatrix::random_with_rng(6, 6, 0.3, &mut rng);
    ///
    /// assert_eq!(m1, m2);
    /// ```
    pub fn random_with_rng<R: Rng>(rows: usize, cols: usize, density: f64, rng: &mut R) -> Self {
        let source = random_source(rows, cols, density, rng);
        Self::from_dense(rows, cols, &source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_shape() {
        let m = SparseMatrix::random(3, 7, 0.5);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 7);
        assert_eq!(m.row_offset().len(), 4);
    }

    #[test]
    fn test_random_values_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = SparseMatrix::random_with_rng(10, 10, 0.4, &mut rng);
        for &v in m.values() {
            assert!(v != 0 && v.abs() <= MAX_MAGNITUDE, "value {} out of range", v);
        }
    }

    #[test]
    fn test_random_density_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(SparseMatrix::random_with_rng(4, 5, 0.0, &mut rng).nnz(), 0);
        assert_eq!(SparseMatrix::random_with_rng(4, 5, 1.0, &mut rng).nnz(), 20);
        assert_eq!(SparseMatrix::random_with_rng(4, 5, 3.0, &mut rng).nnz(), 20);
        assert_eq!(SparseMatrix::random_with_rng(4, 5, -1.0, &mut rng).nnz(), 0);
        assert_eq!(
            SparseMatrix::random_with_rng(4, 5, f64::NAN, &mut rng).nnz(),
            0
        );
    }

    #[test]
    fn test_random_source_matches_encoding() {
        let mut rng = StdRng::seed_from_u64(99);
        let source = random_source(6, 3, 0.3, &mut rng);
        assert_eq!(source.len(), 18);
        let m = SparseMatrix::from_dense(6, 3, &source);
        assert_eq!(m.to_dense(), source);
    }

    #[test]
    fn test_random_reproducible() {
        let mut rng1 = StdRng::seed_from_u64(12345);
        let m1 = SparseMatrix::random_with_rng(8, 9, 0.2, &mut rng1);

        let mut rng2 = StdRng::seed_from_u64(12345);
        let m2 = SparseMatrix::random_with_rng(8, 9, 0.2, &mut rng2);

        assert_eq!(m1, m2);
    }

    #[test]
    fn test_random_zero_dimension_is_empty() {
        assert!(SparseMatrix::random(0, 4, 0.5).is_empty());
    }
}
