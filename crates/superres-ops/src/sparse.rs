//! Compressed sparse row matrices for explicit operator representations.
//!
//! Operators act on images matrix-free, but some solvers need the linear map
//! as an actual matrix acting on the flattened (row-major) image vector.
//! Those matrices are overwhelmingly zero: decimation has one entry per
//! output pixel and a blur has at most `radius²` per row.
//!
//! # Layout
//!
//! ```text
//! row_offsets: [0, 1, 3, 3]      row r spans entries row_offsets[r]..row_offsets[r+1]
//! col_indices: [2, 0, 3]
//! values:      [1.0, 0.5, 0.5]
//! ```
//!
//! # Example
//!
//! ```rust
//! use superres_ops::sparse::SparseMatrix;
//!
//! let m = SparseMatrix::from_triplets(2, 3, vec![(0, 2, 1.0), (1, 0, 2.0)]).unwrap();
//! assert_eq!(m.mul_vec(&[1.0, 2.0, 3.0]).unwrap(), vec![3.0, 2.0]);
//! ```

use crate::{OpsError, OpsResult};
use tracing::trace;

/// Sparse `f64` matrix in CSR form.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    row_offsets: Vec<usize>,
    col_indices: Vec<usize>,
    values: Vec<f64>,
}

impl SparseMatrix {
    /// Creates the `n x n` identity.
    pub fn identity(n: usize) -> Self {
        Self {
            rows: n,
            cols: n,
            row_offsets: (0..=n).collect(),
            col_indices: (0..n).collect(),
            values: vec![1.0; n],
        }
    }

    /// Builds a matrix from `(row, col, value)` triplets.
    ///
    /// Triplets may come in any order; duplicates are summed and explicit
    /// zeros are dropped.
    ///
    /// # Errors
    ///
    /// [`OpsError::DimensionMismatch`] if a triplet lies outside the matrix.
    pub fn from_triplets(
        rows: usize,
        cols: usize,
        mut triplets: Vec<(usize, usize, f64)>,
    ) -> OpsResult<Self> {
        if let Some(&(r, c, _)) = triplets.iter().find(|&&(r, c, _)| r >= rows || c >= cols) {
            return Err(OpsError::DimensionMismatch(format!(
                "entry ({r}, {c}) outside {rows}x{cols} matrix"
            )));
        }
        triplets.sort_unstable_by_key(|&(r, c, _)| (r, c));

        let mut row_offsets = vec![0usize; rows + 1];
        let mut col_indices = Vec::with_capacity(triplets.len());
        let mut values: Vec<f64> = Vec::with_capacity(triplets.len());
        let mut last: Option<(usize, usize)> = None;

        for (r, c, v) in triplets {
            if last == Some((r, c)) {
                if let Some(tail) = values.last_mut() {
                    *tail += v;
                }
                continue;
            }
            last = Some((r, c));
            row_offsets[r + 1] += 1;
            col_indices.push(c);
            values.push(v);
        }
        for r in 0..rows {
            row_offsets[r + 1] += row_offsets[r];
        }

        Ok(Self {
            rows,
            cols,
            row_offsets,
            col_indices,
            values,
        }
        .pruned())
    }

    /// Drops stored zeros.
    fn pruned(self) -> Self {
        if self.values.iter().all(|&v| v != 0.0) {
            return self;
        }
        let triplets: Vec<_> = self.triplets().filter(|&(_, _, v)| v != 0.0).collect();
        let mut row_offsets = vec![0usize; self.rows + 1];
        for &(r, _, _) in &triplets {
            row_offsets[r + 1] += 1;
        }
        for r in 0..self.rows {
            row_offsets[r + 1] += row_offsets[r];
        }
        Self {
            rows: self.rows,
            cols: self.cols,
            row_offsets,
            col_indices: triplets.iter().map(|&(_, c, _)| c).collect(),
            values: triplets.iter().map(|&(_, _, v)| v).collect(),
        }
    }

    /// Returns the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of stored non-zero entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns the entries of row `r` as `(col, value)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows()`.
    pub fn row(&self, r: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        assert!(r < self.rows, "row {r} out of range for {} rows", self.rows);
        let span = self.row_offsets[r]..self.row_offsets[r + 1];
        self.col_indices[span.clone()]
            .iter()
            .copied()
            .zip(self.values[span].iter().copied())
    }

    /// Returns entry `(r, c)`; zero when not stored or out of range.
    pub fn get(&self, r: usize, c: usize) -> f64 {
        if r >= self.rows || c >= self.cols {
            return 0.0;
        }
        let span = self.row_offsets[r]..self.row_offsets[r + 1];
        match self.col_indices[span.clone()].binary_search(&c) {
            Ok(i) => self.values[span.start + i],
            Err(_) => 0.0,
        }
    }

    /// Iterates over all stored entries in row-major order.
    pub fn triplets(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.rows).flat_map(move |r| self.row(r).map(move |(c, v)| (r, c, v)))
    }

    /// Computes `self * x`.
    ///
    /// # Errors
    ///
    /// [`OpsError::DimensionMismatch`] if `x.len() != cols()`.
    pub fn mul_vec(&self, x: &[f64]) -> OpsResult<Vec<f64>> {
        if x.len() != self.cols {
            return Err(OpsError::DimensionMismatch(format!(
                "vector of length {} for {}x{} matrix",
                x.len(),
                self.rows,
                self.cols
            )));
        }
        Ok((0..self.rows)
            .map(|r| self.row(r).map(|(c, v)| v * x[c]).sum())
            .collect())
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let mut counts = vec![0usize; self.cols + 1];
        for &c in &self.col_indices {
            counts[c + 1] += 1;
        }
        for c in 0..self.cols {
            counts[c + 1] += counts[c];
        }
        let row_offsets = counts.clone();
        let mut next = counts;
        let mut col_indices = vec![0usize; self.nnz()];
        let mut values = vec![0.0; self.nnz()];

        // Rows are visited in order, so each transposed row stays sorted.
        for (r, c, v) in self.triplets() {
            let slot = next[c];
            col_indices[slot] = r;
            values[slot] = v;
            next[c] += 1;
        }

        Self {
            rows: self.cols,
            cols: self.rows,
            row_offsets,
            col_indices,
            values,
        }
    }

    /// Computes the product `self * rhs`.
    ///
    /// # Errors
    ///
    /// [`OpsError::DimensionMismatch`] if `self.cols() != rhs.rows()`.
    pub fn matmul(&self, rhs: &SparseMatrix) -> OpsResult<Self> {
        if self.cols != rhs.rows {
            return Err(OpsError::DimensionMismatch(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, rhs.rows, rhs.cols
            )));
        }
        trace!(lhs_nnz = self.nnz(), rhs_nnz = rhs.nnz(), "sparse matmul");

        let mut triplets = Vec::new();
        let mut acc = vec![0.0; rhs.cols];
        let mut touched: Vec<usize> = Vec::new();

        for r in 0..self.rows {
            for (k, a) in self.row(r) {
                for (c, b) in rhs.row(k) {
                    if acc[c] == 0.0 {
                        touched.push(c);
                    }
                    acc[c] += a * b;
                }
            }
            touched.sort_unstable();
            touched.dedup();
            for &c in &touched {
                triplets.push((r, c, acc[c]));
                acc[c] = 0.0;
            }
            touched.clear();
        }

        Self::from_triplets(self.rows, rhs.cols, triplets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SparseMatrix {
        // [1 0 2]
        // [0 0 0]
        // [0 3 0]
        SparseMatrix::from_triplets(3, 3, vec![(2, 1, 3.0), (0, 2, 2.0), (0, 0, 1.0)]).unwrap()
    }

    #[test]
    fn test_from_triplets_sorted() {
        let m = sample();
        assert_eq!(m.nnz(), 3);
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(0, 2), 2.0);
        assert_eq!(m.get(2, 1), 3.0);
        assert_eq!(m.get(1, 1), 0.0);
        assert_eq!(m.get(5, 5), 0.0);
        let order: Vec<_> = m.triplets().collect();
        assert_eq!(order, vec![(0, 0, 1.0), (0, 2, 2.0), (2, 1, 3.0)]);
    }

    #[test]
    fn test_from_triplets_duplicates_and_zeros() {
        let m = SparseMatrix::from_triplets(
            2,
            2,
            vec![(0, 0, 1.0), (0, 0, 2.0), (1, 1, 0.0), (1, 0, 1.0), (1, 0, -1.0)],
        )
        .unwrap();
        assert_eq!(m.nnz(), 1);
        assert_eq!(m.get(0, 0), 3.0);
    }

    #[test]
    fn test_from_triplets_out_of_range() {
        let err = SparseMatrix::from_triplets(2, 2, vec![(0, 2, 1.0)]).unwrap_err();
        assert!(matches!(err, OpsError::DimensionMismatch(_)));
    }

    #[test]
    fn test_mul_vec() {
        let m = sample();
        assert_eq!(m.mul_vec(&[1.0, 2.0, 3.0]).unwrap(), vec![7.0, 0.0, 6.0]);
        assert!(m.mul_vec(&[1.0]).is_err());
    }

    #[test]
    fn test_transpose() {
        let t = sample().transpose();
        let entries: Vec<_> = t.triplets().collect();
        assert_eq!(entries, vec![(0, 0, 1.0), (1, 2, 3.0), (2, 0, 2.0)]);
    }

    #[test]
    fn test_matmul() {
        let a = sample();
        let p = a.matmul(&a).unwrap();
        // A*A = [1 6 2; 0 0 0; 0 0 0]
        let entries: Vec<_> = p.triplets().collect();
        assert_eq!(entries, vec![(0, 0, 1.0), (0, 1, 6.0), (0, 2, 2.0)]);
        assert_eq!(SparseMatrix::identity(3).matmul(&a).unwrap(), a);
        assert!(a.matmul(&SparseMatrix::identity(2)).is_err());
    }

    #[test]
    #[should_panic(expected = "row 3 out of range")]
    fn test_row_out_of_range() {
        sample().row(3).count();
    }

    #[test]
    fn test_matmul_cancellation() {
        // [1 1] * [1; -1] = [0]
        let a = SparseMatrix::from_triplets(1, 2, vec![(0, 0, 1.0), (0, 1, 1.0)]).unwrap();
        let b = SparseMatrix::from_triplets(2, 1, vec![(0, 0, 1.0), (1, 0, -1.0)]).unwrap();
        assert_eq!(a.matmul(&b).unwrap().nnz(), 0);
    }
}
