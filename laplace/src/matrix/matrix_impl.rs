// Copyright (c) The laplace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{determinant, errors::InvalidMatrix, matrix::MatrixDisplay};
use std::ops::Index;

use super::caches::MatrixCache;

/// A square matrix of real numbers with rank (dimension) at least 1.
///
/// Entries are stored row-major. Every constructor checks the shape, so a `Matrix` that exists is
/// always square and non-empty.
#[derive(Clone, Debug)]
pub struct Matrix {
    rank: usize,
    entries: Vec<f64>,
    cache: MatrixCache,
}

impl Matrix {
    /// Creates a `rank × rank` matrix filled with zeroes.
    pub fn zeros(rank: usize) -> Result<Self, InvalidMatrix> {
        if rank == 0 {
            return Err(InvalidMatrix::Empty);
        }
        Ok(Self::new_unchecked(rank, vec![0.0; rank * rank]))
    }

    /// Creates the `rank × rank` identity matrix.
    pub fn identity(rank: usize) -> Result<Self, InvalidMatrix> {
        let mut matrix = Self::zeros(rank)?;
        for ix in 0..rank {
            matrix.entries[ix * rank + ix] = 1.0;
        }
        Ok(matrix)
    }

    /// Builds a matrix from a list of rows.
    ///
    /// Returns an error if there are no rows or if any row's length differs from the number of
    /// rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use laplace::matrix::Matrix;
    ///
    /// let matrix = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(matrix.rank(), 2);
    /// assert_eq!(matrix[(1, 0)], 3.0);
    ///
    /// assert!(Matrix::from_rows(vec![vec![1.0, 2.0]]).is_err());
    /// ```
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, InvalidMatrix>
    where
        R: AsRef<[f64]>,
    {
        let rows: Vec<R> = rows.into_iter().collect();
        let rank = rows.len();
        if rank == 0 {
            return Err(InvalidMatrix::Empty);
        }

        let mut entries = Vec::with_capacity(rank * rank);
        for (row_ix, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != rank {
                return Err(InvalidMatrix::NotSquare {
                    row_ix,
                    row_len: row.len(),
                    rank,
                });
            }
            entries.extend_from_slice(row);
        }
        Ok(Self::new_unchecked(rank, entries))
    }

    #[inline]
    fn new_unchecked(rank: usize, entries: Vec<f64>) -> Self {
        debug_assert_eq!(entries.len(), rank * rank, "entries must be rank * rank");
        Self {
            rank,
            entries,
            cache: MatrixCache::default(),
        }
    }

    /// The number of rows, which is also the number of columns.
    #[inline]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Sets the entry at `(row_ix, col_ix)`.
    ///
    /// Panics if either index is out of range.
    pub fn set(&mut self, row_ix: usize, col_ix: usize, value: f64) {
        self.assert_in_range(row_ix, col_ix);
        self.cache.invalidate();
        let offset = self.offset(row_ix, col_ix);
        self.entries[offset] = value;
    }

    #[inline]
    pub fn row(&self, row_ix: usize) -> &[f64] {
        assert!(
            row_ix < self.rank,
            "row ix {} must be in range [0..{})",
            row_ix,
            self.rank
        );
        let start = self.offset(row_ix, 0);
        &self.entries[start..start + self.rank]
    }

    #[inline]
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.entries.chunks_exact(self.rank)
    }

    /// Returns the minor obtained by deleting row `row_ix` and column `col_ix`.
    ///
    /// The remaining rows and columns keep their relative order. `self` is left untouched.
    ///
    /// Panics if the rank is 1 (the minor would be empty) or either index is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use laplace::matrix::Matrix;
    ///
    /// let matrix = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
    /// let expected = Matrix::from_rows([[4.0, 6.0], [7.0, 9.0]]).unwrap();
    /// assert_eq!(matrix.minor(0, 1), expected);
    /// ```
    pub fn minor(&self, row_ix: usize, col_ix: usize) -> Matrix {
        assert!(
            self.rank >= 2,
            "minor requires rank >= 2, but rank is {}",
            self.rank
        );
        self.assert_in_range(row_ix, col_ix);

        let entries = self
            .rows()
            .enumerate()
            .filter(|(ix, _)| *ix != row_ix)
            .flat_map(|(_, row)| {
                row.iter()
                    .enumerate()
                    .filter(move |(ix, _)| *ix != col_ix)
                    .map(|(_, value)| *value)
            })
            .collect();
        Self::new_unchecked(self.rank - 1, entries)
    }

    /// Returns the determinant, computing it by cofactor expansion on first use.
    ///
    /// The value is cached until the next call to [`Matrix::set`].
    pub fn determinant(&self) -> f64 {
        self.cache
            .get_or_init_determinant(|| determinant::laplace(self))
    }

    #[inline]
    pub fn matrix_display(&self) -> MatrixDisplay<'_> {
        MatrixDisplay::new(self)
    }

    // ---
    // Helper methods
    // ---

    #[inline]
    fn offset(&self, row_ix: usize, col_ix: usize) -> usize {
        row_ix * self.rank + col_ix
    }

    fn assert_in_range(&self, row_ix: usize, col_ix: usize) {
        assert!(
            row_ix < self.rank && col_ix < self.rank,
            "position ({}, {}) must be in range [0..{})",
            row_ix,
            col_ix,
            self.rank
        );
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row_ix, col_ix): (usize, usize)) -> &f64 {
        self.assert_in_range(row_ix, col_ix);
        &self.entries[self.offset(row_ix, col_ix)]
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.entries == other.entries
    }
}
