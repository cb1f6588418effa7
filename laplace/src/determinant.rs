// Copyright (c) The laplace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Determinants by Laplace (cofactor) expansion along the first row.

use crate::{errors::InvalidMatrix, matrix::Matrix};

/// Computes the determinant of `matrix` by recursive cofactor expansion along row 0.
///
/// Runs in O(n!) time for a rank-n matrix, with recursion depth n - 1. Plain `f64` arithmetic is
/// used throughout, with no pivoting or scaling.
///
/// # Examples
///
/// ```
/// use laplace::{determinant, matrix::Matrix};
///
/// let matrix = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]).unwrap();
/// assert_eq!(determinant::laplace(&matrix), -3.0);
/// ```
pub fn laplace(matrix: &Matrix) -> f64 {
    match matrix.rank() {
        1 => matrix[(0, 0)],
        2 => matrix[(0, 0)] * matrix[(1, 1)] - matrix[(0, 1)] * matrix[(1, 0)],
        rank => {
            log::trace!("expanding rank {} matrix along row 0", rank);
            matrix
                .row(0)
                .iter()
                .enumerate()
                .fold(0.0, |det, (col_ix, &value)| {
                    let cofactor = cofactor_sign(col_ix) * laplace(&matrix.minor(0, col_ix));
                    det + value * cofactor
                })
        }
    }
}

/// Computes the determinant of raw row data.
///
/// Returns [`InvalidMatrix`] if `rows` is empty or not square.
pub fn of_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<f64, InvalidMatrix>
where
    R: AsRef<[f64]>,
{
    let matrix = Matrix::from_rows(rows)?;
    Ok(laplace(&matrix))
}

#[inline]
fn cofactor_sign(col_ix: usize) -> f64 {
    if col_ix % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}
