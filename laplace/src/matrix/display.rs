// Copyright (c) The laplace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::matrix::Matrix;
use itertools::{Itertools, Position};
use std::{borrow::Cow, fmt};

/// Renders a [`Matrix`] one row per line.
///
/// Created by [`Matrix::matrix_display`].
#[derive(Clone, Debug)]
pub struct MatrixDisplay<'a> {
    matrix: &'a Matrix,
    precision: Option<usize>,
    row_prefix: Cow<'a, str>,
    entry_separator: Cow<'a, str>,
    row_separator: (Cow<'a, str>, bool),
}

impl<'a> MatrixDisplay<'a> {
    pub fn new(matrix: &'a Matrix) -> Self {
        Self {
            matrix,
            precision: None,
            row_prefix: Cow::Borrowed(""),
            entry_separator: Cow::Borrowed(" "),
            row_separator: (Cow::Borrowed("\n"), true),
        }
    }

    /// Prints every entry with exactly `precision` digits after the decimal point.
    ///
    /// By default entries use the shortest representation that round-trips.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_row_prefix(mut self, prefix: impl Into<Cow<'a, str>>) -> Self {
        self.row_prefix = prefix.into();
        self
    }

    pub fn with_entry_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.entry_separator = separator.into();
        self
    }

    pub fn with_row_separator(
        mut self,
        separator: impl Into<Cow<'a, str>>,
        print_last: bool,
    ) -> Self {
        self.row_separator = (separator.into(), print_last);
        self
    }

    fn fmt_entry(&self, f: &mut fmt::Formatter, value: f64) -> fmt::Result {
        match self.precision {
            Some(precision) => write!(f, "{:.*}", precision, value),
            None => write!(f, "{}", value),
        }
    }
}

impl<'a> fmt::Display for MatrixDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rank = self.matrix.rank();
        let (row_separator, print_last) = &self.row_separator;
        for (row_ix, row) in self.matrix.rows().enumerate() {
            write!(f, "{}", self.row_prefix)?;
            for entry in row.iter().with_position() {
                match entry {
                    Position::First(value) | Position::Middle(value) => {
                        self.fmt_entry(f, *value)?;
                        write!(f, "{}", self.entry_separator)?;
                    }
                    Position::Last(value) | Position::Only(value) => {
                        self.fmt_entry(f, *value)?;
                    }
                }
            }

            if *print_last || row_ix < rank - 1 {
                write!(f, "{}", row_separator)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_display() {
        let matrix = Matrix::from_rows([[1.0, -2.5], [0.0, 4.0]]).unwrap();
        assert_eq!(matrix.matrix_display().to_string(), "1 -2.5\n0 4\n");
        assert_eq!(
            matrix
                .matrix_display()
                .with_precision(2)
                .with_row_prefix("  ")
                .with_entry_separator(", ")
                .with_row_separator("; ", false)
                .to_string(),
            "  1.00, -2.50;   0.00, 4.00"
        );

        let single = Matrix::from_rows([[7.0]]).unwrap();
        assert_eq!(single.matrix_display().to_string(), "7\n");
    }
}
