// Copyright (c) The laplace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interactive acquisition of a matrix over a line-oriented stream.

use crate::{
    errors::SessionError,
    matrix::Matrix,
    validate::{is_integer_token, parse_real},
    MAX_SUPPORTED_RANK,
};
use std::{
    borrow::Cow,
    io::{BufRead, Write},
};

pub const RANK_PROMPT: &str = "Matrix rank: ";
pub const DEFAULT_INVALID_MESSAGE: &str = "invalid arg";
pub const DEFAULT_MAX_RANK: usize = 10;

/// Options controlling an [`InputSession`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    max_rank: usize,
    invalid_message: Cow<'static, str>,
    show_matrix: bool,
    matrix_precision: Option<usize>,
}

impl SessionOptions {
    pub fn new() -> Self {
        Self {
            max_rank: DEFAULT_MAX_RANK,
            invalid_message: Cow::Borrowed(DEFAULT_INVALID_MESSAGE),
            show_matrix: false,
            matrix_precision: None,
        }
    }

    /// Sets the largest rank accepted at the rank prompt.
    ///
    /// Panics if `max_rank` is not in `1..=MAX_SUPPORTED_RANK`.
    pub fn with_max_rank(mut self, max_rank: usize) -> Self {
        assert!(
            (1..=MAX_SUPPORTED_RANK).contains(&max_rank),
            "max rank {} must be in range [1..={}]",
            max_rank,
            MAX_SUPPORTED_RANK
        );
        self.max_rank = max_rank;
        self
    }

    /// Sets the line printed after a rejected token.
    pub fn with_invalid_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.invalid_message = message.into();
        self
    }

    /// If true, the matrix is echoed back before the determinant is reported.
    pub fn with_show_matrix(mut self, show_matrix: bool) -> Self {
        self.show_matrix = show_matrix;
        self
    }

    /// Digits after the decimal point when echoing the matrix. `None` prints the shortest
    /// representation that round-trips.
    pub fn with_matrix_precision(mut self, precision: Option<usize>) -> Self {
        self.matrix_precision = precision;
        self
    }

    #[inline]
    pub fn max_rank(&self) -> usize {
        self.max_rank
    }

    #[inline]
    pub fn invalid_message(&self) -> &str {
        &self.invalid_message
    }

    #[inline]
    pub fn show_matrix(&self) -> bool {
        self.show_matrix
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// One run of the calculator: read a rank, read every entry, report the determinant.
///
/// Invalid tokens are answered with the invalid-input message and the same prompt is shown again,
/// with no limit on the number of retries. The session fails only if the input ends or an I/O
/// error occurs.
#[derive(Debug)]
pub struct InputSession<R, W> {
    reader: R,
    writer: W,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> InputSession<R, W> {
    pub fn new(reader: R, writer: W, options: SessionOptions) -> Self {
        Self {
            reader,
            writer,
            options,
        }
    }

    /// Runs the whole session and returns the determinant that was reported.
    pub fn run(&mut self) -> Result<f64, SessionError> {
        let rank = self.read_rank()?;
        let matrix = self.read_matrix(rank)?;
        let det = matrix.determinant();
        log::debug!("rank {} determinant: {}", rank, det);

        if self.options.show_matrix {
            let mut display = matrix
                .matrix_display()
                .with_row_prefix("  ")
                .with_entry_separator("  ");
            if let Some(precision) = self.options.matrix_precision {
                display = display.with_precision(precision);
            }
            writeln!(self.writer, "A =")?;
            write!(self.writer, "{}", display)?;
        }
        writeln!(self.writer, "det(A) = {}", det)?;
        self.writer.flush()?;
        Ok(det)
    }

    /// Prompts until the user enters an integer rank in `1..=max_rank`.
    pub fn read_rank(&mut self) -> Result<usize, SessionError> {
        let max_rank = self.options.max_rank;
        self.prompt_until(RANK_PROMPT, |token| {
            if !is_integer_token(token) {
                return None;
            }
            // Negative and overflowing ranks fail to parse and are rejected like any other token.
            token
                .parse::<usize>()
                .ok()
                .filter(|rank| (1..=max_rank).contains(rank))
        })
    }

    /// Prompts for every entry of a `rank × rank` matrix in row-major order.
    pub fn read_matrix(&mut self, rank: usize) -> Result<Matrix, SessionError> {
        let mut matrix = Matrix::zeros(rank)?;
        for row_ix in 0..rank {
            for col_ix in 0..rank {
                let prompt = entry_prompt(row_ix, col_ix);
                let value = self.prompt_until(&prompt, parse_real)?;
                matrix.set(row_ix, col_ix, value);
            }
        }
        Ok(matrix)
    }

    #[inline]
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    // ---
    // Helper methods
    // ---

    fn prompt_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, SessionError> {
        let mut line = Vec::new();
        loop {
            write!(self.writer, "{}", prompt)?;
            self.writer.flush()?;

            line.clear();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Err(SessionError::EndOfInput {
                    prompt: prompt.to_owned(),
                });
            }

            // A line that isn't UTF-8 is a malformed token like any other.
            let parsed = std::str::from_utf8(&line)
                .ok()
                .and_then(|text| parse(text.trim()));
            match parsed {
                Some(value) => return Ok(value),
                None => {
                    log::debug!(
                        "rejected {:?} at prompt {:?}",
                        String::from_utf8_lossy(&line).trim(),
                        prompt
                    );
                    writeln!(self.writer, "{}", self.options.invalid_message)?;
                }
            }
        }
    }
}

/// The prompt for the entry at 0-indexed `(row_ix, col_ix)`, labelled 1-indexed.
pub fn entry_prompt(row_ix: usize, col_ix: usize) -> String {
    format!("a[{}, {}] = ", row_ix + 1, col_ix + 1)
}
