// Copyright (c) The laplace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::{error, fmt, io};

/// Returned when row data does not describe a square matrix of rank at least 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidMatrix {
    /// The matrix has no rows.
    Empty,
    /// A row's length differs from the number of rows.
    NotSquare {
        row_ix: usize,
        row_len: usize,
        rank: usize,
    },
}

impl fmt::Display for InvalidMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "invalid matrix: rank must be at least 1"),
            Self::NotSquare {
                row_ix,
                row_len,
                rank,
            } => write!(
                f,
                "invalid matrix: row {} has {} entries, expected {}",
                row_ix, row_len, rank
            ),
        }
    }
}

impl error::Error for InvalidMatrix {}

/// Errors that end an interactive session.
#[derive(Debug)]
pub enum SessionError {
    /// The input stream closed while waiting for an answer to `prompt`.
    EndOfInput { prompt: String },
    /// Reading from or writing to the terminal failed.
    Io(io::Error),
    /// The session built a matrix that violates the matrix invariants.
    InvalidMatrix(InvalidMatrix),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EndOfInput { prompt } => {
                write!(f, "input ended while waiting for `{}`", prompt.trim_end())
            }
            Self::Io(_) => write!(f, "I/O error during session"),
            Self::InvalidMatrix(_) => write!(f, "session produced an invalid matrix"),
        }
    }
}

impl error::Error for SessionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::EndOfInput { .. } => None,
            Self::Io(err) => Some(err),
            Self::InvalidMatrix(err) => Some(err),
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<InvalidMatrix> for SessionError {
    fn from(err: InvalidMatrix) -> Self {
        Self::InvalidMatrix(err)
    }
}
