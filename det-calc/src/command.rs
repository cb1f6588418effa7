// Copyright (c) The laplace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::{
    eyre::{bail, WrapErr},
    Result,
};
use laplace::{
    session::{InputSession, SessionOptions, DEFAULT_INVALID_MESSAGE, DEFAULT_MAX_RANK},
    MAX_SUPPORTED_RANK,
};
use std::io::{self, BufRead, Write};

/// Computes the determinant of a matrix entered at the terminal.
#[derive(Debug, Parser)]
#[clap(version)]
pub struct DetCalcApp {
    /// Largest rank accepted at the rank prompt
    #[clap(long, default_value_t = DEFAULT_MAX_RANK)]
    max_rank: usize,

    /// Line printed after an invalid token
    #[clap(long, default_value = DEFAULT_INVALID_MESSAGE)]
    invalid_message: String,

    /// Print the matrix before the determinant
    #[clap(long)]
    show_matrix: bool,

    /// Digits after the decimal point when printing the matrix with --show-matrix
    #[clap(long)]
    precision: Option<usize>,
}

impl DetCalcApp {
    /// Runs one session on stdin and stdout.
    pub fn exec(self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.exec_with(stdin.lock(), stdout.lock())?;
        Ok(())
    }

    /// Runs one session on the given streams, returning the determinant that was printed.
    pub fn exec_with(self, reader: impl BufRead, writer: impl Write) -> Result<f64> {
        let options = self.session_options()?;
        log::info!(
            "starting session (max rank {}, show matrix: {})",
            options.max_rank(),
            options.show_matrix()
        );

        let mut session = InputSession::new(reader, writer, options);
        session.run().wrap_err("failed to compute determinant")
    }

    pub fn session_options(&self) -> Result<SessionOptions> {
        if !(1..=MAX_SUPPORTED_RANK).contains(&self.max_rank) {
            bail!(
                "--max-rank must be between 1 and {} (got {})",
                MAX_SUPPORTED_RANK,
                self.max_rank
            );
        }

        Ok(SessionOptions::default()
            .with_max_rank(self.max_rank)
            .with_invalid_message(self.invalid_message.clone())
            .with_show_matrix(self.show_matrix)
            .with_matrix_precision(self.precision))
    }
}
