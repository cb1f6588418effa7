// Copyright (c) The laplace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::matrix::Matrix;
use proptest::prelude::*;

impl Arbitrary for Matrix {
    /// Inclusive `(min_rank, max_rank)` bounds. Defaults to `(1, 5)`.
    type Parameters = Option<(usize, usize)>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        let (min_rank, max_rank) = params.unwrap_or((1, 5));
        assert!(
            min_rank >= 1 && min_rank <= max_rank,
            "rank bounds ({}, {}) must satisfy 1 <= min <= max",
            min_rank,
            max_rank
        );
        // Small integer entries keep every determinant identity exact in f64.
        (min_rank..=max_rank)
            .prop_flat_map(|rank| (Just(rank), prop::collection::vec(small_entry(), rank * rank)))
            .prop_map(|(rank, entries)| {
                let rows: Vec<&[f64]> = entries.chunks_exact(rank).collect();
                Matrix::from_rows(rows).expect("entries should form a square matrix")
            })
            .boxed()
    }
}

fn small_entry() -> impl Strategy<Value = f64> {
    (-50_i32..50).prop_map(f64::from)
}
