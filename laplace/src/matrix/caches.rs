// Copyright (c) The laplace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use once_cell::sync::OnceCell;

/// Cache for values derived from a matrix's entries.
#[derive(Clone, Debug, Default)]
pub(super) struct MatrixCache {
    determinant: OnceCell<f64>,
}

impl MatrixCache {
    pub(super) fn invalidate(&mut self) {
        self.determinant = OnceCell::new();
    }

    pub(super) fn get_or_init_determinant(&self, f: impl FnOnce() -> f64) -> f64 {
        *self.determinant.get_or_init(f)
    }

    #[cfg(test)]
    pub(super) fn is_determinant_cached(&self) -> bool {
        self.determinant.get().is_some()
    }
}
