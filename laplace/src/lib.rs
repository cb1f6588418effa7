// Copyright (c) The laplace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Determinants of small square matrices by recursive Laplace (cofactor) expansion, plus the
//! interactive session that reads a matrix from a line-oriented stream.

pub mod determinant;
pub mod errors;
pub mod matrix;
#[cfg(any(test, feature = "proptest1"))]
pub mod proptest_helpers;
pub mod session;
pub mod validate;

/// The largest rank an [`session::InputSession`] will accept.
///
/// Cofactor expansion is O(n!), so anything above this never finishes in practice.
pub const MAX_SUPPORTED_RANK: usize = 12;
