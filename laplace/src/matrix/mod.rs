// Copyright (c) The laplace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod caches;
mod display;
mod matrix_impl;

pub use display::*;
pub use matrix_impl::*;
