// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Boolean matrix products through LCEW queries
//!
//! Computes `C = A·B` for sparse `n × n` Boolean matrices by reducing the
//! product to longest-common-extension-with-wildcards queries.
//!
//! ## Encoding
//!
//! Both operands are written into a single text of length `2n²`. The first
//! half holds the rows of `A`, one block of `n` symbols per row, with `1` where
//! `A[i][k]` is set. The second half holds the columns of `B` with `2` where
//! `B[k][j]` is set. Every other position is a wildcard.
//!
//! Row `i` of `A` and column `j` of `B` share a real mismatch (`1` against
//! `2`) at offset `k` exactly when `A[i][k] = B[k][j] = 1`, so an LCEW query
//! from the start of row `i` and column `j` stops at the first witness of
//! `C[i][j] = 1`. Because consecutive rows and consecutive columns are laid
//! out back to back, a single query keeps running along the diagonal
//! `(i+1, j+1), (i+2, j+2), …` until it meets a witness. The quotient of the
//! extension length by `n` is the number of diagonal cells skipped.
//!
//! ## Scanning
//!
//! [`scan::DiagonalScan`] walks one diagonal as a small state machine and
//! [`multiply`] runs it over all `2n - 1` diagonals, issuing at most one query
//! per output entry plus one per diagonal.

pub mod budget;
pub mod config;
pub mod encode;
pub mod errors;
pub mod product;
pub mod scan;

pub use budget::preprocessing_budget;
pub use config::ProductConfig;
pub use encode::{encode, LHS_SYMBOL, RHS_SYMBOL, WILDCARD};
pub use errors::{MatMulError, MatMulResult};
pub use product::{multiply, multiply_detailed, multiply_with, multiply_with_kind, ProductStats};
pub use scan::{diagonal_anchors, DiagonalScan, Phase};
