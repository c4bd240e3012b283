// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Sparse Boolean matrices.
//!
//! An `n × n` 0/1 matrix is stored as the set of its 1-entries. The set is kept
//! sorted in ascending `(row, col)` order and free of duplicates so that two
//! matrices compare equal exactly when they describe the same entries.
//!
//! Matrices are immutable once built: every operation that produces a matrix
//! (transpose, products computed by other crates) returns a fresh instance.

pub mod errors;
pub mod matrix;

pub use errors::{MatrixError, MatrixResult};
pub use matrix::SparseBoolMatrix;
