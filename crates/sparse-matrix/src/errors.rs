// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for sparse matrix construction.

use thiserror::Error;

/// Errors raised while building a [`crate::SparseBoolMatrix`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// An entry lies outside the `n × n` grid
    #[error("Entry ({row}, {col}) is out of bounds for a {n}x{n} matrix")]
    OutOfBounds { row: usize, col: usize, n: usize },

    /// A dense grid whose rows do not all have the grid's height as length
    #[error("Dense grid is not square: row {row} has {len} columns, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Entries that should be strictly ascending are not
    #[error("Entry {index} is not strictly greater than the entry before it")]
    Unsorted { index: usize },
}

/// Result type alias for sparse matrix operations
pub type MatrixResult<T> = Result<T, MatrixError>;
