// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for Boolean matrix products.

use thiserror::Error;
use wcs_lcew::LcewError;
use wcs_sparse_matrix::MatrixError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatMulError {
    /// Operands of different dimension
    #[error("Dimension mismatch: left operand is {left}x{left}, right operand is {right}x{right}")]
    DimensionMismatch { left: usize, right: usize },

    /// The encoded text length `2n²` does not fit in memory addressing
    #[error("Matrix dimension {n} is too large to encode")]
    TooLarge { n: usize },

    /// Configuration values that cannot drive a product
    #[error("Invalid product configuration: {message}")]
    InvalidConfig { message: String },

    /// Oracle construction failed
    #[error("Oracle error: {0}")]
    Oracle(#[from] LcewError),

    /// The product entries do not form a valid matrix
    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),
}

/// Result type alias for product operations
pub type MatMulResult<T> = Result<T, MatMulError>;
