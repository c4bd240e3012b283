// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for convolution operations.

use thiserror::Error;

/// Errors that can occur while convolving.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvolutionError {
    /// The exact result may not fit the backend's arithmetic
    #[error("Convolution result may exceed the exact range of ±{limit}")]
    RangeExceeded { limit: u128 },

    /// The inputs need a transform longer than the primes support
    #[error("Transform length {len} exceeds the supported maximum {max}")]
    LengthExceeded { len: usize, max: usize },

    /// Modular arithmetic setup failed
    #[error("Modular arithmetic error: {0}")]
    Math(String),

    /// Unknown backend name
    #[error("Unknown convolver '{0}', expected 'schoolbook' or 'ntt'")]
    UnknownBackend(String),
}

/// Result type alias for convolution operations
pub type ConvolutionResult<T> = Result<T, ConvolutionError>;
