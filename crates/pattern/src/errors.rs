// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use thiserror::Error;
use wcs_convolution::ConvolutionError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Pattern of length {pattern} is longer than the text of length {text}")]
    PatternLongerThanText { pattern: usize, text: usize },

    /// Symbol powers or the combined sums do not fit the integer range
    #[error("Numeric range exceeded: {0}")]
    NumericRange(String),

    #[error(transparent)]
    Convolution(#[from] ConvolutionError),
}

/// Result type alias for pattern matching
pub type PatternResult<T> = Result<T, PatternError>;
