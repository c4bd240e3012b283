// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::convolver::Convolver;
use crate::errors::{ConvolutionError, ConvolutionResult};

/// Quadratic-time convolution straight from the definition.
///
/// A single product of two `i64` values always fits in `i128`; only the
/// running sums are checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchoolbookConvolver;

impl Convolver for SchoolbookConvolver {
    fn convolve(&self, x: &[i64], y: &[i64]) -> ConvolutionResult<Vec<i128>> {
        if x.is_empty() || y.is_empty() {
            return Ok(Vec::new());
        }

        let mut product = vec![0i128; x.len() + y.len() - 1];
        for (i, &a) in x.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in y.iter().enumerate() {
                product[i + j] = product[i + j]
                    .checked_add(a as i128 * b as i128)
                    .ok_or(ConvolutionError::RangeExceeded { limit: i128::MAX as u128 })?;
            }
        }

        Ok(product)
    }
}
