// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{MatMulError, MatMulResult};
use wcs_lcew::WildcardText;
use wcs_sparse_matrix::SparseBoolMatrix;

/// Symbol for positions that carry no entry.
pub const WILDCARD: u32 = 0;
/// Symbol marking an entry of the left operand.
pub const LHS_SYMBOL: u32 = 1;
/// Symbol marking an entry of the right operand.
pub const RHS_SYMBOL: u32 = 2;

/// Writes `a` row-major and `b` column-major into one wildcard text.
///
/// Position `n·i + k` holds [`LHS_SYMBOL`] iff `a[i][k]` is set, and position
/// `n² + n·j + k` holds [`RHS_SYMBOL`] iff `b[k][j]` is set.
///
/// # Errors
///
/// Returns [`MatMulError::DimensionMismatch`] when the operands differ in
/// dimension and [`MatMulError::TooLarge`] when `2n²` overflows `usize`.
pub fn encode(a: &SparseBoolMatrix, b: &SparseBoolMatrix) -> MatMulResult<WildcardText> {
    if a.n() != b.n() {
        return Err(MatMulError::DimensionMismatch {
            left: a.n(),
            right: b.n(),
        });
    }

    let n = a.n();
    let half = n
        .checked_mul(n)
        .filter(|sq| sq.checked_mul(2).is_some())
        .ok_or(MatMulError::TooLarge { n })?;

    let mut text = WildcardText::filled(2 * half, WILDCARD);
    for &(i, k) in a.entries() {
        text.set(n * i + k, LHS_SYMBOL);
    }
    for &(k, j) in b.entries() {
        text.set(half + n * j + k, RHS_SYMBOL);
    }
    Ok(text)
}
