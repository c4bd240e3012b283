// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

/// Preprocessing budget handed to the LCEW oracle.
///
/// `t = ⌊factor · n · √⌊nnz / n⌋⌋ + 1`, where `nnz` is the combined number of
/// entries of both operands. The total input size stands in for the query
/// volume, which depends on the unknown output size, and `factor` balances
/// oracle construction against query cost.
///
/// `n = 0` yields the minimal budget 1.
pub fn preprocessing_budget(n: usize, nnz: usize, factor: f64) -> usize {
    if n == 0 {
        return 1;
    }
    let per_row = (nnz / n) as f64;
    let t = factor * n as f64 * per_row.sqrt();
    (t as usize).saturating_add(1)
}
