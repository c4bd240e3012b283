// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::budget::preprocessing_budget;
use crate::config::ProductConfig;
use crate::encode::encode;
use crate::errors::{MatMulError, MatMulResult};
use crate::scan::{diagonal_anchors, DiagonalScan};
use tracing::{debug, trace};
use wcs_lcew::{JumpLcew, LcewOracle, NaiveLcew, OracleKind};
use wcs_sparse_matrix::SparseBoolMatrix;

/// Bookkeeping from one product computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductStats {
    /// Preprocessing budget given to the oracle
    pub budget: usize,
    /// Length of the encoded text
    pub text_len: usize,
    /// Oracle queries issued over all diagonals
    pub queries: usize,
}

/// Boolean product `a · b` with the default oracle and configuration.
///
/// # Example
///
/// ```
/// use wcs_matmul::multiply;
/// use wcs_sparse_matrix::SparseBoolMatrix;
///
/// let a = SparseBoolMatrix::new(2, vec![(0, 1)]).unwrap();
/// let b = SparseBoolMatrix::new(2, vec![(1, 0)]).unwrap();
/// assert_eq!(multiply(&a, &b).unwrap().entries(), &[(0, 0)]);
/// ```
pub fn multiply(a: &SparseBoolMatrix, b: &SparseBoolMatrix) -> MatMulResult<SparseBoolMatrix> {
    multiply_with::<JumpLcew>(a, b, &ProductConfig::default())
}

/// Boolean product `a · b` answered by oracle backend `O`.
pub fn multiply_with<O: LcewOracle>(
    a: &SparseBoolMatrix,
    b: &SparseBoolMatrix,
    config: &ProductConfig,
) -> MatMulResult<SparseBoolMatrix> {
    multiply_detailed::<O>(a, b, config).map(|(product, _)| product)
}

/// Boolean product `a · b` with the oracle backend chosen at runtime.
pub fn multiply_with_kind(
    a: &SparseBoolMatrix,
    b: &SparseBoolMatrix,
    config: &ProductConfig,
    kind: OracleKind,
) -> MatMulResult<(SparseBoolMatrix, ProductStats)> {
    match kind {
        OracleKind::Naive => multiply_detailed::<NaiveLcew>(a, b, config),
        OracleKind::Jump => multiply_detailed::<JumpLcew>(a, b, config),
    }
}

/// Boolean product `a · b` together with its [`ProductStats`].
///
/// # Errors
///
/// Fails before encoding anything if the dimensions differ or the
/// configuration is invalid. Oracle construction errors are passed through.
pub fn multiply_detailed<O: LcewOracle>(
    a: &SparseBoolMatrix,
    b: &SparseBoolMatrix,
    config: &ProductConfig,
) -> MatMulResult<(SparseBoolMatrix, ProductStats)> {
    if a.n() != b.n() {
        return Err(MatMulError::DimensionMismatch {
            left: a.n(),
            right: b.n(),
        });
    }
    config.validate()?;

    let n = a.n();
    if n == 0 {
        return Ok((SparseBoolMatrix::empty(0), ProductStats::default()));
    }

    let text = encode(a, b)?;
    let budget = preprocessing_budget(n, a.nnz() + b.nnz(), config.budget_factor);
    let text_len = text.len();
    debug!(
        n,
        lhs_nnz = a.nnz(),
        rhs_nnz = b.nnz(),
        budget,
        text_len,
        "encoded product operands"
    );

    let oracle = O::construct(text, budget)?;

    let mut entries = Vec::new();
    let mut queries = 0;
    for anchor in diagonal_anchors(n) {
        let mut scan = DiagonalScan::new(&oracle, n, anchor);
        let before = entries.len();
        entries.extend(scan.by_ref());
        queries += scan.queries();
        trace!(
            row = anchor.0,
            col = anchor.1,
            found = entries.len() - before,
            "scanned diagonal"
        );
    }
    entries.sort_unstable();

    debug!(nnz = entries.len(), queries, "product complete");
    Ok((
        SparseBoolMatrix::from_sorted(n, entries)?,
        ProductStats {
            budget,
            text_len,
            queries,
        },
    ))
}
