// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{PatternError, PatternResult};
use std::collections::HashSet;
use tracing::debug;
use wcs_convolution::{Convolver, NttConvolver};

/// Marks every alignment of `pattern` in `text` that matches under `wildcards`.
///
/// The result has one flag per text position. Flag `i` is set iff
/// `i + pattern.len() <= text.len()` and, for every offset `k`, either
/// `pattern[k]` or `text[i + k]` is a wildcard or the two are equal. An empty
/// pattern matches everywhere.
///
/// # Errors
///
/// [`PatternError::PatternLongerThanText`] if the pattern does not fit, and
/// [`PatternError::NumericRange`] or [`PatternError::Convolution`] if the
/// inputs are too large to be convolved exactly.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use wcs_pattern::match_with_wildcards;
///
/// let wildcards = HashSet::from([-1]);
/// let res = match_with_wildcards(&[1, -1, 3], &[9, 1, 5, 3, 7], &wildcards).unwrap();
/// assert_eq!(res, vec![false, true, false, false, false]);
/// ```
pub fn match_with_wildcards(
    pattern: &[i64],
    text: &[i64],
    wildcards: &HashSet<i64>,
) -> PatternResult<Vec<bool>> {
    match_with_wildcards_using(pattern, text, wildcards, &NttConvolver::default())
}

/// [`match_with_wildcards`] with an explicit convolution backend.
pub fn match_with_wildcards_using<C: Convolver + ?Sized>(
    pattern: &[i64],
    text: &[i64],
    wildcards: &HashSet<i64>,
    convolver: &C,
) -> PatternResult<Vec<bool>> {
    let (m, n) = (pattern.len(), text.len());
    if m > n {
        return Err(PatternError::PatternLongerThanText {
            pattern: m,
            text: n,
        });
    }
    if m == 0 {
        return Ok(vec![true; n]);
    }

    let ranks = SymbolRanks::new(pattern.iter().chain(text), wildcards);
    debug!(m, n, alphabet = ranks.len(), "matching with wildcards");

    let p: Vec<i64> = pattern.iter().map(|s| ranks.rank(s)).collect();
    let t: Vec<i64> = text.iter().rev().map(|s| ranks.rank(s)).collect();
    let p2 = powers(&p, 2)?;
    let p3 = powers(&p, 3)?;
    let t2 = powers(&t, 2)?;
    let t3 = powers(&t, 3)?;

    let c1 = convolver.convolve(&p3, &t)?;
    let c2 = convolver.convolve(&p2, &t2)?;
    let c3 = convolver.convolve(&p, &t3)?;

    let mut res = vec![false; n];
    for j in m - 1..n {
        let combined = c2[j]
            .checked_mul(2)
            .and_then(|twice| c1[j].checked_sub(twice))
            .and_then(|partial| partial.checked_add(c3[j]))
            .ok_or_else(|| {
                PatternError::NumericRange(format!("combined sum at alignment {}", n - 1 - j))
            })?;
        res[n - 1 - j] = combined == 0;
    }
    Ok(res)
}

/// Start positions of all matching alignments, ascending.
pub fn find_occurrences(
    pattern: &[i64],
    text: &[i64],
    wildcards: &HashSet<i64>,
) -> PatternResult<Vec<usize>> {
    find_occurrences_using(pattern, text, wildcards, &NttConvolver::default())
}

/// [`find_occurrences`] with an explicit convolution backend.
pub fn find_occurrences_using<C: Convolver + ?Sized>(
    pattern: &[i64],
    text: &[i64],
    wildcards: &HashSet<i64>,
    convolver: &C,
) -> PatternResult<Vec<usize>> {
    Ok(match_with_wildcards_using(pattern, text, wildcards, convolver)?
        .into_iter()
        .enumerate()
        .filter_map(|(i, hit)| hit.then_some(i))
        .collect())
}

/// Dense ranks `1..=k` for the real symbols, `0` for wildcards.
///
/// Callers may use zero or negative values as real symbols, which would break
/// the sign argument behind the matching sum. Ranking keeps equality between
/// real symbols and keeps the powers as small as the alphabet allows.
struct SymbolRanks<'w> {
    sorted: Vec<i64>,
    wildcards: &'w HashSet<i64>,
}

impl<'w> SymbolRanks<'w> {
    fn new<'a>(symbols: impl Iterator<Item = &'a i64>, wildcards: &'w HashSet<i64>) -> Self {
        let mut sorted: Vec<i64> = symbols
            .filter(|&&s| !wildcards.contains(&s))
            .copied()
            .collect();
        sorted.sort_unstable();
        sorted.dedup();
        Self { sorted, wildcards }
    }

    fn len(&self) -> usize {
        self.sorted.len()
    }

    fn rank(&self, symbol: &i64) -> i64 {
        if self.wildcards.contains(symbol) {
            return 0;
        }
        // every real symbol was collected in `new`
        self.sorted
            .binary_search(symbol)
            .map_or(0, |idx| idx as i64 + 1)
    }
}

fn powers(v: &[i64], exp: u32) -> PatternResult<Vec<i64>> {
    v.iter()
        .map(|&x| {
            x.checked_pow(exp)
                .ok_or_else(|| PatternError::NumericRange(format!("{x}^{exp}")))
        })
        .collect()
}
