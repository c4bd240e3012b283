// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Three-prime number-theoretic transform convolution.
//!
//! Each input is reduced modulo three NTT-friendly primes and convolved in
//! each residue ring with the negacyclic transform of `fhe_math`. Padding to a
//! transform length of at least `|x| + |y| - 1` keeps every coefficient below
//! the wrap-around point, so the negacyclic product equals the linear one.
//! The three residues of every output coefficient are recombined with
//! Garner's algorithm into a value modulo `M = p₀·p₁·p₂ ≈ 2^86`. Signed
//! results are read in the centered range `(-M/2, M/2]`, so a result is exact
//! whenever its magnitude stays below `M/2`. That is checked up front from the
//! input magnitudes.
//!
//! `M` fits in 87 bits, so the recombination runs in `u128` and the centered
//! result in `i128` without a big-integer type.

use crate::convolver::Convolver;
use crate::errors::{ConvolutionError, ConvolutionResult};
use crate::schoolbook::SchoolbookConvolver;
use fhe_math::ntt::NttOperator;
use fhe_math::zq::Modulus;
use rayon::prelude::*;
use tracing::trace;

/// NTT-friendly primes `c·2^k + 1`.
pub const PRIMES: [u64; 3] = [998_244_353, 167_772_161, 469_762_049];

/// Largest transform length supported by all of [`PRIMES`].
///
/// The negacyclic transform of length `N` needs `2N | p - 1`, and `2^23` is
/// the largest power of two dividing `998244353 - 1`.
pub const MAX_TRANSFORM_LEN: usize = 1 << 22;

/// Shortest transform `NttOperator` accepts.
const MIN_TRANSFORM_LEN: usize = 8;

/// Inputs at most this short go through the schoolbook path.
pub const DEFAULT_SCHOOLBOOK_THRESHOLD: usize = 32;

/// Product of all [`PRIMES`].
pub const CRT_MODULUS: u128 = PRIMES[0] as u128 * PRIMES[1] as u128 * PRIMES[2] as u128;

/// Largest magnitude of an output coefficient that survives reconstruction.
pub const EXACT_LIMIT: u128 = CRT_MODULUS / 2;

/// Convolution via NTT over [`PRIMES`] and CRT reconstruction.
#[derive(Debug, Clone, Copy)]
pub struct NttConvolver {
    schoolbook_threshold: usize,
}

impl Default for NttConvolver {
    fn default() -> Self {
        Self {
            schoolbook_threshold: DEFAULT_SCHOOLBOOK_THRESHOLD,
        }
    }
}

impl NttConvolver {
    /// Creates a convolver that falls back to the schoolbook method when the
    /// shorter input has at most `schoolbook_threshold` elements.
    pub fn with_schoolbook_threshold(schoolbook_threshold: usize) -> Self {
        Self {
            schoolbook_threshold,
        }
    }
}

impl Convolver for NttConvolver {
    fn convolve(&self, x: &[i64], y: &[i64]) -> ConvolutionResult<Vec<i128>> {
        if x.is_empty() || y.is_empty() {
            return Ok(Vec::new());
        }

        check_range(x, y)?;

        if x.len().min(y.len()) <= self.schoolbook_threshold {
            return SchoolbookConvolver.convolve(x, y);
        }

        let out_len = x.len() + y.len() - 1;
        let size = out_len.next_power_of_two().max(MIN_TRANSFORM_LEN);
        if size > MAX_TRANSFORM_LEN {
            return Err(ConvolutionError::LengthExceeded {
                len: size,
                max: MAX_TRANSFORM_LEN,
            });
        }
        trace!(x_len = x.len(), y_len = y.len(), size, "ntt convolution");

        let moduli = moduli()?;
        let residues = moduli
            .par_iter()
            .map(|modulus| convolve_mod(x, y, size, modulus))
            .collect::<ConvolutionResult<Vec<Vec<u64>>>>()?;

        let garner = Garner::new(moduli)?;
        Ok((0..out_len)
            .map(|k| garner.reconstruct(residues[0][k], residues[1][k], residues[2][k]))
            .collect())
    }
}

/// Rejects inputs whose worst-case output `min(|x|,|y|)·max|x|·max|y|` could
/// reach [`EXACT_LIMIT`].
fn check_range(x: &[i64], y: &[i64]) -> ConvolutionResult<()> {
    let max_abs = |v: &[i64]| v.iter().map(|a| a.unsigned_abs() as u128).max().unwrap_or(0);
    let terms = x.len().min(y.len()) as u128;
    let bound = terms
        .checked_mul(max_abs(x))
        .and_then(|b| b.checked_mul(max_abs(y)));

    match bound {
        Some(b) if b < EXACT_LIMIT => Ok(()),
        _ => Err(ConvolutionError::RangeExceeded { limit: EXACT_LIMIT }),
    }
}

fn moduli() -> ConvolutionResult<[Modulus; 3]> {
    let [p0, p1, p2] = PRIMES;
    let modulus = |p| Modulus::new(p).map_err(|e| ConvolutionError::Math(e.to_string()));
    Ok([modulus(p0)?, modulus(p1)?, modulus(p2)?])
}

/// `x ⊛ y mod p`, zero padded to `size`.
fn convolve_mod(
    x: &[i64],
    y: &[i64],
    size: usize,
    modulus: &Modulus,
) -> ConvolutionResult<Vec<u64>> {
    let op = NttOperator::new(modulus, size).ok_or(ConvolutionError::LengthExceeded {
        len: size,
        max: MAX_TRANSFORM_LEN,
    })?;

    let mut fx = to_residues(x, size, modulus);
    let mut fy = to_residues(y, size, modulus);
    op.forward(&mut fx);
    op.forward(&mut fy);
    modulus.mul_vec(&mut fx, &fy);
    op.backward(&mut fx);
    Ok(fx)
}

fn to_residues(v: &[i64], size: usize, modulus: &Modulus) -> Vec<u64> {
    let mut out = vec![0u64; size];
    for (dst, &src) in out.iter_mut().zip(v) {
        *dst = modulus.reduce_i64(src);
    }
    out
}

/// Garner's mixed-radix reconstruction for [`PRIMES`].
struct Garner {
    moduli: [Modulus; 3],
    inv_p0_mod_p1: u64,
    inv_p01_mod_p2: u64,
}

impl Garner {
    fn new(moduli: [Modulus; 3]) -> ConvolutionResult<Self> {
        let [p0, p1, _] = PRIMES;
        let [_, m1, m2] = &moduli;
        let not_invertible = || ConvolutionError::Math("CRT primes are not coprime".to_string());

        let inv_p0_mod_p1 = m1.inv(m1.reduce(p0)).ok_or_else(not_invertible)?;
        let p01_mod_p2 = m2.mul(m2.reduce(p0), m2.reduce(p1));
        let inv_p01_mod_p2 = m2.inv(p01_mod_p2).ok_or_else(not_invertible)?;

        Ok(Self {
            moduli,
            inv_p0_mod_p1,
            inv_p01_mod_p2,
        })
    }

    fn reconstruct(&self, r0: u64, r1: u64, r2: u64) -> i128 {
        let [p0, p1, _] = PRIMES;
        let [_, m1, m2] = &self.moduli;

        // x ≡ r0 (mod p0), x ≡ r1 (mod p1)
        let k1 = m1.mul(m1.sub(r1, m1.reduce(r0)), self.inv_p0_mod_p1);
        let x01 = r0 as u128 + p0 as u128 * k1 as u128;

        let k2 = m2.mul(m2.sub(r2, m2.reduce_u128(x01)), self.inv_p01_mod_p2);
        let x = x01 + p0 as u128 * p1 as u128 * k2 as u128;

        if x > EXACT_LIMIT {
            x as i128 - CRT_MODULUS as i128
        } else {
            x as i128
        }
    }
}
