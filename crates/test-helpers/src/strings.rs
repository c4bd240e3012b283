// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use rand::Rng;
use std::collections::HashSet;

/// `len` symbols drawn uniformly from `0..alphabet`.
pub fn random_symbols<R: Rng + ?Sized>(len: usize, alphabet: i64, rng: &mut R) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(0..alphabet.max(1))).collect()
}

/// A random subset of `0..alphabet`, each symbol kept with probability `p`.
pub fn random_wildcards<R: Rng + ?Sized>(alphabet: i64, p: f64, rng: &mut R) -> HashSet<i64> {
    let p = p.clamp(0.0, 1.0);
    (0..alphabet).filter(|_| rng.gen_bool(p)).collect()
}

/// Direct O(n·m) wildcard matching, one alignment at a time.
///
/// Flag `i` of the result is set iff `pattern` fits at `i` and agrees with
/// `text[i..]` wherever neither side is a wildcard.
pub fn brute_force_match(pattern: &[i64], text: &[i64], wildcards: &HashSet<i64>) -> Vec<bool> {
    let agree = |p: i64, t: i64| p == t || wildcards.contains(&p) || wildcards.contains(&t);
    (0..text.len())
        .map(|i| {
            i + pattern.len() <= text.len()
                && pattern.iter().zip(&text[i..]).all(|(&p, &t)| agree(p, t))
        })
        .collect()
}
